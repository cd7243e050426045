//! Intercity service listings.

use serde::{Deserialize, Serialize};

/// One intercity departure as listed by KSRTC.
///
/// Times are "HH:MM" strings and the fare is a rupee-prefixed display string,
/// exactly as the provider sends them. The same shape is produced by the
/// synthetic generator and returned to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntercityService {
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub departure_time: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default)]
    pub available_seats: i64,
    #[serde(default)]
    pub fare: String,
    /// Class label, e.g. "Volvo AC" or "Ordinary"
    #[serde(default)]
    pub bus_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_provider_shape() {
        let json = r#"{
            "serviceName": "AIRAVAT",
            "departureTime": "06:00",
            "arrivalTime": "10:30",
            "availableSeats": 25,
            "fare": "₹450",
            "busType": "AC Volvo",
            "rating": "4.2/5"
        }"#;
        let svc: IntercityService = serde_json::from_str(json).unwrap();
        assert_eq!(svc.service_name, "AIRAVAT");
        assert_eq!(svc.available_seats, 25);
        assert_eq!(svc.rating.as_deref(), Some("4.2/5"));
    }

    #[test]
    fn rating_omitted_when_absent() {
        let svc = IntercityService {
            service_name: "X EXPRESS".into(),
            departure_time: "10:00".into(),
            arrival_time: "14:00".into(),
            available_seats: 12,
            fare: "₹600".into(),
            bus_type: "Express Non-AC".into(),
            rating: None,
        };
        let json = serde_json::to_value(&svc).unwrap();
        assert!(json.get("rating").is_none());
        assert_eq!(json["busType"], "Express Non-AC");
    }
}
