//! Travel date input.

use chrono::{Days, NaiveDate};

use crate::search::JOURNEY_DATE_FORMAT;

/// Formats accepted for typed-in dates, tried in order.
const INPUT_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y"];

/// Normalise a typed date to DD-MM-YYYY.
///
/// Empty input and `today` give `today`; `tomorrow` gives the day after.
/// Input matching none of the accepted formats is returned unchanged so the
/// provider can judge it.
pub fn parse_travel_date(input: &str, today: NaiveDate) -> String {
    let input = input.trim();
    let lowered = input.to_lowercase();

    let date = match lowered.as_str() {
        "" | "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        _ => INPUT_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok()),
    };

    match date {
        Some(d) => d.format(JOURNEY_DATE_FORMAT).to_string(),
        None => input.to_string(),
    }
}

/// Long form of a DD-MM-YYYY date, e.g. "Friday, 16 Oct 2026". Anything
/// else is shown as given.
pub fn display_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, JOURNEY_DATE_FORMAT)
        .map(|d| d.format("%A, %d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn relative_words() {
        assert_eq!(parse_travel_date("", today()), "16-10-2026");
        assert_eq!(parse_travel_date("  Today ", today()), "16-10-2026");
        assert_eq!(parse_travel_date("tomorrow", today()), "17-10-2026");
    }

    #[test]
    fn tomorrow_rolls_over_year() {
        let nye = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(parse_travel_date("TOMORROW", nye), "01-01-2027");
    }

    #[test]
    fn accepted_formats() {
        assert_eq!(parse_travel_date("2026-11-05", today()), "05-11-2026");
        assert_eq!(parse_travel_date("05-11-2026", today()), "05-11-2026");
        assert_eq!(parse_travel_date("5/11/2026", today()), "05-11-2026");
        assert_eq!(parse_travel_date("05/11/2026", today()), "05-11-2026");
    }

    #[test]
    fn unparseable_passes_through() {
        assert_eq!(parse_travel_date("next friday", today()), "next friday");
        assert_eq!(parse_travel_date("31-02-2026", today()), "31-02-2026");
    }

    #[test]
    fn long_form() {
        assert_eq!(display_date("02-01-2006"), "Monday, 02 Jan 2006");
        assert_eq!(display_date("16-10-2026"), "Friday, 16 Oct 2026");
        assert_eq!(display_date("soon"), "soon");
    }
}
