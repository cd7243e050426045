//! One interactive search.

use chrono::NaiveDate;
use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::ksrtc::ServiceSource;
use crate::search::SearchEngine;

use super::date::{display_date, parse_travel_date};
use super::error::CliError;
use super::prompt::read_answer;
use super::render::{render_intercity, render_local};

const DATE_PROMPT: &str = "Enter travel date (DD-MM-YYYY, default: today): ";

const BANNER: &str = "\n╔═══════════════════════════════════════════╗\n\
                      ║        🚌 Bus Information System 🚌        ║\n\
                      ╚═══════════════════════════════════════════╝\n\n";

/// Prompt for a trip, search it and print the results.
///
/// Empty origin or destination ends the session with a notice and no search.
pub async fn run<S, R, W>(
    engine: &SearchEngine<S>,
    reader: &mut R,
    writer: &mut W,
    today: NaiveDate,
) -> Result<(), CliError>
where
    S: ServiceSource,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(BANNER.as_bytes()).await?;

    let from = read_answer(reader, writer, "Enter your starting location: ").await?;
    if from.is_empty() {
        writer.write_all("⚠️ Starting location cannot be empty\n".as_bytes()).await?;
        return Ok(());
    }
    let to = read_answer(reader, writer, "Enter your destination: ").await?;
    if to.is_empty() {
        writer.write_all("⚠️ Destination cannot be empty\n".as_bytes()).await?;
        return Ok(());
    }

    let output = if engine.is_local_trip(&from, &to) {
        let notice = format!("\nSearching for BMTC buses from \"{from}\" to \"{to}\"...\n");
        writer.write_all(notice.as_bytes()).await?;
        render_local(&from, &to, &engine.local_buses(&from, &to))?
    } else {
        let notice = format!("\nSearching for KSRTC buses from \"{from}\" to \"{to}\"...\n");
        writer.write_all(notice.as_bytes()).await?;

        let input = read_answer(reader, writer, DATE_PROMPT).await?;
        let date = parse_travel_date(&input, today);
        debug!(%input, %date, "travel date");

        let (date, categorized, provenance) = engine.intercity(&from, &to, &date).await;
        debug!(?provenance, "intercity listings");
        let output = render_intercity(&from, &to, &display_date(&date), &categorized)?;
        if categorized.is_empty() {
            writer.write_all(output.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
            return Ok(());
        }
        output
    };

    writer.write_all(output.as_bytes()).await?;
    writer
        .write_all("\n\n✅ Search completed successfully!\n".as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Profile, ServerSettings};
    use crate::categorize::{Categorizer, LocalRule};
    use crate::ksrtc::{
        IntercityProvider, KsrtcClient, RouteProfile, RouteProfiles, SyntheticGenerator,
    };
    use crate::network::{
        AdjacencyTable, LocalNetwork, LocalRouteResolver, RouteTemplates, StopDetail,
    };

    fn engine() -> SearchEngine<KsrtcClient> {
        let settings = ServerSettings::new()
            .with_profile(Profile::Detailed)
            .with_offline(true)
            .with_seat_seed(3);
        SearchEngine::from_settings(&settings).unwrap()
    }

    async fn session(input: &'static str) -> String {
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        run(&engine(), &mut reader, &mut out, today).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn local_trip_lists_buses() {
        let out = session("MG Road\nSilk Board\n").await;
        assert!(out.contains("Searching for BMTC buses from \"MG Road\" to \"Silk Board\""));
        assert!(out.contains("Bus Number:"));
        assert!(!out.contains("Enter travel date"));
        assert!(out.contains("Search completed successfully"));
    }

    #[tokio::test]
    async fn intercity_trip_asks_for_date() {
        let out = session("Bengaluru\nMysuru\ntomorrow\n").await;
        assert!(out.contains("Searching for KSRTC buses"));
        assert!(out.contains("Enter travel date"));
        assert!(out.contains("on Saturday, 17 Oct 2026"));
        assert!(out.contains("Found"));
    }

    #[tokio::test]
    async fn empty_origin_stops_early() {
        let out = session("\n").await;
        assert!(out.contains("Starting location cannot be empty"));
        assert!(!out.contains("Enter your destination"));
    }

    #[tokio::test]
    async fn empty_destination_stops_early() {
        let out = session("Majestic\n   \n").await;
        assert!(out.contains("Destination cannot be empty"));
        assert!(!out.contains("Searching"));
    }

    #[tokio::test]
    async fn no_services_ends_without_completion_notice() {
        let mut profiles = RouteProfiles::karnataka();
        let none = RouteProfile {
            num_services: 0,
            ..RouteProfile::default()
        };
        profiles.insert("Ghost Town", "Nowhere", none);
        let engine = SearchEngine::new(
            LocalNetwork::bangalore(),
            LocalRouteResolver::new(
                AdjacencyTable::bangalore_pairs(),
                RouteTemplates::bangalore(),
                StopDetail::Tailored,
            ),
            IntercityProvider::<KsrtcClient>::new(None, SyntheticGenerator::new(profiles)),
            Categorizer::new(LocalRule::Exclusion),
        );

        let mut reader: &[u8] = b"Ghost Town\nNowhere\n\n";
        let mut out = Vec::new();
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        run(&engine, &mut reader, &mut out, today).await.unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("No services found"));
        assert!(!out.contains("Search completed"));
    }

    #[tokio::test]
    async fn found_services_end_with_completion_notice() {
        let out = session("Mumbai\nPune\n\n").await;
        assert!(out.contains("Found 3 services"));
        assert!(out.contains("Search completed successfully"));
    }
}
