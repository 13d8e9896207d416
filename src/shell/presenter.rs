use std::{collections::HashSet, io::Write};

use crate::services::wigle_client::types::wigle_search_response::NetworkRecord;

/// Unique SSIDs in first-seen order.
#[derive(Debug, Default, PartialEq)]
pub struct OpenNetworkSummary {
    pub ssids: Vec<String>,
}

impl OpenNetworkSummary {
    pub fn from_records(records: &[NetworkRecord]) -> Self {
        let mut seen = HashSet::<&str>::new();
        let mut ssids = Vec::<String>::new();

        for record in records {
            let ssid = record.ssid();
            if seen.insert(ssid) {
                ssids.push(ssid.to_string());
            }
        }

        Self { ssids }
    }

    pub fn count(&self) -> usize {
        self.ssids.len()
    }
}

pub fn tier_message(unique_count: usize) -> &'static str {
    match unique_count {
        0 => "No networks found near you.",
        1..=3 => "A few networks found near you.",
        4..=7 => "Some networks found near you.",
        8..=10 => "Lots of networks found near you.",
        _ => "Stumbler's paradise! Lots of networks found near you.",
    }
}

pub fn display_open_networks<W: Write>(
    out: &mut W,
    records: &[NetworkRecord],
) -> std::io::Result<()> {
    if records.is_empty() {
        writeln!(out, "No open networks found.")?;
        return Ok(());
    }

    writeln!(out, "Open Wi-Fi networks:")?;
    let summary = OpenNetworkSummary::from_records(records);
    for ssid in &summary.ssids {
        writeln!(out, "SSID: {}", ssid)?;
    }

    writeln!(out, "\nTotal unique SSIDs found: {}", summary.count())?;
    writeln!(out, "{}", tier_message(summary.count()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ssid: Option<&str>) -> NetworkRecord {
        NetworkRecord {
            ssid: ssid.map(str::to_string),
        }
    }

    fn render(records: &[NetworkRecord]) -> String {
        let mut out = Vec::new();
        display_open_networks(&mut out, records).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_results() {
        assert_eq!(render(&[]), "No open networks found.\n");
    }

    #[test]
    fn dedupes_in_first_seen_order() {
        let records = vec![
            record(Some("A")),
            record(Some("A")),
            record(Some("B")),
            record(None),
        ];

        let summary = OpenNetworkSummary::from_records(&records);
        assert_eq!(summary.ssids, vec!["A", "B", "N/A"]);

        assert_eq!(
            render(&records),
            "Open Wi-Fi networks:\n\
             SSID: A\n\
             SSID: B\n\
             SSID: N/A\n\
             \n\
             Total unique SSIDs found: 3\n\
             A few networks found near you.\n"
        );
    }

    #[test]
    fn explicit_na_ssid_matches_missing_one() {
        let records = vec![record(None), record(Some("N/A"))];
        assert_eq!(OpenNetworkSummary::from_records(&records).count(), 1);
    }

    #[test]
    fn ssids_compare_exactly() {
        let records = vec![record(Some("cafe")), record(Some("Cafe")), record(Some("cafe "))];
        assert_eq!(OpenNetworkSummary::from_records(&records).count(), 3);
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(tier_message(0), "No networks found near you.");
        assert_eq!(tier_message(1), "A few networks found near you.");
        assert_eq!(tier_message(3), "A few networks found near you.");
        assert_eq!(tier_message(4), "Some networks found near you.");
        assert_eq!(tier_message(7), "Some networks found near you.");
        assert_eq!(tier_message(8), "Lots of networks found near you.");
        assert_eq!(tier_message(10), "Lots of networks found near you.");
        assert_eq!(
            tier_message(11),
            "Stumbler's paradise! Lots of networks found near you."
        );
    }

    #[test]
    fn large_result_uses_top_tier() {
        let records = (0..12)
            .map(|i| record(Some(format!("net-{}", i).as_str())))
            .collect::<Vec<NetworkRecord>>();

        let output = render(&records);
        assert!(output.contains("Total unique SSIDs found: 12\n"));
        assert!(output.ends_with("Stumbler's paradise! Lots of networks found near you.\n"));
    }
}
