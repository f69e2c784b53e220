//! Plain-text station digest
//!
//! Lays out the level counts and one block per station, the same material a
//! written report is built from.

use crate::summary::{LevelCounts, StationSummary};
use chrono::NaiveDateTime;
use flood_sens_core::SensorRecord;
use std::fmt;

const RULE_WIDTH: usize = 70;

/// Digest of a loaded record collection
pub struct Digest<'a> {
    records: &'a [SensorRecord],
    region: &'a str,
    generated_at: NaiveDateTime,
}

impl<'a> Digest<'a> {
    pub fn new(records: &'a [SensorRecord], region: &'a str, generated_at: NaiveDateTime) -> Self {
        Self {
            records,
            region,
            generated_at,
        }
    }
}

struct Reading(Option<f64>);

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("N/A"),
        }
    }
}

impl fmt::Display for Digest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        let counts = LevelCounts::from_records(self.records);

        writeln!(f, "{}", rule)?;
        writeln!(
            f,
            "FLOOD MONITORING DIGEST - {}",
            self.region.to_uppercase()
        )?;
        writeln!(f, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "{}", rule)?;
        writeln!(f)?;
        writeln!(f, "Total Monitoring Stations: {}", counts.total)?;
        writeln!(f, "Critical Flood Alerts (Level 2): {}", counts.flood)?;
        writeln!(f, "Suspicious Areas (Level 1): {}", counts.suspicious)?;
        writeln!(f, "Normal Conditions (Level 0): {}", counts.normal)?;

        for record in self.records {
            let station = StationSummary::from_record(record);
            let location = station
                .location
                .map(|point| point.to_string())
                .unwrap_or_else(|| "N/A".to_string());

            writeln!(f)?;
            writeln!(f, "Camera {} (Location: {}):", station.camera_id, location)?;
            writeln!(
                f,
                "  - Classification: {} (Level {})",
                station.level.report_label(),
                station.level.value()
            )?;
            writeln!(f, "  - Flooding Score: {:.3}", station.combined_score)?;
            writeln!(
                f,
                "  - Temperature: {}°C (Δ {}°C)",
                Reading(station.temperature),
                Reading(station.delta_temperature)
            )?;
            writeln!(
                f,
                "  - Humidity: {}% (Δ {}%)",
                Reading(station.humidity),
                Reading(station.delta_humidity)
            )?;
            writeln!(
                f,
                "  - Pressure: {} hPa (Δ {} hPa)",
                Reading(station.pressure),
                Reading(station.delta_pressure)
            )?;
        }

        Ok(())
    }
}

/// Render the digest to a string
pub fn render_digest(records: &[SensorRecord], region: &str, generated_at: NaiveDateTime) -> String {
    Digest::new(records, region, generated_at).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flood_sens_core::RawDocument;
    use serde_json::json;
    use std::num::NonZeroU32;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 4)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_digest_header_and_counts() {
        let records = vec![SensorRecord::from_document(
            NonZeroU32::new(1).unwrap(),
            &RawDocument::from_value(json!({"classification_result": {"prediction": 2}})).unwrap(),
        )];
        let text = render_digest(&records, "Fyn Island, Denmark", generated_at());

        assert!(text.contains("FLOOD MONITORING DIGEST - FYN ISLAND, DENMARK"));
        assert!(text.contains("Generated: 2025-10-04 12:30:00"));
        assert!(text.contains("Total Monitoring Stations: 1"));
        assert!(text.contains("Critical Flood Alerts (Level 2): 1"));
        assert!(text.contains("Classification: FLOOD (Level 2)"));
    }

    #[test]
    fn test_station_block() {
        let doc = RawDocument::from_value(json!({
            "metadata": {
                "location": "55.4, 10.4",
                "camera_id": "CAM-3",
                "sensor_data": {"temperature": 12.5, "humidity": 80.0, "pressure": 1001.0},
                "sensor_anomalies": {"delta_temperature": -1.5}
            },
            "classification_result": {"prediction": 1, "scores": {"combined_score": 0.4567}}
        }))
        .unwrap();
        let records = vec![SensorRecord::from_document(NonZeroU32::new(3).unwrap(), &doc)];
        let text = render_digest(&records, "Test", generated_at());

        assert!(text.contains("Camera CAM-3 (Location: (55.4, 10.4)):"));
        assert!(text.contains("  - Classification: Suspicious (Level 1)"));
        assert!(text.contains("  - Flooding Score: 0.457"));
        assert!(text.contains("  - Temperature: 12.5°C (Δ -1.5°C)"));
        assert!(text.contains("  - Humidity: 80% (Δ N/A%)"));
        assert!(text.contains("  - Pressure: 1001 hPa (Δ N/A hPa)"));
    }

    #[test]
    fn test_unplaced_station() {
        let records = vec![SensorRecord::from_document(
            NonZeroU32::new(2).unwrap(),
            &RawDocument::default(),
        )];
        let text = render_digest(&records, "Test", generated_at());
        assert!(text.contains("Camera Unknown (Location: N/A):"));
        assert!(text.contains("Normal Conditions (Level 0): 1"));
    }
}
