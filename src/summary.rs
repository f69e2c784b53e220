//! Station summaries handed to the dashboard, map and report collaborators
//!
//! Everything here is derived from a loaded record collection and never
//! mutates it.

use flood_sens_core::{FloodLevel, GeoPoint, SensorRecord};
use serde::Serialize;

/// Number of stations per classification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub total: usize,
    pub normal: usize,
    pub suspicious: usize,
    pub flood: usize,
}

impl LevelCounts {
    pub fn from_records(records: &[SensorRecord]) -> Self {
        records.iter().fold(Self::default(), |mut counts, record| {
            counts.total += 1;
            match record.prediction() {
                FloodLevel::Normal => counts.normal += 1,
                FloodLevel::Suspicious => counts.suspicious += 1,
                FloodLevel::Flood => counts.flood += 1,
            }
            counts
        })
    }

    pub fn count(&self, level: FloodLevel) -> usize {
        match level {
            FloodLevel::Normal => self.normal,
            FloodLevel::Suspicious => self.suspicious,
            FloodLevel::Flood => self.flood,
        }
    }
}

/// Key figures of one station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub id: u32,
    pub camera_id: String,
    pub location: Option<GeoPoint>,
    pub level: FloodLevel,
    /// `scores.combined_score`, 0 when the classifier gave none
    pub combined_score: f64,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub delta_temperature: Option<f64>,
    pub delta_humidity: Option<f64>,
    pub delta_pressure: Option<f64>,
}

impl StationSummary {
    pub fn from_record(record: &SensorRecord) -> Self {
        let data = record.sensor_data();
        let anomalies = record.sensor_anomalies();

        Self {
            id: record.id().get(),
            camera_id: record.camera_id().to_string(),
            location: record.location(),
            level: record.prediction(),
            combined_score: record
                .scores()
                .get("combined_score")
                .copied()
                .unwrap_or(0.0),
            temperature: data.get("temperature").copied(),
            humidity: data.get("humidity").copied(),
            pressure: data.get("pressure").copied(),
            delta_temperature: anomalies.get("delta_temperature").copied(),
            delta_humidity: anomalies.get("delta_humidity").copied(),
            delta_pressure: anomalies.get("delta_pressure").copied(),
        }
    }
}

/// Records that can be placed on a map, in id order
pub fn located(records: &[SensorRecord]) -> impl Iterator<Item = (&SensorRecord, GeoPoint)> {
    records
        .iter()
        .filter_map(|record| record.location().map(|point| (record, point)))
}
