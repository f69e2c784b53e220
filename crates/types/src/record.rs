//! Normalized station record

use crate::document::{ClassificationResult, DocumentMetadata, RawDocument, Readings};
use crate::level::FloodLevel;
use crate::location::GeoPoint;
use serde::Serialize;
use std::num::NonZeroU32;

/// Timestamp used when a document carries none
pub const DEFAULT_TIMESTAMP: &str = "N/A";
/// Camera id used when a document carries none
pub const DEFAULT_CAMERA_ID: &str = "Unknown";
/// Classifier state used when a document carries none
pub const DEFAULT_STATE: &str = "Unknown";

/// Image file name paired with document `id`
pub fn image_file_name(id: NonZeroU32) -> String {
    format!("{}.png", id)
}

/// The latest reading and classification of one monitoring station.
///
/// Fields are read-only once constructed; downstream consumers only ever see
/// shared references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorRecord {
    id: NonZeroU32,
    location: Option<GeoPoint>,
    timestamp: String,
    camera_id: String,
    sensor_baseline: Readings,
    sensor_data: Readings,
    sensor_anomalies: Readings,
    prediction: FloodLevel,
    scores: Readings,
    state: String,
    image_file: String,
}

impl SensorRecord {
    /// Build a record from a (possibly sparse) document, filling every gap
    /// with its default. Never fails.
    pub fn from_document(id: NonZeroU32, doc: &RawDocument) -> Self {
        let metadata = doc.metadata.clone().unwrap_or_default();
        let classification = doc.classification_result.clone().unwrap_or_default();

        Self::from_parts(id, metadata, classification)
    }

    fn from_parts(
        id: NonZeroU32,
        metadata: DocumentMetadata,
        classification: ClassificationResult,
    ) -> Self {
        let location = metadata.location.as_deref().and_then(GeoPoint::parse);

        let prediction = match classification.prediction {
            Some(raw) => FloodLevel::from_prediction(raw).unwrap_or_else(|| {
                log::warn!(
                    "Station {}: prediction {} is outside 0..=2, using {}",
                    id,
                    raw,
                    FloodLevel::default()
                );
                FloodLevel::default()
            }),
            None => FloodLevel::default(),
        };

        Self {
            id,
            location,
            timestamp: metadata
                .timestamp
                .unwrap_or_else(|| DEFAULT_TIMESTAMP.to_string()),
            camera_id: metadata
                .camera_id
                .unwrap_or_else(|| DEFAULT_CAMERA_ID.to_string()),
            sensor_baseline: metadata.sensor_baseline.unwrap_or_default(),
            sensor_data: metadata.sensor_data.unwrap_or_default(),
            sensor_anomalies: metadata.sensor_anomalies.unwrap_or_default(),
            prediction,
            scores: classification.scores.unwrap_or_default(),
            state: classification
                .state
                .unwrap_or_else(|| DEFAULT_STATE.to_string()),
            image_file: image_file_name(id),
        }
    }

    pub fn id(&self) -> NonZeroU32 {
        self.id
    }

    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }

    pub fn sensor_baseline(&self) -> &Readings {
        &self.sensor_baseline
    }

    pub fn sensor_data(&self) -> &Readings {
        &self.sensor_data
    }

    pub fn sensor_anomalies(&self) -> &Readings {
        &self.sensor_anomalies
    }

    pub fn prediction(&self) -> FloodLevel {
        self.prediction
    }

    pub fn scores(&self) -> &Readings {
        &self.scores
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// `<id>.png`, whether or not the image exists
    pub fn image_file(&self) -> &str {
        &self.image_file
    }
}
