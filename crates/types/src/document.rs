//! Typed view of a station result document (`<id>.json`)
//!
//! Documents come from an upstream classifier and are often sparse. Every
//! field here is optional and parsed leniently: a field holding the wrong JSON
//! type is treated as missing instead of rejecting the whole document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named numeric readings (e.g. `temperature`, `delta_humidity`)
pub type Readings = BTreeMap<String, f64>;

/// One parsed result document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub classification_result: Option<ClassificationResult>,
}

/// Capture metadata and environmental readings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Raw `"lat, lon"` text, parsed later by `GeoPoint::parse`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub camera_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::readings")]
    pub sensor_baseline: Option<Readings>,
    #[serde(default, deserialize_with = "lenient::readings")]
    pub sensor_data: Option<Readings>,
    #[serde(default, deserialize_with = "lenient::readings")]
    pub sensor_anomalies: Option<Readings>,
}

/// Classifier output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Raw level; validated by `FloodLevel::from_prediction`
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub prediction: Option<f64>,
    #[serde(default, deserialize_with = "lenient::readings")]
    pub scores: Option<Readings>,
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub state: Option<String>,
}

impl RawDocument {
    pub fn from_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

mod lenient {
    use super::Readings;
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserialize into `T`, mapping a type mismatch (or `null`) to `None`
    pub fn deserialize<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(d)?;
        Ok(T::deserialize(value).ok())
    }

    /// Deserialize a JSON object, keeping only its numeric entries
    pub fn readings<'de, D>(d: D) -> Result<Option<Readings>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(d)?;
        let Value::Object(map) = value else {
            return Ok(None);
        };
        let readings = map
            .into_iter()
            .filter_map(|(key, value)| match value.as_f64() {
                Some(number) => Some((key, number)),
                None => {
                    log::debug!("Dropping non-numeric reading '{}': {}", key, value);
                    None
                }
            })
            .collect();
        Ok(Some(readings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_document() {
        let doc = RawDocument::from_value(json!({
            "metadata": {
                "location": "55.40, 10.40",
                "timestamp": "2025-10-04 12:00:00",
                "camera_id": "CAM-07",
                "sensor_baseline": {"temperature_baseline": 12.5},
                "sensor_data": {"temperature": 14.0, "humidity": 81},
                "sensor_anomalies": {"delta_temperature": 1.5}
            },
            "classification_result": {
                "prediction": 2,
                "scores": {"combined_score": 0.91},
                "state": "flooded"
            }
        }))
        .unwrap();

        let metadata = doc.metadata.unwrap();
        assert_eq!(metadata.camera_id.as_deref(), Some("CAM-07"));
        assert_eq!(metadata.sensor_data.unwrap()["humidity"], 81.0);
        let classification = doc.classification_result.unwrap();
        assert_eq!(classification.prediction, Some(2.0));
        assert_eq!(classification.state.as_deref(), Some("flooded"));
    }

    #[test]
    fn test_wrong_types_become_missing() {
        let doc = RawDocument::from_value(json!({
            "metadata": {
                "location": [55.4, 10.4],
                "camera_id": 17,
                "sensor_data": "offline"
            },
            "classification_result": "pending"
        }))
        .unwrap();

        let metadata = doc.metadata.unwrap();
        assert_eq!(metadata.location, None);
        assert_eq!(metadata.camera_id, None);
        assert_eq!(metadata.sensor_data, None);
        assert_eq!(doc.classification_result, None);
    }

    #[test]
    fn test_non_numeric_readings_dropped() {
        let doc = RawDocument::from_value(json!({
            "classification_result": {
                "scores": {"combined_score": 0.4, "sensor_prediction": "rain", "image_score": null}
            }
        }))
        .unwrap();

        let scores = doc.classification_result.unwrap().scores.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["combined_score"], 0.4);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let doc = RawDocument::from_value(json!({"video": "clip.mp4"})).unwrap();
        assert_eq!(doc, RawDocument::default());
    }
}
