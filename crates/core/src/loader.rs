//! Sensor record loader
//!
//! Scans the numbered documents `1..=max_count` of a source and turns each
//! readable one into a [`SensorRecord`]. The scan is a one-shot synchronous
//! batch: failures are logged and skipped, never raised.
//!
//! Stop rule: if document 1 cannot be loaded the source is treated as
//! unpopulated and nothing is returned. Any later gap is skipped, so ids in
//! the result are ascending but not necessarily contiguous.

use crate::config::LoaderConfig;
use crate::data_source::{DirectorySource, DocumentSource};
use crate::error::DocumentError;
use flood_sens_types::{GeoPoint, RawDocument, SensorRecord};
use log::{debug, error, info, warn};
use serde_json::Value;
use std::num::NonZeroU32;
use std::path::Path;

/// Read and parse one document, reporting exactly why it failed
pub fn read_document(path: &Path) -> Result<RawDocument, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            DocumentError::NotFound(path.to_path_buf())
        } else {
            DocumentError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value: Value =
        serde_json::from_str(&content).map_err(|source| DocumentError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    if is_empty_value(&value) {
        return Err(DocumentError::Empty(path.to_path_buf()));
    }
    if !value.is_object() {
        return Err(DocumentError::NotAnObject(path.to_path_buf()));
    }

    RawDocument::from_value(value).map_err(|source| DocumentError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one document; missing, malformed and empty files all yield `None`
pub fn load_document(path: &Path) -> Option<RawDocument> {
    absorb(read_document(path))
}

/// Log a failed read (missing files as warnings) and drop the error
pub(crate) fn absorb(result: Result<RawDocument, DocumentError>) -> Option<RawDocument> {
    match result {
        Ok(doc) => Some(doc),
        Err(e) if e.is_missing() => {
            warn!("{}", e);
            None
        }
        Err(e) => {
            error!("{}", e);
            None
        }
    }
}

/// Values that parse but carry nothing (`{}`, `[]`, `null`, `""`, `0`, `false`)
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Coordinates from `metadata.location`, or `None` if missing or unparseable
pub fn extract_location(doc: &RawDocument) -> Option<GeoPoint> {
    doc.metadata
        .as_ref()?
        .location
        .as_deref()
        .and_then(GeoPoint::parse)
}

/// Normalize a document into the record for station `id`
pub fn extract_sensor_record(id: NonZeroU32, doc: &RawDocument) -> SensorRecord {
    SensorRecord::from_document(id, doc)
}

/// Load every readable document `1..=max_count` from `source`
pub fn load_records<S: DocumentSource + ?Sized>(source: &S, max_count: u32) -> Vec<SensorRecord> {
    let mut records = Vec::new();

    if max_count == 0 {
        return records;
    }

    if !source.is_available() {
        error!("Data directory '{}' does not exist", source.describe());
        return records;
    }

    for index in (1..=max_count).filter_map(NonZeroU32::new) {
        let Some(doc) = source.document(index) else {
            if index.get() == 1 {
                debug!("First document missing in '{}', stopping scan", source.describe());
                break;
            }
            continue;
        };

        let record = extract_sensor_record(index, &doc);
        debug!(
            "Loaded station {} (camera {}, {})",
            record.id(),
            record.camera_id(),
            record.prediction()
        );
        records.push(record);
    }

    info!(
        "Loaded {} station record(s) from '{}'",
        records.len(),
        source.describe()
    );
    records
}

/// Load the configured data directory
pub fn load_all_records(config: &LoaderConfig) -> Vec<SensorRecord> {
    load_records(&DirectorySource::new(&config.data_dir), config.max_records)
}
