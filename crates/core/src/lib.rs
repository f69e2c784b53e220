//! flood-sens-core: Sensor record loader for flood-sens.
//!
//! This crate reads the numbered result documents a deployment writes
//! (`1.json`, `2.json`, ...) and normalizes them into [`SensorRecord`]s.

mod config;
pub mod constants;
mod data_source;
mod error;
mod loader;

pub use config::LoaderConfig;
pub use constants::{DEFAULT_DATA_DIR, DEFAULT_MAX_RECORDS, DOCUMENT_EXTENSION, IMAGE_EXTENSION};
pub use data_source::{DirectorySource, DocumentSource};
pub use error::DocumentError;
pub use loader::{
    extract_location, extract_sensor_record, load_all_records, load_document, load_records,
    read_document,
};

// Re-export types used in signatures for convenience
pub use flood_sens_types::{FloodLevel, GeoPoint, RawDocument, SensorRecord};
