//! flood-sens-types: Shared data types for flood-sens.
//!
//! This crate holds the pure data model (result documents, normalized station
//! records, classification levels and coordinates). It performs no I/O, so the
//! loader and every downstream consumer can share it.

pub mod document;
pub mod level;
pub mod location;
pub mod record;

// Re-export commonly used types at the crate root for convenience
pub use document::{ClassificationResult, DocumentMetadata, RawDocument, Readings};
pub use level::FloodLevel;
pub use location::GeoPoint;
pub use record::{
    image_file_name, SensorRecord, DEFAULT_CAMERA_ID, DEFAULT_STATE, DEFAULT_TIMESTAMP,
};
