//! flood-sens: flood monitoring station loader and digest
//!
//! This library provides:
//! - Loading of numbered station result documents into normalized records
//! - Per-level counts and station summaries for dashboard/map consumers
//! - A plain-text station digest
//! - Configuration management

pub mod config;
pub mod digest;
pub mod summary;

// Re-export commonly used types
pub use config::AppConfig;
pub use flood_sens_core::{
    load_all_records, load_records, DirectorySource, DocumentSource, FloodLevel, GeoPoint,
    LoaderConfig, SensorRecord,
};
pub use summary::{LevelCounts, StationSummary};
