//! Shared constants for the loader

/// Directory scanned when no configuration overrides it
pub const DEFAULT_DATA_DIR: &str = "data/video_results_1";

/// Highest document index probed by default
pub const DEFAULT_MAX_RECORDS: u32 = 25;

/// Extension of station result documents (`<id>.json`)
pub const DOCUMENT_EXTENSION: &str = "json";

/// Extension of station images (`<id>.png`)
pub const IMAGE_EXTENSION: &str = "png";
