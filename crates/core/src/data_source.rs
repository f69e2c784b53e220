//! Document source trait and the directory-backed implementation

use crate::constants::{DOCUMENT_EXTENSION, IMAGE_EXTENSION};
use crate::error::DocumentError;
use crate::loader::{absorb, read_document};
use flood_sens_types::RawDocument;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// Anything that can hand out result documents by sequence number
///
/// The loader only probes indices in ascending order and never writes back.
pub trait DocumentSource {
    /// Short description used in diagnostics (e.g. the directory path)
    fn describe(&self) -> String;

    /// Check whether the source exists at all
    fn is_available(&self) -> bool {
        true
    }

    /// Fetch document `index`
    fn fetch(&self, index: NonZeroU32) -> Result<RawDocument, DocumentError>;

    /// Fetch document `index`, logging and absorbing any failure
    fn document(&self, index: NonZeroU32) -> Option<RawDocument> {
        absorb(self.fetch(index))
    }
}

/// Numbered `<i>.json` / `<i>.png` files in one directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, index: NonZeroU32) -> PathBuf {
        self.root.join(format!("{}.{}", index, DOCUMENT_EXTENSION))
    }

    /// Path of the image paired with document `index`; it may not exist
    pub fn image_path(&self, index: NonZeroU32) -> PathBuf {
        self.root.join(format!("{}.{}", index, IMAGE_EXTENSION))
    }
}

impl DocumentSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn is_available(&self) -> bool {
        self.root.is_dir()
    }

    fn fetch(&self, index: NonZeroU32) -> Result<RawDocument, DocumentError> {
        read_document(&self.document_path(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn idx(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_paths_follow_numbering() {
        let source = DirectorySource::new("/srv/stations");
        assert_eq!(source.document_path(idx(3)), PathBuf::from("/srv/stations/3.json"));
        assert_eq!(source.image_path(idx(12)), PathBuf::from("/srv/stations/12.png"));
    }

    #[test]
    fn test_availability_tracks_directory() {
        let dir = tempdir().expect("tempdir");
        assert!(DirectorySource::new(dir.path()).is_available());
        assert!(!DirectorySource::new(dir.path().join("absent")).is_available());

        let file = dir.path().join("1.json");
        fs::write(&file, "{}").unwrap();
        assert!(!DirectorySource::new(&file).is_available());
    }

    #[test]
    fn test_document_absorbs_errors() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("2.json"), "{not json").unwrap();
        let source = DirectorySource::new(dir.path());

        assert!(source.fetch(idx(1)).unwrap_err().is_missing());
        assert!(source.document(idx(1)).is_none());
        assert!(matches!(
            source.fetch(idx(2)),
            Err(DocumentError::Malformed { .. })
        ));
        assert!(source.document(idx(2)).is_none());
    }
}
