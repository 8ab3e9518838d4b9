//! Test helpers for writing sample catalogs to disk.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Three samples far enough apart that every position resolves unambiguously.
pub(super) const CATALOG_JSON: &str = r#"[
  { "id": 1, "name": "Cedar Valley", "latitude": 37.1, "longitude": -112.5, "year": 1992, "intensity": 18.0 },
  { "id": 2, "name": "Harbour District", "latitude": 37.8, "longitude": -122.4, "year": 1995, "intensity": 71.0 },
  { "id": 3, "name": "Silver Mesa", "latitude": 36.2, "longitude": -109.9, "year": 2010, "intensity": 9.0 }
]"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory holding `catalog.json`.
#[derive(Debug)]
pub(super) struct CatalogFile {
    _dir: TempDir,
    root: Utf8PathBuf,
    path: Utf8PathBuf,
}

impl CatalogFile {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let path = root.join("catalog.json");
        write_utf8(&path, CATALOG_JSON.as_bytes());
        Self {
            _dir: dir,
            root,
            path,
        }
    }

    pub(super) fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }
}
