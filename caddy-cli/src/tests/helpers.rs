//! Test helpers for laying out request files in a scratch workspace.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding request files for one test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write test file");
}

/// Write the canned sample request as JSON and return its path.
pub(super) fn write_sample_request(workspace: &Workspace) -> Utf8PathBuf {
    let path = workspace.path("request.json");
    let request = caddy_core::test_support::sample_request();
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(&path, payload.as_bytes());
    path
}
