//! Shared fixtures for the integration tests
//!
//! MEI documents covering every header section, plus helpers for laying
//! out a scratch corpus on disk.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::{FULL_HEADER, MINIMAL_HEADER, NO_HEADER, TEI_DOCUMENT, TRUNCATED};

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding MEI files
pub struct ScratchCorpus {
    dir: TempDir,
}

impl ScratchCorpus {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative`, creating parent directories
    pub fn add(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture");
        path
    }
}

/// `path` relative to `root`, with forward slashes
pub fn relative(root: &Path, path: &str) -> String {
    Path::new(path)
        .strip_prefix(root)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_else(|_| path.to_string())
}
