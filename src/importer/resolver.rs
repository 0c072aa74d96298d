//! Turning an import path into the text that replaces its directive

use super::error::ImportError;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Source of imported file contents
pub trait Resolver {
    /// Read the whole content named by `path`
    fn resolve(&self, path: &str) -> Result<String, ImportError>;
}

/// Reads imports from the filesystem.
///
/// The default root is empty, so paths resolve against the process's working
/// directory exactly as written.
#[derive(Debug, Clone, Default)]
pub struct FsResolver {
    root: PathBuf,
}

impl FsResolver {
    /// Resolve relative paths against `root` instead of the working directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Resolver for FsResolver {
    fn resolve(&self, path: &str) -> Result<String, ImportError> {
        let full = self.root.join(path);
        fs::read_to_string(&full).map_err(|source| ImportError::Resolve {
            source,
            path: path.to_string(),
        })
    }
}

/// Imports held in memory, keyed by the exact path string
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    files: HashMap<String, String>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: &str, content: &str) {
        self.files.insert(path.to_string(), content.to_string());
    }
}

impl Resolver for MemoryResolver {
    fn resolve(&self, path: &str) -> Result<String, ImportError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| ImportError::Resolve {
                source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
                path: path.to_string(),
            })
    }
}
