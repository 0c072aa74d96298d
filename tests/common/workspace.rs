use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary working directory for splice runs
pub struct TestWorkspace {
    dir: TempDir,
    files: HashMap<String, PathBuf>,
}

impl TestWorkspace {
    /// Create a new temporary workspace
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            files: HashMap::new(),
        }
    }

    /// Create a file in the workspace, along with any parent directories
    pub fn create_file(&mut self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        self.files.insert(name.to_string(), path.clone());
        path
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Whether a file exists in the workspace
    pub fn exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Path of a file previously created with `create_file`
    pub fn get_path(&self, name: &str) -> &Path {
        self.files
            .get(name)
            .unwrap_or_else(|| panic!("File not found: {}", name))
    }

    /// Get workspace root path
    pub fn root_path(&self) -> &Path {
        self.dir.path()
    }
}
