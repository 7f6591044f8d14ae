//! Common fixtures for qindex-tree integration tests.

use std::path::{Path, PathBuf};

use qindex_core::IndexConfig;
use tempfile::TempDir;

/// A throwaway content tree on disk.
pub struct Site {
    dir: TempDir,
}

impl Site {
    /// Creates an empty site with a `conteudo/` folder.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("conteudo")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file relative to the site root.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Writes a document whose header holds the given YAML lines.
    pub fn document(&self, relative: &str, header: &[&str]) -> PathBuf {
        let content = format!("---\n{}\n---\n\nBody of {relative}.\n", header.join("\n"));
        self.write(relative, &content)
    }

    /// Config rooted at this site, sorted for stable assertions.
    pub fn config(&self) -> IndexConfig {
        IndexConfig::new(self.root())
            .with_output(self.root().join("saida.json"))
            .with_sorted_entries(true)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new()
    }
}
