use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Something that renders to a file on disk, such as a C source or header.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        File::new(path, self.render())
            .with_rules(self.rules())
            .write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules.
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content, without the header
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists() {
            tracing::debug!(path = %self.path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }

        match self.rules.header {
            Some(header) => write_file(&self.path, &format!("{header}\n{}", self.content))?,
            None => write_file(&self.path, &self.content)?,
        }
        tracing::debug!(path = %self.path.display(), bytes = self.content.len(), "wrote file");
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Line written before the content, e.g. a "generated, do not edit" banner.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for hand-edited stubs: only create the file if it is missing.
    pub fn stub() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
