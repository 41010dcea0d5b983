//! A compilation unit bound to an output path.

use std::path::{Path, PathBuf};

use cweave_core::{FileRules, GeneratedFile};

use crate::{CompilationUnit, Indent};

/// A `.c` or `.h` file produced from a [`CompilationUnit`].
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    unit: CompilationUnit,
    indent: Indent,
    rules: FileRules,
}

impl SourceFile {
    /// A generated file at `path`, relative to the output directory.
    pub fn new(path: impl Into<PathBuf>, unit: CompilationUnit) -> Self {
        Self {
            path: path.into(),
            unit,
            indent: Indent::default(),
            rules: FileRules::default(),
        }
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn unit(&self) -> &CompilationUnit {
        &self.unit
    }
}

impl GeneratedFile for SourceFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn rules(&self) -> FileRules {
        self.rules.clone()
    }

    fn render(&self) -> String {
        self.unit.render_with(self.indent)
    }
}
