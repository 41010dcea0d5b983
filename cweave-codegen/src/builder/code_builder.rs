//! Code builder utility for generating properly indented code.

use super::{Indent, Renderable, Sink};

/// String-backed [`Sink`] that tracks indentation.
///
/// Methods return `&mut Self` so calls can be chained.
///
/// # Example
///
/// ```
/// use cweave_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::new(Default::default());
/// builder
///     .push_line("int main(void) {")
///     .push_indent()
///     .push_line("return 0;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "int main(void) {\n    return 0;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with tab indentation.
    pub fn tabs() -> Self {
        Self::new(Indent::Tab)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        node.render_to(self);
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get the configured indentation style.
    pub fn indent_style(&self) -> Indent {
        self.indent
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Sink for CodeBuilder {
    fn push_raw(&mut self, s: &str) {
        CodeBuilder::push_raw(self, s);
    }

    fn push_line(&mut self, s: &str) {
        CodeBuilder::push_line(self, s);
    }

    fn push_blank(&mut self) {
        CodeBuilder::push_blank(self);
    }

    fn push_indent(&mut self) {
        CodeBuilder::push_indent(self);
    }

    fn push_dedent(&mut self) {
        CodeBuilder::push_dedent(self);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
