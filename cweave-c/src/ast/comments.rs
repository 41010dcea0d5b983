//! Leading comments attached to declarations and statements.

use cweave_codegen::{Renderable, Sink};

/// An ordered list of comment lines.
///
/// One entry renders as `// text`; two or more render as a block comment
/// with one ` * ` line per entry. An empty list renders nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comments(Vec<String>);

impl Comments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.0.push(text.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Comments {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Renderable for Comments {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        match self.0.as_slice() {
            [] => {}
            [single] => out.push_line(&format!("// {single}")),
            lines => {
                out.push_line("/*");
                for line in lines {
                    out.push_line(&format!(" * {line}"));
                }
                out.push_line(" */");
            }
        }
    }
}

/// Nodes that carry leading [`Comments`].
pub trait Commented {
    fn comments(&self) -> &Comments;

    fn comments_mut(&mut self) -> &mut Comments;

    /// Add a comment line (builder style).
    fn comment(mut self, text: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.comments_mut().push(text);
        self
    }

    /// Add a comment line in place.
    fn push_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.comments_mut().push(text);
        self
    }
}
