//! C enum builder.

use cweave_codegen::{Renderable, Sink};

use super::comments::{Commented, Comments};

/// `enum Name { A = 0, B = 1 };`
///
/// Every value is assigned its position explicitly; the last entry has no
/// trailing comma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    comments: Comments,
    name: String,
    values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            comments: Comments::new(),
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn push_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.values.push(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Commented for Enum {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for Enum {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        out.push_line(&format!("enum {} {{", self.name));
        out.push_indent();
        let last = self.values.len().saturating_sub(1);
        for (i, value) in self.values.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            out.push_line(&format!("{value} = {i}{sep}"));
        }
        out.push_dedent();
        out.push_line("};");
    }
}
