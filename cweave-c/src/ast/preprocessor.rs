//! Preprocessor directives: includes, defines and include guards.

use cweave_codegen::{Renderable, Sink};
use cweave_core::{escape_c_string, to_guard_name};

use super::{
    comments::{Commented, Comments},
    node::Node,
};

/// `#include <path>` or `#include "path"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Include {
    comments: Comments,
    path: String,
}

impl Include {
    /// A system header: `#include <stdio.h>`.
    pub fn system(path: &str) -> Self {
        Self::with_path(format!("<{path}>"))
    }

    /// A project header: `#include "point.h"`.
    pub fn local(path: &str) -> Self {
        Self::with_path(format!("\"{}\"", escape_c_string(path)))
    }

    fn with_path(path: String) -> Self {
        Self {
            comments: Comments::new(),
            path,
        }
    }

    /// The path including its `<>` or `""` delimiters.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Commented for Include {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for Include {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        out.push_line(&format!("#include {}", self.path));
    }
}

/// `#define NAME` or `#define NAME value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    name: String,
    value: Option<String>,
}

impl Define {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

impl Renderable for Define {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        match &self.value {
            Some(value) => out.push_line(&format!("#define {} {}", self.name, value)),
            None => out.push_line(&format!("#define {}", self.name)),
        }
    }
}

/// An include guard around a body. The body is not indented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ifndef {
    name: String,
    body: Vec<Node>,
}

impl Ifndef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    /// A guard named after a header file: `include/point.h` -> `POINT_H`.
    pub fn for_header(path: &str) -> Self {
        Self::new(to_guard_name(path))
    }

    pub fn statement(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    pub fn statements<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.body.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.body.push(node.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Ifndef {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        out.push_line(&format!("#ifndef {}", self.name));
        out.push_line(&format!("#define {}", self.name));
        self.body.render_to(out);
        out.push_line("#endif");
    }
}
