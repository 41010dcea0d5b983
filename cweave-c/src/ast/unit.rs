//! The root of a generated C file.

use cweave_codegen::{CodeBuilder, Indent, Renderable, Sink};

use super::{
    comments::{Commented, Comments},
    node::Node,
};

/// An ordered list of top-level nodes making up one `.c` or `.h` file.
///
/// Nothing is inserted between items: add [`Node::Blank`] where a blank
/// line is wanted.
///
/// ```
/// use cweave_c::{
///     CFunction, CType, CompilationUnit, Expression, FunctionSignature, Include, Parameter,
/// };
///
/// let main = FunctionSignature::new(CType::INT, "main")
///     .param(Parameter::new(CType::INT, "argc"))
///     .param(Parameter::new(CType::CHAR.pointer().pointer(), "argv"));
///
/// let unit = CompilationUnit::new()
///     .item(Include::system("stdio.h"))
///     .item(CFunction::new(main).statement(Expression::value(0)?.as_return()));
///
/// assert_eq!(
///     unit.render(),
///     "#include <stdio.h>\nint main(int argc, char** argv) {\n    return 0;\n}\n"
/// );
/// # Ok::<(), cweave_c::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationUnit {
    comments: Comments,
    items: Vec<Node>,
}

impl CompilationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level item.
    pub fn item(mut self, node: impl Into<Node>) -> Self {
        self.items.push(node.into());
        self
    }

    /// Add multiple top-level items.
    pub fn items<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.items.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a top-level item in place.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.items.push(node.into());
        self
    }

    pub fn nodes(&self) -> &[Node] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.items.is_empty()
    }

    /// Render with the default 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with(Indent::default())
    }

    /// Render with the given indentation style.
    pub fn render_with(&self, indent: Indent) -> String {
        tracing::debug!(items = self.items.len(), ?indent, "rendering compilation unit");
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        let code = builder.build();
        tracing::trace!(lines = code.lines().count(), "rendered compilation unit");
        code
    }
}

impl Commented for CompilationUnit {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for CompilationUnit {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        self.items.render_to(out);
    }
}
