//! Struct bodies, fields and typedefs.

use cweave_codegen::{Renderable, Sink};

use super::{
    comments::{Commented, Comments},
    expr::Expression,
    types::CType,
};

/// A variable or struct member declaration: `int x;` or `int x = 0;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    comments: Comments,
    ty: CType,
    name: String,
    init: Option<Expression>,
}

impl Field {
    pub fn new(ty: CType, name: impl Into<String>) -> Self {
        Self {
            comments: Comments::new(),
            ty,
            name: name.into(),
            init: None,
        }
    }

    /// Set the initializer: `= expr`.
    pub fn init(mut self, value: Expression) -> Self {
        self.init = Some(value);
        self
    }

    pub fn ty(&self) -> &CType {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declaration text without a terminating semicolon.
    pub fn declaration(&self) -> String {
        let decl = self.ty.declare(&self.name);
        match &self.init {
            Some(init) => format!("{} = {}", decl, init),
            None => decl,
        }
    }
}

impl Commented for Field {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for Field {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        out.push_line(&format!("{};", self.declaration()));
    }
}

/// An inline struct body.
///
/// The spelling is computed from the current field list every time it is
/// asked for, so fields appended after the type was composed still show up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructType {
    tag: Option<String>,
    fields: Vec<Field>,
}

impl StructType {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tagged struct: `struct tag { ... }`.
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    fn keyword(&self) -> String {
        match &self.tag {
            Some(tag) => format!("struct {tag}"),
            None => "struct".to_string(),
        }
    }

    /// Single-line spelling: `struct { int x; int y; }`.
    pub fn spelling(&self) -> String {
        if self.fields.is_empty() {
            return format!("{} {{}}", self.keyword());
        }
        let members = self
            .fields
            .iter()
            .map(|f| format!("{};", f.declaration()))
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {{ {} }}", self.keyword(), members)
    }
}

/// `typedef <type> <name>;`
///
/// A struct operand is written as a braced block with one field per line
/// instead of its single-line spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typedef {
    comments: Comments,
    ty: CType,
    name: String,
}

impl Typedef {
    pub fn new(ty: impl Into<CType>, name: impl Into<String>) -> Self {
        Self {
            comments: Comments::new(),
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn ty(&self) -> &CType {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type this typedef introduces, for use in later declarations.
    pub fn as_type(&self) -> CType {
        CType::named(self.name.clone())
    }
}

impl Commented for Typedef {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for Typedef {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        match &self.ty {
            CType::Struct(body) => {
                out.push_line(&format!("typedef {} {{", body.keyword()));
                out.push_indent();
                body.fields().render_to(out);
                out.push_dedent();
                out.push_line(&format!("}} {};", self.name));
            }
            ty => out.push_line(&format!("typedef {};", ty.declare(&self.name))),
        }
    }
}
