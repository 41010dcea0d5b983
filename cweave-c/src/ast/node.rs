//! The closed set of renderable C constructs.

use cweave_codegen::{Renderable, Sink};

use super::{
    comments::Comments,
    control::{ControlFlow, SwitchCase},
    enums::Enum,
    expr::Expression,
    fns::{CFunction, FunctionSignature},
    preprocessor::{Define, Ifndef, Include},
    structs::{Field, StructType, Typedef},
    types::CType,
};

/// Anything that can appear at file scope or inside a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An empty line.
    Blank,
    /// Code written verbatim, one sink line per text line.
    Raw(String),
    /// A standalone comment.
    Comment(Comments),
    /// An expression statement: `e;`.
    Expr(Expression),
    /// `return e;` or `return;`.
    Return(Option<Expression>),
    /// `throw e;`
    Throw(Expression),
    Break,
    Continue,
    /// A bare type statement such as a struct definition.
    Type(CType),
    /// A variable declaration.
    Field(Field),
    Typedef(Typedef),
    /// A function prototype.
    Signature(FunctionSignature),
    Function(CFunction),
    Control(ControlFlow),
    Case(SwitchCase),
    Enum(Enum),
    Include(Include),
    Define(Define),
    Ifndef(Ifndef),
}

impl Node {
    /// Verbatim code. Multi-line text is split so every line picks up the
    /// current indentation.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        let mut comments = Comments::new();
        comments.push(text);
        Self::Comment(comments)
    }

    pub fn return_void() -> Self {
        Self::Return(None)
    }
}

impl Renderable for Node {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        match self {
            Self::Blank => out.push_blank(),
            Self::Raw(code) if code.is_empty() => out.push_blank(),
            Self::Raw(code) => {
                for line in code.lines() {
                    match line {
                        "" => out.push_blank(),
                        line => out.push_line(line),
                    }
                }
            }
            Self::Comment(comments) => comments.render_to(out),
            Self::Expr(expr) => expr.render_to(out),
            Self::Return(Some(expr)) => out.push_line(&format!("return {expr};")),
            Self::Return(None) => out.push_line("return;"),
            Self::Throw(expr) => out.push_line(&format!("throw {expr};")),
            Self::Break => out.push_line("break;"),
            Self::Continue => out.push_line("continue;"),
            Self::Type(ty) => ty.render_to(out),
            Self::Field(field) => field.render_to(out),
            Self::Typedef(typedef) => typedef.render_to(out),
            Self::Signature(signature) => signature.render_to(out),
            Self::Function(function) => function.render_to(out),
            Self::Control(control) => control.render_to(out),
            Self::Case(case) => case.render_to(out),
            Self::Enum(e) => e.render_to(out),
            Self::Include(include) => include.render_to(out),
            Self::Define(define) => define.render_to(out),
            Self::Ifndef(guard) => guard.render_to(out),
        }
    }
}

macro_rules! impl_from_node {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_node! {
    Comments => Comment,
    Expression => Expr,
    CType => Type,
    Field => Field,
    Typedef => Typedef,
    FunctionSignature => Signature,
    CFunction => Function,
    ControlFlow => Control,
    SwitchCase => Case,
    Enum => Enum,
    Include => Include,
    Define => Define,
    Ifndef => Ifndef,
}

impl From<StructType> for Node {
    fn from(body: StructType) -> Self {
        Self::Type(CType::Struct(body))
    }
}
