//! C expression builder.
//!
//! An [`Expression`] is a single-line code fragment. Every composition method
//! returns a new expression wrapping the operands in the operator's C
//! spelling. No precedence analysis happens: wrap operands in
//! [`Expression::parens`] where the generated code needs it.
//!
//! ```
//! use cweave_c::{CType, Expression};
//!
//! let len = Expression::ident("len");
//! let size = len.mul(&CType::INT.sizeof());
//! let buf = Expression::invoke("malloc", &[size]).cast(&CType::CHAR.pointer());
//! assert_eq!(buf.code(), "(char*) malloc(len * sizeof(int))");
//! ```

use std::fmt;

use cweave_codegen::{Renderable, Sink};
use cweave_core::escape_c_string;
use serde_json::Value;

use super::{node::Node, types::CType};
use crate::{Error, Result};

/// A C expression fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression {
    code: String,
}

/// Compound assignment operators for [`Expression::assign_op`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl AssignOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::Add => "+=",
            Self::Sub => "-=",
            Self::Mul => "*=",
            Self::Div => "/=",
            Self::Rem => "%=",
            Self::BitAnd => "&=",
            Self::BitOr => "|=",
            Self::BitXor => "^=",
            Self::Shl => "<<=",
            Self::Shr => ">>=",
        }
    }
}

/// Input accepted by [`Expression::value`].
///
/// Anything convertible into a [`serde_json::Value`] converts into a
/// `Literal`. Floats are checked before that conversion, since JSON has no
/// spelling for NaN or infinities and would otherwise turn them into `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal(Repr);

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    Json(Value),
    NonFinite,
}

macro_rules! impl_from_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Self(Repr::Json(Value::from(value)))
                }
            }
        )*
    };
}

impl_from_json!(
    Value, (), bool, &str, String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self(Repr::Json(Value::from(value)))
        } else {
            Self(Repr::NonFinite)
        }
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        if value.is_finite() {
            Self(Repr::Json(Value::from(value)))
        } else {
            Self(Repr::NonFinite)
        }
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self(Repr::Json(Value::Null)),
        }
    }
}

impl Expression {
    /// Build a literal from a dynamic value.
    ///
    /// `null` becomes `NULL`, strings become escaped string literals and
    /// finite numbers keep their decimal spelling. Any other kind of value,
    /// including NaN and infinities, is rejected with
    /// [`Error::UnsupportedValue`].
    pub fn value(value: impl Into<Literal>) -> Result<Self> {
        let value = match value.into().0 {
            Repr::Json(value) => value,
            Repr::NonFinite => return Err(reject("non-finite number")),
        };
        let code = match value {
            Value::Null => "NULL".to_string(),
            Value::String(s) => format!("\"{}\"", escape_c_string(&s)),
            Value::Number(n) => n.to_string(),
            Value::Bool(_) => return Err(reject("boolean")),
            Value::Array(_) => return Err(reject("array")),
            Value::Object(_) => return Err(reject("object")),
        };
        Ok(Self { code })
    }

    /// Wrap raw code text without any checking.
    pub fn raw(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// An identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::raw(name)
    }

    /// The `NULL` constant.
    pub fn null() -> Self {
        Self::raw("NULL")
    }

    /// A call to a named function: `name(a, b)`.
    pub fn invoke(name: &str, args: &[Expression]) -> Self {
        Self::ident(name).call(args)
    }

    /// The fragment text, without a statement terminator.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn into_code(self) -> String {
        self.code
    }

    fn binary(&self, op: &str, rhs: &Expression) -> Self {
        Self::raw(format!("{} {} {}", self.code, op, rhs.code))
    }

    fn prefix(&self, op: &str) -> Self {
        Self::raw(format!("{}{}", op, self.code))
    }

    fn postfix(&self, op: &str) -> Self {
        Self::raw(format!("{}{}", self.code, op))
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    pub fn add(&self, rhs: &Expression) -> Self {
        self.binary("+", rhs)
    }

    pub fn sub(&self, rhs: &Expression) -> Self {
        self.binary("-", rhs)
    }

    pub fn mul(&self, rhs: &Expression) -> Self {
        self.binary("*", rhs)
    }

    pub fn div(&self, rhs: &Expression) -> Self {
        self.binary("/", rhs)
    }

    pub fn rem(&self, rhs: &Expression) -> Self {
        self.binary("%", rhs)
    }

    pub fn neg(&self) -> Self {
        self.prefix("-")
    }

    // =========================================================================
    // Bitwise
    // =========================================================================

    pub fn bit_and(&self, rhs: &Expression) -> Self {
        self.binary("&", rhs)
    }

    pub fn bit_or(&self, rhs: &Expression) -> Self {
        self.binary("|", rhs)
    }

    pub fn bit_xor(&self, rhs: &Expression) -> Self {
        self.binary("^", rhs)
    }

    pub fn shl(&self, rhs: &Expression) -> Self {
        self.binary("<<", rhs)
    }

    pub fn shr(&self, rhs: &Expression) -> Self {
        self.binary(">>", rhs)
    }

    pub fn bit_not(&self) -> Self {
        self.prefix("~")
    }

    // =========================================================================
    // Logical and relational
    // =========================================================================

    pub fn and(&self, rhs: &Expression) -> Self {
        self.binary("&&", rhs)
    }

    pub fn or(&self, rhs: &Expression) -> Self {
        self.binary("||", rhs)
    }

    pub fn not(&self) -> Self {
        self.prefix("!")
    }

    pub fn eq(&self, rhs: &Expression) -> Self {
        self.binary("==", rhs)
    }

    pub fn ne(&self, rhs: &Expression) -> Self {
        self.binary("!=", rhs)
    }

    pub fn lt(&self, rhs: &Expression) -> Self {
        self.binary("<", rhs)
    }

    pub fn le(&self, rhs: &Expression) -> Self {
        self.binary("<=", rhs)
    }

    pub fn gt(&self, rhs: &Expression) -> Self {
        self.binary(">", rhs)
    }

    pub fn ge(&self, rhs: &Expression) -> Self {
        self.binary(">=", rhs)
    }

    // =========================================================================
    // Increment / decrement
    // =========================================================================

    pub fn pre_inc(&self) -> Self {
        self.prefix("++")
    }

    pub fn pre_dec(&self) -> Self {
        self.prefix("--")
    }

    pub fn post_inc(&self) -> Self {
        self.postfix("++")
    }

    pub fn post_dec(&self) -> Self {
        self.postfix("--")
    }

    // =========================================================================
    // Pointers, casts and access
    // =========================================================================

    /// `(T) e`
    pub fn cast(&self, ty: &CType) -> Self {
        Self::raw(format!("({}) {}", ty.spelling(), self.code))
    }

    /// `&e`
    pub fn reference(&self) -> Self {
        self.prefix("&")
    }

    /// `*e`
    pub fn deref(&self) -> Self {
        self.prefix("*")
    }

    /// `(e)`
    pub fn parens(&self) -> Self {
        Self::raw(format!("({})", self.code))
    }

    /// `e[i]`
    pub fn index(&self, index: &Expression) -> Self {
        Self::raw(format!("{}[{}]", self.code, index.code))
    }

    /// `e(a, b)`
    pub fn call(&self, args: &[Expression]) -> Self {
        let args = args
            .iter()
            .map(Expression::code)
            .collect::<Vec<_>>()
            .join(", ");
        Self::raw(format!("{}({})", self.code, args))
    }

    /// `e.name`
    pub fn member(&self, name: &str) -> Self {
        Self::raw(format!("{}.{}", self.code, name))
    }

    /// `e->name`
    pub fn arrow(&self, name: &str) -> Self {
        Self::raw(format!("{}->{}", self.code, name))
    }

    /// `e ? then : otherwise`
    pub fn ternary(&self, then: &Expression, otherwise: &Expression) -> Self {
        Self::raw(format!("{} ? {} : {}", self.code, then.code, otherwise.code))
    }

    /// `sizeof(e)`
    pub fn sizeof(&self) -> Self {
        Self::raw(format!("sizeof({})", self.code))
    }

    // =========================================================================
    // Assignment
    // =========================================================================

    /// `target = e`
    pub fn assign_to(&self, target: &Expression) -> Self {
        self.assign_op(target, AssignOp::Assign)
    }

    /// `target op= e`
    pub fn assign_op(&self, target: &Expression, op: AssignOp) -> Self {
        target.binary(op.as_str(), self)
    }

    // =========================================================================
    // Terminal statements
    // =========================================================================

    /// `return e;`
    pub fn as_return(self) -> Node {
        Node::Return(Some(self))
    }

    /// `throw e;`
    pub fn as_throw(self) -> Node {
        Node::Throw(self)
    }
}

fn reject(kind: &'static str) -> Error {
    tracing::trace!(kind, "rejected literal value");
    Error::UnsupportedValue { kind }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Rendered on its own, an expression is a statement: `e;`.
impl Renderable for Expression {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        out.push_line(&format!("{};", self.code));
    }
}
