//! C AST builders for generating declarations, statements and expressions.
//!
//! Every node renders itself into a [`Sink`](cweave_codegen::Sink) through
//! [`Renderable`](cweave_codegen::Renderable); [`Node`] is the closed set of
//! constructs that may appear in a body or at file scope.

mod comments;
mod control;
mod enums;
mod expr;
mod fns;
mod node;
mod preprocessor;
mod structs;
mod types;
mod unit;

pub use comments::{Commented, Comments};
pub use control::{ControlFlow, SwitchCase};
pub use enums::Enum;
pub use expr::{AssignOp, Expression, Literal};
pub use fns::{CFunction, FunctionSignature, Parameter};
pub use node::Node;
pub use preprocessor::{Define, Ifndef, Include};
pub use structs::{Field, StructType, Typedef};
pub use types::{CType, Qualifier};
pub use unit::CompilationUnit;
