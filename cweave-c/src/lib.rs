//! Build C source text from a typed node tree.
//!
//! Callers assemble a [`CompilationUnit`] out of declarations, statements and
//! expressions, then render it in one pass:
//!
//! ```
//! use cweave_c::{CompilationUnit, CType, Enum, Field, StructType, Typedef};
//!
//! let header = CompilationUnit::new()
//!     .item(Typedef::new(StructType::new().field(Field::new(CType::INT, "x")), "Point"))
//!     .item(Enum::new("Color").values(["RED", "GREEN"]));
//!
//! assert_eq!(
//!     header.render(),
//!     "typedef struct {\n    int x;\n} Point;\nenum Color {\n    RED = 0,\n    GREEN = 1\n};\n"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`ast`] - The node model (expressions, types, declarations, control flow)
//! - [`SourceFile`] - Writing a rendered unit to disk

pub mod ast;
mod error;
mod source_file;

pub use ast::*;
pub use cweave_codegen::{CodeBuilder, Indent, Renderable, Sink};
pub use error::{Error, Result};
pub use source_file::SourceFile;
