//! Core utilities and types for the cweave C source generator.
//!
//! This crate provides the pieces shared by the sink and the C node model:
//! string escaping for C literals and writing generated files to disk.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{escape_c_string, to_guard_name};
