//! Code generation building blocks.
//!
//! This module provides the core primitives for generating code:
//! - [`Sink`] - Line-oriented writer with paired indentation
//! - [`CodeBuilder`] - The string-backed [`Sink`]
//! - [`Renderable`] - Trait for nodes that write themselves to a [`Sink`]
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{Renderable, Sink};
