//! Text emission primitives for the cweave C source generator.
//!
//! This crate is deliberately ignorant of C: it provides the line-oriented
//! sink that node models render into.
//!
//! # Module Organization
//!
//! - [`builder`] - The [`Sink`](builder::Sink) trait, [`CodeBuilder`](builder::CodeBuilder)
//!   and [`Indent`](builder::Indent) configuration

pub mod builder;

pub use builder::{CodeBuilder, Indent, Renderable, Sink};
