use miette::Diagnostic;
use thiserror::Error;

/// Result type for node construction.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("cannot build a C literal from a {kind} value")]
    #[diagnostic(
        code(cweave::unsupported_value),
        help("only null, strings and finite numbers have a literal spelling; use Expression::raw for anything else")
    )]
    UnsupportedValue {
        /// The JSON kind that was rejected (e.g. "boolean", "array").
        kind: &'static str,
    },
}
