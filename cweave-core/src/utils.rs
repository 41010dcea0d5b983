//! Shared string utilities for C code generation.

use std::path::Path;

/// Escape a string for use inside a double-quoted C literal.
///
/// Only the quote and the whitespace control characters are rewritten
/// (`"`, backspace, carriage return, form feed, newline, tab); everything
/// else passes through unchanged.
pub fn escape_c_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\u{8}' => result.push_str("\\b"),
            '\r' => result.push_str("\\r"),
            '\u{c}' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\t' => result.push_str("\\t"),
            c => result.push(c),
        }
    }
    result
}

/// Convert a header path to an include-guard macro name
/// (e.g., "include/point-2d.h" -> "POINT_2D_H").
pub fn to_guard_name(path: &str) -> String {
    let file_name = Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path);

    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}
