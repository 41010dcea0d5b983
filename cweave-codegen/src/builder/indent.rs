//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the usual style for generated C.
    pub const C: Self = Self::Spaces(4);

    /// 2-space indentation (GNU-ish compact output).
    pub const COMPACT: Self = Self::Spaces(2);

    /// Tab indentation (Linux kernel style).
    pub const KERNEL: Self = Self::Tab;

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::C
    }
}
