//! C type descriptors.
//!
//! A [`CType`] knows two spellings: the type on its own ([`CType::spelling`],
//! as used in casts and `sizeof`) and a declarator for a name
//! ([`CType::declare`]), which puts the name where C wants it for arrays and
//! function pointers.

use std::borrow::Cow;

use cweave_codegen::{Renderable, Sink};
use cweave_core::escape_c_string;

use super::{expr::Expression, structs::StructType};

/// Type qualifiers and specifiers that compose with another type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Qualifier {
    Unsigned,
    Signed,
    Const,
    Static,
    Register,
    Volatile,
    Restrict,
    Short,
    Long,
    Inline,
    Struct,
    Union,
    Enum,
}

impl Qualifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unsigned => "unsigned",
            Self::Signed => "signed",
            Self::Const => "const",
            Self::Static => "static",
            Self::Register => "register",
            Self::Volatile => "volatile",
            Self::Restrict => "restrict",
            Self::Short => "short",
            Self::Long => "long",
            Self::Inline => "inline",
            Self::Struct => "struct",
            Self::Union => "union",
            Self::Enum => "enum",
        }
    }
}

/// A C type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CType {
    /// A base type spelled as is (`int`, `FILE`, `uint8_t`).
    Named(Cow<'static, str>),
    /// `T*`
    Pointer(Box<CType>),
    /// `T[n]` or `T[]`
    Array {
        element: Box<CType>,
        size: Option<usize>,
    },
    /// `q T`
    Prefixed {
        qualifier: Qualifier,
        inner: Box<CType>,
    },
    /// `T q`
    Suffixed {
        inner: Box<CType>,
        qualifier: Qualifier,
    },
    /// `extern T` or `extern "C" T`
    Extern {
        linkage: Option<String>,
        inner: Box<CType>,
    },
    /// `R (*)(P1, P2)`
    FunctionPointer {
        returns: Box<CType>,
        params: Vec<CType>,
    },
    /// An inline struct body.
    Struct(StructType),
}

impl CType {
    pub const VOID: Self = Self::builtin("void");
    pub const BOOL: Self = Self::builtin("bool");
    pub const CHAR: Self = Self::builtin("char");
    pub const SHORT: Self = Self::builtin("short");
    pub const INT: Self = Self::builtin("int");
    pub const LONG: Self = Self::builtin("long");
    pub const FLOAT: Self = Self::builtin("float");
    pub const DOUBLE: Self = Self::builtin("double");
    pub const INT8: Self = Self::builtin("int8_t");
    pub const INT16: Self = Self::builtin("int16_t");
    pub const INT32: Self = Self::builtin("int32_t");
    pub const INT64: Self = Self::builtin("int64_t");
    pub const UINT8: Self = Self::builtin("uint8_t");
    pub const UINT16: Self = Self::builtin("uint16_t");
    pub const UINT32: Self = Self::builtin("uint32_t");
    pub const UINT64: Self = Self::builtin("uint64_t");
    pub const SIZE: Self = Self::builtin("size_t");
    pub const PTRDIFF: Self = Self::builtin("ptrdiff_t");
    pub const INTPTR: Self = Self::builtin("intptr_t");
    pub const UINTPTR: Self = Self::builtin("uintptr_t");

    const fn builtin(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }

    /// A type spelled by name, e.g. `FILE` or `struct node`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(Cow::Owned(name.into()))
    }

    /// Start an empty inline struct.
    pub fn struct_body() -> StructType {
        StructType::new()
    }

    /// `T*`
    pub fn pointer(&self) -> Self {
        Self::Pointer(Box::new(self.clone()))
    }

    /// `T[n]`, or `T[]` without a size.
    pub fn array(&self, size: Option<usize>) -> Self {
        Self::Array {
            element: Box::new(self.clone()),
            size,
        }
    }

    /// `q T`
    pub fn prefixed(&self, qualifier: Qualifier) -> Self {
        Self::Prefixed {
            qualifier,
            inner: Box::new(self.clone()),
        }
    }

    /// `T q`, e.g. a constant pointer `char* const`.
    pub fn suffixed(&self, qualifier: Qualifier) -> Self {
        Self::Suffixed {
            inner: Box::new(self.clone()),
            qualifier,
        }
    }

    pub fn unsigned_(&self) -> Self {
        self.prefixed(Qualifier::Unsigned)
    }

    pub fn const_(&self) -> Self {
        self.prefixed(Qualifier::Const)
    }

    pub fn static_(&self) -> Self {
        self.prefixed(Qualifier::Static)
    }

    pub fn register(&self) -> Self {
        self.prefixed(Qualifier::Register)
    }

    pub fn volatile(&self) -> Self {
        self.prefixed(Qualifier::Volatile)
    }

    pub fn short(&self) -> Self {
        self.prefixed(Qualifier::Short)
    }

    pub fn long(&self) -> Self {
        self.prefixed(Qualifier::Long)
    }

    pub fn inline(&self) -> Self {
        self.prefixed(Qualifier::Inline)
    }

    pub fn struct_(&self) -> Self {
        self.prefixed(Qualifier::Struct)
    }

    pub fn enum_(&self) -> Self {
        self.prefixed(Qualifier::Enum)
    }

    /// `extern T`, or `extern "linkage" T`.
    pub fn extern_(&self, linkage: Option<&str>) -> Self {
        Self::Extern {
            linkage: linkage.map(str::to_string),
            inner: Box::new(self.clone()),
        }
    }

    /// A pointer to a function returning `self`.
    pub fn function_pointer(&self, params: Vec<CType>) -> Self {
        Self::FunctionPointer {
            returns: Box::new(self.clone()),
            params,
        }
    }

    /// `sizeof(T)`
    pub fn sizeof(&self) -> Expression {
        Expression::raw(format!("sizeof({})", self.spelling()))
    }

    /// The type written on its own.
    pub fn spelling(&self) -> String {
        self.declarator("")
    }

    /// A declaration of `name` with this type, without a terminator.
    pub fn declare(&self, name: &str) -> String {
        self.declarator(name)
    }

    /// Wraps the declarator built so far (`inner`, empty for an abstract
    /// declarator) in this type, working from the name outwards.
    fn declarator(&self, inner: &str) -> String {
        match self {
            Self::Named(name) => join_declarator(name, inner),
            Self::Struct(body) => join_declarator(&body.spelling(), inner),
            Self::Pointer(target) => match &**target {
                Self::Array { .. } => target.declarator(&format!("(*{inner})")),
                Self::FunctionPointer { .. } => target.declarator(&format!("*{inner}")),
                Self::Pointer(_) if target.binds_tighter() => {
                    target.declarator(&format!("*{inner}"))
                }
                _ => join_declarator(&format!("{}*", target.spelling()), inner),
            },
            Self::Array { element, size } => {
                element.declarator(&format!("{inner}{}", array_suffix(*size)))
            }
            Self::Prefixed { qualifier, inner: ty } => {
                format!("{} {}", qualifier.as_str(), ty.declarator(inner))
            }
            Self::Suffixed { inner: ty, qualifier } if ty.binds_tighter() => {
                let qualified = match inner {
                    "" => qualifier.as_str().to_string(),
                    name => format!("{} {name}", qualifier.as_str()),
                };
                ty.declarator(&qualified)
            }
            Self::Suffixed { inner: ty, qualifier } => join_declarator(
                &format!("{} {}", ty.spelling(), qualifier.as_str()),
                inner,
            ),
            Self::Extern { linkage, inner: ty } => {
                format!("{}{}", extern_prefix(linkage.as_deref()), ty.declarator(inner))
            }
            Self::FunctionPointer { returns, params } => {
                returns.declarator(&format!("(*{inner})({})", param_list(params)))
            }
        }
    }

    /// Whether the declarator needs parentheses to take a pointer to it.
    fn binds_tighter(&self) -> bool {
        match self {
            Self::Array { .. } | Self::FunctionPointer { .. } => true,
            Self::Pointer(inner) | Self::Suffixed { inner, .. } => inner.binds_tighter(),
            _ => false,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Self::Struct(body) => Some(body),
            _ => None,
        }
    }
}

impl From<StructType> for CType {
    fn from(body: StructType) -> Self {
        Self::Struct(body)
    }
}

/// A bare type statement, e.g. a struct definition: `struct point { int x; };`.
impl Renderable for CType {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        out.push_line(&format!("{};", self.spelling()));
    }
}

fn join_declarator(base: &str, declarator: &str) -> String {
    if declarator.is_empty() || declarator.starts_with('[') {
        format!("{base}{declarator}")
    } else {
        format!("{base} {declarator}")
    }
}

fn array_suffix(size: Option<usize>) -> String {
    match size {
        Some(n) => format!("[{n}]"),
        None => "[]".to_string(),
    }
}

fn extern_prefix(linkage: Option<&str>) -> String {
    match linkage {
        Some(linkage) => format!("extern \"{}\" ", escape_c_string(linkage)),
        None => "extern ".to_string(),
    }
}

fn param_list(params: &[CType]) -> String {
    if params.is_empty() {
        return "void".to_string();
    }
    params
        .iter()
        .map(CType::spelling)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::structs::Field;

    #[test]
    fn test_builtin_spellings() {
        assert_eq!(CType::INT.spelling(), "int");
        assert_eq!(CType::UINT64.spelling(), "uint64_t");
        assert_eq!(CType::SIZE.spelling(), "size_t");
        assert_eq!(CType::PTRDIFF.spelling(), "ptrdiff_t");
        assert_eq!(CType::named("FILE").pointer().spelling(), "FILE*");
    }

    #[test]
    fn test_composition() {
        assert_eq!(CType::CHAR.pointer().pointer().spelling(), "char**");
        assert_eq!(CType::INT.array(Some(4)).spelling(), "int[4]");
        assert_eq!(CType::INT.array(None).spelling(), "int[]");
        assert_eq!(CType::INT.unsigned_().spelling(), "unsigned int");
        assert_eq!(CType::CHAR.const_().pointer().spelling(), "const char*");
        assert_eq!(
            CType::CHAR.pointer().suffixed(Qualifier::Const).spelling(),
            "char* const"
        );
        assert_eq!(CType::INT.long().long().spelling(), "long long int");
        assert_eq!(CType::named("node").struct_().spelling(), "struct node");
        assert_eq!(CType::named("color").enum_().spelling(), "enum color");
        assert_eq!(CType::INT.static_().inline().spelling(), "inline static int");
        assert_eq!(
            CType::INT.volatile().register().spelling(),
            "register volatile int"
        );
        assert_eq!(CType::INT.short().spelling(), "short int");
    }

    #[test]
    fn test_composition_returns_new_descriptor() {
        let base = CType::INT;
        let _ = base.pointer();
        assert_eq!(base.spelling(), "int");
    }

    #[test]
    fn test_extern_linkage() {
        assert_eq!(CType::INT.extern_(None).spelling(), "extern int");
        assert_eq!(CType::INT.extern_(Some("C")).spelling(), "extern \"C\" int");
        assert_eq!(
            CType::INT.extern_(Some("C")).declare("errno"),
            "extern \"C\" int errno"
        );
    }

    #[test]
    fn test_declarators() {
        assert_eq!(CType::INT.declare("x"), "int x");
        assert_eq!(CType::CHAR.pointer().declare("s"), "char* s");
        assert_eq!(CType::INT.array(Some(3)).declare("v"), "int v[3]");
        assert_eq!(
            CType::CHAR.pointer().array(None).declare("argv"),
            "char* argv[]"
        );
        assert_eq!(
            CType::INT.array(Some(4)).const_().declare("table"),
            "const int table[4]"
        );
    }

    #[test]
    fn test_nested_array_dimensions_keep_order() {
        let matrix = CType::INT.array(Some(3)).array(Some(2));
        assert_eq!(matrix.declare("m"), "int m[2][3]");
        assert_eq!(matrix.spelling(), "int[2][3]");
        assert_eq!(Field::new(matrix, "m").declaration(), "int m[2][3]");
    }

    #[test]
    fn test_array_of_function_pointers() {
        let table = CType::INT.function_pointer(vec![CType::INT]).array(Some(4));
        assert_eq!(table.declare("tbl"), "int (*tbl[4])(int)");
        assert_eq!(table.spelling(), "int (*[4])(int)");
    }

    #[test]
    fn test_pointer_to_array() {
        let row = CType::INT.array(Some(3)).pointer();
        assert_eq!(row.declare("p"), "int (*p)[3]");
        assert_eq!(row.spelling(), "int (*)[3]");
        assert_eq!(row.pointer().declare("pp"), "int (**pp)[3]");
        assert_eq!(
            row.suffixed(Qualifier::Const).declare("p"),
            "int (*const p)[3]"
        );
    }

    #[test]
    fn test_pointer_to_function_pointer() {
        let cb = CType::VOID.function_pointer(vec![CType::INT]);
        assert_eq!(cb.pointer().declare("slot"), "void (**slot)(int)");
        assert_eq!(
            CType::CHAR.pointer().function_pointer(vec![]).declare("name"),
            "char* (*name)(void)"
        );
    }

    #[test]
    fn test_function_pointer() {
        let cb = CType::INT.function_pointer(vec![CType::INT, CType::CHAR.pointer()]);
        assert_eq!(cb.spelling(), "int (*)(int, char*)");
        assert_eq!(cb.declare("handler"), "int (*handler)(int, char*)");
        assert_eq!(
            CType::VOID.function_pointer(vec![]).spelling(),
            "void (*)(void)"
        );
    }

    #[test]
    fn test_sizeof_is_expression() {
        assert_eq!(CType::INT.pointer().sizeof().code(), "sizeof(int*)");
    }

    #[test]
    fn test_struct_spelling_tracks_fields() {
        let mut body = CType::struct_body();
        assert_eq!(CType::from(body.clone()).spelling(), "struct {}");

        body.push_field(Field::new(CType::INT, "x"));
        body.push_field(Field::new(CType::INT, "y"));
        assert_eq!(
            CType::from(body).spelling(),
            "struct { int x; int y; }"
        );
    }
}
