//! C function builders: parameters, prototypes and definitions.

use cweave_codegen::{Renderable, Sink};

use super::{
    comments::{Commented, Comments},
    node::Node,
    types::CType,
};

/// A parameter in a C function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    /// `int argc`, or `int (*cb)(int)` when the type is a function pointer.
    Named { ty: CType, name: String },
    /// The trailing `...` of a variadic function.
    Variadic,
}

impl Parameter {
    pub fn new(ty: CType, name: impl Into<String>) -> Self {
        Self::Named {
            ty,
            name: name.into(),
        }
    }

    /// A function-pointer parameter: `returns (*name)(params...)`.
    pub fn function_pointer(returns: CType, name: impl Into<String>, params: Vec<CType>) -> Self {
        Self::new(returns.function_pointer(params), name)
    }

    pub fn variadic() -> Self {
        Self::Variadic
    }

    /// The parameter's type as it appears in a function-pointer type list.
    pub fn ty(&self) -> CType {
        match self {
            Self::Named { ty, .. } => ty.clone(),
            Self::Variadic => CType::named("..."),
        }
    }

    pub fn declaration(&self) -> String {
        match self {
            Self::Named { ty, name } => ty.declare(name),
            Self::Variadic => "...".to_string(),
        }
    }
}

/// A function signature: return type, name and parameters.
///
/// Rendered on its own it is a prototype (`int main(void);`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    comments: Comments,
    returns: CType,
    name: String,
    params: Vec<Parameter>,
}

impl FunctionSignature {
    pub fn new(returns: CType, name: impl Into<String>) -> Self {
        Self {
            comments: Comments::new(),
            returns,
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn push_param(&mut self, param: Parameter) -> &mut Self {
        self.params.push(param);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn returns(&self) -> &CType {
        &self.returns
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// `int main(int argc, char** argv)`, without terminator.
    pub fn declaration(&self) -> String {
        let params = if self.params.is_empty() {
            "void".to_string()
        } else {
            self.params
                .iter()
                .map(Parameter::declaration)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("{} {}({})", self.returns.spelling(), self.name, params)
    }

    /// The type of a pointer to a function with this signature.
    pub fn pointer_type(&self) -> CType {
        self.returns
            .function_pointer(self.params.iter().map(Parameter::ty).collect())
    }

    /// A parameter named `name` that points at a function with this signature.
    pub fn as_pointer_param(&self, name: impl Into<String>) -> Parameter {
        Parameter::new(self.pointer_type(), name)
    }
}

impl Commented for FunctionSignature {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for FunctionSignature {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        out.push_line(&format!("{};", self.declaration()));
    }
}

/// A function definition: signature plus a braced body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CFunction {
    comments: Comments,
    signature: FunctionSignature,
    body: Vec<Node>,
}

impl CFunction {
    pub fn new(signature: FunctionSignature) -> Self {
        Self {
            comments: Comments::new(),
            signature,
            body: Vec::new(),
        }
    }

    /// Add a statement to the body.
    pub fn statement(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    /// Add multiple statements to the body.
    pub fn statements<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.body.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a statement in place.
    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.body.push(node.into());
        self
    }

    pub fn signature(&self) -> &FunctionSignature {
        &self.signature
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

impl Commented for CFunction {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for CFunction {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        self.signature.comments().render_to(out);
        out.push_line(&format!("{} {{", self.signature.declaration()));
        out.push_indent();
        self.body.render_to(out);
        out.push_dedent();
        out.push_line("}");
    }
}

#[cfg(test)]
mod tests {
    use cweave_codegen::CodeBuilder;

    use super::*;
    use crate::ast::expr::Expression;

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(node);
        builder.build()
    }

    fn main_signature() -> FunctionSignature {
        FunctionSignature::new(CType::INT, "main")
            .param(Parameter::new(CType::INT, "argc"))
            .param(Parameter::new(CType::CHAR.pointer().pointer(), "argv"))
    }

    #[test]
    fn test_prototype() {
        assert_eq!(
            render(&main_signature()),
            "int main(int argc, char** argv);\n"
        );
        assert_eq!(
            render(&FunctionSignature::new(CType::VOID, "tick")),
            "void tick(void);\n"
        );
    }

    #[test]
    fn test_variadic_prototype() {
        let printf = FunctionSignature::new(CType::INT, "printf")
            .param(Parameter::new(CType::CHAR.const_().pointer(), "fmt"))
            .param(Parameter::variadic());
        assert_eq!(render(&printf), "int printf(const char* fmt, ...);\n");
        assert_eq!(printf.pointer_type().spelling(), "int (*)(const char*, ...)");
    }

    #[test]
    fn test_pointer_type_and_param() {
        let sig = main_signature();
        assert_eq!(sig.pointer_type().spelling(), "int (*)(int, char**)");
        assert_eq!(
            sig.as_pointer_param("entry").declaration(),
            "int (*entry)(int, char**)"
        );
    }

    #[test]
    fn test_function_pointer_parameter() {
        let qsort_cmp = Parameter::function_pointer(
            CType::INT,
            "compar",
            vec![CType::VOID.const_().pointer(), CType::VOID.const_().pointer()],
        );
        let sig = FunctionSignature::new(CType::VOID, "sort").param(qsort_cmp);
        assert_eq!(
            sig.declaration(),
            "void sort(int (*compar)(const void*, const void*))"
        );
    }

    #[test]
    fn test_function_definition() {
        let main = CFunction::new(main_signature())
            .statement(Expression::value(0).unwrap().as_return());
        assert_eq!(
            render(&main),
            "int main(int argc, char** argv) {\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_function_comments_precede_signature() {
        let sig = FunctionSignature::new(CType::VOID, "reset").comment("from signature");
        let mut func = CFunction::new(sig).comment("from function");
        func.push(Expression::invoke("clear", &[]));
        assert_eq!(
            render(&func),
            "// from function\n// from signature\nvoid reset(void) {\n    clear();\n}\n"
        );
    }

    #[test]
    fn test_empty_body() {
        let func = CFunction::new(FunctionSignature::new(CType::VOID, "noop"));
        assert_eq!(render(&func), "void noop(void) {\n}\n");
    }
}
