//! Control flow blocks and switch cases.

use cweave_codegen::{Renderable, Sink};

use super::{
    comments::{Commented, Comments},
    expr::Expression,
    node::Node,
};

/// A braced control-flow construct: `if`, loops, `switch`, bare blocks.
///
/// ```
/// use cweave_c::{CodeBuilder, ControlFlow, Expression};
///
/// let i = Expression::ident("i");
/// let done = Expression::ident("done");
/// let block = ControlFlow::do_while(&done.not()).statement(i.post_inc());
///
/// let mut out = CodeBuilder::default();
/// out.emit(&block);
/// assert_eq!(out.build(), "do {\n    i++;\n} while(!done);\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlFlow {
    comments: Comments,
    preamble: String,
    body: Vec<Node>,
    suffix: Option<String>,
}

impl ControlFlow {
    fn with_preamble(preamble: String) -> Self {
        Self {
            comments: Comments::new(),
            preamble,
            body: Vec::new(),
            suffix: None,
        }
    }

    /// `if(cond) { ... }`
    pub fn if_(cond: &Expression) -> Self {
        Self::with_preamble(format!("if({cond})"))
    }

    /// `else if(cond) { ... }`
    pub fn else_if(cond: &Expression) -> Self {
        Self::with_preamble(format!("else if({cond})"))
    }

    /// `else { ... }`
    pub fn else_() -> Self {
        Self::with_preamble("else".to_string())
    }

    /// `while(cond) { ... }`
    pub fn while_(cond: &Expression) -> Self {
        Self::with_preamble(format!("while({cond})"))
    }

    /// `do { ... } while(cond);`
    pub fn do_while(cond: &Expression) -> Self {
        Self {
            suffix: Some(format!("while({cond});")),
            ..Self::with_preamble("do".to_string())
        }
    }

    /// `for(init; cond; step) { ... }`
    pub fn for_(init: &Expression, cond: &Expression, step: &Expression) -> Self {
        Self::with_preamble(format!("for({init}; {cond}; {step})"))
    }

    /// `for(;;) { ... }`
    pub fn forever() -> Self {
        Self::with_preamble("for(;;)".to_string())
    }

    /// `switch(expr) { ... }`, with [`SwitchCase`] children.
    pub fn switch(expr: &Expression) -> Self {
        Self::with_preamble(format!("switch({expr})"))
    }

    /// A bare scope: `{ ... }`.
    pub fn block() -> Self {
        Self::with_preamble(String::new())
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

    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

impl Commented for ControlFlow {
    fn comments(&self) -> &Comments {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Comments {
        &mut self.comments
    }
}

impl Renderable for ControlFlow {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        self.comments.render_to(out);
        if self.preamble.is_empty() {
            out.push_line("{");
        } else {
            out.push_line(&format!("{} {{", self.preamble));
        }
        out.push_indent();
        self.body.render_to(out);
        out.push_dedent();
        match &self.suffix {
            Some(suffix) => out.push_line(&format!("}} {suffix}")),
            None => out.push_line("}"),
        }
    }
}

/// One arm of a `switch`: `case X:` or `default:`, with an indented,
/// unbraced body. Fallthrough is the caller's business: add a
/// [`Node::Break`] where one is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchCase {
    case: Option<Expression>,
    body: Vec<Node>,
}

impl SwitchCase {
    /// `case value:`
    pub fn case(value: Expression) -> Self {
        Self {
            case: Some(value),
            body: Vec::new(),
        }
    }

    /// `default:`
    pub fn default_case() -> Self {
        Self {
            case: None,
            body: Vec::new(),
        }
    }

    pub fn statement(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    pub fn statements<N: Into<Node>>(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.body.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn push(&mut self, node: impl Into<Node>) -> &mut Self {
        self.body.push(node.into());
        self
    }

    pub fn is_default(&self) -> bool {
        self.case.is_none()
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

impl Renderable for SwitchCase {
    fn render_to<S: Sink + ?Sized>(&self, out: &mut S) {
        match &self.case {
            Some(value) => out.push_line(&format!("case {value}:")),
            None => out.push_line("default:"),
        }
        out.push_indent();
        self.body.render_to(out);
        out.push_dedent();
    }
}

#[cfg(test)]
mod tests {
    use cweave_codegen::CodeBuilder;

    use super::*;
    use crate::ast::{structs::Field, types::CType};

    fn render(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::default();
        builder.emit(node);
        builder.build()
    }

    fn ident(name: &str) -> Expression {
        Expression::ident(name)
    }

    fn int(n: i64) -> Expression {
        Expression::value(n).unwrap()
    }

    #[test]
    fn test_if_block() {
        let block = ControlFlow::if_(&ident("x").gt(&int(0))).statement(int(1).as_return());
        assert_eq!(render(&block), "if(x > 0) {\n    return 1;\n}\n");
    }

    #[test]
    fn test_else_chain_renders_as_siblings() {
        let cond = ident("ok");
        let nodes: Vec<Node> = vec![
            ControlFlow::if_(&cond).statement(int(0).as_return()).into(),
            ControlFlow::else_if(&cond.not()).statement(int(1).as_return()).into(),
            ControlFlow::else_().statement(Node::return_void()).into(),
        ];
        assert_eq!(
            render(&nodes),
            "if(ok) {\n    return 0;\n}\nelse if(!ok) {\n    return 1;\n}\nelse {\n    return;\n}\n"
        );
    }

    #[test]
    fn test_for_loop() {
        let i = ident("i");
        let init = int(0).assign_to(&i);
        let cond = i.lt(&ident("n"));
        let step = i.post_inc();
        let block = ControlFlow::for_(&init, &cond, &step)
            .statement(Expression::invoke("visit", &[i.clone()]));
        assert_eq!(
            render(&block),
            "for(i = 0; i < n; i++) {\n    visit(i);\n}\n"
        );
    }

    #[test]
    fn test_while_and_forever() {
        let block = ControlFlow::while_(&ident("running")).statement(Node::Continue);
        assert_eq!(render(&block), "while(running) {\n    continue;\n}\n");
        assert_eq!(render(&ControlFlow::forever()), "for(;;) {\n}\n");
    }

    #[test]
    fn test_do_while_suffix_follows_brace() {
        let block = ControlFlow::do_while(&ident("more")).statement(ident("step").call(&[]));
        assert_eq!(render(&block), "do {\n    step();\n} while(more);\n");
    }

    #[test]
    fn test_bare_block_with_comment() {
        let block = ControlFlow::block()
            .comment("scratch scope")
            .statement(Field::new(CType::INT, "tmp").init(int(0)));
        assert_eq!(
            render(&block),
            "// scratch scope\n{\n    int tmp = 0;\n}\n"
        );
    }

    #[test]
    fn test_switch_cases_are_indented_not_braced() {
        let switch = ControlFlow::switch(&ident("c"))
            .statement(
                SwitchCase::case(Expression::raw("'a'"))
                    .statement(Expression::invoke("on_a", &[]))
                    .statement(Node::Break),
            )
            .statement(SwitchCase::case(Expression::raw("'b'")))
            .statement(SwitchCase::default_case().statement(Node::Break));
        assert_eq!(
            render(&switch),
            "switch(c) {\n    \
             case 'a':\n        \
             on_a();\n        \
             break;\n    \
             case 'b':\n    \
             default:\n        \
             break;\n\
             }\n"
        );
    }

    #[test]
    fn test_nested_blocks_restore_indent() {
        let inner = ControlFlow::if_(&ident("b")).statement(ident("x").post_inc());
        let outer = ControlFlow::if_(&ident("a"))
            .statement(inner)
            .statement(ident("y").post_inc());
        let mut builder = CodeBuilder::default();
        builder.emit(&outer);
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(
            builder.build(),
            "if(a) {\n    if(b) {\n        x++;\n    }\n    y++;\n}\n"
        );
    }
}
