//! Snapshot tests for whole generated files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use cweave_c::{
    AssignOp, CFunction, CType, Commented, CompilationUnit, ControlFlow, Define, Enum, Expression,
    Field, FunctionSignature, Ifndef, Include, Indent, Node, Parameter, StructType, SwitchCase,
    Typedef,
};

fn int(n: i64) -> Expression {
    Expression::value(n).expect("integer literal")
}

fn string(s: &str) -> Expression {
    Expression::value(s).expect("string literal")
}

fn hello_world() -> CompilationUnit {
    let main = FunctionSignature::new(CType::INT, "main")
        .param(Parameter::new(CType::INT, "argc"))
        .param(Parameter::new(CType::CHAR.pointer().pointer(), "argv"));

    CompilationUnit::new()
        .item(Include::system("stdio.h"))
        .item(CFunction::new(main).statement(int(0).as_return()))
}

#[test]
fn test_minimal_main() {
    insta::assert_snapshot!(hello_world().render(), @r"
    #include <stdio.h>
    int main(int argc, char** argv) {
        return 0;
    }
    ");
}

#[test]
fn test_header_with_guard() {
    let point = StructType::new()
        .field(Field::new(CType::DOUBLE, "x").comment("horizontal"))
        .field(Field::new(CType::DOUBLE, "y").comment("vertical"));

    let distance = FunctionSignature::new(CType::DOUBLE, "point_distance")
        .comment("Euclidean distance between two points.")
        .param(Parameter::new(CType::named("Point").const_().pointer(), "a"))
        .param(Parameter::new(CType::named("Point").const_().pointer(), "b"));

    let guard = Ifndef::for_header("include/point.h").statements([
        Node::from(Include::system("stddef.h")),
        Node::Blank,
        Define::new("POINT_DIMENSIONS").value("2").into(),
        Node::Blank,
        Typedef::new(point, "Point").into(),
        Node::Blank,
        Enum::new("Quadrant")
            .values(["Q_FIRST", "Q_SECOND", "Q_THIRD", "Q_FOURTH"])
            .into(),
        Node::Blank,
        distance.into(),
    ]);

    let unit = CompilationUnit::new().comment("Generated file. Do not edit.").item(guard);

    insta::assert_snapshot!(unit.render(), @r"
    // Generated file. Do not edit.
    #ifndef POINT_H
    #define POINT_H
    #include <stddef.h>

    #define POINT_DIMENSIONS 2

    typedef struct {
        // horizontal
        double x;
        // vertical
        double y;
    } Point;

    enum Quadrant {
        Q_FIRST = 0,
        Q_SECOND = 1,
        Q_THIRD = 2,
        Q_FOURTH = 3
    };

    // Euclidean distance between two points.
    double point_distance(const Point* a, const Point* b);
    #endif
    ");
}

#[test]
fn test_function_with_control_flow() {
    let i = Expression::ident("i");
    let n = Expression::ident("n");
    let total = Expression::ident("total");
    let values = Expression::ident("values");

    let sum = FunctionSignature::new(CType::LONG, "sum")
        .param(Parameter::new(CType::INT.const_().pointer(), "values"))
        .param(Parameter::new(CType::SIZE, "n"));

    let init = Expression::raw(Field::new(CType::SIZE, "i").init(int(0)).declaration());

    let body = CFunction::new(sum)
        .comment("Add up the non-negative entries.")
        .statement(Field::new(CType::LONG, "total").init(int(0)))
        .statement(
            ControlFlow::for_(&init, &i.lt(&n), &i.post_inc())
                .statement(
                    ControlFlow::if_(&values.index(&i).lt(&int(0)))
                        .statement(Node::Continue),
                )
                .statement(values.index(&i).assign_op(&total, AssignOp::Add)),
        )
        .statement(total.as_return());

    insta::assert_snapshot!(CompilationUnit::new().item(body).render(), @r"
    // Add up the non-negative entries.
    long sum(const int* values, size_t n) {
        long total = 0;
        for(size_t i = 0; i < n; i++) {
            if(values[i] < 0) {
                continue;
            }
            total += values[i];
        }
        return total;
    }
    ");
}

#[test]
fn test_switch_dispatch() {
    let op = Expression::ident("op");
    let result = Expression::ident("result");

    let switch = ControlFlow::switch(&op)
        .statement(
            SwitchCase::case(Expression::ident("OP_ADD"))
                .statement(Expression::ident("a").add(&Expression::ident("b")).assign_to(&result))
                .statement(Node::Break),
        )
        .statement(SwitchCase::case(Expression::ident("OP_NOP")))
        .statement(
            SwitchCase::default_case()
                .statement(Expression::invoke("fprintf", &[Expression::ident("stderr"), string("bad op\n")]))
                .statement(int(-1).assign_to(&result)),
        );

    let eval = CFunction::new(
        FunctionSignature::new(CType::INT, "eval")
            .param(Parameter::new(CType::named("Op"), "op"))
            .param(Parameter::new(CType::INT, "a"))
            .param(Parameter::new(CType::INT, "b")),
    )
    .statement(Field::new(CType::INT, "result").init(int(0)))
    .statement(switch)
    .statement(result.as_return());

    insta::assert_snapshot!(CompilationUnit::new().item(eval).render(), @r#"
    int eval(Op op, int a, int b) {
        int result = 0;
        switch(op) {
            case OP_ADD:
                result = a + b;
                break;
            case OP_NOP:
            default:
                fprintf(stderr, "bad op\n");
                result = -1;
        }
        return result;
    }
    "#);
}

#[test]
fn test_callbacks_and_do_while() {
    let handler = FunctionSignature::new(CType::VOID, "on_event")
        .param(Parameter::new(CType::INT, "code"))
        .param(Parameter::new(CType::VOID.pointer(), "ctx"));

    let pump = FunctionSignature::new(CType::INT, "pump")
        .param(handler.as_pointer_param("cb"))
        .param(Parameter::new(CType::VOID.pointer(), "ctx"));

    let code = Expression::ident("code");
    let body = CFunction::new(pump)
        .statement(Field::new(CType::INT, "code"))
        .statement(
            ControlFlow::do_while(&code.ne(&int(0)))
                .statement(Expression::invoke("next_event", &[]).assign_to(&code))
                .statement(Expression::ident("cb").call(&[code.clone(), Expression::ident("ctx")])),
        )
        .statement(int(0).as_return());

    let unit = CompilationUnit::new()
        .item(Typedef::new(handler.pointer_type(), "handler_t"))
        .item(body);

    insta::assert_snapshot!(unit.render_with(Indent::Spaces(2)), @r"
    typedef void (*handler_t)(int, void*);
    int pump(void (*cb)(int, void*), void* ctx) {
      int code;
      do {
        code = next_event();
        cb(code, ctx);
      } while(code != 0);
      return 0;
    }
    ");
}
