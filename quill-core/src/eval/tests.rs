use super::prelude::{eval, RuntimeError, RuntimeErrorType};
use crate::{
    environment::prelude::{Environment, Value, ValueType, NULL, TRUE},
    parser::prelude::parse_module
};

fn run_src(input: &str) -> Result<Value, RuntimeError> {
    let program = parse_module(input).expect("source should parse");

    eval(&program, Environment::global())
}

fn number(value: f64) -> Value {
    Value::Number { value }
}

#[test]
fn test_empty_program_evaluates_to_null() -> Result<(), RuntimeError> {
    assert_eq!(run_src("")?, NULL);

    Ok(())
}

#[test]
fn test_arithmetic() -> Result<(), RuntimeError> {
    assert_eq!(run_src("1 + 2 * 3;")?, number(7.0));
    assert_eq!(run_src("(1 + 2) * 3;")?, number(9.0));
    assert_eq!(run_src("10 % 3;")?, number(1.0));
    assert_eq!(run_src("7 - 2 - 1;")?, number(4.0));
    assert_eq!(run_src("8 / 2 / 2;")?, number(2.0));

    Ok(())
}

#[test]
fn test_division_by_zero_follows_ieee() -> Result<(), RuntimeError> {
    assert_eq!(run_src("1 / 0;")?, number(f64::INFINITY));

    match run_src("0 / 0;")? {
        Value::Number { value } => assert!(value.is_nan()),
        value => panic!("expected a number, got {value}")
    }

    match run_src("5 % 0;")? {
        Value::Number { value } => assert!(value.is_nan()),
        value => panic!("expected a number, got {value}")
    }

    Ok(())
}

#[test]
fn test_variable_mutation() -> Result<(), RuntimeError> {
    assert_eq!(run_src("let x = 5; x = x + 1; x;")?, number(6.0));

    Ok(())
}

#[test]
fn test_assignment_chain() -> Result<(), RuntimeError> {
    assert_eq!(run_src("let a = 0; let b = 0; a = b = 5; a + b;")?, number(10.0));

    Ok(())
}

#[test]
fn test_declaration_without_initializer_is_null() -> Result<(), RuntimeError> {
    assert_eq!(run_src("let x; x;")?, NULL);

    Ok(())
}

#[test]
fn test_variable_redeclaration() {
    let error = run_src("let a = 1; let a = 2;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::VariableRedeclaration { name: "a".to_string() });
}

#[test]
fn test_shadowing_in_function_scope() -> Result<(), RuntimeError> {
    let result = run_src(r#"
        let x = 1;
        fn f() {
            let x = 2;
            x;
        }
        f() + x;
    "#)?;

    assert_eq!(result, number(3.0));

    Ok(())
}

#[test]
fn test_variable_not_declared() {
    let error = run_src("missing;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::VariableNotDeclared { name: "missing".to_string() });
}

#[test]
fn test_constant_reassignment() {
    let error = run_src("const c = 1; c = 2;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::ConstantReassignment { name: "c".to_string() });
}

#[test]
fn test_invalid_assignment_target() {
    let error = run_src("let o = { a: 1 }; o.a = 2;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::InvalidAssignmentTarget);

    let error = run_src("1 = 2;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::InvalidAssignmentTarget);
}

#[test]
fn test_function_call() -> Result<(), RuntimeError> {
    let result = run_src(r#"
        fn add(a, b) {
            a + b;
        }
        add(1, 2);
    "#)?;

    assert_eq!(result, number(3.0));

    Ok(())
}

#[test]
fn test_function_body_last_value() -> Result<(), RuntimeError> {
    assert_eq!(run_src("fn f() { 1; 2; 3; } f();")?, number(3.0));
    assert_eq!(run_src("fn f() {} f();")?, NULL);

    Ok(())
}

#[test]
fn test_arity_mismatch() {
    let error = run_src("fn add(a, b) { a + b; } add(1);")
        .expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::ArityMismatch {
        name: "add".to_string(),
        expected: 2,
        got: 1
    });
}

#[test]
fn test_not_callable() {
    let error = run_src("let n = 1; n(2);").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::NotCallable { type_: ValueType::Number });
}

#[test]
fn test_function_declaration_is_constant() {
    let error = run_src("fn f() {} f = 1;").expect_err("expected a runtime error");

    assert_eq!(error.error, RuntimeErrorType::ConstantReassignment { name: "f".to_string() });
}

#[test]
fn test_closure_captures_declaration_scope() -> Result<(), RuntimeError> {
    let result = run_src(r#"
        fn outer(x) {
            fn inner() {
                x + 1;
            }
            inner;
        }
        let f = outer(41);
        f();
    "#)?;

    assert_eq!(result, number(42.0));

    Ok(())
}

#[test]
fn test_closure_mutates_captured_scope() -> Result<(), RuntimeError> {
    let result = run_src(r#"
        fn counter() {
            let n = 0;
            fn bump() {
                n = n + 1;
                n;
            }
            bump;
        }
        const bump = counter();
        bump();
        bump();
    "#)?;

    assert_eq!(result, number(2.0));

    Ok(())
}

#[test]
fn test_object_literals() -> Result<(), RuntimeError> {
    assert_eq!(run_src("const o = { a: 1, b: 2 }; o.a + o.b;")?, number(3.0));

    // shorthand reads from the enclosing scope
    assert_eq!(run_src("let a = 5; const o = { a }; o.a;")?, number(5.0));

    Ok(())
}

#[test]
fn test_computed_member_access() -> Result<(), RuntimeError> {
    let result = run_src(r#"
        fn key() {
            1;
        }
        const o = { nested: { b: 7 } };
        o.nested[key()] + 0;
    "#)?;

    // `1` is not a key of the nested object, so the access reads null and
    // the addition degrades to null as well
    assert_eq!(run_src("const o = { a: 1 }; o.missing;")?, NULL);
    assert_eq!(result, NULL);

    Ok(())
}

#[test]
fn test_member_access_on_non_object_is_null() -> Result<(), RuntimeError> {
    assert_eq!(run_src("let n = 1; n.anything;")?, NULL);

    Ok(())
}

#[test]
fn test_binary_on_non_numbers_is_null() -> Result<(), RuntimeError> {
    assert_eq!(run_src("const o = { a: 1 }; o + 1;")?, NULL);
    assert_eq!(run_src("true + 1;")?, NULL);

    Ok(())
}

#[test]
fn test_builtin_globals() -> Result<(), RuntimeError> {
    assert_eq!(run_src("true;")?, TRUE);
    assert_eq!(run_src("null;")?, NULL);
    assert_eq!(run_src("false;")?, Value::Boolean { value: false });
    assert_eq!(run_src("print(1, 2);")?, NULL);

    match run_src("time();")? {
        Value::Number { value } => assert!(value > 0.0),
        value => panic!("expected a number, got {value}")
    }

    Ok(())
}

#[test]
fn test_program_reuse_across_environments() -> Result<(), RuntimeError> {
    let program = parse_module("let x = 1; x = x + 1; x;").expect("source should parse");

    let first = eval(&program, Environment::global())?;
    let second = eval(&program, Environment::global())?;

    // each run declares its own `x`, nothing leaks between environments
    assert_eq!(first, number(2.0));
    assert_eq!(second, number(2.0));

    Ok(())
}
