use super::prelude::{
    parse_module, Expression, ParseError, ParseErrorType, Statement
};
use crate::lexer::prelude::Token;

#[test]
fn test_operator_precedence() -> Result<(), ParseError> {
    let program = parse_module("let x = 1 + 2 * 3;")?;

    assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");

    let program = parse_module("let x = (1 + 2) * 3 - 4 % 5;")?;

    assert_eq!(program.to_string(), "let x = (((1 + 2) * 3) - (4 % 5));");

    Ok(())
}

#[test]
fn test_var_declarations() -> Result<(), ParseError> {
    let program = parse_module("let x; let y = 10; const z = x;")?;

    assert_eq!(program.body.len(), 3);
    assert_eq!(program.to_string(), "let x; let y = 10; const z = x;");

    Ok(())
}

#[test]
fn test_const_requires_initializer() {
    let error = parse_module("const c;").expect_err("expected a parse error");

    assert_eq!(error.error, ParseErrorType::MissingConstInitializer);
}

#[test]
fn test_declaration_requires_semicolon() {
    let error = parse_module("let x = 1").expect_err("expected a parse error");

    assert_eq!(error.error, ParseErrorType::MissingSemicolon);
}

#[test]
fn test_expression_statement_semicolon_optional() -> Result<(), ParseError> {
    let with = parse_module("1 + 2;")?;
    let without = parse_module("1 + 2")?;

    assert_eq!(with.to_string(), without.to_string());

    Ok(())
}

#[test]
fn test_object_literals() -> Result<(), ParseError> {
    let program = parse_module("const o = { a: 1, b, c: 2 + 3 };")?;

    assert_eq!(program.to_string(), "const o = { a: 1, b, c: (2 + 3) };");

    // trailing comma and empty literal
    let program = parse_module("const o = { a: 1, }; const e = {};")?;

    assert_eq!(program.to_string(), "const o = { a: 1 }; const e = {  };");

    Ok(())
}

#[test]
fn test_member_and_call_chains() -> Result<(), ParseError> {
    let program = parse_module("foo.bar[0](1, 2)(3);")?;

    assert_eq!(program.to_string(), "foo.bar[0](1, 2)(3);");

    Ok(())
}

#[test]
fn test_function_declaration() -> Result<(), ParseError> {
    let program = parse_module("fn add(a, b) { a + b; }")?;

    assert_eq!(program.to_string(), "fn add(a, b) { (a + b); }");

    let program = parse_module("fn nullary() {}")?;

    assert_eq!(program.to_string(), "fn nullary() {  }");

    Ok(())
}

#[test]
fn test_assignment_is_right_associative() -> Result<(), ParseError> {
    let program = parse_module("a = b = c;")?;

    match &program.body[0] {
        Statement::Expression(Expression::Assignment(assignment)) => {
            assert!(matches!(assignment.assignee.as_ref(), Expression::Identifier(_)));
            assert!(matches!(assignment.value.as_ref(), Expression::Assignment(_)));
        },
        statement => panic!("unexpected statement: {statement}")
    }

    Ok(())
}

#[test]
fn test_unexpected_token() {
    let error = parse_module("let x = ;").expect_err("expected a parse error");

    assert!(matches!(
        error.error,
        ParseErrorType::UnexpectedToken { token: Token::Semicolon, .. }
    ));
}

#[test]
fn test_unterminated_function_body() {
    let error = parse_module("fn f() { 1 + 1;").expect_err("expected a parse error");

    assert_eq!(error.error, ParseErrorType::UnexpectedEof);
}

#[test]
fn test_lexical_error_is_surfaced() {
    let error = parse_module("let x = 1 ? 2;").expect_err("expected a parse error");

    assert!(matches!(error.error, ParseErrorType::LexError { .. }));
}

#[test]
fn test_empty_module() -> Result<(), ParseError> {
    let program = parse_module("")?;

    assert!(program.body.is_empty());

    Ok(())
}
