#[cfg(test)]
mod tests;

pub mod error;

pub mod prelude {
    pub use super::error::*;
    pub use super::{eval, run, run_from_stream};
}

use std::{cell::RefCell, collections::HashMap, path::PathBuf, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::{Environment, Value, NULL},
    parser::prelude::{
        parse_module, parse_module_from_stream, Assignment, Binary, BinaryOperator, Call,
        Expression, FunctionDeclaration, Member, MemberProperty, ObjectLiteral, Program,
        Statement, VarDeclaration
    },
    utils::prelude::Error
};

use error::{runtime_error, RuntimeError, RuntimeErrorType};

pub fn eval(program: &Program, env: Rc<RefCell<Environment>>) -> Result<Value, RuntimeError> {
    let mut result = NULL;

    for statement in &program.body {
        result = eval_statement(statement, env.clone())?;
    }

    Ok(result)
}

fn eval_statement(
    statement: &Statement,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    match statement {
        Statement::VarDeclaration(declaration) => eval_var_declaration(declaration, env),
        Statement::FunctionDeclaration(declaration) => eval_function_declaration(declaration, env),
        Statement::Expression(expression) => eval_expression(expression, env)
    }
}

fn eval_var_declaration(
    declaration: &VarDeclaration,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    let value = match &declaration.value {
        Some(expression) => eval_expression(expression, env.clone())?,
        None => NULL
    };

    env.borrow_mut()
        .declare(declaration.name.clone(), value, declaration.constant)
        .map_err(|error| RuntimeError { error, location: declaration.location })
}

fn eval_function_declaration(
    declaration: &FunctionDeclaration,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    let function = Value::Function {
        name: declaration.name.clone(),
        parameters: declaration.parameters.clone(),
        body: declaration.body.clone(),
        env: env.clone()
    };

    // function bindings are not reassignable
    env.borrow_mut()
        .declare(declaration.name.clone(), function, true)
        .map_err(|error| RuntimeError { error, location: declaration.location })
}

fn eval_expression(
    expression: &Expression,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    match expression {
        Expression::NumberLiteral(literal) => Ok(Value::Number { value: literal.value }),
        Expression::Identifier(identifier) => env.borrow()
            .lookup(&identifier.name)
            .map_err(|error| RuntimeError { error, location: identifier.location }),
        Expression::Assignment(assignment) => eval_assignment(assignment, env),
        Expression::Binary(binary) => eval_binary(binary, env),
        Expression::Member(member) => eval_member(member, env),
        Expression::Call(call) => eval_call(call, env),
        Expression::ObjectLiteral(literal) => eval_object_literal(literal, env)
    }
}

fn eval_assignment(
    assignment: &Assignment,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    let name = match assignment.assignee.as_ref() {
        Expression::Identifier(identifier) => identifier.name.clone(),
        _ => return runtime_error(
            RuntimeErrorType::InvalidAssignmentTarget,
            assignment.assignee.location()
        )
    };

    let value = eval_expression(&assignment.value, env.clone())?;

    env.borrow_mut()
        .assign(&name, value)
        .map_err(|error| RuntimeError { error, location: assignment.location })
}

fn eval_binary(binary: &Binary, env: Rc<RefCell<Environment>>) -> Result<Value, RuntimeError> {
    let left = eval_expression(&binary.left, env.clone())?;
    let right = eval_expression(&binary.right, env)?;

    match (left, right) {
        (
            Value::Number { value: left },
            Value::Number { value: right }
        ) => {
            // division and modulo by zero follow IEEE-754, giving inf or NaN
            let value = match binary.operator {
                BinaryOperator::Add => left + right,
                BinaryOperator::Subtract => left - right,
                BinaryOperator::Multiply => left * right,
                BinaryOperator::Divide => left / right,
                BinaryOperator::Modulo => left % right
            };

            Ok(Value::Number { value })
        },
        // arithmetic over anything non-numeric degrades to null
        _ => Ok(NULL)
    }
}

fn eval_object_literal(
    literal: &ObjectLiteral,
    env: Rc<RefCell<Environment>>
) -> Result<Value, RuntimeError> {
    let mut properties = HashMap::new();

    for property in &literal.properties {
        let value = match &property.value {
            Some(expression) => eval_expression(expression, env.clone())?,
            // { key } shorthand reads the variable of the same name from
            // the enclosing scope
            None => env.borrow()
                .lookup(&property.key)
                .map_err(|error| RuntimeError { error, location: property.location })?
        };

        properties.insert(property.key.clone(), value);
    }

    Ok(Value::Object { properties })
}

fn eval_member(member: &Member, env: Rc<RefCell<Environment>>) -> Result<Value, RuntimeError> {
    let object = eval_expression(&member.object, env.clone())?;

    let key = match &member.property {
        MemberProperty::Ident(name) => name.clone(),
        MemberProperty::Computed(expression) => {
            eval_expression(expression, env)?.to_string()
        }
    };

    match object {
        Value::Object { properties } => {
            Ok(properties.get(&key).cloned().unwrap_or(NULL))
        },
        // property access never fails, missing keys and non-object bases
        // both read as null
        _ => Ok(NULL)
    }
}

fn eval_call(call: &Call, env: Rc<RefCell<Environment>>) -> Result<Value, RuntimeError> {
    let caller = eval_expression(&call.caller, env.clone())?;

    let mut args = Vec::with_capacity(call.arguments.len());

    for argument in &call.arguments {
        args.push(eval_expression(argument, env.clone())?);
    }

    match caller {
        Value::NativeFunction { function } => Ok(function(args, env)),
        Value::Function { name, parameters, body, env: declaration_env } => {
            if args.len() != parameters.len() {
                return runtime_error(
                    RuntimeErrorType::ArityMismatch {
                        name,
                        expected: parameters.len(),
                        got: args.len()
                    },
                    call.location
                );
            }

            // the activation scope hangs off the declaration environment,
            // not the call site, which is what makes closures lexical
            let mut scope = Environment::with_parent(declaration_env);

            for (parameter, arg) in parameters.iter().zip(args) {
                scope.declare(parameter.clone(), arg, false)
                    .map_err(|error| RuntimeError { error, location: call.location })?;
            }

            let scope = Rc::new(RefCell::new(scope));

            let mut result = NULL;

            for statement in &body {
                result = eval_statement(statement, scope.clone())?;
            }

            Ok(result)
        },
        value => runtime_error(
            RuntimeErrorType::NotCallable { type_: value._type() },
            call.location
        )
    }
}

pub fn run(path: PathBuf) -> Result<Value, Error> {
    let src = match std::fs::read_to_string(path.clone()) {
        Ok(src) => src,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    let program = match parse_module(&src) {
        Ok(program) => program,
        Err(err) => {
            let error = Error::Parse { path, src, error: err };
            return Err(error)
        }
    };

    let env = Environment::global();

    eval(&program, env)
        .map_err(|error| Error::Runtime { path, src, error })
}

pub fn run_from_stream(path: PathBuf) -> Result<Value, Error> {
    let file = match std::fs::File::open(path.clone()) {
        Ok(file) => file,
        Err(err) => {
            let error = Error::StdIo { err: err.kind() };
            return Err(error)
        }
    };

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);
    let stream = reader.chars()
        .map(|c| {
            let c = c.unwrap();
            src.push(c);
            c
        });

    let program = match parse_module_from_stream(stream) {
        Ok(program) => program,
        Err(err) => {
            let error = Error::Parse { path, src, error: err };
            return Err(error)
        }
    };

    let env = Environment::global();

    eval(&program, env)
        .map_err(|error| Error::Runtime { path, src, error })
}
