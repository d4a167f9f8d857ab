use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::rc::Rc;

use crate::parser::prelude::Statement;

use super::prelude::Environment;

pub const NULL: Value = Value::Null;
pub const TRUE: Value = Value::Boolean { value: true };
pub const FALSE: Value = Value::Boolean { value: false };

pub type NativeFn = fn(Vec<Value>, Rc<RefCell<Environment>>) -> Value;

#[derive(Clone)]
pub enum Value {
    Null,
    Number {
        value: f64
    },
    Boolean {
        value: bool
    },
    Object {
        properties: HashMap<String, Value>
    },
    NativeFunction {
        function: NativeFn
    },
    Function {
        name: String,
        parameters: Vec<String>,
        body: Vec<Statement>,
        env: Rc<RefCell<Environment>>
    },
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Number { value } => write!(f, "{value}"),
            Value::Boolean { value } => write!(f, "{value}"),
            Value::Object { properties } => {
                let properties = properties.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<String>>();

                write!(f, "{{ {} }}", properties.join(", "))
            },
            Value::NativeFunction { .. } => write!(f, "<native fn>"),
            Value::Function { name, .. } => write!(f, "<fn {name}>")
        }
    }
}

// A function declared in the global scope produces an environment that
// contains the function which in turn references the environment, so both
// `Debug` and `PartialEq` must not walk into the captured scope.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Number { value } => f.debug_struct("Number")
                .field("value", value)
                .finish(),
            Value::Boolean { value } => f.debug_struct("Boolean")
                .field("value", value)
                .finish(),
            Value::Object { properties } => f.debug_struct("Object")
                .field("properties", properties)
                .finish(),
            Value::NativeFunction { .. } => write!(f, "NativeFunction"),
            Value::Function { name, parameters, .. } => f.debug_struct("Function")
                .field("name", name)
                .field("parameters", parameters)
                .finish_non_exhaustive()
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (
                Value::Number { value: left },
                Value::Number { value: right }
            ) => left == right,
            (
                Value::Boolean { value: left },
                Value::Boolean { value: right }
            ) => left == right,
            (
                Value::Object { properties: left },
                Value::Object { properties: right }
            ) => left == right,
            (
                Value::NativeFunction { function: left },
                Value::NativeFunction { function: right }
            ) => left == right,
            (
                Value::Function { name, parameters, body, env },
                Value::Function {
                    name: other_name,
                    parameters: other_parameters,
                    body: other_body,
                    env: other_env
                }
            ) => {
                name == other_name
                    && parameters == other_parameters
                    && body == other_body
                    && Rc::ptr_eq(env, other_env)
            },
            _ => false
        }
    }
}

impl Value {
    pub fn _type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Number { .. } => ValueType::Number,
            Self::Boolean { .. } => ValueType::Boolean,
            Self::Object { .. } => ValueType::Object,
            Self::NativeFunction { .. } => ValueType::NativeFunction,
            Self::Function { .. } => ValueType::Function
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Null,
    Number,
    Boolean,
    Object,
    NativeFunction,
    Function,
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value_type = match self {
            Self::Null => "null",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::NativeFunction => "native function",
            Self::Function => "function"
        };

        write!(f, "{value_type}")
    }
}
