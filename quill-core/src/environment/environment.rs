use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::eval::prelude::RuntimeErrorType;

use super::prelude::{Value, FALSE, NULL, TRUE};

#[derive(Default, Debug, Clone)]
pub struct Environment {
    parent: Option<Rc<RefCell<Environment>>>,
    store: HashMap<String, Value>,
    constants: HashSet<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            parent: None,
            store: HashMap::new(),
            constants: HashSet::new()
        }
    }

    pub fn with_parent(parent: Rc<RefCell<Environment>>) -> Self {
        Self {
            parent: Some(parent),
            store: HashMap::new(),
            constants: HashSet::new()
        }
    }

    /// The root scope every program runs against, with the builtin
    /// constants and native functions already declared.
    pub fn global() -> Rc<RefCell<Self>> {
        let mut env = Environment::new();

        env.declare("true".to_string(), TRUE, true)
            .expect("declare builtin");
        env.declare("false".to_string(), FALSE, true)
            .expect("declare builtin");
        env.declare("null".to_string(), NULL, true)
            .expect("declare builtin");

        env.declare(
            "print".to_string(),
            Value::NativeFunction { function: native_print },
            true
        ).expect("declare builtin");
        env.declare(
            "time".to_string(),
            Value::NativeFunction { function: native_time },
            true
        ).expect("declare builtin");

        Rc::new(RefCell::new(env))
    }

    /// Binds `name` in this scope. Shadowing a parent binding is fine,
    /// redeclaring within the same scope is not.
    pub fn declare(
        &mut self,
        name: String,
        value: Value,
        constant: bool
    ) -> Result<Value, RuntimeErrorType> {
        if self.store.contains_key(&name) {
            return Err(RuntimeErrorType::VariableRedeclaration { name });
        }

        self.store.insert(name.clone(), value.clone());

        if constant {
            self.constants.insert(name);
        }

        Ok(value)
    }

    /// Overwrites the binding in the nearest enclosing scope that
    /// declares `name`. Never creates a new binding.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<Value, RuntimeErrorType> {
        if self.store.contains_key(name) {
            if self.constants.contains(name) {
                return Err(RuntimeErrorType::ConstantReassignment {
                    name: name.to_string()
                });
            }

            self.store.insert(name.to_string(), value.clone());

            return Ok(value);
        }

        match &self.parent {
            Some(parent) => parent.borrow_mut().assign(name, value),
            None => Err(RuntimeErrorType::VariableNotDeclared {
                name: name.to_string()
            })
        }
    }

    pub fn lookup(&self, name: &str) -> Result<Value, RuntimeErrorType> {
        if let Some(value) = self.store.get(name) {
            return Ok(value.clone());
        }

        match &self.parent {
            Some(parent) => parent.borrow().lookup(name),
            None => Err(RuntimeErrorType::VariableNotDeclared {
                name: name.to_string()
            })
        }
    }
}

fn native_print(args: Vec<Value>, _env: Rc<RefCell<Environment>>) -> Value {
    let line = args.iter()
        .map(|value| format!("{value}"))
        .collect::<Vec<String>>();

    println!("{}", line.join(" "));

    NULL
}

fn native_time(_args: Vec<Value>, _env: Rc<RefCell<Environment>>) -> Value {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    Value::Number { value: now.as_millis() as f64 }
}
