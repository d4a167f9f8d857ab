use crate::{environment::prelude::ValueType, utils::prelude::SrcSpan};

#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeErrorType {
    VariableRedeclaration { name: String },
    VariableNotDeclared { name: String },
    ConstantReassignment { name: String },
    InvalidAssignmentTarget,
    ArityMismatch { name: String, expected: usize, got: usize },
    NotCallable { type_: ValueType },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    pub error: RuntimeErrorType,
    pub location: SrcSpan
}

impl RuntimeError {
    pub fn details(&self) -> (&'static str, Vec<String>) {
        match &self.error {
            RuntimeErrorType::VariableRedeclaration { name } => (
                "Variable declared multiple times",
                vec![format!("`{name}` is already defined in this scope")]
            ),
            RuntimeErrorType::VariableNotDeclared { name } => (
                "Variable not declared",
                vec![format!("`{name}` does not resolve in any enclosing scope")]
            ),
            RuntimeErrorType::ConstantReassignment { name } => (
                "Reassignment to constant",
                vec![format!("`{name}` was declared as constant")]
            ),
            RuntimeErrorType::InvalidAssignmentTarget => (
                "Invalid assignment target",
                vec!["Only identifiers can be assigned to".to_string()]
            ),
            RuntimeErrorType::ArityMismatch { name, expected, got } => (
                "Wrong number of arguments",
                vec![format!("`{name}` expects {expected} argument(s), got {got}")]
            ),
            RuntimeErrorType::NotCallable { type_ } => (
                "Value is not callable",
                vec![format!("Tried to call a value of type `{type_}`")]
            )
        }
    }
}

pub fn runtime_error<T>(error: RuntimeErrorType, location: SrcSpan) -> Result<T, RuntimeError> {
    Err(RuntimeError { error, location })
}
