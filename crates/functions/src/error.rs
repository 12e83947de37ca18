use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FnError {
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("{0}")]
    Arity(String),

    #[error("{0}")]
    Type(String),
}
