//! Error types for the function-control helpers.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("`{0}` is not an own method of the bound context")]
    NotAMethod(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("timers need a running tokio runtime")]
    NoRuntime,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InheritError {
    #[error("`{child}` cannot inherit from `{parent}`: the prototype chain would loop")]
    Cycle { child: String, parent: String },
}
