use thiserror::Error;

/// Errors that can occur while parsing or evaluating a process expression.
///
/// These never escape trace generation: the linear executor turns every one of
/// them into a numeric `0` for the affected cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    #[error("Expression nests deeper than {0} levels")]
    TooDeeplyNested(usize),

    #[error("Expression is longer than {0} tokens")]
    TooManyTokens(usize),

    #[error("Variable '{0}' is not bound in the current state")]
    UnknownVariable(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Expression evaluated to a non-finite number")]
    NonFiniteResult,
}

/// Errors that can occur while loading or saving a diagram document.
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Failed to parse diagram JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not access diagram file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when converting a custom host format into a `FlowGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors reported by a `Summarizer` implementation.
#[derive(Error, Debug, Clone)]
pub enum SummaryError {
    #[error("Summary backend is not available: {0}")]
    Unavailable(String),

    #[error("Summary generation failed: {0}")]
    Failed(String),
}
