use thiserror::Error;

/// Errors that stop the command-line driver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Unknown flag, missing argument, etc.
    #[error("invalid arguments: {0}")]
    Options(#[from] getopts::Fail),

    #[error("invalid value for --{name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("unknown fill type {0:?} (expected random, alternating, all or empty)")]
    UnknownFill(String),
}
