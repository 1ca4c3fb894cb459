use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pif operations
#[derive(Error, Diagnostic, Debug)]
pub enum PifError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pif::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pif::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pif::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(pif::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(pif::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PifError {
    /// Shorthand for a parse error without help text.
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        PifError::Parse {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PifError>;
