use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackError>;

/// Failure of an invocation of the external docker binary.
///
/// A binary that could not be spawned and one that exited non-zero look the
/// same to callers: the message is whatever the process wrote to stderr,
/// verbatim (and therefore empty for a spawn failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("{stderr}")]
    CommandFailed { stderr: String },
}

impl StackError {
    /// Captured stderr of the failing invocation.
    pub fn stderr(&self) -> &str {
        match self {
            StackError::CommandFailed { stderr } => stderr,
        }
    }
}
