use thiserror::Error;

/// Errors that stop a session. Rule problems such as a bad action choice or an
/// illegal hit are reported through display events instead.
#[derive(Debug, Error)]
pub enum BlackjackGameError {
    #[error("invalid configuration: {message}")]
    Config { message: String },
    #[error("i/o collaborator failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed while waiting for a response")]
    InputClosed,
}

impl BlackjackGameError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        BlackjackGameError::Config {
            message: message.into(),
        }
    }
}
