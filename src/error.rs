use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("{0}")]
    Configuration(String),
    #[error("{command}: {message}")]
    Inspection { command: String, message: String },
    #[error("delivery to {destination} failed: {message}")]
    Delivery {
        destination: String,
        message: String,
    },
}

impl HookError {
    pub fn inspection(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Inspection {
            command: command.into(),
            message: message.into(),
        }
    }

    pub fn delivery(destination: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delivery {
            destination: destination.into(),
            message: message.into(),
        }
    }
}
