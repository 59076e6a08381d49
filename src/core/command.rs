use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    Store {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // console arguments that could not be parsed before reaching the catalog
    Input {
        message: String,
    },
}

impl CommandError {
    pub fn input(message: &str) -> CommandError {
        CommandError::Input { message: message.to_string() }
    }
}

pub trait Command<Request, Response> {
    fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::StoreUnavailable { message, reason_code } => {
                CommandError::Store { message, reason_code }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::InvalidInput { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Store { message, reason_code: Some(reason) } => {
                write!(f, "{} ({})", message, reason)
            }
            CommandError::Store { message, reason_code: None } => {
                write!(f, "{}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CommandError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::Input { message } => {
                write!(f, "{}", message)
            }
        }
    }
}
