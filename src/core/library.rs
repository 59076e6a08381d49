use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub const STATUS_IN_STOCK: &str = "в наличии";
pub const STATUS_CHECKED_OUT: &str = "выдана";

#[derive(Debug)]
pub enum LibraryError {
    // The backing store could not be read or written: missing file, I/O
    // failure or content that does not parse as a book collection.
    StoreUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    InvalidInput {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::StoreUnavailable { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn invalid_input(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::InvalidInput { message: message.to_string(), reason_code }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::StoreUnavailable { message, .. } => { message.as_str() }
            LibraryError::NotFound { message } => { message.as_str() }
            LibraryError::InvalidInput { message, .. } => { message.as_str() }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::unavailable(
            format!("store io {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::unavailable(
            format!("store json parsing {}", err).as_str(), Some("corrupt".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::StoreUnavailable { message, reason_code } => {
                match reason_code {
                    Some(reason) => write!(f, "{} ({})", message, reason),
                    None => write!(f, "{}", message),
                }
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::InvalidInput { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repositories.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "в наличии", alias = "InStock")]
    InStock,
    #[serde(rename = "выдана", alias = "CheckedOut")]
    CheckedOut,
}

impl BookStatus {
    pub fn toggled(&self) -> BookStatus {
        match self {
            BookStatus::InStock => BookStatus::CheckedOut,
            BookStatus::CheckedOut => BookStatus::InStock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::InStock => STATUS_IN_STOCK,
            BookStatus::CheckedOut => STATUS_CHECKED_OUT,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
