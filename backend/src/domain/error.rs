//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them to status
//! codes and response bodies; nothing here knows about HTTP.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{BookId, UserId};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is well formed but not permitted by the book's state.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with the current state of a resource.
    Conflict,
    /// An unexpected error occurred inside the domain or its adapters.
    InternalError,
}

/// The state transition a request attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Checkout,
    Return,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkout => f.write_str("checkout"),
            Self::Return => f.write_str("return"),
        }
    }
}

/// Failures raised by the checkout and return transitions.
///
/// All variants are terminal for the request; nothing is retried.
///
/// # Examples
/// ```
/// use library_backend::domain::{BookId, ErrorCode, LibraryError, Transition};
///
/// let err = LibraryError::book_not_found(BookId::new(10), Transition::Return);
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.to_string(), "Book not found to return");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    UserNotFound {
        user_id: UserId,
    },
    BookNotFound {
        book_id: BookId,
        transition: Transition,
    },
    AlreadyCheckedOut {
        book_id: BookId,
        title: String,
    },
    InvalidReturn {
        book_id: BookId,
        user_id: UserId,
    },
    /// Catch-all for repository and infrastructure failures.
    Unexpected {
        message: String,
    },
}

impl LibraryError {
    pub fn user_not_found(user_id: UserId) -> Self {
        Self::UserNotFound { user_id }
    }

    pub fn book_not_found(book_id: BookId, transition: Transition) -> Self {
        Self::BookNotFound {
            book_id,
            transition,
        }
    }

    pub fn already_checked_out(book_id: BookId, title: impl Into<String>) -> Self {
        Self::AlreadyCheckedOut {
            book_id,
            title: title.into(),
        }
    }

    pub fn invalid_return(book_id: BookId, user_id: UserId) -> Self {
        Self::InvalidReturn { book_id, user_id }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UserNotFound { .. } | Self::BookNotFound { .. } => ErrorCode::NotFound,
            Self::AlreadyCheckedOut { .. } => ErrorCode::Conflict,
            Self::InvalidReturn { .. } => ErrorCode::InvalidRequest,
            Self::Unexpected { .. } => ErrorCode::InternalError,
        }
    }
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserNotFound { .. } => f.write_str("User not found"),
            Self::BookNotFound {
                transition: Transition::Checkout,
                ..
            } => f.write_str("Book not found"),
            Self::BookNotFound {
                transition: Transition::Return,
                ..
            } => f.write_str("Book not found to return"),
            Self::AlreadyCheckedOut { title, .. } => {
                write!(f, "Book '{title}' is already checked out.")
            }
            Self::InvalidReturn { .. } => {
                f.write_str("This user is not authorized to return this book.")
            }
            Self::Unexpected { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for LibraryError {}

#[cfg(test)]
mod tests;
