//! Driving port for the lending transitions.
//!
//! Inbound adapters call this port with the raw identifiers from a request and
//! receive either a receipt describing the completed transition or a
//! [`LibraryError`].

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{BookId, LibraryError, Transition, UserId};

/// Proof that a transition was applied and persisted.
///
/// # Examples
/// ```
/// use library_backend::domain::ports::TransitionReceipt;
/// use library_backend::domain::{BookId, UserId};
///
/// let receipt = TransitionReceipt::checkout(UserId::new(1), BookId::new(10));
/// assert_eq!(receipt.message(), "Book checked out successfully!");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionReceipt {
    pub transition: Transition,
    pub user_id: UserId,
    pub book_id: BookId,
}

impl TransitionReceipt {
    pub fn checkout(user_id: UserId, book_id: BookId) -> Self {
        Self {
            transition: Transition::Checkout,
            user_id,
            book_id,
        }
    }

    pub fn returned(user_id: UserId, book_id: BookId) -> Self {
        Self {
            transition: Transition::Return,
            user_id,
            book_id,
        }
    }

    /// Confirmation text returned to the caller.
    pub fn message(&self) -> &'static str {
        match self.transition {
            Transition::Checkout => "Book checked out successfully!",
            Transition::Return => "Book returned successfully!",
        }
    }
}

impl fmt::Display for TransitionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Driving port for checking books out and back in.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryCommand: Send + Sync {
    /// Lend `book_id` to `user_id`.
    async fn checkout_book(
        &self,
        user_id: UserId,
        book_id: BookId,
    ) -> Result<TransitionReceipt, LibraryError>;

    /// Take `book_id` back from `user_id`.
    async fn return_book(
        &self,
        user_id: UserId,
        book_id: BookId,
    ) -> Result<TransitionReceipt, LibraryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn return_receipt_renders_confirmation() {
        let receipt = TransitionReceipt::returned(UserId::new(1), BookId::new(10));
        assert_eq!(receipt.to_string(), "Book returned successfully!");
        assert_eq!(receipt.transition, Transition::Return);
    }
}
