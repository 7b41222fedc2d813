//! Checkout and return transitions.
//!
//! Each call is a single read, validate, write sequence against the injected
//! repositories. No locks are taken; two concurrent checkouts of the same book
//! can both pass validation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    BookRepository, BookRepositoryError, LibraryCommand, TransitionReceipt, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Book, BookId, LibraryError, Transition, User, UserId};

fn map_book_repository_error(error: BookRepositoryError) -> LibraryError {
    warn!(%error, "book repository failed");
    LibraryError::unexpected(error.to_string())
}

fn map_user_repository_error(error: UserRepositoryError) -> LibraryError {
    warn!(%error, "user repository failed");
    LibraryError::unexpected(error.to_string())
}

/// Lending service implementing the [`LibraryCommand`] driving port.
#[derive(Clone)]
pub struct LibraryService<B, U> {
    books: Arc<B>,
    users: Arc<U>,
}

impl<B, U> LibraryService<B, U> {
    /// Create a service over the book and user repositories.
    pub fn new(books: Arc<B>, users: Arc<U>) -> Self {
        Self { books, users }
    }
}

impl<B, U> LibraryService<B, U>
where
    B: BookRepository,
    U: UserRepository,
{
    async fn load_user(&self, user_id: UserId) -> Result<User, LibraryError> {
        self.users
            .find_user_by_id(user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| LibraryError::user_not_found(user_id))
    }

    async fn load_book(&self, book_id: BookId, transition: Transition) -> Result<Book, LibraryError> {
        self.books
            .find_book_by_id(book_id)
            .await
            .map_err(map_book_repository_error)?
            .ok_or_else(|| LibraryError::book_not_found(book_id, transition))
    }

    async fn persist(&self, book: &Book) -> Result<(), LibraryError> {
        self.books
            .save_book(book)
            .await
            .map_err(map_book_repository_error)
    }
}

#[async_trait]
impl<B, U> LibraryCommand for LibraryService<B, U>
where
    B: BookRepository,
    U: UserRepository,
{
    async fn checkout_book(
        &self,
        user_id: UserId,
        book_id: BookId,
    ) -> Result<TransitionReceipt, LibraryError> {
        // The member must exist before the book is even looked at.
        let user = self.load_user(user_id).await?;
        let mut book = self.load_book(book_id, Transition::Checkout).await?;

        if let Err(error) = book.check_out(&user) {
            debug!(%user_id, %book_id, %error, "checkout rejected");
            return Err(LibraryError::already_checked_out(book_id, book.title()));
        }

        self.persist(&book).await?;
        info!(%user_id, %book_id, "book checked out");
        Ok(TransitionReceipt::checkout(user_id, book_id))
    }

    async fn return_book(
        &self,
        user_id: UserId,
        book_id: BookId,
    ) -> Result<TransitionReceipt, LibraryError> {
        let mut book = self.load_book(book_id, Transition::Return).await?;

        if let Err(error) = book.return_by(user_id) {
            debug!(%user_id, %book_id, %error, "return rejected");
            return Err(LibraryError::invalid_return(book_id, user_id));
        }

        self.persist(&book).await?;
        info!(%user_id, %book_id, "book returned");
        Ok(TransitionReceipt::returned(user_id, book_id))
    }
}

#[cfg(test)]
#[path = "library_service_tests.rs"]
mod tests;
