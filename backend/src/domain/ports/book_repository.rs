//! Port for loading and persisting books.

use async_trait::async_trait;

use crate::domain::{Book, BookId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "book repository query failed: {message}",
    }
}

/// Port for the book half of the library store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by id.
    async fn find_book_by_id(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError>;

    /// Persist the book's holder and availability.
    ///
    /// The row must already exist; books are never created through this port.
    async fn save_book(&self, book: &Book) -> Result<(), BookRepositoryError>;
}
