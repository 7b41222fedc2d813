//! Port for cataloguing books and registering members.
//!
//! Registration sits outside the lending transitions; the seeding tool is its
//! only caller.

use async_trait::async_trait;

use crate::domain::{Book, NewBook, NewUser, User};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registry adapters.
    pub enum LibraryRegistryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "library registry connection failed: {message}",
        /// Insert failed during execution.
        Query { message: String } =>
            "library registry query failed: {message}",
    }
}

/// Creates rows the lending transitions later operate on.
#[async_trait]
pub trait LibraryRegistry: Send + Sync {
    /// Register a member; the store assigns the identifier.
    async fn register_user(&self, user: &NewUser) -> Result<User, LibraryRegistryError>;

    /// Catalogue a book as available; the store assigns the identifier.
    async fn register_book(&self, book: &NewBook) -> Result<Book, LibraryRegistryError>;
}
