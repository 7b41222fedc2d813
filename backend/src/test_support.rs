//! Test utilities shared by unit and integration tests.
//!
//! Only compiled for tests or with the `test-support` feature.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    BookRepository, BookRepositoryError, LibraryRegistry, LibraryRegistryError, UserRepository,
    UserRepositoryError,
};
use crate::domain::{Book, BookId, NewBook, NewUser, User, UserId};

#[derive(Debug, Default)]
struct Shelves {
    users: BTreeMap<UserId, Option<String>>,
    books: BTreeMap<BookId, Book>,
}

impl Shelves {
    fn holdings(&self, user_id: UserId) -> Vec<BookId> {
        self.books
            .values()
            .filter(|book| book.holder() == Some(user_id))
            .map(Book::id)
            .collect()
    }

    fn next_user_id(&self) -> UserId {
        UserId::new(self.users.keys().next_back().map_or(1, |id| id.get() + 1))
    }

    fn next_book_id(&self) -> BookId {
        BookId::new(self.books.keys().next_back().map_or(1, |id| id.get() + 1))
    }
}

/// In-memory library store implementing the repository ports.
///
/// # Examples
/// ```
/// use library_backend::domain::{BookId, UserId};
/// use library_backend::test_support::InMemoryLibrary;
///
/// let store = InMemoryLibrary::default()
///     .with_user(UserId::new(1), "Ada")
///     .with_book(BookId::new(10), "Dune", "Frank Herbert", None);
/// assert!(store.book(BookId::new(10)).is_some_and(|book| book.is_available()));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    shelves: Mutex<Shelves>,
}

impl InMemoryLibrary {
    fn lock(&self) -> MutexGuard<'_, Shelves> {
        self.shelves.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a member with a fixed identifier.
    #[must_use]
    pub fn with_user(self, user_id: UserId, name: &str) -> Self {
        self.insert_user(user_id, name);
        self
    }

    /// Add a book with a fixed identifier and optional holder.
    #[must_use]
    pub fn with_book(
        self,
        book_id: BookId,
        title: &str,
        author: &str,
        holder: Option<UserId>,
    ) -> Self {
        self.insert_book(book_id, title, author, holder);
        self
    }

    /// Insert or replace a member through a shared reference.
    pub fn insert_user(&self, user_id: UserId, name: &str) {
        self.lock().users.insert(user_id, Some(name.to_owned()));
    }

    /// Insert or replace a book through a shared reference.
    pub fn insert_book(&self, book_id: BookId, title: &str, author: &str, holder: Option<UserId>) {
        self.lock()
            .books
            .insert(book_id, Book::new(book_id, title, author, holder));
    }

    /// Current state of a book.
    pub fn book(&self, book_id: BookId) -> Option<Book> {
        self.lock().books.get(&book_id).cloned()
    }
}

#[async_trait]
impl BookRepository for InMemoryLibrary {
    async fn find_book_by_id(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        Ok(self.book(book_id))
    }

    async fn save_book(&self, book: &Book) -> Result<(), BookRepositoryError> {
        let mut shelves = self.lock();
        match shelves.books.get_mut(&book.id()) {
            Some(stored) => {
                *stored = book.clone();
                Ok(())
            }
            None => Err(BookRepositoryError::query("record not found")),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryLibrary {
    async fn find_user_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let shelves = self.lock();
        Ok(shelves
            .users
            .get(&user_id)
            .map(|name| User::new(user_id, name.clone(), shelves.holdings(user_id))))
    }
}

#[async_trait]
impl LibraryRegistry for InMemoryLibrary {
    async fn register_user(&self, user: &NewUser) -> Result<User, LibraryRegistryError> {
        let mut shelves = self.lock();
        let user_id = shelves.next_user_id();
        shelves.users.insert(user_id, Some(user.name().to_owned()));
        Ok(User::new(user_id, Some(user.name().to_owned()), Vec::new()))
    }

    async fn register_book(&self, book: &NewBook) -> Result<Book, LibraryRegistryError> {
        let mut shelves = self.lock();
        let book_id = shelves.next_book_id();
        let stored = Book::new(book_id, book.title(), book.author(), None);
        shelves.books.insert(book_id, stored.clone());
        Ok(stored)
    }
}
