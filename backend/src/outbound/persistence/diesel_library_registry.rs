//! PostgreSQL-backed `LibraryRegistry` used by the seeding tool.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{LibraryRegistry, LibraryRegistryError};
use crate::domain::{Book, BookId, NewBook, NewUser, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookRow, NewBookRow, NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{books, users};

/// Diesel-backed implementation of the registry port.
#[derive(Clone)]
pub struct DieselLibraryRegistry {
    pool: DbPool,
}

impl DieselLibraryRegistry {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> LibraryRegistryError {
    map_basic_pool_error(error, LibraryRegistryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> LibraryRegistryError {
    map_basic_diesel_error(
        error,
        LibraryRegistryError::query,
        LibraryRegistryError::connection,
    )
}

#[async_trait]
impl LibraryRegistry for DieselLibraryRegistry {
    async fn register_user(&self, user: &NewUser) -> Result<User, LibraryRegistryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(&NewUserRow {
                user_name: user.name(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(User::new(UserId::new(row.user_id), row.user_name, Vec::new()))
    }

    async fn register_book(&self, book: &NewBook) -> Result<Book, LibraryRegistryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: BookRow = diesel::insert_into(books::table)
            .values(&NewBookRow {
                title: book.title(),
                author: book.author(),
            })
            .returning(BookRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Book::new(BookId::new(row.book_id), row.title, row.author, None))
    }
}
