//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{BookRepository, BookRepositoryError};
use crate::domain::{Book, BookId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{BookLendingUpdate, BookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel-backed implementation of the book repository port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> BookRepositoryError {
    map_basic_pool_error(error, BookRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> BookRepositoryError {
    map_basic_diesel_error(
        error,
        BookRepositoryError::query,
        BookRepositoryError::connection,
    )
}

/// Convert a row into a domain book, rejecting rows whose availability flag
/// disagrees with the holder column.
pub(crate) fn row_to_book(row: BookRow) -> Result<Book, BookRepositoryError> {
    let BookRow {
        book_id,
        title,
        author,
        is_available,
        checked_out_by,
    } = row;

    if is_available != checked_out_by.is_none() {
        return Err(BookRepositoryError::query(format!(
            "book {book_id} availability disagrees with its holder"
        )));
    }

    Ok(Book::new(
        BookId::new(book_id),
        title,
        author,
        checked_out_by.map(UserId::new),
    ))
}

fn lending_update(book: &Book) -> BookLendingUpdate {
    BookLendingUpdate {
        is_available: book.is_available(),
        checked_out_by: book.holder().map(UserId::get),
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn find_book_by_id(&self, book_id: BookId) -> Result<Option<Book>, BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = books::table
            .find(book_id.get())
            .select(BookRow::as_select())
            .first::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_book).transpose()
    }

    async fn save_book(&self, book: &Book) -> Result<(), BookRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(books::table.find(book.id().get()))
            .set(&lending_update(book))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        match updated {
            0 => Err(BookRepositoryError::query("record not found")),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion and error mapping.
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn available_row() -> BookRow {
        BookRow {
            book_id: 10,
            title: "Dune".to_owned(),
            author: "Frank Herbert".to_owned(),
            is_available: true,
            checked_out_by: None,
        }
    }

    #[rstest]
    fn available_row_converts(available_row: BookRow) {
        let book = row_to_book(available_row).expect("consistent row");

        assert_eq!(book.id(), BookId::new(10));
        assert_eq!(book.title(), "Dune");
        assert!(book.is_available());
    }

    #[rstest]
    fn held_row_converts(available_row: BookRow) {
        let row = BookRow {
            is_available: false,
            checked_out_by: Some(1),
            ..available_row
        };

        let book = row_to_book(row).expect("consistent row");

        assert_eq!(book.holder(), Some(UserId::new(1)));
    }

    #[rstest]
    #[case(true, Some(1))]
    #[case(false, None)]
    fn inconsistent_rows_are_rejected(
        available_row: BookRow,
        #[case] is_available: bool,
        #[case] checked_out_by: Option<i64>,
    ) {
        let row = BookRow {
            is_available,
            checked_out_by,
            ..available_row
        };

        let err = row_to_book(row).expect_err("inconsistent row");

        assert!(matches!(err, BookRepositoryError::Query { .. }));
    }

    #[rstest]
    fn update_mirrors_holder() {
        let held = Book::new(BookId::new(10), "Dune", "Frank Herbert", Some(UserId::new(3)));
        let returned = Book::new(BookId::new(10), "Dune", "Frank Herbert", None);

        assert_eq!(
            lending_update(&held),
            BookLendingUpdate {
                is_available: false,
                checked_out_by: Some(3),
            }
        );
        assert_eq!(
            lending_update(&returned),
            BookLendingUpdate {
                is_available: true,
                checked_out_by: None,
            }
        );
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert_eq!(
            err,
            BookRepositoryError::connection("database connection error")
        );
    }
}
