//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! A member's holdings are not stored on the user row; they are read back from
//! `books.checked_out_by`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{BookId, User, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::UserRow;
use super::pool::{DbPool, PoolError};
use super::schema::{books, users};

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn row_to_user(row: UserRow, holdings: Vec<i64>) -> User {
    User::new(
        UserId::new(row.user_id),
        row.user_name,
        holdings.into_iter().map(BookId::new).collect(),
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_user_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let Some(row) = users::table
            .find(user_id.get())
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?
        else {
            return Ok(None);
        };

        let holdings: Vec<i64> = books::table
            .filter(books::checked_out_by.eq(user_id.get()))
            .order(books::book_id.asc())
            .select(books::book_id)
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Some(row_to_user(row, holdings)))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for row conversion and error mapping.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn row_and_holdings_become_user() {
        let row = UserRow {
            user_id: 1,
            user_name: Some("Ada".to_owned()),
        };

        let user = row_to_user(row, vec![10, 11]);

        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.name(), Some("Ada"));
        assert_eq!(user.checked_out_books(), &[BookId::new(10), BookId::new(11)]);
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let err = map_diesel_error(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));

        assert_eq!(
            err,
            UserRepositoryError::connection("database connection error")
        );
    }
}
