//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use super::schema::{books, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub user_id: i64,
    pub user_name: Option<String>,
}

/// Insertable struct for registering members.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub user_name: &'a str,
}

/// Row struct for reading from the books table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub is_available: bool,
    pub checked_out_by: Option<i64>,
}

/// Insertable struct for cataloguing books; availability uses the column
/// default.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub title: &'a str,
    pub author: &'a str,
}

/// Changeset written by the lending transitions.
///
/// `treat_none_as_null` makes a cleared holder write `NULL` instead of being
/// skipped.
#[derive(Debug, Clone, PartialEq, Eq, AsChangeset)]
#[diesel(table_name = books)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct BookLendingUpdate {
    pub is_available: bool,
    pub checked_out_by: Option<i64>,
}
