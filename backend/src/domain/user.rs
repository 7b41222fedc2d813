//! Library member data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::BookId;

/// Maximum allowed length for a member name.
pub const USER_NAME_MAX: usize = 100;

/// Validation errors returned by [`NewUser::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    NameTooLong { max: usize },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::NameTooLong { max } => {
                write!(f, "user name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// # Examples
/// ```
/// use library_backend::domain::UserId;
///
/// let id = UserId::new(1);
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw store identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Library member together with the books they currently hold.
///
/// `checked_out_books` is the inverse of [`crate::domain::Book::holder`]; it
/// is read-only from the member's side and is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: Option<String>,
    checked_out_books: Vec<BookId>,
}

impl User {
    /// Assemble a member loaded from storage.
    pub fn new(id: UserId, name: Option<String>, checked_out_books: Vec<BookId>) -> Self {
        Self {
            id,
            name,
            checked_out_books,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name as recorded by the library, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Books currently checked out by this member.
    pub fn checked_out_books(&self) -> &[BookId] {
        &self.checked_out_books
    }
}

/// Validated input for registering a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    name: String,
}

impl NewUser {
    /// Validate a member name.
    ///
    /// # Examples
    /// ```
    /// use library_backend::domain::{NewUser, UserValidationError};
    ///
    /// assert!(NewUser::new("Ada").is_ok());
    /// assert_eq!(NewUser::new("  "), Err(UserValidationError::EmptyName));
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: USER_NAME_MAX });
        }
        Ok(Self { name })
    }

    /// Member name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
