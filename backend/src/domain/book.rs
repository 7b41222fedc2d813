//! Book data model and the checkout/return transitions applied to it.
//!
//! Availability is derived from the holder reference, so a book can never be
//! flagged available while someone holds it (or the reverse).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{User, UserId};

/// Maximum allowed length for a book title.
pub const BOOK_TITLE_MAX: usize = 200;
/// Maximum allowed length for a book author.
pub const BOOK_AUTHOR_MAX: usize = 100;

/// Store-assigned book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
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

impl From<i64> for BookId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejections raised when a transition does not apply to the book's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookTransitionError {
    /// The book already has a holder.
    AlreadyCheckedOut { holder: UserId },
    /// The book has no holder, or a different member holds it.
    NotHeldBy {
        user_id: UserId,
        holder: Option<UserId>,
    },
}

impl fmt::Display for BookTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCheckedOut { holder } => {
                write!(f, "book is already held by user {holder}")
            }
            Self::NotHeldBy {
                user_id,
                holder: Some(holder),
            } => write!(f, "book is held by user {holder}, not user {user_id}"),
            Self::NotHeldBy {
                user_id,
                holder: None,
            } => write!(f, "book is not checked out, so user {user_id} cannot return it"),
        }
    }
}

impl std::error::Error for BookTransitionError {}

/// A lendable book.
///
/// # Examples
/// ```
/// use library_backend::domain::{Book, BookId, User, UserId};
///
/// let mut book = Book::new(BookId::new(1), "Dune", "Frank Herbert", None);
/// let reader = User::new(UserId::new(7), Some("Ada".into()), Vec::new());
///
/// book.check_out(&reader).expect("book is available");
/// assert!(!book.is_available());
/// assert_eq!(book.holder(), Some(UserId::new(7)));
///
/// book.return_by(UserId::new(7)).expect("reader holds the book");
/// assert!(book.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    holder: Option<UserId>,
}

impl Book {
    /// Assemble a book loaded from storage.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        holder: Option<UserId>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            holder,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    /// Member currently holding the book, if any.
    pub fn holder(&self) -> Option<UserId> {
        self.holder
    }

    /// `true` when no member holds the book.
    pub fn is_available(&self) -> bool {
        self.holder.is_none()
    }

    /// Lend the book to `user`.
    ///
    /// Leaves the book untouched when it is already checked out.
    pub fn check_out(&mut self, user: &User) -> Result<(), BookTransitionError> {
        if let Some(holder) = self.holder {
            return Err(BookTransitionError::AlreadyCheckedOut { holder });
        }
        self.holder = Some(user.id());
        Ok(())
    }

    /// Take the book back from `user_id`.
    ///
    /// Only the current holder may return a book; the book is left untouched
    /// otherwise.
    pub fn return_by(&mut self, user_id: UserId) -> Result<(), BookTransitionError> {
        match self.holder {
            Some(holder) if holder == user_id => {
                self.holder = None;
                Ok(())
            }
            holder => Err(BookTransitionError::NotHeldBy { user_id, holder }),
        }
    }
}

/// Validation errors returned by [`NewBook::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    TitleTooLong { max: usize },
    EmptyAuthor,
    AuthorTooLong { max: usize },
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "book title must not be empty"),
            Self::TitleTooLong { max } => write!(f, "book title must be at most {max} characters"),
            Self::EmptyAuthor => write!(f, "book author must not be empty"),
            Self::AuthorTooLong { max } => {
                write!(f, "book author must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for BookValidationError {}

/// Validated input for cataloguing a book. New books start available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    title: String,
    author: String,
}

impl NewBook {
    /// Validate title and author against the catalogue column limits.
    ///
    /// # Examples
    /// ```
    /// use library_backend::domain::{BookValidationError, NewBook};
    ///
    /// assert!(NewBook::new("Dune", "Frank Herbert").is_ok());
    /// assert_eq!(
    ///     NewBook::new("Dune", ""),
    ///     Err(BookValidationError::EmptyAuthor)
    /// );
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if title.chars().count() > BOOK_TITLE_MAX {
            return Err(BookValidationError::TitleTooLong {
                max: BOOK_TITLE_MAX,
            });
        }
        if author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        if author.chars().count() > BOOK_AUTHOR_MAX {
            return Err(BookValidationError::AuthorTooLong {
                max: BOOK_AUTHOR_MAX,
            });
        }
        Ok(Self { title, author })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }
}
