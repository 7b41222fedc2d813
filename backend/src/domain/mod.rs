//! Domain primitives, services and ports.
//!
//! Purpose: model books, members and the two lending transitions without any
//! knowledge of HTTP or SQL. Adapters under `inbound` and `outbound` translate
//! to and from these types.
//!
//! Public surface:
//! - [`Book`], [`User`] and their identifiers.
//! - [`LibraryError`] with its stable [`ErrorCode`].
//! - [`LibraryService`], which implements the [`ports::LibraryCommand`]
//!   driving port.

pub mod book;
pub mod error;
mod library_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::book::{
    BOOK_AUTHOR_MAX, BOOK_TITLE_MAX, Book, BookId, BookTransitionError, BookValidationError,
    NewBook,
};
pub use self::error::{ErrorCode, LibraryError, Transition};
pub use self::library_service::LibraryService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, USER_NAME_MAX, User, UserId, UserValidationError};
