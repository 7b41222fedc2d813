//! Tests for the library error taxonomy.

use super::*;
use rstest::rstest;

#[rstest]
#[case(LibraryError::user_not_found(UserId::new(99)), ErrorCode::NotFound)]
#[case(
    LibraryError::book_not_found(BookId::new(10), Transition::Checkout),
    ErrorCode::NotFound
)]
#[case(
    LibraryError::book_not_found(BookId::new(10), Transition::Return),
    ErrorCode::NotFound
)]
#[case(
    LibraryError::already_checked_out(BookId::new(10), "Dune"),
    ErrorCode::Conflict
)]
#[case(
    LibraryError::invalid_return(BookId::new(10), UserId::new(2)),
    ErrorCode::InvalidRequest
)]
#[case(LibraryError::unexpected("database error"), ErrorCode::InternalError)]
fn each_failure_has_a_stable_code(#[case] error: LibraryError, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(LibraryError::user_not_found(UserId::new(99)), "User not found")]
#[case(
    LibraryError::book_not_found(BookId::new(10), Transition::Checkout),
    "Book not found"
)]
#[case(
    LibraryError::book_not_found(BookId::new(10), Transition::Return),
    "Book not found to return"
)]
#[case(
    LibraryError::already_checked_out(BookId::new(10), "Dune"),
    "Book 'Dune' is already checked out."
)]
#[case(
    LibraryError::invalid_return(BookId::new(10), UserId::new(2)),
    "This user is not authorized to return this book."
)]
#[case(LibraryError::unexpected("database error"), "database error")]
fn messages_match_the_public_contract(#[case] error: LibraryError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[rstest]
fn error_code_serialises_as_snake_case() {
    let value = serde_json::to_value(ErrorCode::InvalidRequest).expect("serialise code");
    assert_eq!(value, serde_json::json!("invalid_request"));
}

#[rstest]
fn transition_displays_lowercase() {
    assert_eq!(Transition::Checkout.to_string(), "checkout");
    assert_eq!(Transition::Return.to_string(), "return");
}
