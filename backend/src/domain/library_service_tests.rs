//! Tests for the lending service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockBookRepository, MockUserRepository};

const READER: UserId = UserId::new(1);
const OTHER_READER: UserId = UserId::new(2);
const DUNE: BookId = BookId::new(10);

fn reader(id: UserId) -> User {
    User::new(id, Some(format!("reader-{id}")), Vec::new())
}

fn dune(holder: Option<UserId>) -> Book {
    Book::new(DUNE, "Dune", "Frank Herbert", holder)
}

#[fixture]
fn books() -> MockBookRepository {
    MockBookRepository::new()
}

#[fixture]
fn users() -> MockUserRepository {
    MockUserRepository::new()
}

fn service(
    books: MockBookRepository,
    users: MockUserRepository,
) -> LibraryService<MockBookRepository, MockUserRepository> {
    LibraryService::new(Arc::new(books), Arc::new(users))
}

#[rstest]
#[tokio::test]
async fn checkout_lends_available_book(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .with(eq(READER))
        .times(1)
        .return_once(|id| Ok(Some(reader(id))));
    books
        .expect_find_book_by_id()
        .with(eq(DUNE))
        .times(1)
        .return_once(|_| Ok(Some(dune(None))));
    books
        .expect_save_book()
        .withf(|book: &Book| book.id() == DUNE && book.holder() == Some(READER))
        .times(1)
        .return_once(|_| Ok(()));

    let receipt = service(books, users)
        .checkout_book(READER, DUNE)
        .await
        .expect("checkout succeeds");

    assert_eq!(receipt, TransitionReceipt::checkout(READER, DUNE));
    assert_eq!(receipt.message(), "Book checked out successfully!");
}

#[rstest]
#[tokio::test]
async fn checkout_rejects_held_book_without_saving(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .return_once(|id| Ok(Some(reader(id))));
    books
        .expect_find_book_by_id()
        .return_once(|_| Ok(Some(dune(Some(READER)))));
    books.expect_save_book().times(0);

    let error = service(books, users)
        .checkout_book(OTHER_READER, DUNE)
        .await
        .expect_err("book is held");

    assert_eq!(error, LibraryError::already_checked_out(DUNE, "Dune"));
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn checkout_checks_user_before_book(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .with(eq(UserId::new(99)))
        .times(1)
        .return_once(|_| Ok(None));
    books.expect_find_book_by_id().times(0);
    books.expect_save_book().times(0);

    let error = service(books, users)
        .checkout_book(UserId::new(99), DUNE)
        .await
        .expect_err("unknown user");

    assert_eq!(error, LibraryError::user_not_found(UserId::new(99)));
    assert_eq!(error.to_string(), "User not found");
}

#[rstest]
#[tokio::test]
async fn checkout_reports_missing_book(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .return_once(|id| Ok(Some(reader(id))));
    books.expect_find_book_by_id().return_once(|_| Ok(None));
    books.expect_save_book().times(0);

    let error = service(books, users)
        .checkout_book(READER, BookId::new(404))
        .await
        .expect_err("unknown book");

    assert_eq!(
        error,
        LibraryError::book_not_found(BookId::new(404), Transition::Checkout)
    );
    assert_eq!(error.to_string(), "Book not found");
}

#[rstest]
#[tokio::test]
async fn return_releases_book_held_by_caller(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users.expect_find_user_by_id().times(0);
    books
        .expect_find_book_by_id()
        .with(eq(DUNE))
        .return_once(|_| Ok(Some(dune(Some(READER)))));
    books
        .expect_save_book()
        .withf(|book: &Book| book.id() == DUNE && book.is_available())
        .times(1)
        .return_once(|_| Ok(()));

    let receipt = service(books, users)
        .return_book(READER, DUNE)
        .await
        .expect("holder returns");

    assert_eq!(receipt.message(), "Book returned successfully!");
}

#[rstest]
#[case::held_by_someone_else(Some(READER))]
#[case::not_checked_out(None)]
#[tokio::test]
async fn return_by_non_holder_is_invalid(
    #[case] holder: Option<UserId>,
    mut books: MockBookRepository,
    users: MockUserRepository,
) {
    books
        .expect_find_book_by_id()
        .return_once(move |_| Ok(Some(dune(holder))));
    books.expect_save_book().times(0);

    let error = service(books, users)
        .return_book(OTHER_READER, DUNE)
        .await
        .expect_err("not the holder");

    assert_eq!(error, LibraryError::invalid_return(DUNE, OTHER_READER));
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn return_reports_missing_book(mut books: MockBookRepository, users: MockUserRepository) {
    books.expect_find_book_by_id().return_once(|_| Ok(None));

    let error = service(books, users)
        .return_book(READER, DUNE)
        .await
        .expect_err("unknown book");

    assert_eq!(error.to_string(), "Book not found to return");
}

#[rstest]
#[tokio::test]
async fn repository_failures_become_unexpected(
    books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .return_once(|_| Err(UserRepositoryError::connection("database connection error")));

    let error = service(books, users)
        .checkout_book(READER, DUNE)
        .await
        .expect_err("repository down");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(
        error.to_string(),
        "user repository connection failed: database connection error"
    );
}

#[rstest]
#[tokio::test]
async fn save_failure_surfaces_after_validation(
    mut books: MockBookRepository,
    mut users: MockUserRepository,
) {
    users
        .expect_find_user_by_id()
        .return_once(|id| Ok(Some(reader(id))));
    books
        .expect_find_book_by_id()
        .return_once(|_| Ok(Some(dune(None))));
    books
        .expect_save_book()
        .return_once(|_| Err(BookRepositoryError::query("database error")));

    let error = service(books, users)
        .checkout_book(READER, DUNE)
        .await
        .expect_err("save fails");

    assert_eq!(
        error,
        LibraryError::unexpected("book repository query failed: database error")
    );
}
