//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod book_repository;
mod library_command;
mod library_registry;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookRepository, BookRepositoryError};
#[cfg(test)]
pub use library_command::MockLibraryCommand;
pub use library_command::{LibraryCommand, TransitionReceipt};
pub use library_registry::{LibraryRegistry, LibraryRegistryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
