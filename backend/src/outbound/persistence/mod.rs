//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the library ports backed by PostgreSQL via
//! `diesel-async` and a shared `bb8` pool.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. The lending rules live in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Sanitised errors**: database failures reach the domain as port errors
//!   with generic messages.
//!
//! # Example
//!
//! ```no_run
//! use library_backend::outbound::persistence::{
//!     DbPool, DieselBookRepository, PoolConfig,
//! };
//!
//! # async fn build() -> Result<(), library_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/library")).await?;
//! let books = DieselBookRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_book_repository;
mod diesel_library_registry;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use diesel_library_registry::DieselLibraryRegistry;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_SIZE, DbPool, PoolConfig, PoolError};
