//! Port for loading library members.

use async_trait::async_trait;

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
    }
}

/// Read-only access to library members.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a member by id, including the books they currently hold.
    async fn find_user_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;
}
