use async_trait::async_trait;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::UpdateUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Account lifecycle as seen by the HTTP layer.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account. The command has already passed name, email
    /// and password policy checks; only the hash is stored.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Another account owns this email
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Storage failure
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError>;

    /// Change name and/or email. The password is only changed through reset.
    ///
    /// # Errors
    /// * `NotFound` - No such account
    /// * `EmailAlreadyExists` - Another account owns the new email
    /// * `DatabaseError` - Storage failure
    async fn update_user(
        &self,
        id: &UserId,
        command: UpdateUserCommand,
    ) -> Result<User, UserError>;

    /// # Errors
    /// * `NotFound` - No such account
    /// * `DatabaseError` - Storage failure
    async fn delete_user(&self, id: &UserId) -> Result<(), UserError>;
}

/// User store.
///
/// The credential service only ever needs single-row reads by id or by
/// email, plus a hash replacement for password resets. Lookups report a
/// missing row as `Ok(None)`; writes against a missing row are `NotFound`.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// # Errors
    /// * `EmailAlreadyExists` - Unique email constraint violated
    /// * `DatabaseError` - Storage failure
    async fn create(&self, user: User) -> Result<User, UserError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Exact match on the stored address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Persist name, email and `updated_at` of an existing row.
    ///
    /// # Errors
    /// * `NotFound` - No such row
    /// * `EmailAlreadyExists` - Unique email constraint violated
    async fn update(&self, user: User) -> Result<User, UserError>;

    /// Swap in a new password hash and bump `updated_at`.
    async fn update_password(&self, id: &UserId, password_hash: String) -> Result<(), UserError>;

    async fn delete(&self, id: &UserId) -> Result<(), UserError>;
}
