use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingUser;

/// Users are loaded together with their lists and pictures.
#[async_trait]
pub trait ShoppingUserRepository: Send {
    async fn add(&mut self) -> Result<ShoppingUser, RepositoryError>;
    async fn find_by_id(&mut self, id: UserId) -> Result<Option<ShoppingUser>, RepositoryError>;
    async fn find_many(&mut self, ids: &[UserId]) -> Result<Vec<ShoppingUser>, RepositoryError>;
    async fn all(&mut self) -> Result<Vec<ShoppingUser>, RepositoryError>;
    /// Removing a user cascades to its lists, items and pictures.
    async fn remove(&mut self, id: UserId) -> Result<bool, RepositoryError>;
}
