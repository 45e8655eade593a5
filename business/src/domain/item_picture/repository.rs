use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemPictureId, UserId};

use super::model::{ItemPicture, NewItemPicture};

/// Predicate for [`ItemPictureRepository::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPictureFilter {
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait ItemPictureRepository: Send {
    async fn add(&mut self, picture: &NewItemPicture) -> Result<ItemPicture, RepositoryError>;
    async fn find_by_id(
        &mut self,
        id: ItemPictureId,
    ) -> Result<Option<ItemPicture>, RepositoryError>;
    async fn find(
        &mut self,
        filter: &ItemPictureFilter,
    ) -> Result<Vec<ItemPicture>, RepositoryError>;
    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemPicture>, RepositoryError>;
    async fn remove(&mut self, id: ItemPictureId) -> Result<bool, RepositoryError>;
}
