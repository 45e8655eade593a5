use async_trait::async_trait;

use crate::domain::item_picture::errors::ItemPictureError;
use crate::domain::shared::value_objects::{ItemPictureId, UserId};

pub struct DeleteItemPictureParams {
    pub id: ItemPictureId,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteItemPictureUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemPictureParams) -> Result<(), ItemPictureError>;
}
