use async_trait::async_trait;

use crate::domain::item_picture::errors::ItemPictureError;
use crate::domain::item_picture::model::ItemPicture;
use crate::domain::shared::value_objects::UserId;

pub struct AttachItemPictureParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait AttachItemPictureUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AttachItemPictureParams,
    ) -> Result<ItemPicture, ItemPictureError>;
}
