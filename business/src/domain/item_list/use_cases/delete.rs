use async_trait::async_trait;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::shared::value_objects::{ItemListId, UserId};

pub struct DeleteItemListParams {
    pub id: ItemListId,
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteItemListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemListParams) -> Result<(), ItemListError>;
}
