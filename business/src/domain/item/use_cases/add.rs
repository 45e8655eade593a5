use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{ItemListId, UserId};

pub struct AddItemParams {
    pub user_id: UserId,
    pub item_list_id: ItemListId,
    pub quantity: i32,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<Item, ItemError>;
}
