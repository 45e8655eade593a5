use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::{ItemId, UserId};

pub struct UpdateItemParams {
    pub id: ItemId,
    pub user_id: UserId,
    pub quantity: Option<i32>,
    pub is_bought: Option<bool>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
