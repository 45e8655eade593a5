use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::item_list::model::ItemList;
use crate::domain::shared::value_objects::UserId;

pub struct CreateItemListParams {
    pub user_id: UserId,
    pub due_to: Option<NaiveDate>,
}

#[async_trait]
pub trait CreateItemListUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemListParams) -> Result<ItemList, ItemListError>;
}
