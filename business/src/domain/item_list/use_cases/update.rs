use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::item_list::model::ItemList;
use crate::domain::shared::value_objects::{ItemListId, UserId};

pub struct UpdateItemListParams {
    pub id: ItemListId,
    pub user_id: UserId,
    /// `Some(true)` realizes the list, `Some(false)` reopens it.
    pub is_realized: Option<bool>,
    /// `Some(None)` clears the due date.
    pub due_to: Option<Option<NaiveDate>>,
}

#[async_trait]
pub trait UpdateItemListUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemListParams) -> Result<ItemList, ItemListError>;
}
