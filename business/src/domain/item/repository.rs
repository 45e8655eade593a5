use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemId, ItemListId, UserId};

use super::model::{Item, NewItem};

/// Predicate for [`ItemRepository::find`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub user_id: Option<UserId>,
    pub item_list_id: Option<ItemListId>,
    pub is_bought: Option<bool>,
}

impl ItemFilter {
    pub fn in_list(item_list_id: ItemListId) -> Self {
        Self {
            item_list_id: Some(item_list_id),
            ..Self::default()
        }
    }

    pub fn bought(mut self, is_bought: bool) -> Self {
        self.is_bought = Some(is_bought);
        self
    }
}

#[async_trait]
pub trait ItemRepository: Send {
    async fn add(&mut self, item: &NewItem) -> Result<Item, RepositoryError>;
    async fn find_by_id(&mut self, id: ItemId) -> Result<Option<Item>, RepositoryError>;
    async fn find(&mut self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
    async fn by_list(&mut self, item_list_id: ItemListId) -> Result<Vec<Item>, RepositoryError>;
    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<Item>, RepositoryError>;
    /// Writes back the changes recorded in [`Item::changes`]; other columns stay as
    /// stored. Fails with `NotFound` when the row is gone.
    async fn update(&mut self, item: &Item) -> Result<(), RepositoryError>;
    async fn remove(&mut self, id: ItemId) -> Result<bool, RepositoryError>;
    /// Removes every item referencing the list; returns how many went.
    async fn remove_by_list(&mut self, item_list_id: ItemListId) -> Result<u64, RepositoryError>;
}
