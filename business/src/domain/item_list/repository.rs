use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{ItemListId, UserId};

use super::model::{ItemList, NewItemList};

/// Predicate for [`ItemListRepository::find`]. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListFilter {
    pub user_id: Option<UserId>,
    pub is_realized: Option<bool>,
    pub due_on_or_before: Option<NaiveDate>,
}

impl ItemListFilter {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn realized(mut self, is_realized: bool) -> Self {
        self.is_realized = Some(is_realized);
        self
    }

    pub fn due_on_or_before(mut self, date: NaiveDate) -> Self {
        self.due_on_or_before = Some(date);
        self
    }
}

#[async_trait]
pub trait ItemListRepository: Send {
    async fn add(&mut self, list: &NewItemList) -> Result<ItemList, RepositoryError>;
    async fn find_by_id(&mut self, id: ItemListId) -> Result<Option<ItemList>, RepositoryError>;
    async fn find(&mut self, filter: &ItemListFilter) -> Result<Vec<ItemList>, RepositoryError>;
    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemList>, RepositoryError>;
    /// Writes back the changes recorded in [`ItemList::changes`]. Fails with
    /// `NotFound` when the row is gone.
    async fn update(&mut self, list: &ItemList) -> Result<(), RepositoryError>;
    async fn remove(&mut self, id: ItemListId) -> Result<bool, RepositoryError>;
}
