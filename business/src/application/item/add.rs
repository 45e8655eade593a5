use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::use_cases::add::{AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct AddItemUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Adding item to list: {}", params.item_list_id));

        let new_item = NewItem::new(
            params.user_id,
            params.item_list_id,
            Utc::now(),
            params.quantity,
        )?;

        let mut session = self.sessions.begin().await?;

        // The store does not constrain ItemListId, the list is checked here
        let list_exists = session
            .lists()
            .find_by_id(params.item_list_id)
            .await?
            .is_some_and(|list| list.user_id() == params.user_id);
        if !list_exists {
            self.logger.warn(&format!(
                "Item list {} not found for user {}",
                params.item_list_id, params.user_id
            ));
            return Err(ItemError::ListNotFound);
        }

        let item = session.items().add(&new_item).await?;
        session.commit().await?;

        self.logger.info(&format!("Item added: {}", item.id()));
        Ok(item)
    }
}
