use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::item_list::model::ItemList;
use crate::domain::item_list::use_cases::update::{UpdateItemListParams, UpdateItemListUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct UpdateItemListUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemListUseCase for UpdateItemListUseCaseImpl {
    async fn execute(&self, params: UpdateItemListParams) -> Result<ItemList, ItemListError> {
        self.logger
            .info(&format!("Updating item list: {}", params.id));

        let mut session = self.sessions.begin().await?;
        let mut list = session
            .lists()
            .find_by_id(params.id)
            .await?
            .filter(|list| list.user_id() == params.user_id)
            .ok_or(ItemListError::NotFound)?;

        match params.is_realized {
            Some(true) => list.realize()?,
            Some(false) => list.reopen(),
            None => {}
        }
        if let Some(due_to) = params.due_to {
            list.reschedule(due_to)?;
        }

        session.lists().update(&list).await?;
        session.commit().await?;

        self.logger
            .info(&format!("Item list updated: {}", list.id()));
        Ok(list)
    }
}
