use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::item_list::model::{ItemList, NewItemList};
use crate::domain::item_list::use_cases::create::{CreateItemListParams, CreateItemListUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct CreateItemListUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemListUseCase for CreateItemListUseCaseImpl {
    async fn execute(&self, params: CreateItemListParams) -> Result<ItemList, ItemListError> {
        self.logger
            .info(&format!("Creating item list for user: {}", params.user_id));

        let new_list = NewItemList::new(params.user_id, Utc::now(), params.due_to)?;

        let mut session = self.sessions.begin().await?;
        let list = session.lists().add(&new_list).await?;
        session.commit().await?;

        self.logger
            .info(&format!("Item list created: {}", list.id()));
        Ok(list)
    }
}
