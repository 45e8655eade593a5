use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item_list::errors::ItemListError;
use crate::domain::item_list::use_cases::delete::{DeleteItemListParams, DeleteItemListUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct DeleteItemListUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemListUseCase for DeleteItemListUseCaseImpl {
    async fn execute(&self, params: DeleteItemListParams) -> Result<(), ItemListError> {
        self.logger
            .info(&format!("Deleting item list: {}", params.id));

        let mut session = self.sessions.begin().await?;
        session
            .lists()
            .find_by_id(params.id)
            .await?
            .filter(|list| list.user_id() == params.user_id)
            .ok_or(ItemListError::NotFound)?;

        // Items.ItemListId carries no foreign key, so the items are removed here
        let removed_items = session.items().remove_by_list(params.id).await?;
        session.lists().remove(params.id).await?;
        session.commit().await?;

        self.logger.info(&format!(
            "Item list deleted: {} ({} items removed)",
            params.id, removed_items
        ));
        Ok(())
    }
}
