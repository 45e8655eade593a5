use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct DeleteItemUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!("Deleting item: {}", params.id));

        let mut session = self.sessions.begin().await?;
        session
            .items()
            .find_by_id(params.id)
            .await?
            .filter(|item| item.user_id() == params.user_id)
            .ok_or(ItemError::NotFound)?;

        session.items().remove(params.id).await?;
        session.commit().await?;

        self.logger.info(&format!("Item deleted: {}", params.id));
        Ok(())
    }
}
