use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item_picture::errors::ItemPictureError;
use crate::domain::item_picture::use_cases::delete::{
    DeleteItemPictureParams, DeleteItemPictureUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct DeleteItemPictureUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemPictureUseCase for DeleteItemPictureUseCaseImpl {
    async fn execute(&self, params: DeleteItemPictureParams) -> Result<(), ItemPictureError> {
        self.logger.info(&format!("Deleting picture: {}", params.id));

        let mut session = self.sessions.begin().await?;
        session
            .pictures()
            .find_by_id(params.id)
            .await?
            .filter(|picture| picture.user_id() == params.user_id)
            .ok_or(ItemPictureError::NotFound)?;

        session.pictures().remove(params.id).await?;
        session.commit().await?;

        self.logger.info(&format!("Picture deleted: {}", params.id));
        Ok(())
    }
}
