use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item_picture::errors::ItemPictureError;
use crate::domain::item_picture::model::{ItemPicture, NewItemPicture};
use crate::domain::item_picture::use_cases::attach::{
    AttachItemPictureParams, AttachItemPictureUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct AttachItemPictureUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AttachItemPictureUseCase for AttachItemPictureUseCaseImpl {
    async fn execute(
        &self,
        params: AttachItemPictureParams,
    ) -> Result<ItemPicture, ItemPictureError> {
        self.logger
            .info(&format!("Attaching picture for user: {}", params.user_id));

        let mut session = self.sessions.begin().await?;
        let picture = match session
            .pictures()
            .add(&NewItemPicture::new(params.user_id))
            .await
        {
            Ok(picture) => picture,
            Err(e) if e.is_foreign_key_violation() => {
                self.logger.warn(&format!(
                    "Unknown user {} ({})",
                    params.user_id,
                    e.constraint().unwrap_or("unnamed constraint")
                ));
                return Err(ItemPictureError::UserNotFound(e));
            }
            Err(e) => return Err(e.into()),
        };
        session.commit().await?;

        self.logger
            .info(&format!("Picture attached: {}", picture.id()));
        Ok(picture)
    }
}
