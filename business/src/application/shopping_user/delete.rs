use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;
use crate::domain::shopping_user::errors::ShoppingUserError;
use crate::domain::shopping_user::use_cases::delete::{
    DeleteShoppingUserParams, DeleteShoppingUserUseCase,
};

pub struct DeleteShoppingUserUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingUserUseCase for DeleteShoppingUserUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingUserParams) -> Result<(), ShoppingUserError> {
        self.logger
            .info(&format!("Deleting shopping user: {}", params.user_id));

        let mut session = self.sessions.begin().await?;
        // Lists, items and pictures go with the user (ON DELETE CASCADE)
        if !session.users().remove(params.user_id).await? {
            return Err(ShoppingUserError::NotFound);
        }
        session.commit().await?;

        self.logger
            .info(&format!("Shopping user deleted: {}", params.user_id));
        Ok(())
    }
}
