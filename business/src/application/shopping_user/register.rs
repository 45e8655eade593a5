use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;
use crate::domain::shopping_user::errors::ShoppingUserError;
use crate::domain::shopping_user::model::ShoppingUser;
use crate::domain::shopping_user::use_cases::register::RegisterShoppingUserUseCase;

pub struct RegisterShoppingUserUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterShoppingUserUseCase for RegisterShoppingUserUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingUser, ShoppingUserError> {
        self.logger.info("Registering shopping user");

        let mut session = self.sessions.begin().await?;
        let user = session.users().add().await?;
        session.commit().await?;

        self.logger
            .info(&format!("Shopping user registered: {}", user.id()));
        Ok(user)
    }
}
