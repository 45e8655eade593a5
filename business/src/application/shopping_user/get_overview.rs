use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;
use crate::domain::shopping_user::errors::ShoppingUserError;
use crate::domain::shopping_user::model::ShoppingUser;
use crate::domain::shopping_user::use_cases::get_overview::{
    GetShoppingUserOverviewParams, GetShoppingUserOverviewUseCase,
};

pub struct GetShoppingUserOverviewUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingUserOverviewUseCase for GetShoppingUserOverviewUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingUserOverviewParams,
    ) -> Result<ShoppingUser, ShoppingUserError> {
        self.logger
            .info(&format!("Loading shopping user: {}", params.user_id));

        let mut session = self.sessions.begin().await?;
        let user = session
            .users()
            .find_by_id(params.user_id)
            .await?
            .ok_or(ShoppingUserError::NotFound)?;
        session.commit().await?;

        self.logger.info(&format!(
            "Shopping user {} has {} lists and {} pictures",
            user.id(),
            user.lists().len(),
            user.pictures().len()
        ));
        Ok(user)
    }
}
