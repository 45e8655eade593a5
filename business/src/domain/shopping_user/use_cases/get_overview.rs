use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_user::errors::ShoppingUserError;
use crate::domain::shopping_user::model::ShoppingUser;

pub struct GetShoppingUserOverviewParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetShoppingUserOverviewUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingUserOverviewParams,
    ) -> Result<ShoppingUser, ShoppingUserError>;
}
