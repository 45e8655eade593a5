use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_user::errors::ShoppingUserError;

pub struct DeleteShoppingUserParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait DeleteShoppingUserUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShoppingUserParams) -> Result<(), ShoppingUserError>;
}
