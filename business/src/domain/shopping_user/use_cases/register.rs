use async_trait::async_trait;

use crate::domain::shopping_user::errors::ShoppingUserError;
use crate::domain::shopping_user::model::ShoppingUser;

#[async_trait]
pub trait RegisterShoppingUserUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingUser, ShoppingUserError>;
}
