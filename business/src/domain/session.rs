use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item_list::repository::ItemListRepository;
use crate::domain::item_picture::repository::ItemPictureRepository;
use crate::domain::shopping_user::repository::ShoppingUserRepository;

/// Unit of work over the shopping list store.
///
/// One session is one connection and one transaction, used by a single
/// caller. Rows added through the collections get their store-assigned ids
/// immediately but only become visible to other sessions after
/// [`commit`](ShoppingListSession::commit). Dropping a session without
/// committing rolls everything back.
#[async_trait]
pub trait ShoppingListSession: Send {
    fn users(&mut self) -> &mut dyn ShoppingUserRepository;
    fn lists(&mut self) -> &mut dyn ItemListRepository;
    fn items(&mut self) -> &mut dyn ItemRepository;
    fn pictures(&mut self) -> &mut dyn ItemPictureRepository;

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError>;
    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError>;
}

/// Opens sessions. Implementations are built from an explicit connection
/// descriptor; there is no default store.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn ShoppingListSession>, RepositoryError>;
}
