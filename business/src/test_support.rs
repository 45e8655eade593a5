use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::{ItemFilter, ItemRepository};
use crate::domain::item_list::model::{ItemList, NewItemList};
use crate::domain::item_list::repository::{ItemListFilter, ItemListRepository};
use crate::domain::item_picture::model::{ItemPicture, NewItemPicture};
use crate::domain::item_picture::repository::{ItemPictureFilter, ItemPictureRepository};
use crate::domain::logger::Logger;
use crate::domain::session::{SessionFactory, ShoppingListSession};
use crate::domain::shared::value_objects::{ItemId, ItemListId, ItemPictureId, UserId};
use crate::domain::shopping_user::model::ShoppingUser;
use crate::domain::shopping_user::repository::ShoppingUserRepository;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl ShoppingUserRepository for UserRepo {
        async fn add(&mut self) -> Result<ShoppingUser, RepositoryError>;
        async fn find_by_id(&mut self, id: UserId) -> Result<Option<ShoppingUser>, RepositoryError>;
        async fn find_many(&mut self, ids: &[UserId]) -> Result<Vec<ShoppingUser>, RepositoryError>;
        async fn all(&mut self) -> Result<Vec<ShoppingUser>, RepositoryError>;
        async fn remove(&mut self, id: UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ListRepo {}

    #[async_trait]
    impl ItemListRepository for ListRepo {
        async fn add(&mut self, list: &NewItemList) -> Result<ItemList, RepositoryError>;
        async fn find_by_id(&mut self, id: ItemListId) -> Result<Option<ItemList>, RepositoryError>;
        async fn find(&mut self, filter: &ItemListFilter) -> Result<Vec<ItemList>, RepositoryError>;
        async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemList>, RepositoryError>;
        async fn update(&mut self, list: &ItemList) -> Result<(), RepositoryError>;
        async fn remove(&mut self, id: ItemListId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
        async fn add(&mut self, item: &NewItem) -> Result<Item, RepositoryError>;
        async fn find_by_id(&mut self, id: ItemId) -> Result<Option<Item>, RepositoryError>;
        async fn find(&mut self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError>;
        async fn by_list(&mut self, item_list_id: ItemListId) -> Result<Vec<Item>, RepositoryError>;
        async fn by_user(&mut self, user_id: UserId) -> Result<Vec<Item>, RepositoryError>;
        async fn update(&mut self, item: &Item) -> Result<(), RepositoryError>;
        async fn remove(&mut self, id: ItemId) -> Result<bool, RepositoryError>;
        async fn remove_by_list(&mut self, item_list_id: ItemListId) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub PictureRepo {}

    #[async_trait]
    impl ItemPictureRepository for PictureRepo {
        async fn add(&mut self, picture: &NewItemPicture) -> Result<ItemPicture, RepositoryError>;
        async fn find_by_id(&mut self, id: ItemPictureId) -> Result<Option<ItemPicture>, RepositoryError>;
        async fn find(&mut self, filter: &ItemPictureFilter) -> Result<Vec<ItemPicture>, RepositoryError>;
        async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemPicture>, RepositoryError>;
        async fn remove(&mut self, id: ItemPictureId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Session wired from mocked collections. Set expectations on the public
/// fields, then hand it to a [`FakeSessionFactory`].
#[derive(Default)]
pub struct FakeSession {
    pub users: MockUserRepo,
    pub lists: MockListRepo,
    pub items: MockItemRepo,
    pub pictures: MockPictureRepo,
    committed: Arc<AtomicBool>,
}

#[async_trait]
impl ShoppingListSession for FakeSession {
    fn users(&mut self) -> &mut dyn ShoppingUserRepository {
        &mut self.users
    }

    fn lists(&mut self) -> &mut dyn ItemListRepository {
        &mut self.lists
    }

    fn items(&mut self) -> &mut dyn ItemRepository {
        &mut self.items
    }

    fn pictures(&mut self) -> &mut dyn ItemPictureRepository {
        &mut self.pictures
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        self.committed.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// Hands out its single session once.
pub struct FakeSessionFactory {
    session: Mutex<Option<FakeSession>>,
    committed: Arc<AtomicBool>,
}

impl FakeSessionFactory {
    pub fn new(session: FakeSession) -> Arc<Self> {
        let committed = session.committed.clone();
        Arc::new(Self {
            session: Mutex::new(Some(session)),
            committed,
        })
    }

    pub fn committed(&self) -> bool {
        self.committed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionFactory for FakeSessionFactory {
    async fn begin(&self) -> Result<Box<dyn ShoppingListSession>, RepositoryError> {
        let session = self
            .session
            .lock()
            .unwrap()
            .take()
            .expect("session already handed out");
        Ok(Box::new(session))
    }
}

pub fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 9, 30, 0).unwrap()
}

pub fn stored_list(id: i64, user_id: i64, is_realized: bool) -> ItemList {
    ItemList::from_repository(
        ItemListId::new(id),
        UserId::new(user_id),
        t0(),
        None,
        is_realized,
    )
}

pub fn stored_item(id: i64, user_id: i64, list_id: i64, quantity: i32) -> Item {
    Item::from_repository(
        ItemId::new(id),
        UserId::new(user_id),
        ItemListId::new(list_id),
        t0(),
        quantity,
        false,
    )
}

pub fn driver_error(message: &str) -> RepositoryError {
    RepositoryError::DatabaseError(message.to_string().into())
}
