use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::SessionFactory;

pub struct UpdateItemUseCaseImpl {
    pub sessions: Arc<dyn SessionFactory>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        let mut session = self.sessions.begin().await?;
        let mut item = session
            .items()
            .find_by_id(params.id)
            .await?
            .filter(|item| item.user_id() == params.user_id)
            .ok_or(ItemError::NotFound)?;

        if let Some(quantity) = params.quantity {
            item.change_quantity(quantity)?;
        }
        match params.is_bought {
            Some(true) => item.mark_bought(),
            Some(false) => item.mark_not_bought(),
            None => {}
        }

        session.items().update(&item).await?;
        session.commit().await?;

        self.logger.info(&format!("Item updated: {}", item.id()));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{ItemId, UserId};
    use crate::test_support::{FakeSession, FakeSessionFactory, mock_logger, stored_item};

    fn params(quantity: Option<i32>, is_bought: Option<bool>) -> UpdateItemParams {
        UpdateItemParams {
            id: ItemId::new(8),
            user_id: UserId::new(1),
            quantity,
            is_bought,
        }
    }

    #[tokio::test]
    async fn should_toggle_bought_status() {
        let mut session = FakeSession::default();
        session
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_item(8, 1, 2, 3))));
        session
            .items
            .expect_update()
            .withf(|item| {
                item.changes().is_bought() == Some(true) && item.changes().quantity().is_none()
            })
            .times(1)
            .returning(|_| Ok(()));
        let factory = FakeSessionFactory::new(session);

        let use_case = UpdateItemUseCaseImpl {
            sessions: factory.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None, Some(true))).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_bought());
        assert!(factory.committed());
    }

    #[tokio::test]
    async fn should_change_quantity() {
        let mut session = FakeSession::default();
        session
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_item(8, 1, 2, 3))));
        session.items.expect_update().returning(|_| Ok(()));

        let use_case = UpdateItemUseCaseImpl {
            sessions: FakeSessionFactory::new(session),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some(6), None)).await;

        assert_eq!(result.unwrap().quantity(), 6);
    }

    #[tokio::test]
    async fn should_reject_invalid_quantity() {
        let mut session = FakeSession::default();
        session
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_item(8, 1, 2, 3))));
        session.items.expect_update().never();

        let use_case = UpdateItemUseCaseImpl {
            sessions: FakeSessionFactory::new(session),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(Some(0), Some(true))).await;

        assert!(matches!(result.unwrap_err(), ItemError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanished() {
        let mut session = FakeSession::default();
        session
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_item(8, 1, 2, 3))));
        session
            .items
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));
        let factory = FakeSessionFactory::new(session);

        let use_case = UpdateItemUseCaseImpl {
            sessions: factory.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(None, Some(false))).await;

        assert!(matches!(
            result.unwrap_err(),
            ItemError::Repository(RepositoryError::NotFound)
        ));
        assert!(!factory.committed());
    }
}
