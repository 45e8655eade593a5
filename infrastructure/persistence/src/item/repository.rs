use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item::model::{Item, NewItem};
use business::domain::item::repository::{ItemFilter, ItemRepository};
use business::domain::shared::value_objects::{ItemId, ItemListId, UserId};

use super::entity::ItemEntity;
use crate::error::map_sqlx_error;
use crate::schema::ITEMS;
use crate::session::PgSession;

fn select_items(filter: &ItemFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("{} WHERE TRUE", ITEMS.select_statement()));
    if let Some(user_id) = filter.user_id {
        query.push(r#" AND "UserId" = "#).push_bind(user_id.value());
    }
    if let Some(item_list_id) = filter.item_list_id {
        query
            .push(r#" AND "ItemListId" = "#)
            .push_bind(item_list_id.value());
    }
    if let Some(is_bought) = filter.is_bought {
        query.push(r#" AND "IsBought" = "#).push_bind(is_bought);
    }
    query.push(r#" ORDER BY "CreationDate", "Id""#);
    query
}

#[async_trait]
impl ItemRepository for PgSession {
    async fn add(&mut self, item: &NewItem) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(&ITEMS.insert_statement())
            .bind(item.user_id().value())
            .bind(item.item_list_id().value())
            .bind(item.creation_date())
            .bind(item.quantity())
            .bind(false)
            .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn find_by_id(&mut self, id: ItemId) -> Result<Option<Item>, RepositoryError> {
        let sql = format!(r#"{} WHERE "Id" = $1"#, ITEMS.select_statement());
        let entity = sqlx::query_as::<_, ItemEntity>(&sql)
            .bind(id.value())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find(&mut self, filter: &ItemFilter) -> Result<Vec<Item>, RepositoryError> {
        let mut query = select_items(filter);
        let entities = query
            .build_query_as::<ItemEntity>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn by_list(&mut self, item_list_id: ItemListId) -> Result<Vec<Item>, RepositoryError> {
        ItemRepository::find(self, &ItemFilter::in_list(item_list_id)).await
    }

    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<Item>, RepositoryError> {
        let filter = ItemFilter {
            user_id: Some(user_id),
            ..ItemFilter::default()
        };
        ItemRepository::find(self, &filter).await
    }

    async fn update(&mut self, item: &Item) -> Result<(), RepositoryError> {
        let changes = item.changes();
        let result = sqlx::query(&ITEMS.update_statement())
            .bind(changes.quantity().is_some())
            .bind(changes.quantity())
            .bind(changes.is_bought().is_some())
            .bind(changes.is_bought())
            .bind(item.id().value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&mut self, id: ItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "Items" WHERE "Id" = $1"#)
            .bind(id.value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_by_list(&mut self, item_list_id: ItemListId) -> Result<u64, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "Items" WHERE "ItemListId" = $1"#)
            .bind(item_list_id.value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_filter_unbought_items_of_list() {
        let query = select_items(&ItemFilter::in_list(ItemListId::new(3)).bought(false));

        assert!(query.sql().ends_with(
            r#"WHERE TRUE AND "ItemListId" = $1 AND "IsBought" = $2 ORDER BY "CreationDate", "Id""#
        ));
    }
}
