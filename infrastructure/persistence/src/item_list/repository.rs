use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item_list::model::{ItemList, NewItemList};
use business::domain::item_list::repository::{ItemListFilter, ItemListRepository};
use business::domain::shared::value_objects::{ItemListId, UserId};

use super::entity::ItemListEntity;
use crate::error::map_sqlx_error;
use crate::schema::LISTS;
use crate::session::PgSession;

fn select_lists(filter: &ItemListFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("{} WHERE TRUE", LISTS.select_statement()));
    if let Some(user_id) = filter.user_id {
        query.push(r#" AND "UserId" = "#).push_bind(user_id.value());
    }
    if let Some(is_realized) = filter.is_realized {
        query.push(r#" AND "IsRealized" = "#).push_bind(is_realized);
    }
    if let Some(date) = filter.due_on_or_before {
        query.push(r#" AND "DueTo" <= "#).push_bind(date);
    }
    query.push(r#" ORDER BY "CreationDate", "Id""#);
    query
}

#[async_trait]
impl ItemListRepository for PgSession {
    async fn add(&mut self, list: &NewItemList) -> Result<ItemList, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemListEntity>(&LISTS.insert_statement())
            .bind(list.user_id().value())
            .bind(list.creation_date())
            .bind(list.due_to())
            .bind(false)
            .fetch_one(&mut *self.tx)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn find_by_id(&mut self, id: ItemListId) -> Result<Option<ItemList>, RepositoryError> {
        let sql = format!(r#"{} WHERE "Id" = $1"#, LISTS.select_statement());
        let entity = sqlx::query_as::<_, ItemListEntity>(&sql)
            .bind(id.value())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find(&mut self, filter: &ItemListFilter) -> Result<Vec<ItemList>, RepositoryError> {
        let mut query = select_lists(filter);
        let entities = query
            .build_query_as::<ItemListEntity>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemList>, RepositoryError> {
        ItemListRepository::find(self, &ItemListFilter::for_user(user_id)).await
    }

    async fn update(&mut self, list: &ItemList) -> Result<(), RepositoryError> {
        // Unrecorded state never reaches the row
        let changes = list.changes();
        let result = sqlx::query(&LISTS.update_statement())
            .bind(changes.due_to().is_some())
            .bind(changes.due_to().flatten())
            .bind(changes.is_realized().is_some())
            .bind(changes.is_realized())
            .bind(list.id().value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn remove(&mut self, id: ItemListId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "Lists" WHERE "Id" = $1"#)
            .bind(id.value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
