use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use business::domain::errors::RepositoryError;
use business::domain::item_picture::model::{ItemPicture, NewItemPicture};
use business::domain::item_picture::repository::{ItemPictureFilter, ItemPictureRepository};
use business::domain::shared::value_objects::{ItemPictureId, UserId};

use super::entity::ItemPictureEntity;
use crate::error::map_sqlx_error;
use crate::schema::PICTURES;
use crate::session::PgSession;

fn select_pictures(filter: &ItemPictureFilter) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(format!("{} WHERE TRUE", PICTURES.select_statement()));
    if let Some(user_id) = filter.user_id {
        query.push(r#" AND "UserId" = "#).push_bind(user_id.value());
    }
    query.push(r#" ORDER BY "Id""#);
    query
}

#[async_trait]
impl ItemPictureRepository for PgSession {
    async fn add(&mut self, picture: &NewItemPicture) -> Result<ItemPicture, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemPictureEntity>(&PICTURES.insert_statement())
            .bind(picture.user_id().value())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.into_domain())
    }

    async fn find_by_id(
        &mut self,
        id: ItemPictureId,
    ) -> Result<Option<ItemPicture>, RepositoryError> {
        let sql = format!(r#"{} WHERE "Id" = $1"#, PICTURES.select_statement());
        let entity = sqlx::query_as::<_, ItemPictureEntity>(&sql)
            .bind(id.value())
            .fetch_optional(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find(
        &mut self,
        filter: &ItemPictureFilter,
    ) -> Result<Vec<ItemPicture>, RepositoryError> {
        let mut query = select_pictures(filter);
        let entities = query
            .build_query_as::<ItemPictureEntity>()
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn by_user(&mut self, user_id: UserId) -> Result<Vec<ItemPicture>, RepositoryError> {
        let filter = ItemPictureFilter {
            user_id: Some(user_id),
        };
        ItemPictureRepository::find(self, &filter).await
    }

    async fn remove(&mut self, id: ItemPictureId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "Pictures" WHERE "Id" = $1"#)
            .bind(id.value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
