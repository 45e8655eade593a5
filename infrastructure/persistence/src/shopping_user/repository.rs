use std::collections::HashMap;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_user::model::ShoppingUser;
use business::domain::shopping_user::repository::ShoppingUserRepository;

use super::entity::ShoppingUserEntity;
use crate::error::map_sqlx_error;
use crate::item_list::entity::ItemListEntity;
use crate::item_picture::entity::ItemPictureEntity;
use crate::schema::{LISTS, PICTURES, USERS};
use crate::session::PgSession;

impl PgSession {
    /// Attaches lists and pictures to the given user rows, keeping their order.
    async fn with_navigations(
        &mut self,
        users: Vec<ShoppingUserEntity>,
    ) -> Result<Vec<ShoppingUser>, RepositoryError> {
        if users.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<i64> = users.iter().map(|user| user.id).collect();

        let sql = format!(
            r#"{} WHERE "UserId" = ANY($1) ORDER BY "CreationDate", "Id""#,
            LISTS.select_statement()
        );
        let lists = sqlx::query_as::<_, ItemListEntity>(&sql)
            .bind(&ids)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        let sql = format!(
            r#"{} WHERE "UserId" = ANY($1) ORDER BY "Id""#,
            PICTURES.select_statement()
        );
        let pictures = sqlx::query_as::<_, ItemPictureEntity>(&sql)
            .bind(&ids)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        let mut lists_by_user: HashMap<i64, Vec<_>> = HashMap::new();
        for list in lists {
            lists_by_user
                .entry(list.user_id)
                .or_default()
                .push(list.into_domain());
        }
        let mut pictures_by_user: HashMap<i64, Vec<_>> = HashMap::new();
        for picture in pictures {
            pictures_by_user
                .entry(picture.user_id)
                .or_default()
                .push(picture.into_domain());
        }

        Ok(users
            .into_iter()
            .map(|user| {
                ShoppingUser::from_repository(
                    UserId::new(user.id),
                    lists_by_user.remove(&user.id).unwrap_or_default(),
                    pictures_by_user.remove(&user.id).unwrap_or_default(),
                )
            })
            .collect())
    }
}

#[async_trait]
impl ShoppingUserRepository for PgSession {
    async fn add(&mut self) -> Result<ShoppingUser, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingUserEntity>(&USERS.insert_statement())
            .fetch_one(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(ShoppingUser::from_repository(
            UserId::new(entity.id),
            Vec::new(),
            Vec::new(),
        ))
    }

    async fn find_by_id(&mut self, id: UserId) -> Result<Option<ShoppingUser>, RepositoryError> {
        let users = ShoppingUserRepository::find_many(self, &[id]).await?;
        Ok(users.into_iter().next())
    }

    async fn find_many(&mut self, ids: &[UserId]) -> Result<Vec<ShoppingUser>, RepositoryError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        let sql = format!(
            r#"{} WHERE "Id" = ANY($1) ORDER BY "Id""#,
            USERS.select_statement()
        );
        let entities = sqlx::query_as::<_, ShoppingUserEntity>(&sql)
            .bind(&ids)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        self.with_navigations(entities).await
    }

    async fn all(&mut self) -> Result<Vec<ShoppingUser>, RepositoryError> {
        let sql = format!(r#"{} ORDER BY "Id""#, USERS.select_statement());
        let entities = sqlx::query_as::<_, ShoppingUserEntity>(&sql)
            .fetch_all(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        self.with_navigations(entities).await
    }

    async fn remove(&mut self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query(r#"DELETE FROM "Users" WHERE "Id" = $1"#)
            .bind(id.value())
            .execute(&mut *self.tx)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
