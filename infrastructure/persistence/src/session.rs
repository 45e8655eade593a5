use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use business::domain::errors::RepositoryError;
use business::domain::item::repository::ItemRepository;
use business::domain::item_list::repository::ItemListRepository;
use business::domain::item_picture::repository::ItemPictureRepository;
use business::domain::session::{SessionFactory, ShoppingListSession};
use business::domain::shopping_user::repository::ShoppingUserRepository;

use crate::db::{DatabaseConfig, DatabaseError, create_postgres_pool};
use crate::error::map_sqlx_error;
use crate::schema::SHOPPING_LIST_SCHEMA;

/// One PostgreSQL transaction exposed through the four collections.
///
/// The repository implementations live next to their entity rows
/// (`shopping_user`, `item_list`, `item`, `item_picture`). Dropping the
/// session without committing rolls the transaction back.
pub struct PgSession {
    pub(crate) tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl ShoppingListSession for PgSession {
    fn users(&mut self) -> &mut dyn ShoppingUserRepository {
        self
    }

    fn lists(&mut self) -> &mut dyn ItemListRepository {
        self
    }

    fn items(&mut self) -> &mut dyn ItemRepository {
        self
    }

    fn pictures(&mut self) -> &mut dyn ItemPictureRepository {
        self
    }

    async fn commit(self: Box<Self>) -> Result<(), RepositoryError> {
        let PgSession { tx } = *self;
        tx.commit().await.map_err(map_sqlx_error)?;
        debug!("transaction committed");
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), RepositoryError> {
        let PgSession { tx } = *self;
        tx.rollback().await.map_err(map_sqlx_error)?;
        debug!("transaction rolled back");
        Ok(())
    }
}

/// Hands out [`PgSession`]s over a verified pool.
#[derive(Clone)]
pub struct PgSessionFactory {
    pool: PgPool,
}

impl PgSessionFactory {
    /// Opens the pool and checks the schema.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = create_postgres_pool(config).await?;
        Self::from_pool(pool).await
    }

    /// Wraps an already-configured pool. The schema is checked all the same.
    pub async fn from_pool(pool: PgPool) -> Result<Self, DatabaseError> {
        SHOPPING_LIST_SCHEMA.validate()?;
        SHOPPING_LIST_SCHEMA.verify(&pool).await?;
        debug!(
            tables = SHOPPING_LIST_SCHEMA.tables.len(),
            "shopping list schema verified"
        );
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SessionFactory for PgSessionFactory {
    async fn begin(&self) -> Result<Box<dyn ShoppingListSession>, RepositoryError> {
        let tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        debug!("transaction begun");
        Ok(Box::new(PgSession { tx }))
    }
}
