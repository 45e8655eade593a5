use sqlx::FromRow;

/// `"Users"` row. The navigations are loaded separately.
#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct ShoppingUserEntity {
    pub id: i64,
}
