use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::{ItemId, ItemListId, UserId};

#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct ItemEntity {
    pub id: i64,
    pub user_id: i64,
    pub item_list_id: i64,
    pub creation_date: DateTime<Utc>,
    pub quantity: i32,
    pub is_bought: bool,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            ItemId::new(self.id),
            UserId::new(self.user_id),
            ItemListId::new(self.item_list_id),
            self.creation_date,
            self.quantity,
            self.is_bought,
        )
    }
}
