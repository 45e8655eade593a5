use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use business::domain::item_list::model::ItemList;
use business::domain::shared::value_objects::{ItemListId, UserId};

#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct ItemListEntity {
    pub id: i64,
    pub user_id: i64,
    pub creation_date: DateTime<Utc>,
    pub due_to: Option<NaiveDate>,
    pub is_realized: bool,
}

impl ItemListEntity {
    pub fn into_domain(self) -> ItemList {
        ItemList::from_repository(
            ItemListId::new(self.id),
            UserId::new(self.user_id),
            self.creation_date,
            self.due_to,
            self.is_realized,
        )
    }
}
