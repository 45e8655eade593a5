use sqlx::FromRow;

use business::domain::item_picture::model::ItemPicture;
use business::domain::shared::value_objects::{ItemPictureId, UserId};

#[derive(Debug, FromRow)]
#[sqlx(rename_all = "PascalCase")]
pub struct ItemPictureEntity {
    pub id: i64,
    pub user_id: i64,
}

impl ItemPictureEntity {
    pub fn into_domain(self) -> ItemPicture {
        ItemPicture::from_repository(ItemPictureId::new(self.id), UserId::new(self.user_id))
    }
}
