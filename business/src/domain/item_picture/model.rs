use crate::domain::shared::value_objects::{ItemPictureId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemPicture {
    id: ItemPictureId,
    user_id: UserId,
}

impl ItemPicture {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: ItemPictureId, user_id: UserId) -> Self {
        Self { id, user_id }
    }

    pub fn id(&self) -> ItemPictureId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemPicture {
    user_id: UserId,
}

impl NewItemPicture {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
