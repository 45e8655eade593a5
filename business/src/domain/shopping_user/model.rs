use crate::domain::item_list::model::ItemList;
use crate::domain::item_picture::model::ItemPicture;
use crate::domain::shared::value_objects::{ItemListId, UserId};

/// A user together with the lists and pictures that reference it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingUser {
    id: UserId,
    lists: Vec<ItemList>,
    pictures: Vec<ItemPicture>,
}

impl ShoppingUser {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: UserId, lists: Vec<ItemList>, pictures: Vec<ItemPicture>) -> Self {
        Self {
            id,
            lists,
            pictures,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn lists(&self) -> &[ItemList] {
        &self.lists
    }

    pub fn pictures(&self) -> &[ItemPicture] {
        &self.pictures
    }

    pub fn list(&self, id: ItemListId) -> Option<&ItemList> {
        self.lists.iter().find(|list| list.id() == id)
    }

    /// Lists that have not been realized yet.
    pub fn open_lists(&self) -> impl Iterator<Item = &ItemList> {
        self.lists.iter().filter(|list| !list.is_realized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn list(id: i64, is_realized: bool) -> ItemList {
        ItemList::from_repository(
            ItemListId::new(id),
            UserId::new(1),
            Utc::now(),
            None,
            is_realized,
        )
    }

    #[test]
    fn should_find_list_by_id() {
        let user = ShoppingUser::from_repository(
            UserId::new(1),
            vec![list(1, false), list(2, true)],
            vec![],
        );

        assert_eq!(
            user.list(ItemListId::new(2)).map(|l| l.id()),
            Some(ItemListId::new(2))
        );
        assert!(user.list(ItemListId::new(3)).is_none());
    }

    #[test]
    fn should_only_yield_open_lists() {
        let user = ShoppingUser::from_repository(
            UserId::new(1),
            vec![list(1, false), list(2, true), list(3, false)],
            vec![],
        );

        let open: Vec<ItemListId> = user.open_lists().map(|l| l.id()).collect();

        assert_eq!(open, vec![ItemListId::new(1), ItemListId::new(3)]);
    }
}
