use chrono::{DateTime, SubsecRound, Utc};

use super::errors::ItemError;
use crate::domain::shared::value_objects::{ItemId, ItemListId, UserId};

/// A line on a shopping list.
///
/// The item points at its owner directly through `user_id`; `item_list_id`
/// is a plain reference that the store does not constrain.
///
/// Quantity and bought state are private and change only through
/// [`Item::change_quantity`], [`Item::mark_bought`] and [`Item::mark_not_bought`].
///
/// ```compile_fail
/// # use business::domain::item::model::Item;
/// fn bump(item: &mut Item) {
///     item.quantity += 1;
/// }
/// ```
///
/// Repositories persist only what those methods recorded in [`Item::changes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    user_id: UserId,
    item_list_id: ItemListId,
    creation_date: DateTime<Utc>,
    quantity: i32,
    is_bought: bool,
    changes: ItemChanges,
}

/// State changed since the item was loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemChanges {
    quantity: Option<i32>,
    is_bought: Option<bool>,
}

impl ItemChanges {
    pub fn quantity(&self) -> Option<i32> {
        self.quantity
    }

    pub fn is_bought(&self) -> Option<bool> {
        self.is_bought
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.is_bought.is_none()
    }
}

impl Item {
    /// Constructor for data already persisted in the repository (no validation).
    /// The result carries no pending changes.
    pub fn from_repository(
        id: ItemId,
        user_id: UserId,
        item_list_id: ItemListId,
        creation_date: DateTime<Utc>,
        quantity: i32,
        is_bought: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            item_list_id,
            creation_date,
            quantity,
            is_bought,
            changes: ItemChanges::default(),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn item_list_id(&self) -> ItemListId {
        self.item_list_id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn is_bought(&self) -> bool {
        self.is_bought
    }

    pub fn changes(&self) -> ItemChanges {
        self.changes
    }

    pub fn change_quantity(&mut self, quantity: i32) -> Result<(), ItemError> {
        ensure_positive(quantity)?;
        self.quantity = quantity;
        self.changes.quantity = Some(quantity);
        Ok(())
    }

    pub fn mark_bought(&mut self) {
        self.is_bought = true;
        self.changes.is_bought = Some(true);
    }

    pub fn mark_not_bought(&mut self) {
        self.is_bought = false;
        self.changes.is_bought = Some(false);
    }
}

/// An item that has not been stored yet. Items always start not bought.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    user_id: UserId,
    item_list_id: ItemListId,
    creation_date: DateTime<Utc>,
    quantity: i32,
}

impl NewItem {
    pub fn new(
        user_id: UserId,
        item_list_id: ItemListId,
        creation_date: DateTime<Utc>,
        quantity: i32,
    ) -> Result<Self, ItemError> {
        ensure_positive(quantity)?;

        Ok(Self {
            user_id,
            item_list_id,
            creation_date: creation_date.trunc_subsecs(6),
            quantity,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn item_list_id(&self) -> ItemListId {
        self.item_list_id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

fn ensure_positive(quantity: i32) -> Result<(), ItemError> {
    if quantity <= 0 {
        return Err(ItemError::InvalidQuantity);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stored_item(quantity: i32, is_bought: bool) -> Item {
        Item::from_repository(
            ItemId::new(1),
            UserId::new(1),
            ItemListId::new(1),
            Utc::now(),
            quantity,
            is_bought,
        )
    }

    #[test]
    fn should_create_new_item_when_quantity_positive() {
        let item = NewItem::new(UserId::new(1), ItemListId::new(2), Utc::now(), 3).unwrap();

        assert_eq!(item.item_list_id(), ItemListId::new(2));
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn should_reject_new_item_with_zero_quantity() {
        let result = NewItem::new(UserId::new(1), ItemListId::new(2), Utc::now(), 0);

        assert!(matches!(result, Err(ItemError::InvalidQuantity)));
    }

    #[test]
    fn should_mark_bought_and_back() {
        let mut item = stored_item(1, false);

        item.mark_bought();
        assert!(item.is_bought());

        item.mark_not_bought();
        assert!(!item.is_bought());
    }

    #[test]
    fn should_keep_quantity_when_change_rejected() {
        let mut item = stored_item(4, false);

        let result = item.change_quantity(-2);

        assert!(matches!(result, Err(ItemError::InvalidQuantity)));
        assert_eq!(item.quantity(), 4);
        assert!(item.changes().is_empty());
    }

    #[test]
    fn should_record_only_behaviour_changes() {
        let mut item = stored_item(-7, true);
        assert!(item.changes().is_empty());

        item.change_quantity(2).unwrap();

        assert_eq!(item.changes().quantity(), Some(2));
        assert_eq!(item.changes().is_bought(), None);
    }

    proptest! {
        #[test]
        fn accepts_any_positive_quantity(quantity in 1..=i32::MAX) {
            let mut item = stored_item(1, false);
            prop_assert!(item.change_quantity(quantity).is_ok());
            prop_assert_eq!(item.quantity(), quantity);
        }

        #[test]
        fn rejects_any_non_positive_quantity(quantity in i32::MIN..=0) {
            let result = NewItem::new(UserId::new(1), ItemListId::new(1), Utc::now(), quantity);
            prop_assert!(result.is_err());
        }
    }
}
