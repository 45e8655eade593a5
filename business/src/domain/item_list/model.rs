use chrono::{DateTime, NaiveDate, SubsecRound, Utc};

use super::errors::ItemListError;
use crate::domain::shared::value_objects::{ItemListId, UserId};

/// A shopping list owned by one user.
///
/// `due_to` and `is_realized` are private state: they can be read through
/// accessors but only change through [`ItemList::realize`],
/// [`ItemList::reopen`] and [`ItemList::reschedule`].
///
/// ```compile_fail
/// # use business::domain::item_list::model::ItemList;
/// fn force_realized(list: &mut ItemList) {
///     list.is_realized = true;
/// }
/// ```
///
/// Every successful call through those methods is recorded in
/// [`ItemList::changes`]. Repositories write back only the recorded changes,
/// so a value built with [`ItemList::from_repository`] persists nothing of
/// its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    id: ItemListId,
    user_id: UserId,
    creation_date: DateTime<Utc>,
    due_to: Option<NaiveDate>,
    is_realized: bool,
    changes: ItemListChanges,
}

/// State changed since the list was loaded. Read-only outside this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemListChanges {
    due_to: Option<Option<NaiveDate>>,
    is_realized: Option<bool>,
}

impl ItemListChanges {
    /// The new due date, `Some(None)` when it was cleared.
    pub fn due_to(&self) -> Option<Option<NaiveDate>> {
        self.due_to
    }

    pub fn is_realized(&self) -> Option<bool> {
        self.is_realized
    }

    pub fn is_empty(&self) -> bool {
        self.due_to.is_none() && self.is_realized.is_none()
    }
}

impl ItemList {
    /// Constructor for data already persisted in the repository (no validation).
    /// The result carries no pending changes.
    pub fn from_repository(
        id: ItemListId,
        user_id: UserId,
        creation_date: DateTime<Utc>,
        due_to: Option<NaiveDate>,
        is_realized: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            creation_date,
            due_to,
            is_realized,
            changes: ItemListChanges::default(),
        }
    }

    pub fn id(&self) -> ItemListId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn due_to(&self) -> Option<NaiveDate> {
        self.due_to
    }

    pub fn is_realized(&self) -> bool {
        self.is_realized
    }

    pub fn changes(&self) -> ItemListChanges {
        self.changes
    }

    pub fn realize(&mut self) -> Result<(), ItemListError> {
        if self.is_realized {
            return Err(ItemListError::AlreadyRealized);
        }
        self.is_realized = true;
        self.changes.is_realized = Some(true);
        Ok(())
    }

    pub fn reopen(&mut self) {
        self.is_realized = false;
        self.changes.is_realized = Some(false);
    }

    /// Moves the due date. `None` clears it.
    pub fn reschedule(&mut self, due_to: Option<NaiveDate>) -> Result<(), ItemListError> {
        ensure_due_after_creation(self.creation_date, due_to)?;
        self.due_to = due_to;
        self.changes.due_to = Some(due_to);
        Ok(())
    }
}

/// A list that has not been stored yet. Lists always start unrealized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemList {
    user_id: UserId,
    creation_date: DateTime<Utc>,
    due_to: Option<NaiveDate>,
}

impl NewItemList {
    pub fn new(
        user_id: UserId,
        creation_date: DateTime<Utc>,
        due_to: Option<NaiveDate>,
    ) -> Result<Self, ItemListError> {
        ensure_due_after_creation(creation_date, due_to)?;

        // timestamptz keeps microseconds
        Ok(Self {
            user_id,
            creation_date: creation_date.trunc_subsecs(6),
            due_to,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.creation_date
    }

    pub fn due_to(&self) -> Option<NaiveDate> {
        self.due_to
    }
}

fn ensure_due_after_creation(
    creation_date: DateTime<Utc>,
    due_to: Option<NaiveDate>,
) -> Result<(), ItemListError> {
    match due_to {
        Some(date) if date < creation_date.date_naive() => Err(ItemListError::DueBeforeCreation),
        _ => Ok(()),
    }
}
