//! Collection — the full ordered set of records persisted together.

use serde::{Deserialize, Serialize};

use crate::error::{NotFoundError, RosterError};
use crate::filter::UserFilter;
use crate::id::UserId;
use crate::user::{User, UserDraft, UserPatch};

/// The ordered record collection, serialized at rest as a bare JSON array.
///
/// Order reflects insertion history and carries no semantic guarantee;
/// every lookup goes by id. Mutations uphold two invariants: ids stay
/// unique, and an existing record's id is never altered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    users: Vec<User>,
}

impl Collection {
    /// Empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All records, in stored order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Records satisfying `filter`, cloned in stored order.
    #[must_use]
    pub fn filtered(&self, filter: &UserFilter) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect()
    }

    /// The record with the given id.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Next id to assign: one past the highest id present, [`UserId::FIRST`]
    /// when empty, `None` when the highest id has no successor. Deriving
    /// from the maximum rather than the last element keeps ids unique even
    /// if the stored array was reordered externally.
    fn next_id(&self) -> Option<UserId> {
        self.users
            .iter()
            .map(|user| user.id)
            .max()
            .map_or(Some(UserId::FIRST), UserId::next)
    }

    /// Append a new record built from `draft` under the next id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::IdsExhausted`] when a stored record already
    /// carries the highest representable id.
    pub fn insert(&mut self, draft: UserDraft) -> Result<User, RosterError> {
        let id = self.next_id().ok_or(RosterError::IdsExhausted)?;
        let user = draft.into_user(id);
        self.users.push(user.clone());
        Ok(user)
    }

    /// Overwrite `name` and `age` of the record with `id`, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no record carries `id`.
    pub fn replace(&mut self, id: UserId, draft: UserDraft) -> Result<User, NotFoundError> {
        let user = self.find_mut(id)?;
        *user = draft.into_user(id);
        Ok(user.clone())
    }

    /// Merge the supplied patch fields onto the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no record carries `id`.
    pub fn patch(&mut self, id: UserId, patch: UserPatch) -> Result<User, NotFoundError> {
        let user = self.find_mut(id)?;
        patch.apply(user);
        Ok(user.clone())
    }

    /// Remove the record with `id`, returning its pre-deletion value.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no record carries `id`.
    pub fn remove(&mut self, id: UserId) -> Result<User, NotFoundError> {
        let index = self
            .users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| NotFoundError::new(id))?;
        Ok(self.users.remove(index))
    }

    fn find_mut(&mut self, id: UserId) -> Result<&mut User, NotFoundError> {
        self.users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| NotFoundError::new(id))
    }
}

impl From<Vec<User>> for Collection {
    fn from(users: Vec<User>) -> Self {
        Self { users }
    }
}
