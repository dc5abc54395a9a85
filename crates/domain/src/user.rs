//! User — the record this service stores and serves.

use serde::{Deserialize, Serialize};

use crate::error::{RosterError, ValidationError};
use crate::id::UserId;

/// One user record as persisted and served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub age: u32,
}

/// Complete payload for create and replace operations.
///
/// Both fields are mandatory; presence is what counts — an empty name or a
/// zero age is still a supplied field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub age: u32,
}

impl UserDraft {
    /// Check the presence-of-field rule for create/replace payloads.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingNameOrAge`] unless both fields are
    /// supplied.
    pub fn new(name: Option<String>, age: Option<u32>) -> Result<Self, RosterError> {
        match (name, age) {
            (Some(name), Some(age)) => Ok(Self { name, age }),
            _ => Err(ValidationError::MissingNameOrAge.into()),
        }
    }

    /// Materialize a record under the given id.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// Partial update applied on top of an existing record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<String>,
    age: Option<u32>,
}

impl UserPatch {
    /// Check the at-least-one-field rule for partial updates.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUpdate`] when neither field is
    /// supplied.
    pub fn new(name: Option<String>, age: Option<u32>) -> Result<Self, RosterError> {
        if name.is_none() && age.is_none() {
            return Err(ValidationError::EmptyUpdate.into());
        }
        Ok(Self { name, age })
    }

    /// Merge the supplied fields onto `user`; absent fields stay untouched.
    /// The record's id is never part of a patch.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}
