//! Filter predicates accepted by the list operation.

use crate::user::User;

/// Optional predicates applied conjunctively when listing records.
///
/// An absent predicate places no constraint; age bounds are inclusive and
/// the name match is exact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl UserFilter {
    /// Whether `user` satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        self.name.as_ref().is_none_or(|name| user.name == *name)
            && self.min_age.is_none_or(|min| user.age >= min)
            && self.max_age.is_none_or(|max| user.age <= max)
    }
}
