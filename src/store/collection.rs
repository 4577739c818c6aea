use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::Id;
use super::ids::IdAllocator;

/// Field-by-field merge of a partial payload into a stored record.
/// Only the fields the patch carries are overwritten.
pub trait Patch<T> {
    fn apply(self, record: &mut T);
}

/// Records scoped to one user and one calendar day.
pub trait UserDated {
    fn user_id(&self) -> Id;
    fn date(&self) -> NaiveDate;
}

/// Keyed collection for one entity kind. Ids only grow, so iterating the
/// map yields records in insertion order.
#[derive(Debug)]
pub struct Collection<T> {
    ids: IdAllocator,
    records: BTreeMap<Id, T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            ids: IdAllocator::default(),
            records: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn insert(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let id = self.ids.next();
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    pub fn get(&self, id: Id) -> Option<T> {
        self.records.get(&id).cloned()
    }

    pub fn update<P: Patch<T>>(&mut self, id: Id, patch: P) -> Option<T> {
        let record = self.records.get_mut(&id)?;
        patch.apply(record);
        Some(record.clone())
    }

    pub fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }
}

impl<T: Clone + UserDated> Collection<T> {
    /// Records of `user_id`, most recent day first. Same-day records keep
    /// insertion order.
    pub fn for_user(&self, user_id: Id) -> Vec<T> {
        self.newest_first(|r| r.user_id() == user_id)
    }

    /// Like [`Collection::for_user`], limited to `start..=end`.
    pub fn for_user_in_range(&self, user_id: Id, start: NaiveDate, end: NaiveDate) -> Vec<T> {
        let range = start..=end;
        self.newest_first(|r| r.user_id() == user_id && range.contains(&r.date()))
    }

    /// First record inserted for `user_id` on `day`.
    pub fn first_on_day(&self, user_id: Id, day: NaiveDate) -> Option<T> {
        self.iter()
            .find(|r| r.user_id() == user_id && r.date() == day)
            .cloned()
    }

    fn newest_first(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut matched: Vec<T> = self.iter().filter(|r| keep(r)).cloned().collect();
        // stable: ties stay in insertion order
        matched.sort_by(|a, b| b.date().cmp(&a.date()));
        matched
    }
}
