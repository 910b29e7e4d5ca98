use crate::models::user::User;
use arc_swap::ArcSwap;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory user repository keyed by username
///
/// A store is populated once when it is built and is read-only afterwards.
/// Scenario changes go through [`StoreHandle::replace`] instead of mutating
/// a store that requests may be reading.
pub struct UserStore {
    users: DashMap<String, Arc<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
        }
    }

    /// Build a store from a seed set
    /// A later user with the same username replaces the earlier one
    pub fn with_users<I>(users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        let users = users.into_iter();
        let store = DashMap::with_capacity(users.size_hint().0);
        for user in users {
            store.insert(user.username.clone(), Arc::new(user));
        }
        Self { users: store }
    }

    /// Find a user by username
    pub fn by_username(&self, username: &str) -> Option<Arc<User>> {
        self.users.get(username).map(|entry| Arc::clone(entry.value()))
    }

    /// Find a user by numeric ID
    /// Note: This is a linear scan; with duplicate IDs the first entry in
    /// iteration order wins
    pub fn by_id(&self, id: i64) -> Option<Arc<User>> {
        self.users
            .iter()
            .find(|entry| entry.value().id == id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Snapshot of every user, in store iteration order
    pub fn all(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|entry| entry.value().as_ref().clone())
            .collect()
    }

    /// IDs that are shared by more than one username, sorted
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for entry in self.users.iter() {
            *counts.entry(entry.value().id).or_default() += 1;
        }

        let mut duplicates: Vec<i64> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id)
            .collect();
        duplicates.sort_unstable();
        duplicates
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<User> for UserStore {
    fn from_iter<I: IntoIterator<Item = User>>(iter: I) -> Self {
        Self::with_users(iter)
    }
}

/// Shared handle to the active user store
///
/// Every request loads one snapshot. `replace` swaps the whole store in a
/// single atomic step, so readers see either the old or the new store.
pub struct StoreHandle {
    current: ArcSwap<UserStore>,
}

impl StoreHandle {
    pub fn new(store: UserStore) -> Self {
        Self {
            current: ArcSwap::from_pointee(store),
        }
    }

    /// Snapshot of the store for the duration of one request
    pub fn current(&self) -> Arc<UserStore> {
        self.current.load_full()
    }

    /// Install a new store and return the one it replaced
    pub fn replace(&self, store: UserStore) -> Arc<UserStore> {
        self.current.swap(Arc::new(store))
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new(UserStore::new())
    }
}
