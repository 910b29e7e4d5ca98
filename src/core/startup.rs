use tracing::{info, warn};

use crate::core::config::Config;
use crate::stores::user_store::UserStore;

// this runs at boot time
pub fn seed_store(config: &Config) -> UserStore {
    let store = UserStore::with_users(config.users.iter().cloned());

    let duplicates = store.duplicate_ids();
    if !duplicates.is_empty() {
        // Lookups by ID return whichever entry the scan reaches first
        warn!(
            ids = ?duplicates,
            "Seed users share IDs, lookups by these IDs are ambiguous"
        );
    }

    info!(users_loaded = store.len(), "User store seeded");

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;

    #[test]
    fn test_seed_store_from_default_config() {
        let config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        let store = seed_store(&config);

        assert_eq!(store.len(), 1);
        assert_eq!(store.by_id(10).unwrap().username, "sally");
    }

    #[test]
    fn test_seed_store_keeps_duplicate_ids() {
        let mut config = Config::from_toml("[server]\nport = 8080\n").unwrap();
        config.users.push(User::new(10, "sally2", "Sally", "Two", "admin"));

        let store = seed_store(&config);

        assert_eq!(store.len(), 2);
        assert_eq!(store.duplicate_ids(), vec![10]);
    }
}
