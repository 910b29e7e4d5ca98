// Application state (AppState)

use crate::security::auth_gate::AuthGate;
use crate::stores::user_store::{StoreHandle, UserStore};
use crate::utils::time::{Clock, SystemClock};
use std::sync::Arc;

/// Shared application state
///
/// Handed to the router at construction time. All fields are wrapped in Arc
/// for cheap cloning across request tasks.
#[derive(Clone)]
pub struct AppState {
    /// Active user store; swapped wholesale, never edited in place
    pub users: Arc<StoreHandle>,

    /// Bearer token check shared by every protected route
    pub auth_gate: Arc<AuthGate>,
}

impl AppState {
    pub fn new(store: UserStore) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: UserStore, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Arc::new(StoreHandle::new(store)),
            auth_gate: Arc::new(AuthGate::new(clock)),
        }
    }
}
