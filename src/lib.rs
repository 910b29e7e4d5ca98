pub mod core {
    pub mod config;
    pub mod error;
    pub mod pipeline;
    pub mod routes;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod api {
    pub mod client;
}

pub mod handlers {
    pub mod health;
    pub mod users;
}

pub mod models {
    pub mod user;
}

pub mod security {
    pub mod auth_gate;
    pub mod correlation;
}

pub mod stores {
    pub mod user_store;
}

pub mod utils {
    pub mod auth;
    pub mod time;
}
