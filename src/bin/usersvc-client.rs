// Consumer: fetch one user from a running provider

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::{error, info};
use usersvc::api::client::ApiClient;
use usersvc::core::config::{ClientConfig, LoggingConfig};
use usersvc::utils::time::current_minute_token;

/// usersvc-client [user-id] [config.toml]
#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let id: i64 = match args.get(1) {
        Some(raw) => raw
            .parse()
            .context(format!("Invalid user id '{}'", raw))?,
        None => 10,
    };

    let (client_config, logging) = match args.get(2) {
        Some(path) => {
            let config = usersvc::core::config::Config::from_file(&PathBuf::from(path))?;
            (config.client, config.logging)
        }
        None => (ClientConfig::default(), LoggingConfig::default()),
    };

    usersvc::core::tracing_init::init_tracing(&logging)?;

    let token = client_config
        .token
        .clone()
        .unwrap_or_else(current_minute_token);

    let client = ApiClient::from_config(&client_config)
        .context("Failed to create API client")?
        .with_token(token);

    info!(base_url = %client.base_url(), user_id = id, "Fetching user");

    match client.get_user(id).await {
        Ok(user) => {
            info!(
                user_id = user.id,
                username = %user.username,
                first_name = %user.first_name,
                last_name = %user.last_name,
                user_type = %user.user_type,
                "User fetched"
            );
            Ok(())
        }
        Err(e) => {
            error!(user_id = id, error = %e, "Failed to fetch user");
            Err(e).context(format!("GET /user/{} failed", id))
        }
    }
}
