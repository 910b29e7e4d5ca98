use crate::models::user::User;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub client: ClientConfig,
    /// Seed records for the user store
    #[serde(default = "default_users")]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Fixed token; when absent the consumer derives the current minute token
    pub token: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            token: None,
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

pub fn default_user_agent() -> String {
    "Admin Service".to_string()
}

/// The store a fresh provider starts with
pub fn default_users() -> Vec<User> {
    vec![User::new(
        10,
        "sally",
        "Jean-Marie",
        "de La Beaujardière😀😍",
        "admin",
    )]
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate server config
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        // Validate logging config
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        // Validate client config
        if self.client.base_url.is_empty() {
            bail!("client base_url must not be empty");
        }

        // Validate seed users
        let mut usernames = HashSet::new();
        for user in &self.users {
            if user.username.is_empty() {
                bail!("Seed user with id {} has an empty username", user.id);
            }
            if !usernames.insert(user.username.as_str()) {
                bail!("Duplicate seed username '{}'", user.username);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[server]
port = 8080
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::from_toml(MINIMAL).expect("Failed to load config");

        assert_eq!(config.server.port, 8080);
        assert!(config.server.num_threads > 0);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.client.base_url, "http://localhost:8080");
        assert_eq!(config.client.user_agent, "Admin Service");
        assert!(config.client.token.is_none());
        assert_eq!(config.users, default_users());
    }

    #[test]
    fn test_seed_users_from_toml() {
        let content = r#"
[server]
port = 9000

[[users]]
id = 1
username = "alice"
firstName = "Alice"
lastName = "Liddell"
type = "admin"

[[users]]
id = 2
username = "bob"
firstName = "Bob"
lastName = "Builder"
type = "blocked"
"#;
        let config = Config::from_toml(content).expect("Failed to load config");

        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[1].user_type, "blocked");
    }

    #[test]
    fn test_empty_seed_list() {
        let content = "users = []\n[server]\nport = 8080\n";
        let config = Config::from_toml(content).expect("Failed to load config");

        assert!(config.users.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(Path::new("/nonexistent/usersvc.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_port_defaults_when_omitted() {
        let config = Config::from_toml("[server]\nnum_threads = 2\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.num_threads, 2);
    }

    #[test]
    fn test_rejects_zero_threads() {
        assert!(Config::from_toml("[server]\nport = 8080\nnum_threads = 0\n").is_err());
    }

    #[test]
    fn test_rejects_port_zero() {
        assert!(Config::from_toml("[server]\nport = 0\n").is_err());
    }

    #[test]
    fn test_rejects_invalid_log_level() {
        let content = "[server]\nport = 8080\n[logging]\nlevel = \"loud\"\n";
        assert!(Config::from_toml(content).is_err());
    }

    #[test]
    fn test_rejects_invalid_log_format() {
        let content = "[server]\nport = 8080\n[logging]\nformat = \"xml\"\n";
        assert!(Config::from_toml(content).is_err());
    }

    #[test]
    fn test_rejects_duplicate_seed_username() {
        let content = r#"
[server]
port = 8080

[[users]]
id = 1
username = "sally"
firstName = "A"
lastName = "B"
type = "admin"

[[users]]
id = 2
username = "sally"
firstName = "C"
lastName = "D"
type = "admin"
"#;
        assert!(Config::from_toml(content).is_err());
    }
}
