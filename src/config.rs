//! Runtime configuration
//!
//! Values come from the process environment (optionally populated from a
//! `.env` file by the binary via `dotenvy`).

use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "maktab.db";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin1234";

/// Settings needed to open the store and check admin logins
///
/// # Environment Variables
///
/// - `DATABASE_URL` - Path to database file (default: "maktab.db")
/// - `ADMIN_USERNAME` - Fixed admin login name (default: "admin")
/// - `ADMIN_PASSWORD` - Fixed admin password (default: "admin1234")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_path: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string()),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}
