//! Demo-grade login
//!
//! A fixed admin credential pair is checked here, outside the user store.
//! Storefront users are checked against [`Users::verify`]. Passwords are
//! compared in plaintext; none of this is a security boundary.

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::database::Storage;
use crate::model::User;
use crate::store::users::Users;

/// Slot holding "1" while an admin is logged in
pub const SLOT_ADMIN_FLAG: &str = "is-admin";

/// Who a successful login belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin,
    Customer(User),
}

#[derive(Clone)]
pub struct Auth {
    storage: Storage,
    admin_username: String,
    admin_password: String,
}

impl Auth {
    pub fn new(storage: Storage, config: &StoreConfig) -> Self {
        Self {
            storage,
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
        }
    }

    /// Logs the admin in when both values match the configured pair exactly
    pub fn login_admin(&self, username: &str, password: &str) -> bool {
        if username != self.admin_username || password != self.admin_password {
            return false;
        }
        self.set_admin_flag(true);
        info!("admin logged in");
        true
    }

    pub fn logout(&self) {
        self.set_admin_flag(false);
    }

    pub fn is_admin(&self) -> bool {
        match self.storage.get_item(SLOT_ADMIN_FLAG) {
            Ok(flag) => flag.as_deref() == Some("1"),
            Err(e) => {
                warn!(error = %e, "could not read admin flag");
                false
            }
        }
    }

    /// Tries the admin pair first, then the registered users
    ///
    /// A customer login ends any admin session.
    pub fn login(&self, username: &str, password: &str) -> Option<Session> {
        if self.login_admin(username, password) {
            return Some(Session::Admin);
        }
        let user = Users::new(self.storage.clone()).verify(username, password)?;
        self.set_admin_flag(false);
        Some(Session::Customer(user))
    }

    fn set_admin_flag(&self, on: bool) {
        let result = if on {
            self.storage.set_item(SLOT_ADMIN_FLAG, "1")
        } else {
            self.storage.remove_item(SLOT_ADMIN_FLAG).map(|_| ())
        };
        if let Err(e) = result {
            warn!(error = %e, "could not update admin flag");
        }
    }
}
