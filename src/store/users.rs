//! Storefront user accounts

use chrono::Utc;
use tracing::info;

use crate::database::Storage;
use crate::error::{StoreError, StoreResult};
use crate::model::{NewUser, User, UserPatch};
use crate::store::collection::{random_id, Collection, Record};

pub const SLOT_USERS: &str = "app-users";

impl Record for User {
    const SLOT: &'static str = SLOT_USERS;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct Users {
    collection: Collection<User>,
}

impl Users {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<User> {
        self.collection.all()
    }

    pub fn save(&self, users: &[User]) {
        self.collection.save(users)
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.collection.get(id)
    }

    /// Looks a user up by username, ignoring case
    pub fn by_username(&self, username: &str) -> Option<User> {
        let wanted = username.to_lowercase();
        self.all()
            .into_iter()
            .find(|u| u.username.to_lowercase() == wanted)
    }

    /// Registers a user
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateUsername`] when the username is already taken,
    /// compared case-insensitively.
    pub fn add(&self, user: NewUser) -> StoreResult<User> {
        if self.by_username(&user.username).is_some() {
            return Err(StoreError::DuplicateUsername);
        }

        let user = User {
            id: random_id("user_"),
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            password: user.password,
            phone: user.phone,
            created_at: Utc::now(),
        };
        let user = self.collection.insert(user);
        info!(id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub fn update(&self, id: &str, patch: &UserPatch) -> Option<User> {
        self.collection.update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.collection.delete(id)
    }

    /// Returns the user when the username exists and the password matches exactly
    pub fn verify(&self, username: &str, password: &str) -> Option<User> {
        self.by_username(username)
            .filter(|user| user.password == password)
    }
}
