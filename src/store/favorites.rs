//! Per-user favorite books

use chrono::Utc;

use crate::database::Storage;
use crate::error::{StoreError, StoreResult};
use crate::model::Favorite;
use crate::store::collection::{random_id, Collection, Record};

pub const SLOT_FAVORITES: &str = "app-favorites";

impl Record for Favorite {
    const SLOT: &'static str = SLOT_FAVORITES;

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone)]
pub struct Favorites {
    collection: Collection<Favorite>,
}

impl Favorites {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<Favorite> {
        self.collection.all()
    }

    pub fn for_user(&self, user_id: &str) -> Vec<Favorite> {
        self.all()
            .into_iter()
            .filter(|f| f.user_id == user_id)
            .collect()
    }

    pub fn is_favorite(&self, user_id: &str, book_id: &str) -> bool {
        self.all()
            .iter()
            .any(|f| f.user_id == user_id && f.book_id == book_id)
    }

    /// # Errors
    ///
    /// [`StoreError::DuplicateFavorite`] when the user already saved the book.
    pub fn add(&self, user_id: &str, book_id: &str) -> StoreResult<Favorite> {
        if self.is_favorite(user_id, book_id) {
            return Err(StoreError::DuplicateFavorite);
        }
        Ok(self.collection.insert(Favorite {
            id: random_id("fav_"),
            user_id: user_id.to_string(),
            book_id: book_id.to_string(),
            added_at: Utc::now(),
        }))
    }

    pub fn remove(&self, user_id: &str, book_id: &str) -> bool {
        let favorites = self.all();
        let before = favorites.len();
        let kept: Vec<Favorite> = favorites
            .into_iter()
            .filter(|f| !(f.user_id == user_id && f.book_id == book_id))
            .collect();
        if kept.len() == before {
            return false;
        }
        self.collection.save(&kept);
        true
    }

    /// Adds the book if absent, removes it otherwise; `true` means it was added
    pub fn toggle(&self, user_id: &str, book_id: &str) -> StoreResult<bool> {
        if self.remove(user_id, book_id) {
            return Ok(false);
        }
        self.add(user_id, book_id).map(|_| true)
    }
}
