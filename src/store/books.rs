//! Book catalog store
//!
//! Admin CRUD over the catalog plus the read-only queries the storefront
//! pages use (search box, category filter, price sorting).

use tracing::info;

use crate::database::Storage;
use crate::model::{Book, BookPatch, NewBook};
use crate::seed;
use crate::store::collection::{Collection, Record};

pub const SLOT_BOOKS: &str = "admin-books";

/// Category key that matches every book
pub const ALL_CATEGORIES: &str = "all";

impl Record for Book {
    const SLOT: &'static str = SLOT_BOOKS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::books()
    }
}

/// Orderings offered on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookSort {
    /// Stored catalog order
    #[default]
    Popular,
    PriceLow,
    PriceHigh,
}

#[derive(Clone)]
pub struct Books {
    collection: Collection<Book>,
}

impl Books {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<Book> {
        self.collection.all()
    }

    pub fn save(&self, books: &[Book]) {
        self.collection.save(books)
    }

    pub fn get(&self, id: &str) -> Option<Book> {
        self.collection.get(id)
    }

    pub fn add(&self, book: NewBook) -> Book {
        let id = self.collection.next_id();
        let book = self.collection.insert(book.with_id(id));
        info!(id = %book.id, title = %book.title, "book added");
        book
    }

    pub fn update(&self, id: &str, patch: &BookPatch) -> Option<Book> {
        self.collection.update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        let removed = self.collection.delete(id);
        if removed {
            info!(id, "book deleted");
        }
        removed
    }

    /// Books whose title or author contains `query`, ignoring case
    ///
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<Book> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.all()
            .into_iter()
            .filter(|book| {
                book.title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Books in the given category; [`ALL_CATEGORIES`] returns the whole catalog
    pub fn by_category(&self, category: &str) -> Vec<Book> {
        let books = self.all();
        if category == ALL_CATEGORIES {
            return books;
        }
        books.into_iter().filter(|b| b.category == category).collect()
    }

    /// Category listing with the requested ordering applied
    pub fn browse(&self, category: &str, sort: BookSort) -> Vec<Book> {
        sorted(self.by_category(category), sort)
    }
}

/// Applies `sort` to `books`; the sort is stable so ties keep catalog order
pub fn sorted(mut books: Vec<Book>, sort: BookSort) -> Vec<Book> {
    match sort {
        BookSort::Popular => {}
        BookSort::PriceLow => books.sort_by_key(|b| b.price),
        BookSort::PriceHigh => books.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    books
}
