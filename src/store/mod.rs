//! Entity stores, one per storage slot
//!
//! Each store reads and writes its own slot independently; there is no
//! transaction spanning two stores.

pub mod books;
pub mod cart;
pub mod collection;
pub mod customers;
pub mod favorites;
pub mod links;
pub mod orders;
pub mod settings;
pub mod users;

use crate::database::Storage;

pub use books::{BookSort, Books};
pub use cart::{Cart, CartSummary};
pub use collection::{Collection, Record};
pub use customers::{Customers, SyncReport};
pub use favorites::Favorites;
pub use links::Links;
pub use orders::Orders;
pub use settings::Settings;
pub use users::Users;

/// Entry point handing out every store over one shared storage handle
#[derive(Clone)]
pub struct Bookstore {
    storage: Storage,
}

impl Bookstore {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn books(&self) -> Books {
        Books::new(self.storage.clone())
    }

    pub fn orders(&self) -> Orders {
        Orders::new(self.storage.clone())
    }

    pub fn customers(&self) -> Customers {
        Customers::new(self.storage.clone())
    }

    pub fn links(&self) -> Links {
        Links::new(self.storage.clone())
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.storage.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.storage.clone())
    }

    pub fn favorites(&self) -> Favorites {
        Favorites::new(self.storage.clone())
    }

    pub fn cart(&self) -> Cart {
        Cart::new(self.storage.clone())
    }
}
