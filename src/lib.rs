//! Data layer for the Maktab online bookstore
//!
//! Each entity type (books, orders, customers, links, settings, users,
//! favorites, cart) lives as one JSON document under a named storage slot in
//! an embedded redb database. The stores in [`store`] provide CRUD over those
//! slots; [`export`] renders orders as CSV and [`auth`] handles the demo logins.

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod model;
pub mod seed;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::Bookstore;
