//! Seeds and maintains the bookstore database
//!
//! Opens the configured database, makes sure every slot holds at least its
//! default collection, restores missing default links and rebuilds the
//! customer list from order history.

use dotenvy::dotenv;
use tracing::info;

use maktab::config::StoreConfig;
use maktab::database::{init_db, Storage};
use maktab::Bookstore;

/// Application entry point
///
/// # Environment Variables
///
/// - `DATABASE_URL` - Path to database file (default: "maktab.db")
/// - `RUST_LOG` - Log filter (default: "maktab=debug")
fn main() {
    // Load environment variables from .env file if it exists
    dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("maktab=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = StoreConfig::from_env();

    let db = init_db(&config.database_path).expect("Failed to initialize database");
    let store = Bookstore::new(Storage::new(db));
    info!(path = %config.database_path, "database opened");

    let books = store.books().all();
    let orders = store.orders().all();
    let settings = store.settings().get();
    let restored = store.links().ensure_defaults();
    let report = store.customers().sync_from_orders();

    info!(
        site = %settings.site_name,
        books = books.len(),
        orders = orders.len(),
        links = store.links().all().len(),
        links_restored = restored,
        customers = report.customers_total,
        users = store.users().all().len(),
        "store ready"
    );
}
