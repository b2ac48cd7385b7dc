//! Customer store and the order history fold that (re)builds it
//!
//! Customers have no foreign key to orders. They are matched to orders by
//! email, falling back to phone and then to the lowercased name, so two
//! people sharing a name and no contact details collapse into one customer.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::database::Storage;
use crate::model::{Customer, CustomerPatch, Order, Page};
use crate::seed;
use crate::store::collection::{random_id, Collection, Record};
use crate::store::orders::SLOT_ORDERS;

pub const SLOT_CUSTOMERS: &str = "admin-customers";

impl Record for Customer {
    const SLOT: &'static str = SLOT_CUSTOMERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::customers()
    }
}

/// Outcome of [`Customers::sync_from_orders`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    pub orders_seen: usize,
    pub customers_created: usize,
    pub customers_updated: usize,
    pub customers_total: usize,
}

#[derive(Clone)]
pub struct Customers {
    collection: Collection<Customer>,
}

impl Customers {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<Customer> {
        self.collection.all()
    }

    pub fn save(&self, customers: &[Customer]) {
        self.collection.save(customers)
    }

    pub fn get(&self, id: &str) -> Option<Customer> {
        self.collection.get(id)
    }

    pub fn update(&self, id: &str, patch: &CustomerPatch) -> Option<Customer> {
        self.collection.update(id, patch)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.collection.delete(id)
    }

    /// Rebuilds customer aggregates from the stored order history
    ///
    /// Does nothing, and writes nothing, while the orders slot is missing or
    /// unreadable.
    pub fn sync_from_orders(&self) -> SyncReport {
        match self.collection.storage().load_json::<Vec<Order>>(SLOT_ORDERS) {
            Ok(Some(orders)) => self.sync_with(&orders),
            Ok(None) => {
                debug!("no order history, skipping customer sync");
                SyncReport::default()
            }
            Err(e) => {
                warn!(error = %e, "unreadable order history, skipping customer sync");
                SyncReport::default()
            }
        }
    }

    /// Folds `orders` into the stored customers
    ///
    /// Every customer matched by at least one order gets `totalOrders`,
    /// `totalSpent` and `lastOrderDate` recomputed from those orders alone,
    /// so repeated runs over the same history give the same totals. Customers
    /// without a matching order are left as they are. Orders whose key is
    /// unknown create a new customer registered at that order's date.
    pub fn sync_with(&self, orders: &[Order]) -> SyncReport {
        let mut customers: Vec<Customer> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for customer in self.all() {
            let key = match_key(customer.email.as_deref(), customer.phone.as_deref(), &customer.name);
            match index.get(&key) {
                Some(&idx) => customers[idx] = customer,
                None => {
                    index.insert(key, customers.len());
                    customers.push(customer);
                }
            }
        }

        let mut touched: HashSet<usize> = HashSet::new();
        let mut report = SyncReport {
            orders_seen: orders.len(),
            ..SyncReport::default()
        };

        for order in orders {
            let key = match_key(
                order.customer_email.as_deref(),
                order.customer_phone.as_deref(),
                &order.customer_name,
            );

            let idx = match index.get(&key) {
                Some(&idx) => idx,
                None => {
                    customers.push(Customer {
                        id: random_id("c"),
                        name: order.customer_name.clone(),
                        email: order.customer_email.clone(),
                        phone: order.customer_phone.clone(),
                        total_orders: 0,
                        total_spent: 0,
                        last_order_date: None,
                        registered_at: order.created_at,
                    });
                    report.customers_created += 1;
                    index.insert(key, customers.len() - 1);
                    customers.len() - 1
                }
            };

            let customer = &mut customers[idx];
            if touched.insert(idx) {
                customer.total_orders = 0;
                customer.total_spent = 0;
                customer.last_order_date = None;
            }
            customer.total_orders = customer.total_orders.saturating_add(1);
            customer.total_spent = customer.total_spent.saturating_add(order.total);
            if customer.last_order_date.is_none_or(|last| order.created_at > last) {
                customer.last_order_date = Some(order.created_at);
            }
        }

        report.customers_updated = touched.len() - report.customers_created;
        report.customers_total = customers.len();
        self.save(&customers);

        info!(
            orders = report.orders_seen,
            created = report.customers_created,
            updated = report.customers_updated,
            total = report.customers_total,
            "customers synced from orders"
        );
        report
    }

    /// Customers whose name or email contains `query` (ignoring case) or
    /// whose phone contains it verbatim; a blank query matches everyone
    pub fn search(&self, query: &str) -> Vec<Customer> {
        let customers = self.all();
        let query = query.trim();
        if query.is_empty() {
            return customers;
        }
        let needle = query.to_lowercase();
        customers
            .into_iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.email
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(&needle))
                    || c.phone.as_deref().is_some_and(|p| p.contains(query))
            })
            .collect()
    }

    /// One page of the search results
    pub fn page(&self, query: &str, page: usize, per_page: usize) -> Page<Customer> {
        Page::of(&self.search(query), page, per_page)
    }

    pub fn total_spent(&self) -> u64 {
        self.all().iter().map(|c| c.total_spent).sum()
    }

    /// Rounded mean of `totalSpent`; zero when there are no customers
    pub fn average_spent(&self) -> u64 {
        let customers = self.all();
        if customers.is_empty() {
            return 0;
        }
        let total: u64 = customers.iter().map(|c| c.total_spent).sum();
        let count = customers.len() as u64;
        (total + count / 2) / count
    }
}

/// Join key between orders and customers: email, else phone, else lowercased name
///
/// Empty strings count as missing.
pub fn match_key(email: Option<&str>, phone: Option<&str>, name: &str) -> String {
    email
        .filter(|e| !e.is_empty())
        .or(phone.filter(|p| !p.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| name.to_lowercase())
}
