//! Order store

use chrono::Utc;
use tracing::info;

use crate::database::Storage;
use crate::model::{NewOrder, Order, OrderStatus};
use crate::seed;
use crate::store::collection::{Collection, Record};

pub const SLOT_ORDERS: &str = "admin-orders";

impl Record for Order {
    const SLOT: &'static str = SLOT_ORDERS;

    fn id(&self) -> &str {
        &self.id
    }

    fn seed() -> Vec<Self> {
        seed::orders()
    }
}

#[derive(Clone)]
pub struct Orders {
    collection: Collection<Order>,
}

impl Orders {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn all(&self) -> Vec<Order> {
        self.collection.all()
    }

    pub fn save(&self, orders: &[Order]) {
        self.collection.save(orders)
    }

    pub fn get(&self, id: &str) -> Option<Order> {
        self.collection.get(id)
    }

    /// Stores a new order stamped with the current time
    pub fn add(&self, order: NewOrder) -> Order {
        let order = Order {
            id: self.collection.next_id(),
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone,
            items: order.items,
            total: order.total,
            status: order.status,
            created_at: Utc::now(),
            shipping_address: order.shipping_address,
            notes: order.notes,
        };
        let order = self.collection.insert(order);
        info!(id = %order.id, total = order.total, items = order.items.len(), "order placed");
        order
    }

    /// Sets the status of an order
    ///
    /// Transitions are not validated; a delivered order can be moved back to
    /// pending.
    pub fn update_status(&self, id: &str, status: OrderStatus) -> Option<Order> {
        let order = self.collection.modify(id, |order| order.status = status)?;
        info!(id, status = ?status, "order status changed");
        Some(order)
    }

    pub fn cancel(&self, id: &str) -> Option<Order> {
        self.update_status(id, OrderStatus::Cancelled)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.collection.delete(id)
    }

    pub fn with_status(&self, status: OrderStatus) -> Vec<Order> {
        self.all()
            .into_iter()
            .filter(|o| o.status == status)
            .collect()
    }

    /// Newest first
    pub fn recent(&self, limit: usize) -> Vec<Order> {
        let mut orders = self.all();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders.truncate(limit);
        orders
    }
}

pub fn status_label(status: OrderStatus) -> &'static str {
    status.label()
}
