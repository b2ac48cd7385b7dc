//! Shopping cart persisted in its own slot, plus pricing and checkout

use tracing::info;

use crate::database::Storage;
use crate::model::{CartItem, CheckoutDetails, NewOrder, Order, OrderStatus};
use crate::store::collection::{Collection, Record};
use crate::store::orders::Orders;
use crate::store::settings::Settings;

pub const SLOT_CART: &str = "cart-items";

/// Flat shipping fee in Toman below the free-shipping threshold
pub const SHIPPING_COST: u64 = 15_000;

impl Record for CartItem {
    const SLOT: &'static str = SLOT_CART;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Discount percentage for a promo code, if the code is known
pub fn promo_percent(code: &str) -> Option<u8> {
    match code.trim() {
        "BOOKFEST2024" => Some(15),
        "WELCOME10" => Some(10),
        _ => None,
    }
}

/// Price breakdown shown on the cart page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    /// Sum of discounted price times quantity
    pub subtotal: u64,
    pub discount_percent: u8,
    pub discount: u64,
    pub shipping: u64,
    pub total: u64,
}

#[derive(Clone)]
pub struct Cart {
    collection: Collection<CartItem>,
}

impl Cart {
    pub fn new(storage: Storage) -> Self {
        Self {
            collection: Collection::new(storage),
        }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.collection.all()
    }

    /// Adds `quantity` copies of an item, merging into an existing line
    pub fn add_item(&self, item: CartItem, quantity: u32) -> Vec<CartItem> {
        let mut items = self.items();
        match items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => items.push(CartItem { quantity, ..item }),
        }
        self.collection.save(&items);
        items
    }

    pub fn remove_item(&self, id: &str) -> bool {
        self.collection.delete(id)
    }

    /// Sets a line's quantity; zero removes the line
    pub fn set_quantity(&self, id: &str, quantity: u32) -> Vec<CartItem> {
        if quantity == 0 {
            self.remove_item(id);
        } else {
            self.collection.modify(id, |line| line.quantity = quantity);
        }
        self.items()
    }

    pub fn clear(&self) {
        self.collection.save(&[]);
    }

    /// Total number of copies in the cart
    pub fn count(&self) -> u32 {
        self.items()
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Prices the cart, applying `promo` when it is a known code
    ///
    /// Shipping is free once the subtotal exceeds the configured threshold.
    /// An empty cart costs nothing.
    pub fn summary(&self, promo: Option<&str>) -> CartSummary {
        let subtotal = self
            .items()
            .iter()
            .fold(0u64, |sum, line| sum.saturating_add(line.line_total()));
        if subtotal == 0 {
            return CartSummary::default();
        }

        let discount_percent = promo.and_then(promo_percent).unwrap_or(0);
        let discount = (u128::from(subtotal) * u128::from(discount_percent) / 100) as u64;

        let threshold = Settings::new(self.collection.storage().clone())
            .get()
            .free_shipping_threshold;
        let shipping = if subtotal > threshold { 0 } else { SHIPPING_COST };

        CartSummary {
            subtotal,
            discount_percent,
            discount,
            shipping,
            total: (subtotal - discount).saturating_add(shipping),
        }
    }

    /// Turns the cart into a pending order and empties it
    ///
    /// Returns `None` for an empty cart.
    pub fn checkout(&self, details: CheckoutDetails, promo: Option<&str>) -> Option<Order> {
        let items = self.items();
        if items.is_empty() {
            return None;
        }
        let summary = self.summary(promo);

        let order = Orders::new(self.collection.storage().clone()).add(NewOrder {
            customer_name: details.customer_name,
            customer_email: details.customer_email,
            customer_phone: details.customer_phone,
            items,
            total: summary.total,
            status: OrderStatus::Pending,
            shipping_address: details.shipping_address,
            notes: details.notes,
        });
        self.clear();

        info!(order = %order.id, total = order.total, "checkout completed");
        Some(order)
    }
}
