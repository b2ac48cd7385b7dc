//! Data models for the bookstore
//!
//! This module defines every record persisted in a storage slot, together with
//! the "new" shapes used when creating records and the patch shapes used for
//! shallow-merge updates. All records serialize with camelCase keys so the
//! stored JSON keeps the storefront's shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A book in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,

    /// List price in Toman
    pub price: u64,

    /// Price actually charged in Toman
    pub discounted_price: u64,

    /// Cover image path (e.g. "/book-cover-1.png")
    pub image: String,
    pub rating: f32,
    pub reviews: u32,

    /// Category key such as "fiction" or "history"
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Solar Hijri publication year (e.g. 1384)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,

    pub in_stock: bool,
    pub stock_count: u32,
}

/// Admin form payload for a new book; the store assigns the id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: u64,
    pub discounted_price: u64,
    pub image: String,
    pub rating: f32,
    pub reviews: u32,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    pub in_stock: bool,
    pub stock_count: u32,
}

impl NewBook {
    pub fn with_id(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
            discounted_price: self.discounted_price,
            image: self.image,
            rating: self.rating,
            reviews: self.reviews,
            category: self.category,
            description: self.description,
            publisher: self.publisher,
            publish_year: self.publish_year,
            pages: self.pages,
            language: self.language,
            isbn: self.isbn,
            features: self.features,
            in_stock: self.in_stock,
            stock_count: self.stock_count,
        }
    }
}

/// Partial book update; only the fields that are set replace stored values
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounted_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
}

/// Lifecycle of an order
///
/// Nothing enforces forward-only transitions; any status may be set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Persian label shown in the admin panel
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "در انتظار پرداخت",
            OrderStatus::Confirmed => "تایید شده",
            OrderStatus::Processing => "در حال پردازش",
            OrderStatus::Shipped => "ارسال شده",
            OrderStatus::Delivered => "تحویل داده شده",
            OrderStatus::Cancelled => "لغو شده",
        }
    }
}

/// Snapshot of a book at purchase time, embedded in an order or the cart
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Id of the book this line was taken from
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: u64,
    pub discounted_price: u64,
    pub image: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> u64 {
        self.discounted_price.saturating_mul(u64::from(self.quantity))
    }
}

impl From<&Book> for OrderItem {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price,
            discounted_price: book.discounted_price,
            image: book.image.clone(),
            quantity: 1,
        }
    }
}

/// Cart lines share the order line item shape
pub type CartItem = OrderItem;

/// A placed order
///
/// Customer contact fields are loose join keys; there is no foreign key to
/// [`Customer`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,

    /// Amount charged in Toman; expected, not guaranteed, to match the items
    pub total: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Sum of discounted line totals
    pub fn items_total(&self) -> u64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// Payload for a new order; the store assigns the id and creation time
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: u64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Contact details collected at checkout
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
}

/// A customer derived from order history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub total_orders: u32,
    pub total_spent: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_order_date: Option<DateTime<Utc>>,
    pub registered_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_orders: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_order_date: Option<DateTime<Utc>>,
}

/// Where a link is rendered
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    /// Category menu under the header
    Category,
    FooterCategory,
    FooterSupport,
    Social,
    Other,
}

/// A navigation or footer link
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: LinkType,

    /// Category key for category links (fiction, history, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,

    /// Display sort key; missing sorts as 0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Link {
    pub fn sort_key(&self) -> u32 {
        self.order.unwrap_or(0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: LinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LinkPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LinkType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

/// Global storefront settings
///
/// Fields missing from the stored document take their default values when
/// read, so older documents keep working after new settings are added.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    pub contact_email: String,
    pub contact_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,

    pub currency: String,

    /// Minimum subtotal (exclusive) for free shipping
    pub free_shipping_threshold: u64,

    /// Tax percentage
    pub tax_rate: f64,

    pub items_per_page: u32,
    pub enable_reviews: bool,
    pub enable_wishlist: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "مکتب شریف".to_string(),
            site_description:
                "فروشگاه آنلاین کتاب با مجموعه‌ای منتخب از بهترین آثار ادبی، تاریخی و علمی"
                    .to_string(),
            logo: None,
            contact_email: "support@maktebsharif.ir".to_string(),
            contact_phone: "021-12345678".to_string(),
            contact_address: Some("تهران، ایران".to_string()),
            currency: "تومان".to_string(),
            free_shipping_threshold: 500_000,
            tax_rate: 0.0,
            items_per_page: 12,
            enable_reviews: true,
            enable_wishlist: true,
            meta_title: Some("مکتب شریف - فروشگاه آنلاین کتاب".to_string()),
            meta_description: Some("خرید آنلاین کتاب با بهترین قیمت و ارسال سریع".to_string()),
            meta_keywords: Some("کتاب، خرید کتاب، فروشگاه کتاب، کتاب آنلاین".to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_reviews: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_wishlist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
}

/// A registered storefront user
///
/// The password is stored in plaintext. This is a demo account system, not a
/// security boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,

    /// Unique, compared case-insensitively
    pub username: String,
    pub password: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub phone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A book bookmarked by a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    pub added_at: DateTime<Utc>,
}

/// One page of a filtered list
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// 1-based page number actually returned
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Slices `items` into the requested page
    ///
    /// `page` is clamped to at least 1 and `per_page` to at least 1. A page
    /// past the end is returned empty.
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_items = items.len();
        let total_pages = total_items.div_ceil(per_page);

        let items = items
            .iter()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .cloned()
            .collect();

        Self {
            page,
            per_page,
            total_items,
            total_pages,
            items,
        }
    }
}
