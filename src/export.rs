//! CSV export of orders for spreadsheet tools
//!
//! One row per line item. Order-level columns are filled only on an order's
//! first row so a spreadsheet shows each order once.

use std::fmt::Write;

use crate::model::{Order, OrderItem};

/// Byte-order mark so spreadsheet apps detect UTF-8 (Persian text)
pub const BOM: char = '\u{FEFF}';

pub const HEADERS: [&str; 12] = [
    "شناسه سفارش",
    "تاریخ",
    "نام مشتری",
    "ایمیل",
    "تلفن",
    "وضعیت",
    "مبلغ کل",
    "عنوان کتاب",
    "نویسنده",
    "تعداد",
    "قیمت واحد",
    "جمع ردیف",
];

/// Renders `orders` as CSV, BOM first, header row, CRLF line endings
pub fn orders_to_csv(orders: &[Order]) -> String {
    let mut csv = String::new();
    csv.push(BOM);
    push_row(&mut csv, HEADERS.iter().map(|h| h.to_string()));

    for order in orders {
        if order.items.is_empty() {
            push_row(&mut csv, order_fields(order).into_iter().chain(item_fields(None)));
            continue;
        }
        for (idx, item) in order.items.iter().enumerate() {
            let head = if idx == 0 {
                order_fields(order)
            } else {
                vec![String::new(); 7]
            };
            push_row(&mut csv, head.into_iter().chain(item_fields(Some(item))));
        }
    }
    csv
}

fn order_fields(order: &Order) -> Vec<String> {
    vec![
        order.id.clone(),
        order.created_at.format("%Y-%m-%d %H:%M").to_string(),
        order.customer_name.clone(),
        order.customer_email.clone().unwrap_or_default(),
        order.customer_phone.clone().unwrap_or_default(),
        order.status.label().to_string(),
        order.total.to_string(),
    ]
}

fn item_fields(item: Option<&OrderItem>) -> Vec<String> {
    match item {
        Some(item) => vec![
            item.title.clone(),
            item.author.clone(),
            item.quantity.to_string(),
            item.discounted_price.to_string(),
            item.line_total().to_string(),
        ],
        None => vec![String::new(); 5],
    }
}

fn push_row(csv: &mut String, fields: impl Iterator<Item = String>) {
    let row: Vec<String> = fields.map(|f| quote(&f)).collect();
    let _ = write!(csv, "{}\r\n", row.join(","));
}

/// Wraps a field in quotes, doubling any quote inside it
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
