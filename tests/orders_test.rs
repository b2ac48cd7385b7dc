//! Tests for the order store

use tempfile::NamedTempFile;

use maktab::database::{init_db, Storage};
use maktab::model::{NewOrder, OrderItem, OrderStatus};
use maktab::store::orders::status_label;
use maktab::Bookstore;

fn setup_store() -> (Bookstore, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_db.path().to_str().unwrap();
    let db = init_db(db_path).expect("Failed to initialize test database");
    (Bookstore::new(Storage::new(db)), temp_db)
}

fn new_order(store: &Bookstore) -> NewOrder {
    let book = store.books().get("4").unwrap();
    let items = vec![OrderItem {
        quantity: 3,
        ..OrderItem::from(&book)
    }];
    NewOrder {
        customer_name: "سارا رضایی".to_string(),
        customer_email: Some("sara@example.com".to_string()),
        customer_phone: None,
        total: items.iter().map(OrderItem::line_total).sum(),
        items,
        status: OrderStatus::Pending,
        shipping_address: Some("شیراز".to_string()),
        notes: Some("لطفاً کادوپیچ شود \"ویژه\"".to_string()),
    }
}

#[test]
fn test_seed_orders_totals_match_items() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders().all();

    assert_eq!(orders.len(), 3);
    for order in &orders {
        assert_eq!(order.total, order.items_total(), "order {}", order.id);
    }
}

#[test]
fn test_add_order_sets_id_and_timestamp() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders();
    let before = chrono::Utc::now();

    let order = orders.add(new_order(&store));

    assert_eq!(order.total, 196_800);
    assert!(order.created_at >= before);
    assert_eq!(orders.get(&order.id), Some(order.clone()));
    assert_eq!(orders.all().len(), 4);
}

#[test]
fn test_update_status_allows_any_transition() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders();

    let shipped = orders.update_status("1003", OrderStatus::Shipped).unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);

    // Moving backwards is not prevented
    let pending = orders.update_status("1001", OrderStatus::Pending).unwrap();
    assert_eq!(pending.status, OrderStatus::Pending);
    assert_eq!(orders.get("1001").unwrap().status, OrderStatus::Pending);

    assert!(orders.update_status("nope", OrderStatus::Delivered).is_none());
}

#[test]
fn test_cancel_order() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders();

    let cancelled = orders.cancel("1002").unwrap();
    assert_eq!(cancelled.status, OrderStatus::Cancelled);
    assert_eq!(orders.with_status(OrderStatus::Cancelled).len(), 1);
}

#[test]
fn test_status_labels() {
    assert_eq!(status_label(OrderStatus::Pending), "در انتظار پرداخت");
    assert_eq!(OrderStatus::Delivered.label(), "تحویل داده شده");
    assert_eq!(OrderStatus::Cancelled.label(), "لغو شده");
    for status in OrderStatus::ALL {
        assert!(!status.label().is_empty());
    }
}

#[test]
fn test_status_serializes_lowercase() {
    let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
    assert_eq!(json, "\"processing\"");
}

#[test]
fn test_recent_orders_newest_first() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders();
    let placed = orders.add(new_order(&store));

    let recent: Vec<String> = orders.recent(3).into_iter().map(|o| o.id).collect();
    assert_eq!(recent, vec![placed.id, "1001".to_string(), "1002".to_string()]);
}

#[test]
fn test_delete_order() {
    let (store, _temp_db) = setup_store();
    let orders = store.orders();

    assert!(orders.delete("1001"));
    assert!(!orders.delete("1001"));
    assert_eq!(orders.all().len(), 2);
}
