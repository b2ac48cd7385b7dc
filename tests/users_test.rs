//! Tests for user accounts, favorites and the demo logins

use tempfile::NamedTempFile;

use maktab::auth::{Auth, Session};
use maktab::config::StoreConfig;
use maktab::database::{init_db, Storage};
use maktab::model::{NewUser, UserPatch};
use maktab::store::favorites::SLOT_FAVORITES;
use maktab::store::users::SLOT_USERS;
use maktab::{Bookstore, StoreError};

fn setup_store() -> (Bookstore, NamedTempFile) {
    let temp_db = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = temp_db.path().to_str().unwrap();
    let db = init_db(db_path).expect("Failed to initialize test database");
    (Bookstore::new(Storage::new(db)), temp_db)
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        first_name: "مریم".to_string(),
        last_name: "حسینی".to_string(),
        username: username.to_string(),
        password: "secret-pass".to_string(),
        phone: "09121234567".to_string(),
    }
}

#[test]
fn test_users_start_empty() {
    let (store, _temp_db) = setup_store();
    assert!(store.users().all().is_empty());
}

#[test]
fn test_empty_stores_are_not_written_on_read() {
    let (store, _temp_db) = setup_store();

    assert!(store.users().all().is_empty());
    assert!(store.favorites().for_user("user_1").is_empty());
    assert_eq!(store.storage().get_item(SLOT_USERS).unwrap(), None);
    assert_eq!(store.storage().get_item(SLOT_FAVORITES).unwrap(), None);

    store.users().add(new_user("first")).unwrap();
    assert!(store.storage().get_item(SLOT_USERS).unwrap().is_some());
}

#[test]
fn test_username_lookup_is_case_insensitive() {
    let (store, _temp_db) = setup_store();
    let users = store.users();

    let user = users.add(new_user("User1")).unwrap();
    assert!(user.id.starts_with("user_"));

    let found = users.by_username("user1").expect("lookup ignores case");
    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "User1");
    assert!(users.by_username("user2").is_none());
}

#[test]
fn test_duplicate_username_rejected() {
    let (store, _temp_db) = setup_store();
    let users = store.users();

    users.add(new_user("maryam")).unwrap();
    let err = users.add(new_user("MARYAM")).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateUsername));
    assert_eq!(err.to_string(), "نام کاربری قبلاً استفاده شده است");
    assert_eq!(users.all().len(), 1);
}

#[test]
fn test_verify_checks_password_exactly() {
    let (store, _temp_db) = setup_store();
    let users = store.users();
    users.add(new_user("maryam")).unwrap();

    assert!(users.verify("Maryam", "secret-pass").is_some());
    assert!(users.verify("maryam", "Secret-Pass").is_none());
    assert!(users.verify("nobody", "secret-pass").is_none());
}

#[test]
fn test_update_and_delete_user() {
    let (store, _temp_db) = setup_store();
    let users = store.users();
    let user = users.add(new_user("maryam")).unwrap();

    let updated = users
        .update(
            &user.id,
            &UserPatch {
                password: Some("new-pass-123".to_string()),
                ..UserPatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.password, "new-pass-123");
    assert_eq!(updated.created_at, user.created_at);
    assert!(users.verify("maryam", "new-pass-123").is_some());

    assert!(users.delete(&user.id));
    assert!(users.get(&user.id).is_none());
}

#[test]
fn test_admin_login_and_logout() {
    let (store, _temp_db) = setup_store();
    let auth = Auth::new(store.storage().clone(), &StoreConfig::default());

    assert!(!auth.is_admin());
    assert!(!auth.login_admin("admin", "wrong"));
    assert!(!auth.login_admin("Admin", "admin1234"));
    assert!(!auth.is_admin());

    assert!(auth.login_admin("admin", "admin1234"));
    assert!(auth.is_admin());

    auth.logout();
    assert!(!auth.is_admin());
}

#[test]
fn test_admin_pair_is_not_a_user() {
    let (store, _temp_db) = setup_store();
    let auth = Auth::new(store.storage().clone(), &StoreConfig::default());

    assert_eq!(auth.login("admin", "admin1234"), Some(Session::Admin));
    assert!(store.users().by_username("admin").is_none());
}

#[test]
fn test_login_falls_back_to_registered_users() {
    let (store, _temp_db) = setup_store();
    let config = StoreConfig {
        admin_password: "changed".to_string(),
        ..StoreConfig::default()
    };
    let auth = Auth::new(store.storage().clone(), &config);
    let user = store.users().add(new_user("reader")).unwrap();

    assert_eq!(auth.login("reader", "secret-pass"), Some(Session::Customer(user)));
    assert_eq!(auth.login("admin", "admin1234"), None);
    assert!(!auth.is_admin());
}

#[test]
fn test_customer_login_ends_admin_session() {
    let (store, _temp_db) = setup_store();
    let auth = Auth::new(store.storage().clone(), &StoreConfig::default());
    let user = store.users().add(new_user("reader")).unwrap();

    assert_eq!(auth.login("admin", "admin1234"), Some(Session::Admin));
    assert!(auth.is_admin());

    assert_eq!(auth.login("reader", "wrong"), None);
    assert!(auth.is_admin());

    assert_eq!(auth.login("reader", "secret-pass"), Some(Session::Customer(user)));
    assert!(!auth.is_admin());
}

#[test]
fn test_favorites_reject_duplicates() {
    let (store, _temp_db) = setup_store();
    let favorites = store.favorites();

    let fav = favorites.add("user_1", "4").unwrap();
    assert!(fav.id.starts_with("fav_"));
    assert!(favorites.is_favorite("user_1", "4"));

    let err = favorites.add("user_1", "4").unwrap_err();
    assert!(matches!(err, StoreError::DuplicateFavorite));

    favorites.add("user_2", "4").unwrap();
    assert_eq!(favorites.for_user("user_1").len(), 1);
    assert_eq!(favorites.all().len(), 2);
}

#[test]
fn test_favorite_toggle_and_remove() {
    let (store, _temp_db) = setup_store();
    let favorites = store.favorites();

    assert!(favorites.toggle("user_1", "7").unwrap());
    assert!(favorites.is_favorite("user_1", "7"));
    assert!(!favorites.toggle("user_1", "7").unwrap());
    assert!(!favorites.is_favorite("user_1", "7"));

    assert!(!favorites.remove("user_1", "7"));
}
