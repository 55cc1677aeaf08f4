use chrono::Duration;
use memkv::Store;
use std::thread;

#[test]
fn test_basic_functionality() {
    let store = Store::new(Duration::minutes(1));
    store.set("test", "value".to_string());

    assert_eq!(store.get("test"), Some("value".to_string()));
    assert_eq!(store.size(), 1);
}

#[test]
fn test_missing_key() {
    let store: Store<String> = Store::new(Duration::minutes(1));

    assert_eq!(store.get("missing"), None);
    assert_eq!(store.get_with_expiration("missing"), None);
}

#[test]
fn test_expiration() {
    let store = Store::new(Duration::milliseconds(100));
    store.set("test", "value");
    assert_eq!(store.get("test"), Some("value"));

    thread::sleep(std::time::Duration::from_millis(200));

    assert_eq!(store.get("test"), None);
    // Reads never evict
    assert_eq!(store.size(), 1);
}

#[test]
fn test_set_with_expiration_overrides_default() {
    let store = Store::new(Duration::milliseconds(1));
    store.set_with_expiration("long", 1, Duration::hours(1));
    store.set("short", 2);

    thread::sleep(std::time::Duration::from_millis(50));

    assert_eq!(store.get("long"), Some(1));
    assert_eq!(store.get("short"), None);
}

#[test]
fn test_zero_ttl_is_accepted() {
    let store = Store::new(Duration::minutes(1));
    store.set_with_expiration("k", "v", Duration::zero());

    thread::sleep(std::time::Duration::from_millis(5));

    assert_eq!(store.get("k"), None);
    assert_eq!(store.cleanup(), 1);
}

#[test]
fn test_get_with_expiration() {
    let store = Store::new(Duration::minutes(1));
    store.set_with_expiration("k", "v", Duration::seconds(30));

    let (value, expiration) = store.get_with_expiration("k").unwrap();
    assert_eq!(value, "v");

    let remaining = expiration - chrono::Utc::now();
    assert!(remaining > Duration::seconds(29));
    assert!(remaining <= Duration::seconds(30));
}

#[test]
fn test_delete_operations() {
    let store = Store::new(Duration::minutes(1));
    store.set("test", "value");

    store.delete("test");
    assert_eq!(store.get("test"), None);
    assert_eq!(store.size(), 0);

    // Deleting an absent key is a no-op
    store.delete("test");
    store.delete("never-set");
    assert_eq!(store.size(), 0);

    store.set("a", "1");
    store.set("b", "2");
    store.delete_all();
    assert_eq!(store.size(), 0);
}

#[test]
fn test_cleanup_removes_only_expired() {
    let store = Store::new(Duration::milliseconds(1));
    store.set("test", "value");
    store.set_with_expiration("test2", "value2", Duration::seconds(2));

    thread::sleep(std::time::Duration::from_millis(200));

    assert_eq!(store.cleanup(), 1);
    assert_eq!(store.get("test"), None);
    assert_eq!(store.get("test2"), Some("value2"));
    assert_eq!(store.size(), 1);
}

#[test]
fn test_cleanup_scenario() {
    let store = Store::new(Duration::minutes(1));
    store.set("a", "1");
    store.set_with_expiration("b", "2", Duration::milliseconds(1));

    thread::sleep(std::time::Duration::from_millis(50));
    store.cleanup();

    assert_eq!(store.get("a"), Some("1"));
    assert_eq!(store.get("b"), None);
}

#[test]
fn test_default_store_config() {
    let store: Store<u32> = Store::default();
    assert_eq!(store.config().default_ttl, Duration::minutes(5));

    let store: Store<u32> = Store::new(Duration::seconds(7));
    assert_eq!(store.config().default_ttl, Duration::seconds(7));
}
