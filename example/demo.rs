use chrono::Duration;
use memkv::{JsonPersister, Store, spawn_cleanup};
use std::sync::Arc;

const DEFAULT_TTL_SECS: i64 = 5;
const SHORT_TTL_MS: i64 = 50;
const CLEANUP_EVERY_MS: u64 = 100;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Arc::new(Store::new(Duration::seconds(DEFAULT_TTL_SECS)));
    let cleanup = spawn_cleanup(&store, std::time::Duration::from_millis(CLEANUP_EVERY_MS));

    store.set("a", "1".to_string());
    store.set_with_expiration("b", "2".to_string(), Duration::milliseconds(SHORT_TTL_MS));
    println!("Store size: {}", store.size());

    if let Some((value, expiration)) = store.get_with_expiration("a") {
        println!("a = {} (expires at {})", value, expiration);
    }

    tokio::time::sleep(std::time::Duration::from_millis(3 * CLEANUP_EVERY_MS)).await;
    println!("b after expiry: {:?}", store.get("b"));
    println!("Store size after background cleanup: {}", store.size());

    let path = std::env::temp_dir().join("memkv-demo.json");
    let persister = JsonPersister::new(&path);
    persister.write(&store)?;
    println!("Snapshot written to {}", path.display());

    let restored: Store<String> = Store::new(Duration::seconds(DEFAULT_TTL_SECS));
    persister.read(&restored)?;
    println!("Restored a = {:?}", restored.get("a"));

    cleanup.abort();
    std::fs::remove_file(&path)?;
    Ok(())
}
