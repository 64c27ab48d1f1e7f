use dashboard_core::model::CourseId;
use dashboard_core::time::fixed_now;
use storage::keys;
use storage::repository::KeyValueRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_roundtrip_persists_values() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let key = keys::course_completed(CourseId::new(1));
    assert!(repo.get(&key).await.expect("read absent").is_none());

    repo.put(&key, "[1,3,5]", fixed_now()).await.expect("put");
    let stored = repo.get(&key).await.expect("read");
    assert_eq!(stored.as_deref(), Some("[1,3,5]"));

    repo.put(&key, "[1,3,5,7]", fixed_now())
        .await
        .expect("overwrite");
    let stored = repo.get(&key).await.expect("read after overwrite");
    assert_eq!(stored.as_deref(), Some("[1,3,5,7]"));
}

#[tokio::test]
async fn sqlite_remove_deletes_row() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_remove?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.put(keys::LOGGED_IN, "true", fixed_now())
        .await
        .expect("put");
    repo.put(keys::USER_EMAIL, "you@example.com", fixed_now())
        .await
        .expect("put");

    repo.remove(keys::LOGGED_IN).await.expect("remove");
    assert!(repo.get(keys::LOGGED_IN).await.expect("read").is_none());

    // Other keys are untouched.
    let email = repo.get(keys::USER_EMAIL).await.expect("read");
    assert_eq!(email.as_deref(), Some("you@example.com"));

    // Removing again is a no-op.
    repo.remove(keys::LOGGED_IN).await.expect("remove again");
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.migrate().await.expect("second migrate");

    repo.put(keys::THEME, "dark", fixed_now()).await.expect("put");
    let stored = repo.get(keys::THEME).await.expect("read");
    assert_eq!(stored.as_deref(), Some("dark"));
}
