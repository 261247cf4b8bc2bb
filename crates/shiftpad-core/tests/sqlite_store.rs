use chrono::{Duration, Utc};

use shiftpad_core::cipher::Direction;
use shiftpad_core::store::{
    HistoryFilter, HistoryStore, NewHistoryRecord, NewUser, Role, SqliteStore, UserStore,
};
use shiftpad_core::ShiftpadError;

fn temp_store() -> (tempfile::TempDir, SqliteStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.db");
    SqliteStore::create(&path).expect("create should succeed");
    let store = SqliteStore::open(&path).expect("open should succeed");
    (dir, store)
}

#[test]
fn test_create_open_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("store.db");

    SqliteStore::create(&path).expect("create should succeed");
    assert!(path.exists());

    let store = SqliteStore::open(&path).expect("open should succeed");
    let metadata = store.metadata().expect("metadata");
    assert_eq!(metadata.format_version, "0.1");
    store.check_integrity().expect("integrity");
}

#[test]
fn test_create_refuses_existing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("store.db");

    SqliteStore::create(&path).expect("create should succeed");
    assert!(SqliteStore::create(&path).is_err());
}

#[test]
fn test_open_missing_file_fails_typed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = SqliteStore::open(&dir.path().join("missing.db"));
    assert!(matches!(result, Err(ShiftpadError::StoreNotFound)));
}

#[test]
fn test_user_crud() {
    let (_dir, store) = temp_store();

    let id = store
        .create_user(&NewUser::new("user@example.com", "User One", "hash-1"))
        .expect("create user");

    let user = store.get_user(&id).expect("get").expect("found");
    assert_eq!(user.email, "user@example.com");
    assert_eq!(user.name, "User One");
    assert_eq!(user.role, Role::User);
    assert!(user.last_login.is_none());

    let by_email = store
        .find_user_by_email("user@example.com")
        .expect("find")
        .expect("found");
    assert_eq!(by_email.id, id);

    store.touch_last_login(&id).expect("touch");
    let user = store.get_user(&id).expect("get").expect("found");
    assert!(user.last_login.is_some());

    assert!(store.delete_user(&id).expect("delete"));
    assert!(store.get_user(&id).expect("get").is_none());
    assert!(!store.delete_user(&id).expect("second delete"));
}

#[test]
fn test_duplicate_email_rejected() {
    let (_dir, store) = temp_store();

    store
        .create_user(&NewUser::new("user@example.com", "First", "hash-1"))
        .expect("create user");
    let result = store.create_user(&NewUser::new("user@example.com", "Second", "hash-2"));
    assert!(matches!(result, Err(ShiftpadError::Validation(_))));
}

#[test]
fn test_admin_role_round_trip() {
    let (_dir, store) = temp_store();

    let id = store
        .create_user(&NewUser::new("admin@example.com", "Admin", "hash").with_role(Role::Admin))
        .expect("create admin");

    let admin = store.get_user(&id).expect("get").expect("found");
    assert!(admin.is_admin());
}

#[test]
fn test_append_and_list_newest_first() {
    let (_dir, store) = temp_store();

    let user_id = store
        .create_user(&NewUser::new("user@example.com", "User", "hash"))
        .expect("create user");

    let base = Utc::now() - Duration::hours(3);
    for (offset, input) in ["first", "second", "third"].iter().enumerate() {
        let record = NewHistoryRecord::new(*input, "out", 3, Direction::Encrypt)
            .with_user(user_id)
            .with_created_at(base + Duration::hours(offset as i64));
        store.append_record(&record).expect("append");
    }

    let records = store
        .list_records(&HistoryFilter::new().user(user_id))
        .expect("list");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].input_text, "third");
    assert_eq!(records[2].input_text, "first");
}

#[test]
fn test_list_filters() {
    let (_dir, store) = temp_store();

    let alice = store
        .create_user(&NewUser::new("alice@example.com", "Alice", "hash"))
        .expect("create alice");
    let bob = store
        .create_user(&NewUser::new("bob@example.com", "Bob", "hash"))
        .expect("create bob");

    let base = Utc::now() - Duration::days(2);
    store
        .append_record(
            &NewHistoryRecord::new("old", "rog", 3, Direction::Encrypt)
                .with_user(alice)
                .with_created_at(base),
        )
        .expect("append");
    store
        .append_record(
            &NewHistoryRecord::new("new", "qhz", 3, Direction::Encrypt)
                .with_user(alice)
                .with_created_at(base + Duration::days(1)),
        )
        .expect("append");
    store
        .append_record(
            &NewHistoryRecord::new("qhz", "new", 3, Direction::Decrypt)
                .with_user(bob)
                .with_created_at(base + Duration::days(1)),
        )
        .expect("append");

    let alices = store
        .list_records(&HistoryFilter::new().user(alice))
        .expect("list");
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|r| r.user_id == Some(alice)));

    let recent = store
        .list_records(
            &HistoryFilter::new()
                .user(alice)
                .since(base + Duration::hours(12)),
        )
        .expect("list");
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].input_text, "new");

    let decrypts = store
        .list_records(&HistoryFilter::new().action(Direction::Decrypt))
        .expect("list");
    assert_eq!(decrypts.len(), 1);
    assert_eq!(decrypts[0].user_id, Some(bob));

    let limited = store
        .list_records(&HistoryFilter::new().limit(2))
        .expect("list");
    assert_eq!(limited.len(), 2);
}

#[test]
fn test_count_records() {
    let (_dir, store) = temp_store();

    let user_id = store
        .create_user(&NewUser::new("user@example.com", "User", "hash"))
        .expect("create user");

    for _ in 0..4 {
        store
            .append_record(
                &NewHistoryRecord::new("in", "out", 5, Direction::Encrypt).with_user(user_id),
            )
            .expect("append");
    }
    store
        .append_record(&NewHistoryRecord::new("out", "in", 5, Direction::Decrypt))
        .expect("append anonymous");

    assert_eq!(store.count_records(&HistoryFilter::new()).expect("count"), 5);
    assert_eq!(
        store
            .count_records(&HistoryFilter::new().action(Direction::Encrypt))
            .expect("count"),
        4
    );
    assert_eq!(
        store
            .count_records(&HistoryFilter::new().user(user_id))
            .expect("count"),
        4
    );
}

#[test]
fn test_get_record_round_trip() {
    let (_dir, store) = temp_store();

    let id = store
        .append_record(&NewHistoryRecord::new("HELLO", "KHOOR", 3, Direction::Encrypt))
        .expect("append");

    let record = store.get_record(&id).expect("get").expect("found");
    assert_eq!(record.input_text, "HELLO");
    assert_eq!(record.output_text, "KHOOR");
    assert_eq!(record.shift_key, 3);
    assert_eq!(record.action, Direction::Encrypt);
    assert!(record.user_id.is_none());

    let missing = store
        .get_record(&uuid::Uuid::new_v4())
        .expect("get missing");
    assert!(missing.is_none());
}

#[test]
fn test_append_with_unknown_owner_rejected() {
    let (_dir, store) = temp_store();

    let record =
        NewHistoryRecord::new("in", "out", 3, Direction::Encrypt).with_user(uuid::Uuid::new_v4());
    assert!(matches!(
        store.append_record(&record),
        Err(ShiftpadError::Validation(_))
    ));
}

#[test]
fn test_delete_user_detaches_history() {
    let (_dir, store) = temp_store();

    let user_id = store
        .create_user(&NewUser::new("user@example.com", "User", "hash"))
        .expect("create user");
    let record_id = store
        .append_record(&NewHistoryRecord::new("in", "out", 3, Direction::Encrypt).with_user(user_id))
        .expect("append");

    assert!(store.delete_user(&user_id).expect("delete"));

    let record = store.get_record(&record_id).expect("get").expect("found");
    assert!(record.user_id.is_none());
    assert_eq!(store.count_records(&HistoryFilter::new()).expect("count"), 1);
    store.check_integrity().expect("integrity");
}

#[test]
fn test_list_users_newest_first() {
    let (_dir, store) = temp_store();

    // created_at resolution is sub-second; insertion order is the
    // tiebreaker we rely on here, so just check the set and shape.
    store
        .create_user(&NewUser::new("a@example.com", "A", "hash"))
        .expect("create");
    store
        .create_user(&NewUser::new("b@example.com", "B", "hash"))
        .expect("create");

    let users = store.list_users().expect("list");
    assert_eq!(users.len(), 2);
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert!(emails.contains(&"a@example.com"));
    assert!(emails.contains(&"b@example.com"));
}
