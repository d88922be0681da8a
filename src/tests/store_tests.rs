use super::utils::{date, seed_users};
use crate::error::AppError;
use crate::models::NewUser;
use crate::store::{memory::MemoryUserStore, UserStore};

fn sample_new_user(email: &str, birthday: chrono::NaiveDate) -> NewUser {
    NewUser {
        email: email.into(),
        first_name: "Sample".into(),
        last_name: "User".into(),
        birthday,
        address: None,
        phone_number: None,
    }
}

#[tokio::test]
async fn test_insert_assigns_sequential_ids() {
    let store = MemoryUserStore::new();

    let first = store
        .insert(sample_new_user("a@example.com", date(1990, 1, 1)))
        .await
        .unwrap();
    let second = store
        .insert(sample_new_user("b@example.com", date(1991, 1, 1)))
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_id_counter_continues_after_seeded_data() {
    let store = MemoryUserStore::with_data(seed_users());

    let created = store
        .insert(sample_new_user("d@example.com", date(1990, 1, 1)))
        .await
        .unwrap();

    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn test_find_by_id() {
    let store = MemoryUserStore::with_data(seed_users());

    let found = store.find_by_id(1).await.unwrap();
    assert_eq!(found.unwrap().email, "alice@example.com");

    let missing = store.find_by_id(999).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_update_replaces_stored_record() {
    let store = MemoryUserStore::with_data(seed_users());

    let mut user = store.find_by_id(2).await.unwrap().unwrap();
    user.first_name = "Robert".into();

    let updated = store.update(user).await.unwrap();
    assert_eq!(updated.first_name, "Robert");

    let reloaded = store.find_by_id(2).await.unwrap().unwrap();
    assert_eq!(reloaded.first_name, "Robert");
}

#[tokio::test]
async fn test_update_missing_user_fails() {
    let store = MemoryUserStore::new();

    let mut user = seed_users().remove(0);
    user.id = 999;

    let result = store.update(user).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_removes_record() {
    let store = MemoryUserStore::with_data(seed_users());

    store.delete(1).await.unwrap();
    assert!(store.find_by_id(1).await.unwrap().is_none());

    let result = store.delete(1).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_birthday_range_is_inclusive_and_ordered() {
    let store = MemoryUserStore::with_data(seed_users());

    let users = store
        .find_by_birthday_range(date(1990, 1, 1), date(2000, 12, 31))
        .await
        .unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let narrowed = store
        .find_by_birthday_range(date(1990, 1, 2), date(2000, 12, 30))
        .await
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].id, 2);
}

#[tokio::test]
async fn test_birthday_range_empty_result() {
    let store = MemoryUserStore::with_data(seed_users());

    let users = store
        .find_by_birthday_range(date(1970, 1, 1), date(1971, 1, 1))
        .await
        .unwrap();

    assert!(users.is_empty());
}
