use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;

use crate::error::Result;
use crate::models::{NewUser, User};
use crate::routes::create_router_with_store;
use crate::store::{memory::MemoryUserStore, UserStore};
use crate::validation::AgePolicy;

pub const TEST_MINIMUM_AGE: u32 = 18;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Seed records used by the router-level tests. All three are well past the
/// age threshold; their birthdays give the search tests exact boundaries.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            email: "alice@example.com".into(),
            first_name: "Alice".into(),
            last_name: "Anderson".into(),
            birthday: date(1990, 1, 1),
            address: Some("1 First Street".into()),
            phone_number: Some("+380501112233".into()),
        },
        User {
            id: 2,
            email: "bob@example.com".into(),
            first_name: "Bob".into(),
            last_name: "Brown".into(),
            birthday: date(1995, 6, 15),
            address: None,
            phone_number: None,
        },
        User {
            id: 3,
            email: "carol@example.com".into(),
            first_name: "Carol".into(),
            last_name: "Clark".into(),
            birthday: date(2000, 12, 31),
            address: Some("3 Third Street".into()),
            phone_number: None,
        },
    ]
}

/// Router over a seeded in-memory store.
pub fn test_app() -> Router {
    let store = Arc::new(MemoryUserStore::with_data(seed_users()));
    create_router_with_store(store, AgePolicy::new(TEST_MINIMUM_AGE))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_to_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Store wrapper that counts calls, for asserting an operation never reached
/// the store.
pub struct CountingStore<S> {
    inner: S,
    pub inserts: AtomicUsize,
    pub updates: AtomicUsize,
    pub deletes: AtomicUsize,
    pub range_queries: AtomicUsize,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            inserts: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
            range_queries: AtomicUsize::new(0),
        }
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    pub fn range_query_count(&self) -> usize {
        self.range_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S> UserStore for CountingStore<S>
where
    S: UserStore,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(new_user).await
    }

    async fn update(&self, user: User) -> Result<User> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(user).await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(id).await
    }

    async fn find_by_birthday_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<User>> {
        self.range_queries.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_birthday_range(from, to).await
    }
}
