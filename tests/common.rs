// ABOUTME: Shared mock backend and helpers for seeder integration tests
// ABOUTME: Mounts wiremock endpoints that mimic the course platform REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `course_seeder`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use course_seeder::client::BackendClient;
use course_seeder::config::{BackendUrl, SeedPlan};
use course_seeder::seeder::Seeder;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Echoes the posted JSON back with a fresh `_id`, like the backend's create endpoints
pub struct CreatedRecord {
    prefix: &'static str,
    next_id: AtomicUsize,
}

impl CreatedRecord {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next_id: AtomicUsize::new(0),
        }
    }
}

impl Respond for CreatedRecord {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut record: Value = serde_json::from_slice(&request.body).unwrap_or_else(|_| json!({}));
        if let Some(fields) = record.as_object_mut() {
            fields.insert("_id".to_owned(), json!(format!("{}-{id}", self.prefix)));
        }
        ResponseTemplate::new(201).set_body_json(record)
    }
}

/// Answers `POST /ratings` the way the backend does: the stored relationship, without an `_id`
pub struct RatingRelationship;

impl Respond for RatingRelationship {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let sent: Value = serde_json::from_slice(&request.body).unwrap_or_else(|_| json!({}));
        ResponseTemplate::new(201).set_body_json(json!({
            "userId": sent["userId"],
            "courseId": sent["courseId"],
            "rating": sent["rating"],
            "createdAt": "2025-01-01T00:00:00.000Z",
            "updatedAt": "2025-01-01T00:00:00.000Z",
        }))
    }
}

/// A `GET /users` listing with the given number of instructors and students
pub fn users_listing(instructors: usize, students: usize) -> Value {
    let mut users = Vec::new();
    for i in 0..instructors {
        users.push(json!({
            "_id": format!("instructor-{i}"),
            "role": "instructor",
            "username": format!("user{i}"),
            "email": format!("user{i}@example.com"),
        }));
    }
    for i in 0..students {
        let n = instructors + i;
        users.push(json!({
            "_id": format!("student-{i}"),
            "role": "student",
            "username": format!("user{n}"),
            "email": format!("user{n}@example.com"),
        }));
    }
    Value::Array(users)
}

/// Mount every endpoint the seeder uses, all answering with success
pub async fn mount_backend(server: &MockServer, listing: Value) {
    Mock::given(method("POST"))
        .and(path("/users/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "registered"})))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing))
        .mount(server)
        .await;

    Mock::given(method("PUT"))
        .and(path_regex(r"^/courses/[^/]+/instructor$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(server)
        .await;

    for (endpoint, prefix) in [
        ("/courses", "course"),
        ("/units", "unit"),
        ("/classes", "class"),
        ("/comments", "comment"),
        ("/ratings", "rating"),
    ] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(CreatedRecord::new(prefix))
            .mount(server)
            .await;
    }
}

/// Seeder pointed at the mock server with a fixed RNG seed
pub fn seeder_for(server: &MockServer, plan: SeedPlan) -> Seeder {
    let base_url = BackendUrl::parse(&server.uri()).unwrap();
    Seeder::with_client(BackendClient::new(base_url), plan, Some(7))
}

/// JSON bodies of every request received with `verb` on an exact `route`
pub async fn bodies(server: &MockServer, verb: &str, route: &str) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.to_string() == verb && r.url.path() == route)
        .map(|r| serde_json::from_slice(&r.body).unwrap())
        .collect()
}

/// Number of requests received with `verb` on paths matching `predicate`
pub async fn count_matching(server: &MockServer, verb: &str, predicate: impl Fn(&str) -> bool) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|r| r.method.to_string() == verb && predicate(r.url.path()))
        .count()
}
