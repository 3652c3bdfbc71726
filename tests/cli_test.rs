// ABOUTME: End-to-end tests for the seed-courses binary
// ABOUTME: Checks exit codes for missing arguments, unreachable backends and complete runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::process::{Command, Output};

use common::{mount_backend, users_listing};
use wiremock::MockServer;

const SEED_VARS: [&str; 7] = [
    "SEED_USERS",
    "SEED_COURSES",
    "SEED_UNITS_PER_COURSE",
    "SEED_CLASSES_PER_UNIT",
    "SEED_COMMENTS_PER_COURSE",
    "SEED_RATINGS_PER_COURSE",
    "SEED_RNG_SEED",
];

fn seed_courses(args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_seed-courses"));
    for key in SEED_VARS {
        command.env_remove(key);
    }
    command
        .env_remove("RUST_LOG")
        .env("LOG_FORMAT", "compact")
        .args(args)
        .output()
        .expect("failed to launch seed-courses")
}

#[test]
fn test_missing_backend_url_exits_with_one() {
    let output = seed_courses(&[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BACKEND_URL"), "usage should name the argument: {stderr}");
}

#[test]
fn test_help_exits_cleanly() {
    let output = seed_courses(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_unreachable_backend_exits_with_one() {
    let output = seed_courses(&["http://127.0.0.1:1/"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Could not connect to http://127.0.0.1:1").count(), 1);

    // Startup, the banner and the first step announcement precede the first
    // request; nothing a stage produces may follow them
    let steps: Vec<&str> = stdout.lines().filter(|l| l.contains("Step ")).collect();
    assert_eq!(steps.len(), 1, "stdout: {stdout}");
    assert!(steps[0].contains("Step 1: Creating users..."));
    for line in stdout.lines() {
        let allowed = line.contains("Logging initialized")
            || line.contains("=== Course Platform Demo Data Seeder ===")
            || line.contains("Step 1: Creating users...")
            || line.contains("Error: Could not connect to http://127.0.0.1:1");
        assert!(allowed, "unexpected output line: {line}");
    }
}

#[test]
fn test_invalid_url_is_an_unexpected_error() {
    let output = seed_courses(&["ftp://example.com"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unexpected error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_complete_run_exits_with_zero() {
    let server = MockServer::start().await;
    mount_backend(&server, users_listing(1, 2)).await;
    let uri = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        seed_courses(&[
            &uri,
            "--users",
            "3",
            "--courses",
            "1",
            "--units-per-course",
            "1",
            "--classes-per-unit",
            "1",
            "--seed",
            "5",
        ])
    })
    .await
    .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("seeded successfully"));
    assert_eq!(server.received_requests().await.unwrap().len(), 3 + 1 + 1 + 1 + 1 + 1 + 2 + 2);
}
