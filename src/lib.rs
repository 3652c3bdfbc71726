// ABOUTME: Library entry point for the course platform demo data seeder
// ABOUTME: Exposes the seeding pipeline, its HTTP client, configuration and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Course Seeder
//!
//! Populates a running course platform backend with synthetic demo data over
//! its REST API: users, courses, units, classes, comments and ratings.
//!
//! The run is a single sequential pass over five stages. Entities created by
//! earlier stages supply the foreign keys of later ones, so the seeder keeps
//! them in memory for the duration of the run. The backend remains the system
//! of record; nothing is persisted locally.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use course_seeder::config::{BackendUrl, SeederConfig};
//! use course_seeder::errors::SeedResult;
//! use course_seeder::seeder::Seeder;
//!
//! #[tokio::main]
//! async fn main() -> SeedResult<()> {
//!     let base_url = BackendUrl::parse("http://localhost:3000/")?;
//!     let mut seeder = Seeder::new(SeederConfig::new(base_url).with_rng_seed(7));
//!
//!     let summary = seeder.run().await?;
//!     println!("Seeded {} courses", summary.courses);
//!     Ok(())
//! }
//! ```

/// HTTP client for the target backend
pub mod client;

/// Run configuration
pub mod config;

/// Endpoint paths, defaults and value ranges
pub mod constants;

/// Error taxonomy
pub mod errors;

/// Synthetic payload builders
pub mod generators;

/// Logging setup
pub mod logging;

/// Backend records and request payloads
pub mod models;

/// The five-stage seeding pipeline
pub mod seeder;
