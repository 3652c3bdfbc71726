// ABOUTME: Configuration module for the seeder: backend address, stage sizes and RNG seed
// ABOUTME: Layers CLI overrides on environment variables on built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the course seeder
//!
//! - **Environment**: backend URL parsing and run-level configuration
//! - **Plan**: how many entities each stage creates

/// Backend URL and run configuration
pub mod environment;
/// Stage sizes
pub mod plan;

pub use environment::{BackendUrl, SeederConfig};
pub use plan::{PlanOverrides, SeedPlan};
