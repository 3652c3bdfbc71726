// ABOUTME: Error taxonomy for seeding runs, split into soft per-item and fatal run-level failures
// ABOUTME: Classification helpers drive whether a stage logs and continues or the run aborts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! A seeding run distinguishes three kinds of failure:
//!
//! - **Soft**: the backend answered with a non-success status for one item.
//!   The stage logs it together with the payload and moves on.
//! - **Connection**: the backend could not be reached at all. The run aborts.
//! - **Unexpected**: anything else (a transport error after connecting, an
//!   undecodable success body, bad configuration). The run aborts.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while configuring or running a seeding pass
#[derive(Debug, Error)]
pub enum SeedError {
    /// The backend answered with a non-success status
    #[error("{method} {path} returned HTTP {status}: {body}")]
    Rejected {
        /// HTTP method of the rejected call
        method: &'static str,
        /// Request path relative to the backend base URL
        path: String,
        /// Status the backend answered with
        status: StatusCode,
        /// Raw response body, usually the backend's validation message
        body: String,
    },

    /// The backend could not be reached
    #[error("Could not connect to {base_url}")]
    Connection {
        /// Base URL the run was configured with
        base_url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The request failed after a connection was established
    #[error("{method} {path} failed: {source}")]
    Transport {
        /// HTTP method of the failed call
        method: &'static str,
        /// Request path relative to the backend base URL
        path: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// A success response carried a body that does not match the expected record
    #[error("Failed to decode response from {path}: {source}")]
    Decode {
        /// Request path relative to the backend base URL
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid command-line or environment configuration
    #[error("Invalid configuration for {key}: {reason}")]
    Config {
        /// Flag or environment variable at fault
        key: &'static str,
        /// What is wrong with the value
        reason: String,
    },
}

impl SeedError {
    /// Create a configuration error
    pub fn config(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Config {
            key,
            reason: reason.into(),
        }
    }

    /// Whether the failure concerns a single item and the stage may continue
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Whether the backend was unreachable
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Result alias used across the crate
pub type SeedResult<T> = Result<T, SeedError>;
