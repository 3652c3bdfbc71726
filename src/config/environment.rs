// ABOUTME: Run configuration: validated backend base URL, stage plan and optional RNG seed
// ABOUTME: Builds a SeederConfig from the CLI arguments layered over environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::fmt;

use url::Url;

use super::plan::{PlanOverrides, SeedPlan};
use crate::constants::env_vars;
use crate::errors::{SeedError, SeedResult};

/// Base address of the backend, without trailing slashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl(String);

impl BackendUrl {
    /// Validate an http(s) base URL and strip any trailing slashes
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Config`] if the value is empty, unparsable, or
    /// not an http/https URL
    pub fn parse(raw: &str) -> SeedResult<Self> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(SeedError::config("BACKEND_URL", "must not be empty"));
        }

        let parsed = Url::parse(trimmed)
            .map_err(|e| SeedError::config("BACKEND_URL", format!("'{raw}' is not a URL: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_owned())),
            other => Err(SeedError::config(
                "BACKEND_URL",
                format!("unsupported scheme '{other}', expected http or https"),
            )),
        }
    }

    /// Absolute URL for a backend path such as `/users`
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }

    /// The normalized base URL
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackendUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a seeding run needs besides the HTTP client
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Backend base address
    pub base_url: BackendUrl,
    /// Stage sizes
    pub plan: SeedPlan,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub rng_seed: Option<u64>,
}

impl SeederConfig {
    /// Configuration with the default plan and an entropy-seeded RNG
    #[must_use]
    pub fn new(base_url: BackendUrl) -> Self {
        Self {
            base_url,
            plan: SeedPlan::default(),
            rng_seed: None,
        }
    }

    /// Build the run configuration from CLI values over environment variables
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Config`] for an invalid URL or a malformed
    /// `SEED_*` environment variable
    pub fn load(
        raw_url: &str,
        overrides: PlanOverrides,
        rng_seed: Option<u64>,
    ) -> SeedResult<Self> {
        let base_url = BackendUrl::parse(raw_url)?;
        let plan = SeedPlan::from_env()?.with_overrides(overrides);
        let rng_seed = match rng_seed {
            Some(seed) => Some(seed),
            None => env_seed()?,
        };

        Ok(Self {
            base_url,
            plan,
            rng_seed,
        })
    }

    /// Fix the RNG seed
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

fn env_seed() -> SeedResult<Option<u64>> {
    env::var(env_vars::RNG_SEED).map_or(Ok(None), |raw| {
        raw.trim().parse().map(Some).map_err(|_| {
            SeedError::config(env_vars::RNG_SEED, format!("expected an unsigned integer, got '{raw}'"))
        })
    })
}
