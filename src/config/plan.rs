// ABOUTME: Stage sizes for a seeding run with environment loading and CLI overrides
// ABOUTME: Unset values fall back to the defaults in constants::defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use crate::constants::{defaults, env_vars};
use crate::errors::{SeedError, SeedResult};

/// How many entities each stage creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    /// Accounts registered in the user stage
    pub users: usize,
    /// Courses created in the course stage
    pub courses: usize,
    /// Units created for each course
    pub units_per_course: usize,
    /// Classes created for each unit
    pub classes_per_unit: usize,
    /// Maximum distinct students commenting on each course
    pub comments_per_course: usize,
    /// Maximum distinct students rating each course
    pub ratings_per_course: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: defaults::USERS,
            courses: defaults::COURSES,
            units_per_course: defaults::UNITS_PER_COURSE,
            classes_per_unit: defaults::CLASSES_PER_UNIT,
            comments_per_course: defaults::COMMENTS_PER_COURSE,
            ratings_per_course: defaults::RATINGS_PER_COURSE,
        }
    }
}

/// Optional per-field values from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOverrides {
    /// `--users`
    pub users: Option<usize>,
    /// `--courses`
    pub courses: Option<usize>,
    /// `--units-per-course`
    pub units_per_course: Option<usize>,
    /// `--classes-per-unit`
    pub classes_per_unit: Option<usize>,
    /// `--comments-per-course`
    pub comments_per_course: Option<usize>,
    /// `--ratings-per-course`
    pub ratings_per_course: Option<usize>,
}

impl SeedPlan {
    /// Load stage sizes from `SEED_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Config`] if a variable is set but is not a
    /// non-negative integer
    pub fn from_env() -> SeedResult<Self> {
        Ok(Self {
            users: env_count(env_vars::USERS, defaults::USERS)?,
            courses: env_count(env_vars::COURSES, defaults::COURSES)?,
            units_per_course: env_count(env_vars::UNITS_PER_COURSE, defaults::UNITS_PER_COURSE)?,
            classes_per_unit: env_count(env_vars::CLASSES_PER_UNIT, defaults::CLASSES_PER_UNIT)?,
            comments_per_course: env_count(
                env_vars::COMMENTS_PER_COURSE,
                defaults::COMMENTS_PER_COURSE,
            )?,
            ratings_per_course: env_count(
                env_vars::RATINGS_PER_COURSE,
                defaults::RATINGS_PER_COURSE,
            )?,
        })
    }

    /// Apply command-line values on top of this plan
    #[must_use]
    pub fn with_overrides(self, overrides: PlanOverrides) -> Self {
        Self {
            users: overrides.users.unwrap_or(self.users),
            courses: overrides.courses.unwrap_or(self.courses),
            units_per_course: overrides.units_per_course.unwrap_or(self.units_per_course),
            classes_per_unit: overrides.classes_per_unit.unwrap_or(self.classes_per_unit),
            comments_per_course: overrides
                .comments_per_course
                .unwrap_or(self.comments_per_course),
            ratings_per_course: overrides
                .ratings_per_course
                .unwrap_or(self.ratings_per_course),
        }
    }
}

fn env_count(key: &'static str, default: usize) -> SeedResult<usize> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            SeedError::config(key, format!("expected a non-negative integer, got '{raw}'"))
        }),
        Err(_) => Ok(default),
    }
}
