// ABOUTME: Fixed endpoint paths, default stage sizes and value ranges for the seeder
// ABOUTME: Groups constants by domain so stages and generators share one source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Seeder constants grouped by domain: the backend's REST paths, the default
//! size of every stage, and the ranges random values are drawn from.

/// REST paths consumed on the target backend
pub mod endpoints {
    /// Account registration
    pub const USERS_REGISTER: &str = "/users/register";
    /// Bulk user listing
    pub const USERS: &str = "/users";
    /// Course creation
    pub const COURSES: &str = "/courses";
    /// Unit creation
    pub const UNITS: &str = "/units";
    /// Class creation
    pub const CLASSES: &str = "/classes";
    /// Comment creation
    pub const COMMENTS: &str = "/comments";
    /// Rating creation
    pub const RATINGS: &str = "/ratings";

    /// Instructor assignment path for one course
    #[must_use]
    pub fn course_instructor(course_id: &str) -> String {
        format!("{COURSES}/{course_id}/instructor")
    }
}

/// Default stage sizes, used when neither a flag nor an env var is set
pub mod defaults {
    /// Users registered in the first stage
    pub const USERS: usize = 10;
    /// Courses created in the second stage
    pub const COURSES: usize = 5;
    /// Units created for every course
    pub const UNITS_PER_COURSE: usize = 3;
    /// Classes created for every unit
    pub const CLASSES_PER_UNIT: usize = 4;
    /// Upper bound of distinct students commenting on one course
    pub const COMMENTS_PER_COURSE: usize = 3;
    /// Upper bound of distinct students rating one course
    pub const RATINGS_PER_COURSE: usize = 5;
    /// One in every `INSTRUCTOR_DIVISOR` generated users is an instructor
    pub const INSTRUCTOR_DIVISOR: usize = 3;
}

/// Synthetic value ranges and fixed demo values
pub mod demo {
    use std::ops::RangeInclusive;

    /// Placeholder password for every generated account
    pub const USER_PASSWORD: &str = "password123";
    /// Email domain for generated accounts
    pub const EMAIL_DOMAIN: &str = "example.com";
    /// Course duration in hours
    pub const COURSE_DURATION: RangeInclusive<u32> = 20..=60;
    /// Course price
    pub const COURSE_PRICE: RangeInclusive<u32> = 50..=200;
    /// Class duration in minutes
    pub const CLASS_DURATION: RangeInclusive<u32> = 30..=120;
    /// Rating value; the backend accepts 1..=5, demo data stays positive
    pub const RATING: RangeInclusive<u8> = 3..=5;
    /// Body text shared by all generated classes
    pub const CLASS_CONTENT: &str = "Detailed class content";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Overrides [`super::defaults::USERS`]
    pub const USERS: &str = "SEED_USERS";
    /// Overrides [`super::defaults::COURSES`]
    pub const COURSES: &str = "SEED_COURSES";
    /// Overrides [`super::defaults::UNITS_PER_COURSE`]
    pub const UNITS_PER_COURSE: &str = "SEED_UNITS_PER_COURSE";
    /// Overrides [`super::defaults::CLASSES_PER_UNIT`]
    pub const CLASSES_PER_UNIT: &str = "SEED_CLASSES_PER_UNIT";
    /// Overrides [`super::defaults::COMMENTS_PER_COURSE`]
    pub const COMMENTS_PER_COURSE: &str = "SEED_COMMENTS_PER_COURSE";
    /// Overrides [`super::defaults::RATINGS_PER_COURSE`]
    pub const RATINGS_PER_COURSE: &str = "SEED_RATINGS_PER_COURSE";
    /// Fixed RNG seed for reproducible runs
    pub const RNG_SEED: &str = "SEED_RNG_SEED";
}

/// Service identity used in logs
pub mod service_names {
    /// Binary and service name
    pub const COURSE_SEEDER: &str = "seed-courses";
}
