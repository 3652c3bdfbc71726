// ABOUTME: Five-stage seeding pipeline: users, courses, units, classes, comments and ratings
// ABOUTME: Owns the created-entity lists used to wire foreign keys between stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Seeder
//!
//! [`Seeder`] drives a fixed, strictly sequential pipeline against the
//! backend. Every stage reads the entities collected by the stages before it
//! and appends what it creates:
//!
//! ```text
//! Users -> Courses -> Units -> Classes -> Comments/Ratings
//! ```
//!
//! A rejected item is logged with its payload and skipped. An unreachable
//! backend, or any other failure, ends the run with an error; whatever was
//! already created stays on the backend.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{error, info, info_span, warn, Instrument};

use crate::client::BackendClient;
use crate::config::{SeedPlan, SeederConfig};
use crate::constants::endpoints;
use crate::errors::{SeedError, SeedResult};
use crate::generators;
use crate::models::{
    ClassRecord, CommentRecord, CourseRecord, InstructorAssignment, RatingRecord, UnitRecord,
    UserRecord,
};

/// Phases of a seeding run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Register accounts, then reload the full user list
    Users,
    /// Create courses and assign instructors
    Courses,
    /// Create units for every course
    Units,
    /// Create classes for every unit
    Classes,
    /// Post comments and ratings for every course
    Feedback,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Courses,
        Self::Units,
        Self::Classes,
        Self::Feedback,
    ];

    /// 1-based step number used in progress logs
    #[must_use]
    pub const fn step(self) -> usize {
        match self {
            Self::Users => 1,
            Self::Courses => 2,
            Self::Units => 3,
            Self::Classes => 4,
            Self::Feedback => 5,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users => write!(f, "users"),
            Self::Courses => write!(f, "courses"),
            Self::Units => write!(f, "units"),
            Self::Classes => write!(f, "classes"),
            Self::Feedback => write!(f, "comments and ratings"),
        }
    }
}

/// Entity counts held in memory at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    /// Users in the last bulk listing
    pub users: usize,
    /// Of which instructors
    pub instructors: usize,
    /// Of which students
    pub students: usize,
    /// Courses created
    pub courses: usize,
    /// Units created
    pub units: usize,
    /// Classes created
    pub classes: usize,
    /// Comments created
    pub comments: usize,
    /// Ratings created
    pub ratings: usize,
}

/// Seeding run state: the backend client, the RNG and every entity created so far
pub struct Seeder {
    client: BackendClient,
    plan: SeedPlan,
    rng: StdRng,
    users: Vec<UserRecord>,
    courses: Vec<CourseRecord>,
    units: Vec<UnitRecord>,
    classes: Vec<ClassRecord>,
    comments: Vec<CommentRecord>,
    ratings: Vec<RatingRecord>,
}

impl Seeder {
    /// Create a seeder with a default HTTP client for the configured backend
    #[must_use]
    pub fn new(config: SeederConfig) -> Self {
        let client = BackendClient::new(config.base_url);
        Self::with_client(client, config.plan, config.rng_seed)
    }

    /// Create a seeder around an existing client
    #[must_use]
    pub fn with_client(client: BackendClient, plan: SeedPlan, rng_seed: Option<u64>) -> Self {
        let rng = rng_seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            client,
            plan,
            rng,
            users: Vec::new(),
            courses: Vec::new(),
            units: Vec::new(),
            classes: Vec::new(),
            comments: Vec::new(),
            ratings: Vec::new(),
        }
    }

    /// Run every stage in order with the configured plan
    ///
    /// # Errors
    ///
    /// Returns the first fatal error: [`SeedError::Connection`] when the
    /// backend is unreachable, or any non-soft failure. Rejected items never
    /// end the run.
    pub async fn run(&mut self) -> SeedResult<SeedSummary> {
        info!(backend = %self.client.base_url(), "=== Course Platform Demo Data Seeder ===");
        let plan = self.plan;

        for stage in Stage::ALL {
            info!("Step {}: Creating {}...", stage.step(), stage);
            let span = info_span!("stage", stage = %stage);
            match stage {
                Stage::Users => self.create_users(plan.users).instrument(span).await?,
                Stage::Courses => self.create_courses(plan.courses).instrument(span).await?,
                Stage::Units => {
                    self.create_units(plan.units_per_course)
                        .instrument(span)
                        .await?;
                }
                Stage::Classes => {
                    self.create_classes(plan.classes_per_unit)
                        .instrument(span)
                        .await?;
                }
                Stage::Feedback => {
                    self.create_comments_and_ratings(
                        plan.comments_per_course,
                        plan.ratings_per_course,
                    )
                    .instrument(span)
                    .await?;
                }
            }
        }

        let summary = self.summary();
        info!("");
        info!("=== Database seeded successfully ===");
        info!(
            "Users: {} ({} instructors, {} students)",
            summary.users, summary.instructors, summary.students
        );
        info!("Courses: {}", summary.courses);
        info!("Units: {}", summary.units);
        info!("Classes: {}", summary.classes);
        info!("Comments: {}", summary.comments);
        info!("Ratings: {}", summary.ratings);
        Ok(summary)
    }

    /// Register `count` users, then replace the user list with the backend's listing
    ///
    /// The first `count / 3` users are instructors. Rejected registrations
    /// are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SeedError`]; rejections are not errors
    pub async fn create_users(&mut self, count: usize) -> SeedResult<()> {
        for index in 0..count {
            let payload = generators::new_user(index, count);
            let result = self
                .client
                .post_discarding_body(endpoints::USERS_REGISTER, &payload)
                .await;
            if tolerate(result, "user", &payload)?.is_some() {
                info!("  Created user: {} ({})", payload.email, payload.role);
            }
        }

        match self.client.get::<Vec<UserRecord>>(endpoints::USERS).await {
            Ok(users) => self.users = users,
            Err(e) if e.is_soft() => {
                error!(error = %e, "Error listing users");
                self.users.clear();
            }
            Err(e) => return Err(e),
        }

        info!(
            "  Loaded {} users ({} instructors, {} students)",
            self.users.len(),
            self.users.iter().filter(|u| u.is_instructor()).count(),
            self.users.iter().filter(|u| u.is_student()).count()
        );
        Ok(())
    }

    /// Create `count` courses, assigning a random instructor to each one created
    ///
    /// The instructor pool is taken once at stage entry. With no instructors
    /// the assignment step is skipped.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SeedError`]; rejections are not errors
    pub async fn create_courses(&mut self, count: usize) -> SeedResult<()> {
        let instructors = self.instructors();
        if instructors.is_empty() {
            warn!("No instructors available, courses will be created without one");
        }

        for index in 0..count {
            let payload = generators::new_course(index, &mut self.rng);
            let result = self
                .client
                .post::<_, CourseRecord>(endpoints::COURSES, &payload)
                .await;
            let Some(course) = tolerate(result, "course", &payload)? else {
                continue;
            };

            if let Some(instructor) = generators::pick_instructor(&instructors, &mut self.rng) {
                let assignment = InstructorAssignment {
                    instructor_id: instructor.id.clone(),
                };
                let result = self
                    .client
                    .put(&endpoints::course_instructor(&course.id), &assignment)
                    .await;
                if tolerate(result, "instructor assignment", &assignment)?.is_some() {
                    info!("  Assigned {} to {}", instructor.username, payload.name);
                }
            }

            info!("  Created course: {}", payload.name);
            self.courses.push(course);
        }
        Ok(())
    }

    /// Create `per_course` units for every course created so far
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SeedError`]; rejections are not errors
    pub async fn create_units(&mut self, per_course: usize) -> SeedResult<()> {
        let courses = self.courses.clone();
        for course in &courses {
            for index in 0..per_course {
                let payload = generators::new_unit(index, course);
                let result = self
                    .client
                    .post::<_, UnitRecord>(endpoints::UNITS, &payload)
                    .await;
                if let Some(unit) = tolerate(result, "unit", &payload)? {
                    info!("  Created unit: {}", payload.name);
                    self.units.push(unit);
                }
            }
        }
        Ok(())
    }

    /// Create `per_unit` classes for every unit created so far
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SeedError`]; rejections are not errors
    pub async fn create_classes(&mut self, per_unit: usize) -> SeedResult<()> {
        let units = self.units.clone();
        for unit in &units {
            for index in 0..per_unit {
                let payload = generators::new_class(index, unit, &mut self.rng);
                let result = self
                    .client
                    .post::<_, ClassRecord>(endpoints::CLASSES, &payload)
                    .await;
                if let Some(class) = tolerate(result, "class", &payload)? {
                    info!("  Created class: {}", payload.name);
                    self.classes.push(class);
                }
            }
        }
        Ok(())
    }

    /// Post comments and ratings from randomly sampled students on every course
    ///
    /// Each course gets comments from up to `comments_per_course` distinct
    /// students and, from an independent sample, ratings from up to
    /// `ratings_per_course` distinct students.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`SeedError`]; rejections are not errors
    pub async fn create_comments_and_ratings(
        &mut self,
        comments_per_course: usize,
        ratings_per_course: usize,
    ) -> SeedResult<()> {
        let students = self.students();
        let courses = self.courses.clone();

        for course in &courses {
            let authors = generators::sample_students(&students, comments_per_course, &mut self.rng);
            for student in authors {
                let payload = generators::new_comment(course, student);
                let result = self
                    .client
                    .post::<_, CommentRecord>(endpoints::COMMENTS, &payload)
                    .await;
                if let Some(comment) = tolerate(result, "comment", &payload)? {
                    info!("  Created comment for course {}", course.name);
                    self.comments.push(comment);
                }
            }

            let raters = generators::sample_students(&students, ratings_per_course, &mut self.rng);
            for student in raters {
                let payload = generators::new_rating(course, student, &mut self.rng);
                let result = self
                    .client
                    .post::<_, RatingRecord>(endpoints::RATINGS, &payload)
                    .await;
                if let Some(rating) = tolerate(result, "rating", &payload)? {
                    info!("  Created rating for course {}", course.name);
                    self.ratings.push(rating);
                }
            }
        }
        Ok(())
    }

    /// Users from the last bulk listing
    #[must_use]
    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// Users with the instructor role
    #[must_use]
    pub fn instructors(&self) -> Vec<UserRecord> {
        self.users
            .iter()
            .filter(|u| u.is_instructor())
            .cloned()
            .collect()
    }

    /// Users with the student role
    #[must_use]
    pub fn students(&self) -> Vec<UserRecord> {
        self.users
            .iter()
            .filter(|u| u.is_student())
            .cloned()
            .collect()
    }

    /// Courses created, in creation order
    #[must_use]
    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    /// Units created, in creation order
    #[must_use]
    pub fn units(&self) -> &[UnitRecord] {
        &self.units
    }

    /// Classes created, in creation order
    #[must_use]
    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    /// Comments created, in creation order
    #[must_use]
    pub fn comments(&self) -> &[CommentRecord] {
        &self.comments
    }

    /// Ratings created, in creation order
    #[must_use]
    pub fn ratings(&self) -> &[RatingRecord] {
        &self.ratings
    }

    /// Current entity counts
    #[must_use]
    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: self.users.len(),
            instructors: self.users.iter().filter(|u| u.is_instructor()).count(),
            students: self.users.iter().filter(|u| u.is_student()).count(),
            courses: self.courses.len(),
            units: self.units.len(),
            classes: self.classes.len(),
            comments: self.comments.len(),
            ratings: self.ratings.len(),
        }
    }
}

/// Turn a soft failure into `None` after logging it with the payload sent;
/// fatal errors pass through
fn tolerate<T, P: Serialize>(
    result: SeedResult<T>,
    entity: &str,
    payload: &P,
) -> SeedResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SeedError::Rejected { status, body, .. }) => {
            let sent = serde_json::to_string(payload).unwrap_or_default();
            error!(http.status = %status, "Error creating {entity}: {body}");
            error!("  Payload sent: {sent}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
