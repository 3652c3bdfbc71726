// ABOUTME: Records read back from the backend and request payloads sent to it
// ABOUTME: Serde shapes follow the backend's camelCase JSON and its `_id` identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! The seeder does not own the backend schema. Record types declare only the
//! fields later stages read; everything else in a response is ignored.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May be assigned to teach a course
    Instructor,
    /// May comment on and rate courses
    Student,
    /// Any role this seeder does not generate (admins and the like)
    #[serde(other)]
    Other,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instructor => write!(f, "instructor"),
            Self::Student => write!(f, "student"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Course difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// No prior knowledge
    Beginner,
    /// Some prior knowledge
    Intermediate,
    /// Experienced learners
    Advanced,
}

impl CourseLevel {
    /// Every level, in increasing difficulty
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];
}

/// User as listed by `GET /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Missing roles are treated as [`Role::Other`]
    #[serde(default = "default_role")]
    pub role: Role,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Contact address
    #[serde(default)]
    pub email: Option<String>,
}

const fn default_role() -> Role {
    Role::Other
}

impl UserRecord {
    /// Whether the user can be assigned to a course
    #[must_use]
    pub fn is_instructor(&self) -> bool {
        self.role == Role::Instructor
    }

    /// Whether the user can comment on and rate courses
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}

/// Course as returned by `POST /courses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, reused in unit names
    #[serde(default)]
    pub name: String,
}

/// Unit as returned by `POST /units`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRecord {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name, reused in class names
    #[serde(default)]
    pub name: String,
}

/// Class as returned by `POST /classes`; no later stage reads it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Backend identifier, when the response carries one
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Comment as returned by `POST /comments`; no later stage reads it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Backend identifier, when the response carries one
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Course the comment belongs to
    #[serde(default)]
    pub course_id: Option<String>,
    /// Authoring student
    #[serde(default)]
    pub author_id: Option<String>,
}

/// Rating as returned by `POST /ratings`
///
/// Ratings are relationships between a user and a course, so the backend
/// answers without an `_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    /// Rating student
    #[serde(default)]
    pub user_id: Option<String>,
    /// Rated course
    #[serde(default)]
    pub course_id: Option<String>,
    /// Score; the graph store may hand it back as a float
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Body of `POST /users/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Login email
    pub email: String,
    /// Plain-text password, hashed by the backend
    pub password: String,
    /// Login name
    pub username: String,
    /// Requested role
    pub role: Role,
}

/// Body of `POST /courses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    /// Unique course name
    pub name: String,
    /// Long description
    pub description: String,
    /// Difficulty
    pub level: CourseLevel,
    /// Duration in hours
    pub duration: u32,
    /// Price
    pub price: u32,
}

/// Body of `PUT /courses/{id}/instructor`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorAssignment {
    /// User to assign
    pub instructor_id: String,
}

/// Body of `POST /units`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUnit {
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Owning course
    pub course_id: String,
    /// 1-based position within the course
    pub order: usize,
}

/// Body of `POST /classes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClass {
    /// Display name
    pub name: String,
    /// Long description
    pub description: String,
    /// Lesson body
    pub content: String,
    /// Duration in minutes
    pub duration: u32,
    /// Owning unit
    pub unit_id: String,
}

/// Body of `POST /comments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    /// Short heading
    pub title: String,
    /// Comment text
    pub content: String,
    /// Course being discussed
    pub course_id: String,
    /// Authoring student
    pub author_id: String,
}

/// Body of `POST /ratings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    /// Score
    pub rating: u8,
    /// Course being rated
    pub course_id: String,
    /// Rating student
    pub user_id: String,
}
