// ABOUTME: Synthetic payload builders for every seeding stage
// ABOUTME: Pure functions over an injected RNG so runs can be reproduced from a seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data generation.
//!
//! Names and emails are derived from loop indices so repeated runs produce the
//! same accounts; numeric fields are drawn uniformly from the ranges in
//! [`crate::constants::demo`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{defaults, demo};
use crate::models::{
    CourseLevel, CourseRecord, NewClass, NewComment, NewCourse, NewRating, NewUnit, NewUser, Role,
    UnitRecord, UserRecord,
};

/// Role of the `index`-th of `total` generated users: the first `total / 3`
/// are instructors
#[must_use]
pub const fn role_for_index(index: usize, total: usize) -> Role {
    if index < total / defaults::INSTRUCTOR_DIVISOR {
        Role::Instructor
    } else {
        Role::Student
    }
}

/// Registration payload for the `index`-th of `total` users
#[must_use]
pub fn new_user(index: usize, total: usize) -> NewUser {
    NewUser {
        email: format!("user{index}@{}", demo::EMAIL_DOMAIN),
        password: demo::USER_PASSWORD.to_owned(),
        username: format!("user{index}"),
        role: role_for_index(index, total),
    }
}

/// Course payload with random level, duration and price
pub fn new_course<R: Rng + ?Sized>(index: usize, rng: &mut R) -> NewCourse {
    NewCourse {
        name: format!("Course {index}"),
        description: format!("Detailed description of course {index}"),
        level: CourseLevel::ALL
            .choose(rng)
            .copied()
            .unwrap_or(CourseLevel::Beginner),
        duration: rng.gen_range(demo::COURSE_DURATION),
        price: rng.gen_range(demo::COURSE_PRICE),
    }
}

/// Payload for the `index`-th (0-based) unit of `course`
#[must_use]
pub fn new_unit(index: usize, course: &CourseRecord) -> NewUnit {
    NewUnit {
        name: format!("Unit {index} - Course {}", course.name),
        description: format!("Description of unit {index}"),
        course_id: course.id.clone(),
        order: index + 1,
    }
}

/// Payload for the `index`-th class of `unit` with a random duration
pub fn new_class<R: Rng + ?Sized>(index: usize, unit: &UnitRecord, rng: &mut R) -> NewClass {
    NewClass {
        name: format!("Class {index} - {}", unit.name),
        description: format!("Description of class {index}"),
        content: demo::CLASS_CONTENT.to_owned(),
        duration: rng.gen_range(demo::CLASS_DURATION),
        unit_id: unit.id.clone(),
    }
}

/// Comment by `student` on `course`
#[must_use]
pub fn new_comment(course: &CourseRecord, student: &UserRecord) -> NewComment {
    NewComment {
        title: format!("Comment title from {}", student.username),
        content: format!("Comment from {} about the course", student.username),
        course_id: course.id.clone(),
        author_id: student.id.clone(),
    }
}

/// Rating by `student` of `course` with a random score
pub fn new_rating<R: Rng + ?Sized>(
    course: &CourseRecord,
    student: &UserRecord,
    rng: &mut R,
) -> NewRating {
    NewRating {
        rating: rng.gen_range(demo::RATING),
        course_id: course.id.clone(),
        user_id: student.id.clone(),
    }
}

/// Uniformly chosen instructor, if any
pub fn pick_instructor<'a, R: Rng + ?Sized>(
    instructors: &'a [UserRecord],
    rng: &mut R,
) -> Option<&'a UserRecord> {
    instructors.choose(rng)
}

/// Up to `amount` distinct students, fewer when the pool is smaller
pub fn sample_students<'a, R: Rng + ?Sized>(
    students: &'a [UserRecord],
    amount: usize,
    rng: &mut R,
) -> Vec<&'a UserRecord> {
    students
        .choose_multiple(rng, amount.min(students.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn students(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| UserRecord {
                id: format!("s{i}"),
                role: Role::Student,
                username: format!("user{i}"),
                email: None,
            })
            .collect()
    }

    fn course() -> CourseRecord {
        CourseRecord {
            id: "c1".into(),
            name: "Course 0".into(),
        }
    }

    #[test]
    fn test_first_third_are_instructors() {
        let roles: Vec<Role> = (0..9).map(|i| new_user(i, 9).role).collect();
        assert_eq!(roles.iter().filter(|r| **r == Role::Instructor).count(), 3);
        assert_eq!(roles.iter().filter(|r| **r == Role::Student).count(), 6);
        assert!(roles[..3].iter().all(|r| *r == Role::Instructor));

        // 10 / 3 == 3
        let ten: Vec<Role> = (0..10).map(|i| role_for_index(i, 10)).collect();
        assert_eq!(ten.iter().filter(|r| **r == Role::Instructor).count(), 3);

        // Fewer than three users means no instructors at all
        assert_eq!(role_for_index(0, 2), Role::Student);
    }

    #[test]
    fn test_user_identity_is_deterministic() {
        let user = new_user(4, 10);
        assert_eq!(user.email, "user4@example.com");
        assert_eq!(user.username, "user4");
        assert_eq!(user.password, demo::USER_PASSWORD);
    }

    #[test]
    fn test_course_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for i in 0..200 {
            let course = new_course(i, &mut rng);
            assert!(demo::COURSE_DURATION.contains(&course.duration));
            assert!(demo::COURSE_PRICE.contains(&course.price));
        }
    }

    #[test]
    fn test_unit_order_is_one_based() {
        let orders: Vec<usize> = (0..3).map(|i| new_unit(i, &course()).order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(new_unit(0, &course()).name, "Unit 0 - Course Course 0");
        assert_eq!(new_unit(2, &course()).course_id, "c1");
    }

    #[test]
    fn test_class_and_rating_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        let unit = UnitRecord {
            id: "u1".into(),
            name: "Unit 0 - Course Course 0".into(),
        };
        let pool = students(1);
        for i in 0..200 {
            let class = new_class(i, &unit, &mut rng);
            assert!(demo::CLASS_DURATION.contains(&class.duration));
            assert_eq!(class.unit_id, "u1");

            let rating = new_rating(&course(), &pool[0], &mut rng);
            assert!(demo::RATING.contains(&rating.rating));
        }
    }

    #[test]
    fn test_sample_never_exceeds_pool_or_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        for pool_size in 0..8 {
            let pool = students(pool_size);
            for _ in 0..20 {
                let picked = sample_students(&pool, 3, &mut rng);
                assert_eq!(picked.len(), pool_size.min(3));
                let distinct: HashSet<&str> = picked.iter().map(|s| s.id.as_str()).collect();
                assert_eq!(distinct.len(), picked.len());
            }
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let mut first = StdRng::seed_from_u64(99);
        let mut second = StdRng::seed_from_u64(99);
        assert_eq!(new_course(0, &mut first), new_course(0, &mut second));
    }

    #[test]
    fn test_pick_instructor_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(pick_instructor(&[], &mut rng).is_none());
    }
}
