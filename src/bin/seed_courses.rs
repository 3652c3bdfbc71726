// ABOUTME: Command-line entry point that seeds a course platform backend with demo data
// ABOUTME: Parses the backend URL and stage sizes, runs the pipeline, maps failures to exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Demo data seeder for a course platform backend.
//!
//! Usage:
//! ```bash
//! # Seed with default stage sizes
//! cargo run --bin seed-courses -- http://localhost:3000
//!
//! # Reproducible run with more users and fewer classes
//! cargo run --bin seed-courses -- http://localhost:3000 --users 30 --classes-per-unit 2 --seed 42
//!
//! # Verbose output
//! cargo run --bin seed-courses -- http://localhost:3000 -v
//! ```
//!
//! Exits with status 1 when the argument is missing, the backend cannot be
//! reached, or any unexpected error occurs. Individual rejected items are
//! logged and do not change the exit status.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use course_seeder::config::{PlanOverrides, SeederConfig};
use course_seeder::errors::SeedError;
use course_seeder::logging::{LogFormat, LoggingConfig};
use course_seeder::seeder::Seeder;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "seed-courses",
    version,
    about = "Course platform demo data seeder",
    long_about = "Populate a running course platform backend with demo users, courses, units, classes, comments and ratings"
)]
struct SeedArgs {
    /// Backend base URL, e.g. <http://localhost:3000>
    backend_url: String,

    /// Number of users to register (a third of them instructors)
    #[arg(long)]
    users: Option<usize>,

    /// Number of courses to create
    #[arg(long)]
    courses: Option<usize>,

    /// Units created for each course
    #[arg(long)]
    units_per_course: Option<usize>,

    /// Classes created for each unit
    #[arg(long)]
    classes_per_unit: Option<usize>,

    /// Maximum distinct students commenting on each course
    #[arg(long)]
    comments_per_course: Option<usize>,

    /// Maximum distinct students rating each course
    #[arg(long)]
    ratings_per_course: Option<usize>,

    /// RNG seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,

    /// Log output format (pretty, compact, json)
    #[arg(long)]
    log_format: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl SeedArgs {
    const fn overrides(&self) -> PlanOverrides {
        PlanOverrides {
            users: self.users,
            courses: self.courses,
            units_per_course: self.units_per_course,
            classes_per_unit: self.classes_per_unit,
            comments_per_course: self.comments_per_course,
            ratings_per_course: self.ratings_per_course,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match SeedArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let mut logging = LoggingConfig::from_env();
    if args.verbose {
        logging = logging.verbose();
    }
    if let Some(format) = args.log_format.as_deref() {
        logging = logging.with_format(LogFormat::from_str_or_default(format));
    }
    if let Err(e) = logging.init() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match seed(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_connection() => {
            error!("Error: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("Unexpected error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn seed(args: &SeedArgs) -> Result<(), SeedError> {
    let config = SeederConfig::load(&args.backend_url, args.overrides(), args.seed)?;
    let mut seeder = Seeder::new(config);
    seeder.run().await.map(|_| ())
}
