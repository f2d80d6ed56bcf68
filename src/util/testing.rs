//! Test support shared by unit and integration tests: one-time tracing
//! setup and small sample institutes.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{Course, Department, DomainResult, Faculty, Group, Institute, Student};

static TEST_SETUP: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
///
/// Honors `RUST_LOG`, defaulting to `debug`.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter);

        if tracing::dispatcher::has_been_set() {
            debug!("tracing subscriber already installed");
            return;
        }
        if let Err(e) = tracing_subscriber::registry().with(layer).try_init() {
            eprintln!("Error: failed to set up test logging: {e}");
        }
    });
}

/// `Tech` → Course 1 → Science → Math → A → Alice A (S1, 90.0)
pub fn sample_institute() -> DomainResult<Institute> {
    let student = Student::new("Alice", "A", "S1", 90.0)?;
    let group = Group::with_students("A", [student])?;
    let department = Department::with_groups("Math", [group])?;
    let faculty = Faculty::with_departments("Science", [department])?;
    let course = Course::with_faculties(1, [faculty])?;
    Institute::with_courses("Tech", [course])
}
