//! Student: the leaf of the hierarchy

use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::collection::Keyed;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::named::{validate_name, NamedEntity};

/// Accepted range for a student's average grade, both ends inclusive.
pub const GRADE_RANGE: RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    first_name: String,
    last_name: String,
    full_name: String,
    student_id: String,
    average_grade: f64,
}

impl Student {
    pub fn new(
        first_name: &str,
        last_name: &str,
        student_id: &str,
        average_grade: f64,
    ) -> DomainResult<Self> {
        let first_name = validate_name(Self::KIND, "first name", first_name)?;
        let last_name = validate_name(Self::KIND, "last name", last_name)?;
        let student_id = validate_name(Self::KIND, "id", student_id)?;
        validate_grade(average_grade)?;

        let full_name = format!("{first_name} {last_name}");
        Ok(Self {
            first_name,
            last_name,
            full_name,
            student_id,
            average_grade,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"<first> <last>"`
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    /// Replace the average grade; the old value is kept when `new_grade` is out of range.
    pub fn update_average_grade(&mut self, new_grade: f64) -> DomainResult<()> {
        validate_grade(new_grade)?;
        self.average_grade = new_grade;
        Ok(())
    }

    /// Case-insensitive substring match against the full name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }
}

fn validate_grade(grade: f64) -> DomainResult<()> {
    // NaN fails the range check as well
    if !GRADE_RANGE.contains(&grade) {
        return Err(DomainError::validation(format!(
            "average grade must be between {:.1} and {:.1}, got {grade}",
            GRADE_RANGE.start(),
            GRADE_RANGE.end()
        )));
    }
    Ok(())
}

impl NamedEntity for Student {
    const KIND: &'static str = "Student";

    fn name(&self) -> &str {
        &self.full_name
    }
}

impl Keyed for Student {
    type Key = str;

    fn key(&self) -> &str {
        &self.student_id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student {} (ID: {}) - Average grade: {:.2}",
            self.full_name, self.student_id, self.average_grade
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(55.5)]
    #[case(100.0)]
    fn given_grade_in_range_when_constructing_then_succeeds(#[case] grade: f64) {
        let student = Student::new("Alice", "Anderson", "S001", grade).unwrap();
        assert_eq!(student.average_grade(), grade);
    }

    #[rstest]
    #[case(-0.01)]
    #[case(100.01)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn given_grade_out_of_range_when_constructing_then_fails(#[case] grade: f64) {
        let err = Student::new("Alice", "Anderson", "S001", grade).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[rstest]
    #[case("", "Anderson", "S001")]
    #[case("Alice", "  ", "S001")]
    #[case("Alice", "Anderson", "")]
    fn given_blank_identity_field_when_constructing_then_fails(
        #[case] first: &str,
        #[case] last: &str,
        #[case] id: &str,
    ) {
        let err = Student::new(first, last, id, 50.0).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn given_invalid_update_when_updating_grade_then_keeps_old_grade() {
        let mut student = Student::new("Bob", "Baker", "S002", 85.0).unwrap();

        assert!(student.update_average_grade(101.0).is_err());
        assert_eq!(student.average_grade(), 85.0);

        student.update_average_grade(100.0).unwrap();
        assert_eq!(student.average_grade(), 100.0);
    }

    #[test]
    fn given_student_when_displaying_then_renders_grade_with_two_decimals() {
        let student = Student::new("Alice", "A", "S1", 90.0).unwrap();
        assert_eq!(
            student.to_string(),
            "Student Alice A (ID: S1) - Average grade: 90.00"
        );
        assert_eq!(student.label(), "Student: Alice A");
    }

    #[test]
    fn given_fragment_spanning_first_and_last_name_when_matching_then_matches_full_name() {
        let student = Student::new("Alice", "Anderson", "S001", 92.5).unwrap();
        assert!(student.name_contains("CE AND"));
        assert!(!student.name_contains("bob"));
    }
}
