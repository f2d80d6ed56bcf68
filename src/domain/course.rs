//! Course: one study year, holding faculties unique by name

use std::fmt;
use std::ops::RangeInclusive;

use crate::domain::collection::{Keyed, KeyedCollection, Owner};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::faculty::Faculty;
use crate::domain::named::NamedEntity;

/// Valid course numbers, both ends inclusive.
pub const COURSE_NUMBERS: RangeInclusive<u8> = 1..=6;

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    number: u8,
    name: String,
    faculties: KeyedCollection<Faculty>,
}

impl Course {
    pub fn new(number: u8) -> DomainResult<Self> {
        let number = validate_number(i64::from(number))?;
        Ok(Self {
            number,
            name: format!("Course {number}"),
            faculties: KeyedCollection::new(),
        })
    }

    pub fn with_faculties(
        number: u8,
        faculties: impl IntoIterator<Item = Faculty>,
    ) -> DomainResult<Self> {
        let mut course = Self::new(number)?;
        for faculty in faculties {
            course.add_faculty(faculty)?;
        }
        Ok(course)
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn faculties(&self) -> &[Faculty] {
        self.faculties.as_slice()
    }

    pub fn add_faculty(&mut self, faculty: Faculty) -> DomainResult<()> {
        self.faculties.insert(
            faculty,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn remove_faculty(&mut self, name: &str) -> DomainResult<Faculty> {
        self.faculties.remove(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn find_faculty(&self, name: &str) -> Option<&Faculty> {
        self.faculties.find(name)
    }

    pub(crate) fn faculty_mut(&mut self, name: &str) -> DomainResult<&mut Faculty> {
        self.faculties.get_mut(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub(crate) fn faculties_mut(&mut self) -> impl Iterator<Item = &mut Faculty> {
        self.faculties.iter_mut()
    }
}

/// Check a raw (possibly deserialized) course number against [`COURSE_NUMBERS`].
pub(crate) fn validate_number(number: i64) -> DomainResult<u8> {
    u8::try_from(number)
        .ok()
        .filter(|n| COURSE_NUMBERS.contains(n))
        .ok_or_else(|| {
            DomainError::validation(format!(
                "course number must be between {} and {}, got {number}",
                COURSE_NUMBERS.start(),
                COURSE_NUMBERS.end()
            ))
        })
}

impl NamedEntity for Course {
    const KIND: &'static str = "Course";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Course {
    type Key = u8;

    fn key(&self) -> &u8 {
        &self.number
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course {}: {} faculties",
            self.number,
            self.faculties.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(255)]
    fn given_number_out_of_range_when_constructing_then_fails(#[case] number: u8) {
        let err = Course::new(number).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[rstest]
    #[case(-1)]
    #[case(300)]
    fn given_raw_number_outside_u8_when_validating_then_fails(#[case] number: i64) {
        assert!(validate_number(number).is_err());
    }

    #[test]
    fn given_boundary_numbers_when_constructing_then_succeeds() {
        assert_eq!(Course::new(1).unwrap().number(), 1);
        assert_eq!(Course::new(6).unwrap().number(), 6);
    }

    #[test]
    fn given_course_when_naming_then_uses_number() {
        let course = Course::new(3).unwrap();
        assert_eq!(course.name(), "Course 3");
        assert_eq!(course.to_string(), "Course 3: 0 faculties");
    }
}
