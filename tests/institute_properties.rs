//! Property-based tests for the institute hierarchy.
//!
//! These tests verify invariants that must hold for arbitrary input:
//! - Grade acceptance: valid iff 0.0 <= g <= 100.0, boundaries included
//! - Names: blank input is rejected, trimming touches only the ends
//! - Keyed collections: duplicates never change the child count, removal keeps order
//! - Round trip: from_plain(to_plain(x)) == x

use std::collections::BTreeSet;

use campus::domain::{
    Course, Department, DomainError, Faculty, Group, Institute, NamedEntity, Student,
    GRADE_RANGE,
};
use proptest::prelude::*;

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,15}").unwrap()
}

fn grade_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(100.0),
        0.0f64..=100.0,
    ]
}

fn student_strategy(id: usize) -> impl Strategy<Value = Student> {
    (name_strategy(), name_strategy(), grade_strategy()).prop_map(move |(first, last, grade)| {
        Student::new(&first, &last, &format!("S{id}"), grade).unwrap()
    })
}

fn group_strategy() -> impl Strategy<Value = Group> {
    (name_strategy(), 0usize..5)
        .prop_flat_map(|(name, count)| {
            let students: Vec<_> = (0..count).map(student_strategy).collect();
            (Just(name), students)
        })
        .prop_map(|(name, students)| Group::with_students(&name, students).unwrap())
}

/// One course per number, one faculty/department per course, groups with unique names.
fn institute_strategy() -> impl Strategy<Value = Institute> {
    (
        name_strategy(),
        prop::collection::btree_set(1u8..=6, 0..4),
        prop::collection::vec(group_strategy(), 0..4),
    )
        .prop_map(|(name, numbers, groups)| {
            let mut seen = BTreeSet::new();
            let groups: Vec<Group> = groups
                .into_iter()
                .filter(|g| seen.insert(g.name().to_string()))
                .collect();
            let courses = numbers.into_iter().map(|number| {
                let department = Department::with_groups("Core", groups.clone()).unwrap();
                let faculty = Faculty::with_departments("Main", [department]).unwrap();
                Course::with_faculties(number, [faculty]).unwrap()
            });
            Institute::with_courses(&name, courses).unwrap()
        })
}

// =============================================================================
// STUDENT PROPERTIES
// =============================================================================

mod student_properties {
    use super::*;

    proptest! {
        /// Construction succeeds exactly for grades inside the inclusive range
        #[test]
        fn construction_accepts_only_grades_in_range(grade in -50.0f64..150.0) {
            let result = Student::new("Alice", "Anderson", "S1", grade);
            prop_assert_eq!(result.is_ok(), GRADE_RANGE.contains(&grade));
        }

        /// A rejected update leaves the previous grade in place
        #[test]
        fn update_keeps_old_grade_on_rejection(old in grade_strategy(), new in -50.0f64..150.0) {
            let mut student = Student::new("Alice", "Anderson", "S1", old).unwrap();
            match student.update_average_grade(new) {
                Ok(()) => prop_assert_eq!(student.average_grade(), new),
                Err(e) => {
                    prop_assert!(matches!(e, DomainError::Validation(_)));
                    prop_assert_eq!(student.average_grade(), old);
                }
            }
        }

        /// Search fragments taken from the full name always match, in any case
        #[test]
        fn full_name_substrings_match(
            first in name_strategy(),
            last in name_strategy(),
            start in 0usize..8,
            len in 1usize..8,
        ) {
            let student = Student::new(&first, &last, "S1", 50.0).unwrap();
            let full: Vec<char> = student.full_name().chars().collect();
            let start = start.min(full.len() - 1);
            let end = (start + len).min(full.len());
            let fragment: String = full[start..end].iter().collect();

            prop_assert!(student.name_contains(&fragment));
            prop_assert!(student.name_contains(&fragment.to_uppercase()));
        }
    }
}

// =============================================================================
// NAME PROPERTIES
// =============================================================================

mod name_properties {
    use super::*;

    proptest! {
        /// Whitespace-only names are always rejected
        #[test]
        fn blank_names_are_rejected(blank in "[ \t\n]{0,10}") {
            prop_assert!(matches!(Group::new(&blank), Err(DomainError::Validation(_))));
            prop_assert!(matches!(Faculty::new(&blank), Err(DomainError::Validation(_))));
        }

        /// Padding is stripped, inner text is kept verbatim
        #[test]
        fn trimming_only_touches_the_ends(
            core in name_strategy(),
            left in "[ \t]{0,4}",
            right in "[ \t]{0,4}",
        ) {
            let padded = format!("{left}{core}{right}");
            let department = Department::new(&padded).unwrap();
            prop_assert_eq!(department.name(), core.trim_end());
        }
    }
}

// =============================================================================
// COLLECTION PROPERTIES
// =============================================================================

mod collection_properties {
    use super::*;

    proptest! {
        /// Adding a name twice fails and never changes the child count
        #[test]
        fn duplicate_add_keeps_count(names in prop::collection::vec(name_strategy(), 1..10)) {
            let mut department = Department::new("Core").unwrap();
            let mut seen = BTreeSet::new();
            for name in &names {
                let before = department.groups().len();
                let result = department.add_group(Group::new(name).unwrap());
                if seen.insert(name.trim_end().to_string()) {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(department.groups().len(), before + 1);
                } else {
                    let is_duplicate = matches!(result, Err(DomainError::DuplicateKey { .. }));
                    prop_assert!(is_duplicate);
                    prop_assert_eq!(department.groups().len(), before);
                }
            }
        }

        /// Removing one existing child preserves the relative order of the rest
        #[test]
        fn removal_preserves_order(
            numbers in prop::collection::btree_set(1u8..=6, 1..6),
            pick in any::<prop::sample::Index>(),
        ) {
            let numbers: Vec<u8> = numbers.into_iter().rev().collect();
            let mut institute = Institute::with_courses(
                "Tech",
                numbers.iter().map(|&n| Course::new(n).unwrap()),
            ).unwrap();
            let victim = numbers[pick.index(numbers.len())];

            let removed = institute.remove_course(victim).unwrap();

            prop_assert_eq!(removed.number(), victim);
            let remaining: Vec<u8> = institute.courses().iter().map(Course::number).collect();
            let expected: Vec<u8> = numbers.iter().copied().filter(|&n| n != victim).collect();
            prop_assert_eq!(remaining, expected);
            prop_assert!(institute.remove_course(victim).is_err());
        }
    }
}

// =============================================================================
// SERIALIZATION PROPERTIES
// =============================================================================

mod serialization_properties {
    use super::*;

    proptest! {
        /// from_plain(to_plain(x)) reconstructs an equal institute
        #[test]
        fn plain_round_trip(institute in institute_strategy()) {
            let restored = Institute::from_plain(&institute.to_plain()).unwrap();
            prop_assert_eq!(restored, institute);
        }
    }
}
