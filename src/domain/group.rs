//! Group: an ordered set of students unique by student id

use std::fmt;

use crate::domain::collection::{Keyed, KeyedCollection, Owner};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::named::{validate_name, NamedEntity};
use crate::domain::student::Student;

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    name: String,
    students: KeyedCollection<Student>,
}

impl Group {
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(Self::KIND, "name", name)?,
            students: KeyedCollection::new(),
        })
    }

    /// Build a group and add `students` one by one through [`add_student`](Self::add_student).
    pub fn with_students(
        name: &str,
        students: impl IntoIterator<Item = Student>,
    ) -> DomainResult<Self> {
        let mut group = Self::new(name)?;
        for student in students {
            group.add_student(student)?;
        }
        Ok(group)
    }

    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn add_student(&mut self, student: Student) -> DomainResult<()> {
        self.students.insert(
            student,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn remove_student(&mut self, student_id: &str) -> DomainResult<Student> {
        self.students.remove(
            student_id,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn find_student(&self, student_id: &str) -> Option<&Student> {
        self.students.find(student_id)
    }

    /// Students whose full name contains `fragment`, ignoring case, in insertion order.
    pub fn find_students_by_name(&self, fragment: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|student| student.name_contains(fragment))
            .collect()
    }

    pub fn update_student_grade(
        &mut self,
        student_id: &str,
        new_grade: f64,
    ) -> DomainResult<&Student> {
        let student = self.students.find_mut(student_id).ok_or_else(|| {
            DomainError::NotFound {
                kind: Student::KIND,
                key: student_id.to_string(),
                parent: format!("{} '{}'", Self::KIND, self.name),
            }
        })?;
        student.update_average_grade(new_grade)?;
        Ok(student)
    }
}

impl NamedEntity for Group {
    const KIND: &'static str = "Group";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Group {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {}: {} students", self.name, self.students.len())
    }
}
