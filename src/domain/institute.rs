//! Institute: root aggregate owning courses, with whole-tree search
//!
//! All searches walk the tree depth first in insertion order:
//! course → faculty → department → group → student. Finders return the full
//! path to the match as a tuple of references and never mutate the tree.
//!
//! Nested children are mutated only through the path-addressed methods here,
//! which resolve each level by key and fail with `NotFound` naming the first
//! missing container.

use std::fmt;

use crate::domain::collection::{KeyedCollection, Owner};
use crate::domain::course::Course;
use crate::domain::department::Department;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::faculty::Faculty;
use crate::domain::group::Group;
use crate::domain::named::{validate_name, NamedEntity};
use crate::domain::student::Student;

pub type FacultyPath<'a> = (&'a Course, &'a Faculty);
pub type DepartmentPath<'a> = (&'a Course, &'a Faculty, &'a Department);
pub type GroupPath<'a> = (&'a Course, &'a Faculty, &'a Department, &'a Group);
pub type StudentPath<'a> = (
    &'a Course,
    &'a Faculty,
    &'a Department,
    &'a Group,
    &'a Student,
);

#[derive(Debug, Clone, PartialEq)]
pub struct Institute {
    name: String,
    courses: KeyedCollection<Course>,
}

impl Institute {
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(Self::KIND, "name", name)?,
            courses: KeyedCollection::new(),
        })
    }

    pub fn with_courses(
        name: &str,
        courses: impl IntoIterator<Item = Course>,
    ) -> DomainResult<Self> {
        let mut institute = Self::new(name)?;
        for course in courses {
            institute.add_course(course)?;
        }
        Ok(institute)
    }

    pub fn courses(&self) -> &[Course] {
        self.courses.as_slice()
    }

    pub fn add_course(&mut self, course: Course) -> DomainResult<()> {
        self.courses.insert(
            course,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn remove_course(&mut self, number: u8) -> DomainResult<Course> {
        self.courses.remove(
            &number,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn find_course(&self, number: u8) -> Option<&Course> {
        self.courses.find(&number)
    }

    // ---------------------------------------------------------------
    // Whole-tree search
    // ---------------------------------------------------------------

    fn faculty_paths(&self) -> impl Iterator<Item = FacultyPath<'_>> {
        self.courses.iter().flat_map(|course| {
            course
                .faculties()
                .iter()
                .map(move |faculty| (course, faculty))
        })
    }

    fn department_paths(&self) -> impl Iterator<Item = DepartmentPath<'_>> {
        self.faculty_paths().flat_map(|(course, faculty)| {
            faculty
                .departments()
                .iter()
                .map(move |department| (course, faculty, department))
        })
    }

    fn group_paths(&self) -> impl Iterator<Item = GroupPath<'_>> {
        self.department_paths()
            .flat_map(|(course, faculty, department)| {
                department
                    .groups()
                    .iter()
                    .map(move |group| (course, faculty, department, group))
            })
    }

    pub fn find_faculty(&self, name: &str) -> Option<FacultyPath<'_>> {
        self.courses.iter().find_map(|course| {
            course
                .find_faculty(name)
                .map(|faculty| (course, faculty))
        })
    }

    pub fn find_department(&self, name: &str) -> Option<DepartmentPath<'_>> {
        self.faculty_paths().find_map(|(course, faculty)| {
            faculty
                .find_department(name)
                .map(|department| (course, faculty, department))
        })
    }

    pub fn find_group(&self, name: &str) -> Option<GroupPath<'_>> {
        self.department_paths()
            .find_map(|(course, faculty, department)| {
                department
                    .find_group(name)
                    .map(|group| (course, faculty, department, group))
            })
    }

    pub fn find_student_by_id(&self, student_id: &str) -> Option<StudentPath<'_>> {
        self.group_paths()
            .find_map(|(course, faculty, department, group)| {
                group
                    .find_student(student_id)
                    .map(|student| (course, faculty, department, group, student))
            })
    }

    /// Every student whose full name contains `fragment` (case-insensitive),
    /// in depth-first insertion order.
    pub fn find_students_by_name(&self, fragment: &str) -> Vec<StudentPath<'_>> {
        self.group_paths()
            .flat_map(|(course, faculty, department, group)| {
                group
                    .find_students_by_name(fragment)
                    .into_iter()
                    .map(move |student| (course, faculty, department, group, student))
            })
            .collect()
    }

    // ---------------------------------------------------------------
    // Path-addressed mutation
    // ---------------------------------------------------------------

    fn course_mut(&mut self, number: u8) -> DomainResult<&mut Course> {
        self.courses.get_mut(
            &number,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    fn department_mut(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
    ) -> DomainResult<&mut Department> {
        self.course_mut(course)?
            .faculty_mut(faculty)?
            .department_mut(department)
    }

    fn group_mut(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
        group: &str,
    ) -> DomainResult<&mut Group> {
        self.department_mut(course, faculty, department)?
            .group_mut(group)
    }

    pub fn add_faculty(&mut self, course: u8, faculty: Faculty) -> DomainResult<()> {
        self.course_mut(course)?.add_faculty(faculty)
    }

    pub fn remove_faculty(&mut self, course: u8, name: &str) -> DomainResult<Faculty> {
        self.course_mut(course)?.remove_faculty(name)
    }

    pub fn add_department(
        &mut self,
        course: u8,
        faculty: &str,
        department: Department,
    ) -> DomainResult<()> {
        self.course_mut(course)?
            .faculty_mut(faculty)?
            .add_department(department)
    }

    pub fn remove_department(
        &mut self,
        course: u8,
        faculty: &str,
        name: &str,
    ) -> DomainResult<Department> {
        self.course_mut(course)?
            .faculty_mut(faculty)?
            .remove_department(name)
    }

    pub fn add_group(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
        group: Group,
    ) -> DomainResult<()> {
        self.department_mut(course, faculty, department)?
            .add_group(group)
    }

    pub fn remove_group(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
        name: &str,
    ) -> DomainResult<Group> {
        self.department_mut(course, faculty, department)?
            .remove_group(name)
    }

    pub fn add_student(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
        group: &str,
        student: Student,
    ) -> DomainResult<()> {
        self.group_mut(course, faculty, department, group)?
            .add_student(student)
    }

    pub fn remove_student(
        &mut self,
        course: u8,
        faculty: &str,
        department: &str,
        group: &str,
        student_id: &str,
    ) -> DomainResult<Student> {
        self.group_mut(course, faculty, department, group)?
            .remove_student(student_id)
    }

    /// Update the grade of the first student with `student_id` in depth-first order.
    pub fn update_student_grade(
        &mut self,
        student_id: &str,
        new_grade: f64,
    ) -> DomainResult<&Student> {
        let parent = format!("{} '{}'", Self::KIND, self.name);
        let group = self
            .courses
            .iter_mut()
            .flat_map(|course| course.faculties_mut())
            .flat_map(|faculty| faculty.departments_mut())
            .flat_map(|department| department.groups_mut())
            .find(|group| group.find_student(student_id).is_some())
            .ok_or_else(|| DomainError::NotFound {
                kind: Student::KIND,
                key: student_id.to_string(),
                parent,
            })?;
        group.update_student_grade(student_id, new_grade)
    }
}

impl NamedEntity for Institute {
    const KIND: &'static str = "Institute";

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Institute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Institute {}: {} courses", self.name, self.courses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_institute;

    fn sample() -> Institute {
        sample_institute().unwrap()
    }

    #[test]
    fn given_missing_intermediate_faculty_when_adding_group_then_not_found_names_faculty() {
        let mut institute = sample();

        let err = institute
            .add_group(1, "Arts", "Math", Group::new("B").unwrap())
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::NotFound {
                kind: "Faculty",
                key: "Arts".into(),
                parent: "Course 'Course 1'".into(),
            }
        );
    }

    #[test]
    fn given_unknown_student_when_updating_grade_then_not_found() {
        let mut institute = sample();
        let err = institute.update_student_grade("S2", 50.0).unwrap_err();
        assert!(matches!(err, DomainError::NotFound { kind: "Student", .. }));
    }

    #[test]
    fn given_institute_when_displaying_then_shows_course_count() {
        assert_eq!(sample().to_string(), "Institute Tech: 1 courses");
        assert_eq!(sample().label(), "Institute: Tech");
    }
}
