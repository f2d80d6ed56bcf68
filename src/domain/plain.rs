//! Plain-value (JSON object tree) representation of every entity
//!
//! `to_plain` mirrors the in-memory tree as nested objects with arrays for
//! child sequences, keeping insertion order. `from_plain` rebuilds entities
//! through the ordinary constructors and `add_*` methods, so every uniqueness
//! and range invariant is re-checked on load.
//!
//! Shape errors (missing scalar field, wrong primitive kind) surface as
//! `DomainError::Format`; a missing children array counts as empty.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::course::{validate_number, Course};
use crate::domain::department::Department;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::faculty::Faculty;
use crate::domain::group::Group;
use crate::domain::institute::Institute;
use crate::domain::named::NamedEntity;
use crate::domain::student::Student;

#[derive(Debug, Deserialize)]
struct StudentRecord {
    first_name: String,
    last_name: String,
    student_id: String,
    average_grade: f64,
}

#[derive(Debug, Deserialize)]
struct GroupRecord {
    name: String,
    #[serde(default)]
    students: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct DepartmentRecord {
    name: String,
    #[serde(default)]
    groups: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct FacultyRecord {
    name: String,
    #[serde(default)]
    departments: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    number: i64,
    #[serde(default)]
    faculties: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct InstituteRecord {
    name: String,
    #[serde(default)]
    courses: Vec<Value>,
}

/// Deserialize the scalar shell of an entity; children stay as raw values so
/// each level reports its own kind in format errors.
fn record<'de, R: Deserialize<'de>>(kind: &'static str, data: &'de Value) -> DomainResult<R> {
    if !data.is_object() {
        return Err(DomainError::format(kind, "expected a JSON object"));
    }
    R::deserialize(data).map_err(|e| DomainError::format(kind, e))
}

impl Student {
    pub fn to_plain(&self) -> Value {
        json!({
            "first_name": self.first_name(),
            "last_name": self.last_name(),
            "student_id": self.student_id(),
            "average_grade": self.average_grade(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: StudentRecord = record(Self::KIND, data)?;
        Self::new(&r.first_name, &r.last_name, &r.student_id, r.average_grade)
    }
}

impl Group {
    pub fn to_plain(&self) -> Value {
        json!({
            "name": self.name(),
            "students": self.students().iter().map(Student::to_plain).collect::<Vec<_>>(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: GroupRecord = record(Self::KIND, data)?;
        let mut group = Self::new(&r.name)?;
        for student in &r.students {
            group.add_student(Student::from_plain(student)?)?;
        }
        Ok(group)
    }
}

impl Department {
    pub fn to_plain(&self) -> Value {
        json!({
            "name": self.name(),
            "groups": self.groups().iter().map(Group::to_plain).collect::<Vec<_>>(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: DepartmentRecord = record(Self::KIND, data)?;
        let mut department = Self::new(&r.name)?;
        for group in &r.groups {
            department.add_group(Group::from_plain(group)?)?;
        }
        Ok(department)
    }
}

impl Faculty {
    pub fn to_plain(&self) -> Value {
        json!({
            "name": self.name(),
            "departments": self.departments().iter().map(Department::to_plain).collect::<Vec<_>>(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: FacultyRecord = record(Self::KIND, data)?;
        let mut faculty = Self::new(&r.name)?;
        for department in &r.departments {
            faculty.add_department(Department::from_plain(department)?)?;
        }
        Ok(faculty)
    }
}

impl Course {
    pub fn to_plain(&self) -> Value {
        json!({
            "number": self.number(),
            "faculties": self.faculties().iter().map(Faculty::to_plain).collect::<Vec<_>>(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: CourseRecord = record(Self::KIND, data)?;
        let mut course = Self::new(validate_number(r.number)?)?;
        for faculty in &r.faculties {
            course.add_faculty(Faculty::from_plain(faculty)?)?;
        }
        Ok(course)
    }
}

impl Institute {
    pub fn to_plain(&self) -> Value {
        json!({
            "name": self.name(),
            "courses": self.courses().iter().map(Course::to_plain).collect::<Vec<_>>(),
        })
    }

    pub fn from_plain(data: &Value) -> DomainResult<Self> {
        let r: InstituteRecord = record(Self::KIND, data)?;
        let mut institute = Self::new(&r.name)?;
        for course in &r.courses {
            institute.add_course(Course::from_plain(course)?)?;
        }
        Ok(institute)
    }
}
