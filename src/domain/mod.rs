//! Domain layer: the institute hierarchy and its invariants
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading)
//! and never logs or prints.

pub mod collection;
pub mod course;
pub mod department;
pub mod error;
pub mod faculty;
pub mod group;
pub mod institute;
pub mod named;
pub mod plain;
pub mod student;
pub mod tree;

pub use collection::{Keyed, KeyedCollection};
pub use course::{Course, COURSE_NUMBERS};
pub use department::Department;
pub use error::{DomainError, DomainResult};
pub use faculty::Faculty;
pub use group::Group;
pub use institute::{DepartmentPath, FacultyPath, GroupPath, Institute, StudentPath};
pub use named::NamedEntity;
pub use student::{Student, GRADE_RANGE};
pub use tree::ToTree;
