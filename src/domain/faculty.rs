//! Faculty: an ordered set of departments unique by name

use std::fmt;

use crate::domain::collection::{Keyed, KeyedCollection, Owner};
use crate::domain::department::Department;
use crate::domain::error::DomainResult;
use crate::domain::named::{validate_name, NamedEntity};

#[derive(Debug, Clone, PartialEq)]
pub struct Faculty {
    name: String,
    departments: KeyedCollection<Department>,
}

impl Faculty {
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(Self::KIND, "name", name)?,
            departments: KeyedCollection::new(),
        })
    }

    pub fn with_departments(
        name: &str,
        departments: impl IntoIterator<Item = Department>,
    ) -> DomainResult<Self> {
        let mut faculty = Self::new(name)?;
        for department in departments {
            faculty.add_department(department)?;
        }
        Ok(faculty)
    }

    pub fn departments(&self) -> &[Department] {
        self.departments.as_slice()
    }

    pub fn add_department(&mut self, department: Department) -> DomainResult<()> {
        self.departments.insert(
            department,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn remove_department(&mut self, name: &str) -> DomainResult<Department> {
        self.departments.remove(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn find_department(&self, name: &str) -> Option<&Department> {
        self.departments.find(name)
    }

    pub(crate) fn department_mut(&mut self, name: &str) -> DomainResult<&mut Department> {
        self.departments.get_mut(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub(crate) fn departments_mut(&mut self) -> impl Iterator<Item = &mut Department> {
        self.departments.iter_mut()
    }
}

impl NamedEntity for Faculty {
    const KIND: &'static str = "Faculty";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Faculty {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Faculty {}: {} departments",
            self.name,
            self.departments.len()
        )
    }
}
