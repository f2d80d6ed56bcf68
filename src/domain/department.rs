//! Department: an ordered set of groups unique by name

use std::fmt;

use crate::domain::collection::{Keyed, KeyedCollection, Owner};
use crate::domain::error::DomainResult;
use crate::domain::group::Group;
use crate::domain::named::{validate_name, NamedEntity};

#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    name: String,
    groups: KeyedCollection<Group>,
}

impl Department {
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: validate_name(Self::KIND, "name", name)?,
            groups: KeyedCollection::new(),
        })
    }

    pub fn with_groups(name: &str, groups: impl IntoIterator<Item = Group>) -> DomainResult<Self> {
        let mut department = Self::new(name)?;
        for group in groups {
            department.add_group(group)?;
        }
        Ok(department)
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_slice()
    }

    pub fn add_group(&mut self, group: Group) -> DomainResult<()> {
        self.groups.insert(
            group,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn remove_group(&mut self, name: &str) -> DomainResult<Group> {
        self.groups.remove(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.find(name)
    }

    pub(crate) fn group_mut(&mut self, name: &str) -> DomainResult<&mut Group> {
        self.groups.get_mut(
            name,
            Owner {
                kind: Self::KIND,
                name: &self.name,
            },
        )
    }

    pub(crate) fn groups_mut(&mut self) -> impl Iterator<Item = &mut Group> {
        self.groups.iter_mut()
    }
}

impl NamedEntity for Department {
    const KIND: &'static str = "Department";

    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Department {
    type Key = str;

    fn key(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Department {}: {} groups", self.name, self.groups.len())
    }
}
