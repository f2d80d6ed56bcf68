//! Structural rendering of the hierarchy as a `termtree::Tree`

use termtree::Tree;

use crate::domain::course::Course;
use crate::domain::department::Department;
use crate::domain::faculty::Faculty;
use crate::domain::group::Group;
use crate::domain::institute::Institute;
use crate::domain::student::Student;

/// Convert an entity and its descendants into a printable tree whose labels
/// are the entities' `Display` renderings, children in insertion order.
pub trait ToTree {
    fn to_tree(&self) -> Tree<String>;
}

impl ToTree for Student {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.to_string())
    }
}

impl ToTree for Group {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.to_string()).with_leaves(self.students().iter().map(ToTree::to_tree))
    }
}

impl ToTree for Department {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.to_string()).with_leaves(self.groups().iter().map(ToTree::to_tree))
    }
}

impl ToTree for Faculty {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.to_string()).with_leaves(self.departments().iter().map(ToTree::to_tree))
    }
}

impl ToTree for Course {
    fn to_tree(&self) -> Tree<String> {
        Tree::new(self.to_string()).with_leaves(self.faculties().iter().map(ToTree::to_tree))
    }
}

impl ToTree for Institute {
    fn to_tree(&self) -> Tree<String> {
        let root = Tree::new(self.to_string());
        if self.courses().is_empty() {
            return root.with_leaves([Tree::new("no courses".to_string())]);
        }
        root.with_leaves(self.courses().iter().map(ToTree::to_tree))
    }
}
