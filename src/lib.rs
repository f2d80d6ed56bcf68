//! Institute registry: a strict containment hierarchy
//! (Institute → Course → Faculty → Department → Group → Student)
//! with invariant-preserving mutation, whole-tree search and JSON persistence.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
