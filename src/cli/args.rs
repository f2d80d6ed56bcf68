//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};

/// Institute registry: courses, faculties, departments, groups and students
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Institute data file (default: from config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new, empty institute data file
    Init {
        /// Institute name
        name: String,
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },

    /// Print the institute structure as a tree
    Show,

    /// Manage courses
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },

    /// Manage faculties
    Faculty {
        #[command(subcommand)]
        command: FacultyCommands,
    },

    /// Manage departments
    Department {
        #[command(subcommand)]
        command: DepartmentCommands,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },

    /// Manage students
    Student {
        #[command(subcommand)]
        command: StudentCommands,
    },

    /// Update a student's average grade
    Grade {
        /// Student id
        id: String,
        /// New average grade (0.0 - 100.0)
        #[arg(allow_negative_numbers = true)]
        grade: f64,
    },

    /// Search the institute
    Find {
        #[command(subcommand)]
        command: FindCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Location of a faculty: course number and faculty name.
#[derive(Args, Debug, Clone)]
pub struct FacultyLocation {
    /// Course number (1-6)
    #[arg(short, long)]
    pub course: u8,
    /// Faculty name
    #[arg(short = 'F', long)]
    pub faculty: String,
}

/// Location of a department inside a faculty.
#[derive(Args, Debug, Clone)]
pub struct DepartmentLocation {
    #[command(flatten)]
    pub faculty: FacultyLocation,
    /// Department name
    #[arg(short = 'D', long)]
    pub department: String,
}

/// Location of a group inside a department.
#[derive(Args, Debug, Clone)]
pub struct GroupLocation {
    #[command(flatten)]
    pub department: DepartmentLocation,
    /// Group name
    #[arg(short, long)]
    pub group: String,
}

#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    /// Add a course
    Add {
        /// Course number (1-6)
        number: u8,
    },
    /// Remove a course and everything in it
    Remove {
        /// Course number
        number: u8,
    },
}

#[derive(Subcommand, Debug)]
pub enum FacultyCommands {
    /// Add a faculty to a course
    Add {
        /// Course number
        #[arg(short, long)]
        course: u8,
        /// Faculty name
        name: String,
    },
    /// Remove a faculty from a course
    Remove {
        /// Course number
        #[arg(short, long)]
        course: u8,
        /// Faculty name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum DepartmentCommands {
    /// Add a department to a faculty
    Add {
        #[command(flatten)]
        at: FacultyLocation,
        /// Department name
        name: String,
    },
    /// Remove a department from a faculty
    Remove {
        #[command(flatten)]
        at: FacultyLocation,
        /// Department name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// Add a group to a department
    Add {
        #[command(flatten)]
        at: DepartmentLocation,
        /// Group name
        name: String,
    },
    /// Remove a group from a department
    Remove {
        #[command(flatten)]
        at: DepartmentLocation,
        /// Group name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommands {
    /// Add a student to a group
    Add {
        #[command(flatten)]
        at: GroupLocation,
        /// Student id
        #[arg(long)]
        id: String,
        /// First name
        #[arg(long)]
        first: String,
        /// Last name
        #[arg(long)]
        last: String,
        /// Average grade (0.0 - 100.0)
        #[arg(long)]
        grade: f64,
    },
    /// Remove a student from a group
    Remove {
        #[command(flatten)]
        at: GroupLocation,
        /// Student id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum FindCommands {
    /// Find a student by id
    StudentId {
        /// Student id
        id: String,
    },
    /// Find students whose full name contains a fragment (case-insensitive)
    StudentName {
        /// Name fragment
        fragment: String,
    },
    /// Find a group by name
    Group {
        /// Group name
        name: String,
    },
    /// Find a department by name
    Department {
        /// Department name
        name: String,
    },
    /// Find a faculty by name
    Faculty {
        /// Faculty name
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create global config template
    Init,

    /// Show config paths
    Path,
}
