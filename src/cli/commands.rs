//! Command dispatch: each subcommand loads the data file, applies one
//! operation and (for mutations) saves it back.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::IoResultExt;
use crate::cli::args::{
    Cli, Commands, ConfigCommands, CourseCommands, DepartmentCommands, FacultyCommands,
    FindCommands, GroupCommands, StudentCommands,
};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{
    Course, Department, DomainResult, Faculty, Group, Institute, NamedEntity, Student,
    StudentPath, ToTree,
};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let cwd = std::env::current_dir().ok();
    let settings = Settings::load(cwd.as_deref())?;
    let container = ServiceContainer::new(settings);
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| container.settings.data_file.clone());
    debug!("data_file: {}", data_file.display());

    match &cli.command {
        Some(Commands::Init { name, force }) => cmd_init(&container, &data_file, name, *force),
        Some(Commands::Show) => cmd_show(&container, &data_file),
        Some(Commands::Course { command }) => cmd_course(&container, &data_file, command),
        Some(Commands::Faculty { command }) => cmd_faculty(&container, &data_file, command),
        Some(Commands::Department { command }) => {
            cmd_department(&container, &data_file, command)
        }
        Some(Commands::Group { command }) => cmd_group(&container, &data_file, command),
        Some(Commands::Student { command }) => cmd_student(&container, &data_file, command),
        Some(Commands::Grade { id, grade }) => cmd_grade(&container, &data_file, id, *grade),
        Some(Commands::Find { command }) => cmd_find(&container, &data_file, command),
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Cli::command()
            .print_help()
            .map_err(|e| CliError::Usage(e.to_string())),
    }
}

/// Load the institute, apply `op`, save it back. Nothing is written when `op` fails.
fn modify<T>(
    container: &ServiceContainer,
    path: &Path,
    op: impl FnOnce(&mut Institute) -> DomainResult<T>,
) -> CliResult<T> {
    let mut institute = container.persistence.load(path)?;
    let result = op(&mut institute)?;
    container.persistence.save(&institute, path)?;
    Ok(result)
}

#[instrument(skip(container))]
fn cmd_init(container: &ServiceContainer, path: &Path, name: &str, force: bool) -> CliResult<()> {
    if container.persistence.exists(path) && !force {
        return Err(CliError::Usage(format!(
            "data file already exists: {} (use --force to overwrite)",
            path.display()
        )));
    }
    let institute = Institute::new(name)?;
    container.persistence.save(&institute, path)?;
    output::changed("Created", &format!("institute '{}'", institute.name()));
    output::created(path);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_show(container: &ServiceContainer, path: &Path) -> CliResult<()> {
    let institute = container.persistence.load(path)?;
    output::data(&institute.to_tree());
    Ok(())
}

#[instrument(skip(container))]
fn cmd_course(
    container: &ServiceContainer,
    path: &Path,
    command: &CourseCommands,
) -> CliResult<()> {
    match command {
        CourseCommands::Add { number } => {
            modify(container, path, |institute| {
                institute.add_course(Course::new(*number)?)
            })?;
            output::changed("Added", &format!("course {number}"));
        }
        CourseCommands::Remove { number } => {
            let removed = modify(container, path, |institute| institute.remove_course(*number))?;
            output::changed("Removed", &removed);
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_faculty(
    container: &ServiceContainer,
    path: &Path,
    command: &FacultyCommands,
) -> CliResult<()> {
    match command {
        FacultyCommands::Add { course, name } => {
            modify(container, path, |institute| {
                institute.add_faculty(*course, Faculty::new(name)?)
            })?;
            output::changed("Added", &format!("faculty '{name}' to course {course}"));
        }
        FacultyCommands::Remove { course, name } => {
            let removed = modify(container, path, |institute| {
                institute.remove_faculty(*course, name)
            })?;
            output::changed("Removed", &format!("{removed} from course {course}"));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_department(
    container: &ServiceContainer,
    path: &Path,
    command: &DepartmentCommands,
) -> CliResult<()> {
    match command {
        DepartmentCommands::Add { at, name } => {
            modify(container, path, |institute| {
                institute.add_department(at.course, &at.faculty, Department::new(name)?)
            })?;
            output::changed(
                "Added",
                &format!(
                    "department '{name}' to faculty {} (course {})",
                    at.faculty, at.course
                ),
            );
        }
        DepartmentCommands::Remove { at, name } => {
            let removed = modify(container, path, |institute| {
                institute.remove_department(at.course, &at.faculty, name)
            })?;
            output::changed("Removed", &format!("{removed} from faculty {}", at.faculty));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_group(container: &ServiceContainer, path: &Path, command: &GroupCommands) -> CliResult<()> {
    match command {
        GroupCommands::Add { at, name } => {
            modify(container, path, |institute| {
                institute.add_group(
                    at.faculty.course,
                    &at.faculty.faculty,
                    &at.department,
                    Group::new(name)?,
                )
            })?;
            output::changed(
                "Added",
                &format!("group '{name}' to department {}", at.department),
            );
        }
        GroupCommands::Remove { at, name } => {
            let removed = modify(container, path, |institute| {
                institute.remove_group(at.faculty.course, &at.faculty.faculty, &at.department, name)
            })?;
            output::changed("Removed", &format!("{removed} from department {}", at.department));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_student(
    container: &ServiceContainer,
    path: &Path,
    command: &StudentCommands,
) -> CliResult<()> {
    match command {
        StudentCommands::Add {
            at,
            id,
            first,
            last,
            grade,
        } => {
            let department = &at.department;
            let student = Student::new(first, last, id, *grade)?;
            let label = student.to_string();
            modify(container, path, |institute| {
                institute.add_student(
                    department.faculty.course,
                    &department.faculty.faculty,
                    &department.department,
                    &at.group,
                    student,
                )
            })?;
            output::changed("Added", &format!("{label} to group {}", at.group));
        }
        StudentCommands::Remove { at, id } => {
            let department = &at.department;
            let removed = modify(container, path, |institute| {
                institute.remove_student(
                    department.faculty.course,
                    &department.faculty.faculty,
                    &department.department,
                    &at.group,
                    id,
                )
            })?;
            output::changed("Removed", &format!("{removed} from group {}", at.group));
        }
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_grade(container: &ServiceContainer, path: &Path, id: &str, grade: f64) -> CliResult<()> {
    let updated = modify(container, path, |institute| {
        institute
            .update_student_grade(id, grade)
            .map(|student| student.to_string())
    })?;
    output::changed("Updated", &updated);
    Ok(())
}

fn print_student_hit(
    (course, faculty, department, group, student): StudentPath<'_>,
    indented: bool,
) {
    output::hit(
        &[
            &course.label(),
            &faculty.label(),
            &department.label(),
            &group.label(),
            student,
        ],
        indented,
    );
}

#[instrument(skip(container))]
fn cmd_find(container: &ServiceContainer, path: &Path, command: &FindCommands) -> CliResult<()> {
    let institute = container.persistence.load(path)?;
    match command {
        FindCommands::StudentId { id } => match institute.find_student_by_id(id) {
            Some(hit) => print_student_hit(hit, false),
            None => output::no_match("student with id", id),
        },
        FindCommands::StudentName { fragment } => {
            let hits = institute.find_students_by_name(fragment);
            if hits.is_empty() {
                output::no_match("student name", fragment);
            } else {
                output::header(&format!("{} student(s) matching '{fragment}'", hits.len()));
                for hit in hits {
                    print_student_hit(hit, true);
                }
            }
        }
        FindCommands::Group { name } => match institute.find_group(name) {
            Some((course, faculty, department, group)) => output::hit(
                &[&course.label(), &faculty.label(), &department.label(), group],
                false,
            ),
            None => output::no_match("group", name),
        },
        FindCommands::Department { name } => match institute.find_department(name) {
            Some((course, faculty, department)) => {
                output::hit(&[&course.label(), &faculty.label(), department], false)
            }
            None => output::no_match("department", name),
        },
        FindCommands::Faculty { name } => match institute.find_faculty(name) {
            Some((course, faculty)) => output::hit(&[&course.label(), faculty], false),
            None => output::no_match("faculty", name),
        },
    }
    Ok(())
}

#[instrument(skip(container))]
fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::header("Effective configuration");
            output::data(&container.settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let global = global_config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "<unavailable>".to_string());
            output::field("global", &global);
            if let Ok(cwd) = std::env::current_dir() {
                output::field("local", &local_config_path(&cwd).display());
            }
            output::field("data", &container.settings.data_file.display());
        }
        ConfigCommands::Init => {
            let path: PathBuf = global_config_path().ok_or_else(|| {
                CliError::Usage("cannot determine global config directory".to_string())
            })?;
            if container.fs.exists(&path) {
                return Err(CliError::Usage(format!(
                    "config already exists: {}",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .and_then(|()| container.fs.write(&path, &Settings::template()))
                .with_path_context("write config template", &path)?;
            output::created(&path);
        }
    }
    Ok(())
}
