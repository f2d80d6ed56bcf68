//! Terminal output for campus commands
//!
//! Data (trees, search hits) goes to stdout uncolored so it can be piped;
//! diagnostics go to stderr. Coloring respects NO_COLOR, CLICOLOR and
//! CLICOLOR_FORCE via `colored`.

use std::fmt::Display;

use colored::Colorize;

const CRUMB_SEPARATOR: &str = " > ";

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Report a search that found nothing (stderr, stdout stays empty)
pub fn no_match(what: &str, key: &str) {
    eprintln!("{}: no {} matching '{}'", "Warning".yellow(), what, key);
}

/// Report a file written by the tool
pub fn created(path: &std::path::Path) {
    println!("{} Created {}", "✓".green(), path.display());
}

/// Report one tree mutation, e.g. `Added: faculty 'Science' to course 1`
pub fn changed(verb: &str, what: &(impl Display + ?Sized)) {
    println!("{}: {}", verb.green(), what);
}

/// Labelled value, e.g. `global: ~/.config/campus/campus.toml`
pub fn field(label: &str, value: &(impl Display + ?Sized)) {
    println!("{}: {}", label.cyan(), value);
}

/// Section header (cyan bold)
pub fn header(msg: &(impl Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// `Course 1 > Faculty: Science > ...` for one search hit
pub fn breadcrumb(parts: &[&dyn Display]) -> String {
    parts
        .iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(CRUMB_SEPARATOR)
}

/// Print one search hit; `indented` for entries under a header
pub fn hit(parts: &[&dyn Display], indented: bool) {
    let line = breadcrumb(parts);
    if indented {
        println!("  {line}");
    } else {
        println!("{line}");
    }
}

/// Print plain data (no color)
pub fn data(msg: &(impl Display + ?Sized)) {
    println!("{}", msg);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_parts_when_building_breadcrumb_then_joins_in_order() {
        let course = "Course: Course 1".to_string();
        let grade = 92.5;

        let crumb = breadcrumb(&[&course, &"Group: A", &grade]);

        assert_eq!(crumb, "Course: Course 1 > Group: A > 92.5");
    }

    #[test]
    fn given_single_part_when_building_breadcrumb_then_has_no_separator() {
        assert_eq!(breadcrumb(&[&"Faculty: Arts"]), "Faculty: Arts");
    }
}
