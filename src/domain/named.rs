//! Named-entity capability shared by every node of the hierarchy

use crate::domain::error::{DomainError, DomainResult};

/// An entity with a human-readable kind and a non-empty, trimmed name.
pub trait NamedEntity {
    /// Kind label used in renderings and error messages, e.g. `"Faculty"`.
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Default rendering: `"<Kind>: <name>"`.
    fn label(&self) -> String {
        format!("{}: {}", Self::KIND, self.name())
    }
}

/// Trim `raw` and reject it when nothing is left.
///
/// Only leading and trailing whitespace is removed; interior whitespace is kept.
pub(crate) fn validate_name(kind: &str, field: &str, raw: &str) -> DomainResult<String> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return Err(DomainError::validation(format!(
            "{kind} {field} cannot be empty or whitespace"
        )));
    }
    Ok(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_padded_name_when_validating_then_trims_only_outer_whitespace() {
        let name = validate_name("Group", "name", "  Group  A \t").unwrap();
        assert_eq!(name, "Group  A");
    }

    #[test]
    fn given_whitespace_only_name_when_validating_then_fails() {
        let err = validate_name("Faculty", "name", " \n\t ").unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation("Faculty name cannot be empty or whitespace".into())
        );
    }
}
