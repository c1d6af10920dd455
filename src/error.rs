use miette::Diagnostic;
use thiserror::Error;

use crate::validation::Conflict;

/// Main error type for xcassets operations
#[derive(Error, Diagnostic, Debug)]
pub enum XcError {
    #[error("Asset has no name")]
    #[diagnostic(code(xcassets::validate::empty_name))]
    EmptyName,

    #[error("No definitions for '{name}'")]
    #[diagnostic(code(xcassets::validate::empty_definitions))]
    EmptyDefinitions { name: String },

    #[error("Invalid definition {index} of '{name}': {message}")]
    #[diagnostic(code(xcassets::validate::payload_mismatch))]
    PayloadMismatch {
        name: String,
        index: usize,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Overlapping definitions for '{name}': {}", format_conflicts(.conflicts))]
    #[diagnostic(code(xcassets::validate::overlap))]
    Overlap {
        name: String,
        conflicts: Vec<Conflict>,
    },

    #[error("Failed to resolve '{source_key}': {message}")]
    #[diagnostic(code(xcassets::loader::source))]
    SourceResolution { source_key: String, message: String },

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(xcassets::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(xcassets::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, XcError>;

/// Render a conflict list as "(0, 2), (1, 2)".
fn format_conflicts(conflicts: &[Conflict]) -> String {
    let pairs: Vec<String> = conflicts
        .iter()
        .map(|c| format!("({}, {})", c.first, c.second))
        .collect();
    pairs.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_display_lists_all_pairs() {
        let err = XcError::Overlap {
            name: "Brand".to_string(),
            conflicts: vec![Conflict::new(0, 2), Conflict::new(1, 2)],
        };
        assert_eq!(
            err.to_string(),
            "Overlapping definitions for 'Brand': (0, 2), (1, 2)"
        );
    }

    #[test]
    fn test_payload_mismatch_display() {
        let err = XcError::PayloadMismatch {
            name: "Brand".to_string(),
            index: 1,
            message: "white component set on an sRGB color space".to_string(),
            help: None,
        };
        assert!(err.to_string().contains("definition 1"));
        assert!(err.to_string().contains("Brand"));
    }
}
