//! Logging utilities for pretor crates
//!
//! This module provides utilities for formatting and displaying log messages.

use serde::Serialize;
use std::fmt::Debug;

/// Wrapper for pretty-printing types in logs as YAML
///
/// Use this in tracing statements to automatically format complex types
/// as YAML with a newline before the content:
///
/// ```ignore
/// use pretor_common::Pretty;
/// use tracing::debug;
///
/// let plan = build_move_plan(/* ... */);
/// debug!("Plan: {}", Pretty(&plan));
/// ```
///
/// Outputs YAML format with a leading newline. Types must implement Serialize + Debug.
/// Debug is used as a fallback if YAML serialization fails.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

impl<T: Serialize + Debug> std::fmt::Debug for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Sample {
        name: &'static str,
        count: usize,
    }

    #[test]
    fn test_pretty_renders_yaml() {
        let rendered = format!(
            "{}",
            Pretty(&Sample {
                name: "prazo",
                count: 3
            })
        );
        assert!(rendered.starts_with('\n'));
        assert!(rendered.contains("name: prazo"));
        assert!(rendered.contains("count: 3"));
    }
}
