// Copyright 2025 Cowboy AI, LLC.

//! Engine configuration
//!
//! Size guards and the candidate budget for the brute-force searches, plus
//! the composition validation mode used for new categories. Every field has
//! a default, so a partial JSON document is enough to override one knob.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CategoryError, CategoryResult};

/// Default object-count guard for limit search
pub const DEFAULT_MAX_LIMIT_OBJECTS: usize = 8;

/// Default object-count guard for adjoint search (applies to both categories)
pub const DEFAULT_MAX_ADJOINT_OBJECTS: usize = 7;

/// Default number of candidates a single search may examine
pub const DEFAULT_MAX_CANDIDATES: u64 = 1_000_000;

/// How `set_composition` treats triples whose endpoints do not line up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositionValidation {
    /// Reject `g . f = h` unless `target(f) == source(g)` and `h: source(f) -> target(g)`
    #[default]
    Strict,
    /// Record any triple of known morphisms
    Lenient,
}

/// Bounds applied to a single search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Limit search is refused for categories with more objects than this
    pub max_limit_objects: usize,
    /// Adjoint search is refused if either category has more objects than this
    pub max_adjoint_objects: usize,
    /// Maximum number of candidates examined before giving up
    pub max_candidates: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_limit_objects: DEFAULT_MAX_LIMIT_OBJECTS,
            max_adjoint_objects: DEFAULT_MAX_ADJOINT_OBJECTS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl SearchConfig {
    /// Replace the candidate budget
    pub fn with_max_candidates(mut self, max_candidates: u64) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    /// Reject settings under which no search could ever run
    pub fn validate(&self) -> CategoryResult<()> {
        if self.max_limit_objects == 0 {
            return Err(CategoryError::Configuration(
                "max_limit_objects must be at least 1".to_string(),
            ));
        }
        if self.max_adjoint_objects == 0 {
            return Err(CategoryError::Configuration(
                "max_adjoint_objects must be at least 1".to_string(),
            ));
        }
        if self.max_candidates == 0 {
            return Err(CategoryError::Configuration(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration consumed by [`Workspace`](crate::workspace::Workspace)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search guards and budget
    pub search: SearchConfig,
    /// Validation mode for categories created through the workspace
    pub composition_validation: CompositionValidation,
}

impl EngineConfig {
    /// Parse a configuration from a JSON document
    pub fn from_json_str(json: &str) -> CategoryResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> CategoryResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    /// Reject settings under which no search could ever run
    pub fn validate(&self) -> CategoryResult<()> {
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_guards() {
        let config = EngineConfig::default();
        assert_eq!(config.search.max_limit_objects, 8);
        assert_eq!(config.search.max_adjoint_objects, 7);
        assert_eq!(config.composition_validation, CompositionValidation::Strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(
            r#"{ "search": { "max_candidates": 500 }, "composition_validation": "lenient" }"#,
        )
        .unwrap();
        assert_eq!(config.search.max_candidates, 500);
        assert_eq!(config.search.max_limit_objects, DEFAULT_MAX_LIMIT_OBJECTS);
        assert_eq!(config.composition_validation, CompositionValidation::Lenient);
    }

    #[test]
    fn test_search_config_validates_on_its_own() {
        assert!(SearchConfig::default().validate().is_ok());
        let err = SearchConfig::default()
            .with_max_candidates(0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            CategoryError::Configuration("max_candidates must be at least 1".to_string())
        );
    }

    #[test]
    fn test_zero_budget_rejected() {
        let err = EngineConfig::from_json_str(r#"{ "search": { "max_candidates": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, CategoryError::Configuration(_)));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = EngineConfig::from_json_file("/nonexistent/diagram-chaser.json").unwrap_err();
        assert!(matches!(err, CategoryError::Configuration(_)));
    }
}
