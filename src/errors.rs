// Copyright 2025 Cowboy AI, LLC.

//! Error types for category construction and workspace operations
//!
//! These are the validation failures raised at the CRUD boundary. Search
//! results never use them: an infeasible or negative search is reported
//! through [`SearchOutcome`](crate::category::SearchOutcome) instead.

use thiserror::Error;

/// Errors that can occur while building categories, shapes, diagrams and functors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// Object id already registered in the category
    #[error("Object {object} already exists in category {category}")]
    ObjectAlreadyExists {
        /// Category being modified
        category: String,
        /// Duplicate object id
        object: String,
    },

    /// Morphism id already registered in the category
    #[error("Morphism {morphism} already exists in category {category}")]
    MorphismAlreadyExists {
        /// Category being modified
        category: String,
        /// Duplicate morphism id
        morphism: String,
    },

    /// Reference to an object the category does not contain
    #[error("Unknown object {object} in category {category}")]
    UnknownObject {
        /// Category that was searched
        category: String,
        /// Missing object id
        object: String,
    },

    /// Reference to a morphism the category does not contain
    #[error("Unknown morphism {morphism} in category {category}")]
    UnknownMorphism {
        /// Category that was searched
        category: String,
        /// Missing morphism id
        morphism: String,
    },

    /// Composition triple rejected by strict validation
    #[error("Cannot record {outer} . {inner} = {result}: {reason}")]
    NotComposable {
        /// Morphism applied second
        outer: String,
        /// Morphism applied first
        inner: String,
        /// Declared composite
        result: String,
        /// Which endpoint check failed
        reason: String,
    },

    /// Node id already present in the shape
    #[error("Node {node} already exists in shape {shape}")]
    NodeAlreadyExists {
        /// Shape being modified
        shape: String,
        /// Duplicate node id
        node: String,
    },

    /// Edge id already present in the shape
    #[error("Edge {edge} already exists in shape {shape}")]
    EdgeAlreadyExists {
        /// Shape being modified
        shape: String,
        /// Duplicate edge id
        edge: String,
    },

    /// Reference to a node the shape does not contain
    #[error("Unknown node {node} in shape {shape}")]
    UnknownNode {
        /// Shape that was searched
        shape: String,
        /// Missing node id
        node: String,
    },

    /// Reference to an edge the shape does not contain
    #[error("Unknown edge {edge} in shape {shape}")]
    UnknownEdge {
        /// Shape that was searched
        shape: String,
        /// Missing edge id
        edge: String,
    },

    /// Named workspace entity not found
    #[error("Unknown {kind}: {name}")]
    NotFound {
        /// Entity kind ("category", "shape", ...)
        kind: &'static str,
        /// Name that was looked up
        name: String,
    },

    /// Named workspace entity already registered
    #[error("{kind} {name} already exists")]
    AlreadyExists {
        /// Entity kind ("category", "shape", ...)
        kind: &'static str,
        /// Duplicate name
        name: String,
    },

    /// Invalid engine configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

impl From<serde_json::Error> for CategoryError {
    fn from(err: serde_json::Error) -> Self {
        CategoryError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for CategoryError {
    fn from(err: std::io::Error) -> Self {
        CategoryError::Configuration(err.to_string())
    }
}

impl CategoryError {
    /// Shorthand for a missing workspace entity
    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        CategoryError::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// Shorthand for a duplicate workspace entity
    pub fn already_exists(kind: &'static str, name: impl Into<String>) -> Self {
        CategoryError::AlreadyExists {
            kind,
            name: name.into(),
        }
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CategoryError::NotFound { .. }
                | CategoryError::UnknownObject { .. }
                | CategoryError::UnknownMorphism { .. }
                | CategoryError::UnknownNode { .. }
                | CategoryError::UnknownEdge { .. }
        )
    }

    /// Check if this is a validation error raised by a model mutation
    pub fn is_validation_error(&self) -> bool {
        !matches!(
            self,
            CategoryError::Configuration(_) | CategoryError::Serialization(_)
        )
    }
}
