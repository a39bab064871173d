// Copyright 2025 Cowboy AI, LLC.

//! Natural transformations between functors
//!
//! Recorded for bookkeeping only. No search consults them and the
//! naturality squares are never checked.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::finite_category::{MorphismId, ObjectId};

/// A 2-morphism `from => to` given by its components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalTransformation {
    /// Transformation name
    pub name: String,
    /// Name of the source functor
    pub from: String,
    /// Name of the target functor
    pub to: String,
    /// Object of the domain category -> component morphism
    pub components: IndexMap<ObjectId, MorphismId>,
}

impl NaturalTransformation {
    /// Create a transformation with no components
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            from: from.into(),
            to: to.into(),
            components: IndexMap::new(),
        }
    }

    /// Set the component at an object
    pub fn with_component(mut self, object: impl Into<ObjectId>, morphism: impl Into<MorphismId>) -> Self {
        self.components.insert(object.into(), morphism.into());
        self
    }

    /// Component at an object
    pub fn component(&self, object: &str) -> Option<&MorphismId> {
        self.components.get(object)
    }
}
