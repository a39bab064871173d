// Copyright 2025 Cowboy AI, LLC.

//! Functors between finite categories
//!
//! A functor is stored as two partial lookup tables keyed by identifiers of
//! the source category. Functoriality (preservation of composition and
//! identities) is not checked; the adjoint checker only needs the object map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::finite_category::{Category, MorphismId, ObjectId};
use crate::errors::{CategoryError, CategoryResult};

/// A mapping `source -> target` between two named categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Functor {
    /// Functor name
    pub name: String,
    /// Name of the source category
    pub source: String,
    /// Name of the target category
    pub target: String,
    object_map: IndexMap<ObjectId, ObjectId>,
    morphism_map: IndexMap<MorphismId, MorphismId>,
}

impl Functor {
    /// Create a functor with empty object and morphism maps
    ///
    /// # Arguments
    /// * `name` - Functor name
    /// * `source` - Name of the source category
    /// * `target` - Name of the target category
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            target: target.into(),
            object_map: IndexMap::new(),
            morphism_map: IndexMap::new(),
        }
    }

    /// Add an object mapping, replacing any earlier one
    pub fn add_object_mapping(
        &mut self,
        source_id: impl Into<ObjectId>,
        target_id: impl Into<ObjectId>,
    ) -> &mut Self {
        self.object_map.insert(source_id.into(), target_id.into());
        self
    }

    /// Add a morphism mapping, replacing any earlier one
    pub fn add_morphism_mapping(
        &mut self,
        source_id: impl Into<MorphismId>,
        target_id: impl Into<MorphismId>,
    ) -> &mut Self {
        self.morphism_map.insert(source_id.into(), target_id.into());
        self
    }

    /// `F(object)`, if mapped
    pub fn object_image(&self, object: &str) -> Option<&ObjectId> {
        self.object_map.get(object)
    }

    /// `F(morphism)`, if mapped
    pub fn morphism_image(&self, morphism: &str) -> Option<&MorphismId> {
        self.morphism_map.get(morphism)
    }

    /// Object mappings in insertion order
    pub fn object_mappings(&self) -> impl Iterator<Item = (&ObjectId, &ObjectId)> {
        self.object_map.iter()
    }

    /// Morphism mappings in insertion order
    pub fn morphism_mappings(&self) -> impl Iterator<Item = (&MorphismId, &MorphismId)> {
        self.morphism_map.iter()
    }

    /// Objects of `source` the functor leaves unmapped, sorted
    pub fn unmapped_objects<'a>(&self, source: &'a Category) -> Vec<&'a ObjectId> {
        source
            .sorted_objects()
            .into_iter()
            .filter(|o| !self.object_map.contains_key(o.as_str()))
            .collect()
    }

    /// Check every mapping refers to real objects and morphisms
    ///
    /// Partial maps are accepted; only dangling references are errors.
    pub fn validate_against(&self, source: &Category, target: &Category) -> CategoryResult<()> {
        for (from, to) in &self.object_map {
            if !source.contains_object(from) {
                return Err(CategoryError::UnknownObject {
                    category: source.name().to_string(),
                    object: from.clone(),
                });
            }
            if !target.contains_object(to) {
                return Err(CategoryError::UnknownObject {
                    category: target.name().to_string(),
                    object: to.clone(),
                });
            }
        }
        for (from, to) in &self.morphism_map {
            if source.morphism(from).is_none() {
                return Err(CategoryError::UnknownMorphism {
                    category: source.name().to_string(),
                    morphism: from.clone(),
                });
            }
            if target.morphism(to).is_none() {
                return Err(CategoryError::UnknownMorphism {
                    category: target.name().to_string(),
                    morphism: to.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> (Category, Category) {
        let mut c = Category::new("C");
        for o in ["a", "b"] {
            c.add_object(o).unwrap();
        }
        c.add_morphism("f", "a", "b", "").unwrap();

        let mut d = Category::new("D");
        for o in ["x", "y"] {
            d.add_object(o).unwrap();
        }
        d.add_morphism("u", "x", "y", "").unwrap();
        (c, d)
    }

    #[test]
    fn test_functor_mappings() {
        let mut functor = Functor::new("F", "C", "D");
        functor
            .add_object_mapping("a", "x")
            .add_object_mapping("b", "y")
            .add_morphism_mapping("f", "u");

        assert_eq!(functor.object_image("a").map(String::as_str), Some("x"));
        assert_eq!(functor.morphism_image("f").map(String::as_str), Some("u"));
        assert_eq!(functor.object_image("c"), None);
        assert_eq!(functor.object_mappings().count(), 2);
    }

    #[test]
    fn test_unmapped_objects() {
        let (c, _) = categories();
        let mut functor = Functor::new("F", "C", "D");
        functor.add_object_mapping("b", "y");
        let unmapped: Vec<&str> = functor.unmapped_objects(&c).into_iter().map(String::as_str).collect();
        assert_eq!(unmapped, vec!["a"]);
    }

    #[test]
    fn test_validate_against_rejects_dangling_references() {
        let (c, d) = categories();
        let mut functor = Functor::new("F", "C", "D");
        functor.add_object_mapping("a", "x");
        assert!(functor.validate_against(&c, &d).is_ok());

        functor.add_object_mapping("b", "nowhere");
        let err = functor.validate_against(&c, &d).unwrap_err();
        assert!(matches!(err, CategoryError::UnknownObject { ref category, .. } if category == "D"));

        let mut functor = Functor::new("F", "C", "D");
        functor.add_morphism_mapping("ghost", "u");
        let err = functor.validate_against(&c, &d).unwrap_err();
        assert!(matches!(err, CategoryError::UnknownMorphism { .. }));
    }
}
