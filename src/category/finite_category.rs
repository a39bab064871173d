// Copyright 2025 Cowboy AI, LLC.

//! Finite categories
//!
//! A category here is pure data:
//! - Objects are opaque identifiers
//! - Morphisms carry a source, a target and a free-form label
//! - Composition is a partial table of declared equalities `g . f = h`
//! - Identities are ordinary morphisms named `id_<object>`
//!
//! Nothing is inferred. [`Category::compose`] only answers for pairs that
//! were recorded with [`Category::set_composition`].

use std::fmt;

use indexmap::{Equivalent, IndexMap, IndexSet};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::CompositionValidation;
use crate::errors::{CategoryError, CategoryResult};

/// Identifier of an object within a category
pub type ObjectId = String;

/// Identifier of a morphism within a category
pub type MorphismId = String;

/// An arrow between two objects of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morphism {
    /// Unique identifier within the category
    pub id: MorphismId,

    /// Source object
    pub source: ObjectId,

    /// Target object
    pub target: ObjectId,

    /// Optional human-readable label
    pub label: String,
}

/// Borrowed `(outer, inner)` key, hashed like the owned tuple
#[derive(Hash)]
struct PairRef<'a>(&'a str, &'a str);

impl Equivalent<(MorphismId, MorphismId)> for PairRef<'_> {
    fn equivalent(&self, key: &(MorphismId, MorphismId)) -> bool {
        self.0 == key.0 && self.1 == key.1
    }
}

/// One row of the composition table as it appears on the wire
#[derive(Serialize, Deserialize)]
struct CompositionEntry {
    outer: MorphismId,
    inner: MorphismId,
    result: MorphismId,
}

/// `(outer, inner) -> result` records `outer . inner = result`
///
/// Serialized as a sequence of `{outer, inner, result}` rows since a tuple
/// cannot key a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CompositionTable(IndexMap<(MorphismId, MorphismId), MorphismId>);

impl CompositionTable {
    fn get(&self, outer: &str, inner: &str) -> Option<&MorphismId> {
        self.0.get(&PairRef(outer, inner))
    }
}

impl Serialize for CompositionTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().map(|((outer, inner), result)| CompositionEntry {
            outer: outer.clone(),
            inner: inner.clone(),
            result: result.clone(),
        }))
    }
}

impl<'de> Deserialize<'de> for CompositionTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<CompositionEntry>::deserialize(deserializer)?;
        Ok(Self(
            entries
                .into_iter()
                .map(|e| ((e.outer, e.inner), e.result))
                .collect(),
        ))
    }
}

/// A small category held entirely in memory
///
/// Deserializing does not re-run validation; the data is taken as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    objects: IndexSet<ObjectId>,
    morphisms: IndexMap<MorphismId, Morphism>,
    #[serde(rename = "compositions")]
    composition: CompositionTable,
    #[serde(default)]
    validation: CompositionValidation,
}

impl Category {
    /// Create an empty category with strict composition validation
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_validation(name, CompositionValidation::Strict)
    }

    /// Create an empty category with the given composition validation mode
    pub fn with_validation(name: impl Into<String>, validation: CompositionValidation) -> Self {
        Self {
            name: name.into(),
            objects: IndexSet::new(),
            morphisms: IndexMap::new(),
            composition: CompositionTable::default(),
            validation,
        }
    }

    /// Category name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Composition validation mode
    pub fn validation(&self) -> CompositionValidation {
        self.validation
    }

    /// Add an object to the category
    pub fn add_object(&mut self, id: impl Into<ObjectId>) -> CategoryResult<()> {
        let id = id.into();
        if self.objects.contains(&id) {
            return Err(CategoryError::ObjectAlreadyExists {
                category: self.name.clone(),
                object: id,
            });
        }
        self.objects.insert(id);
        Ok(())
    }

    /// Add a morphism `id: source -> target`
    pub fn add_morphism(
        &mut self,
        id: impl Into<MorphismId>,
        source: impl Into<ObjectId>,
        target: impl Into<ObjectId>,
        label: impl Into<String>,
    ) -> CategoryResult<()> {
        let (id, source, target) = (id.into(), source.into(), target.into());

        for endpoint in [&source, &target] {
            if !self.objects.contains(endpoint) {
                return Err(CategoryError::UnknownObject {
                    category: self.name.clone(),
                    object: endpoint.clone(),
                });
            }
        }
        if self.morphisms.contains_key(&id) {
            return Err(CategoryError::MorphismAlreadyExists {
                category: self.name.clone(),
                morphism: id,
            });
        }

        self.morphisms.insert(
            id.clone(),
            Morphism {
                id,
                source,
                target,
                label: label.into(),
            },
        );
        Ok(())
    }

    /// Record the equality `outer . inner = result`
    ///
    /// In [`CompositionValidation::Strict`] mode the triple must line up:
    /// `target(inner) == source(outer)` and `result: source(inner) -> target(outer)`.
    /// In lenient mode any triple of known morphisms is recorded.
    pub fn set_composition(&mut self, outer: &str, inner: &str, result: &str) -> CategoryResult<()> {
        let outer_m = self.require_morphism(outer)?;
        let inner_m = self.require_morphism(inner)?;
        let result_m = self.require_morphism(result)?;

        let mismatch = if inner_m.target != outer_m.source {
            Some(format!(
                "target of {} is {} but source of {} is {}",
                inner, inner_m.target, outer, outer_m.source
            ))
        } else if result_m.source != inner_m.source || result_m.target != outer_m.target {
            Some(format!(
                "{} is {} -> {} but the composite runs {} -> {}",
                result, result_m.source, result_m.target, inner_m.source, outer_m.target
            ))
        } else {
            None
        };

        if let Some(reason) = mismatch {
            match self.validation {
                CompositionValidation::Strict => {
                    return Err(CategoryError::NotComposable {
                        outer: outer.to_string(),
                        inner: inner.to_string(),
                        result: result.to_string(),
                        reason,
                    });
                }
                CompositionValidation::Lenient => {
                    warn!(category = %self.name, %reason, "recording ill-typed composition");
                }
            }
        }

        self.composition
            .0
            .insert((outer.to_string(), inner.to_string()), result.to_string());
        Ok(())
    }

    /// Look up `outer . inner` in the composition table
    pub fn compose(&self, outer: &str, inner: &str) -> Option<&MorphismId> {
        self.composition.get(outer, inner)
    }

    /// Whether the object is registered
    pub fn contains_object(&self, id: &str) -> bool {
        self.objects.contains(id)
    }

    /// Look up a morphism by id
    pub fn morphism(&self, id: &str) -> Option<&Morphism> {
        self.morphisms.get(id)
    }

    /// Objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectId> {
        self.objects.iter()
    }

    /// Objects in lexicographic order
    pub fn sorted_objects(&self) -> Vec<&ObjectId> {
        let mut objects: Vec<&ObjectId> = self.objects.iter().collect();
        objects.sort();
        objects
    }

    /// Morphisms in insertion order
    pub fn morphisms(&self) -> impl Iterator<Item = &Morphism> {
        self.morphisms.values()
    }

    /// Recorded compositions as `(outer, inner, result)` in insertion order
    pub fn compositions(&self) -> impl Iterator<Item = (&MorphismId, &MorphismId, &MorphismId)> {
        self.composition
            .0
            .iter()
            .map(|((outer, inner), result)| (outer, inner, result))
    }

    /// Number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of morphisms, identities included
    pub fn morphism_count(&self) -> usize {
        self.morphisms.len()
    }

    /// `Hom(source, target)` sorted by morphism id
    pub fn hom(&self, source: &str, target: &str) -> Vec<&MorphismId> {
        let mut hom: Vec<&MorphismId> = self
            .morphisms
            .values()
            .filter(|m| m.source == source && m.target == target)
            .map(|m| &m.id)
            .collect();
        hom.sort();
        hom
    }

    /// `|Hom(source, target)|`
    pub fn hom_size(&self, source: &str, target: &str) -> usize {
        self.morphisms
            .values()
            .filter(|m| m.source == source && m.target == target)
            .count()
    }

    /// Conventional id of the identity on `object`
    pub fn identity_id(object: &str) -> MorphismId {
        format!("id_{}", object)
    }

    /// The registered identity on `object`, if it has been synthesized or declared
    pub fn identity(&self, object: &str) -> Option<&Morphism> {
        self.morphisms
            .get(&Self::identity_id(object))
            .filter(|m| m.source == object && m.target == object)
    }

    /// Add `id_<o>: o -> o` for every object that lacks one
    ///
    /// Returns the number of identities created. The composition table is
    /// left untouched.
    pub fn ensure_identities(&mut self) -> usize {
        let missing: Vec<ObjectId> = self
            .objects
            .iter()
            .filter(|o| !self.morphisms.contains_key(&Self::identity_id(o)))
            .cloned()
            .collect();

        for object in &missing {
            let id = Self::identity_id(object);
            self.morphisms.insert(
                id.clone(),
                Morphism {
                    id: id.clone(),
                    source: object.clone(),
                    target: object.clone(),
                    label: id,
                },
            );
        }
        debug!(category = %self.name, created = missing.len(), "synthesized identities");
        missing.len()
    }

    /// Record `id . f = f` and `f . id = f` for every registered identity
    ///
    /// Existing table entries are never overwritten. Returns the number of
    /// entries added.
    pub fn register_identity_laws(&mut self) -> usize {
        let mut laws = Vec::new();
        for m in self.morphisms.values() {
            if let Some(id_target) = self.identity(&m.target) {
                laws.push((id_target.id.clone(), m.id.clone(), m.id.clone()));
            }
            if let Some(id_source) = self.identity(&m.source) {
                laws.push((m.id.clone(), id_source.id.clone(), m.id.clone()));
            }
        }

        let mut added = 0;
        for (outer, inner, result) in laws {
            let entry = self.composition.0.entry((outer, inner));
            if let indexmap::map::Entry::Vacant(slot) = entry {
                slot.insert(result);
                added += 1;
            }
        }
        debug!(category = %self.name, added, "registered identity laws");
        added
    }

    fn require_morphism(&self, id: &str) -> CategoryResult<&Morphism> {
        self.morphisms
            .get(id)
            .ok_or_else(|| CategoryError::UnknownMorphism {
                category: self.name.clone(),
                morphism: id.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category '{}'\nObjects:", self.name)?;
        for object in &self.objects {
            write!(f, "\n - {}", object)?;
        }
        write!(f, "\nMorphisms:")?;
        for m in self.morphisms.values() {
            write!(f, "\n - {}: {} -> {}", m.id, m.source, m.target)?;
        }
        write!(f, "\nCompositions:")?;
        for (outer, inner, result) in self.compositions() {
            write!(f, "\n - {} . {} => {}", outer, inner, result)?;
        }
        Ok(())
    }
}
