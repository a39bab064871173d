// Copyright 2025 Cowboy AI, LLC.

//! Heuristic right-adjoint search
//!
//! `G: B -> A` is right adjoint to `F: A -> B` when
//! `Hom_B(F(x), b) ≅ Hom_A(x, G(b))` naturally in `x`. The checker only
//! compares the sizes of those Hom-sets. Equal sizes are necessary for the
//! bijection but say nothing about naturality, so the result is a candidate
//! object assignment tagged [`Verification::HomCardinalityOnly`].

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::finite_category::{Category, ObjectId};
use super::functor::Functor;
use super::search::{BudgetExhausted, SearchBudget, SearchOutcome};
use crate::config::SearchConfig;
use crate::errors::CategoryResult;

/// Strength of the evidence behind a [`RightAdjointCandidate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verification {
    /// Hom-set sizes agree for every object; no bijection was built
    HomCardinalityOnly,
}

/// Object part of a possible right adjoint, not a certified adjunction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightAdjointCandidate {
    /// Name of the left adjoint `F`
    pub functor: String,
    /// `b -> G(b)` for every object of the target category
    pub assignments: BTreeMap<ObjectId, ObjectId>,
    /// What was actually checked
    pub verification: Verification,
}

impl RightAdjointCandidate {
    /// `G(b)`
    pub fn image(&self, object: &str) -> Option<&ObjectId> {
        self.assignments.get(object)
    }
}

impl fmt::Display for RightAdjointCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found (heuristic) right adjoint mapping for {} (B -> A):",
            self.functor
        )?;
        for (b, a) in &self.assignments {
            write!(f, "\n - {} -> {}", b, a)?;
        }
        Ok(())
    }
}

/// Search for a right adjoint candidate with the default [`SearchConfig`]
pub fn find_right_adjoint(
    source: &Category,
    target: &Category,
    functor: &Functor,
) -> SearchOutcome<RightAdjointCandidate> {
    AdjointChecker::new(source, target, functor).find_right_adjoint()
}

/// Checks `F: A -> B` for a right adjoint by Hom-set cardinality
#[derive(Debug, Clone)]
pub struct AdjointChecker<'a> {
    source: &'a Category,
    target: &'a Category,
    functor: &'a Functor,
    config: SearchConfig,
}

impl<'a> AdjointChecker<'a> {
    /// Create a checker with the default configuration
    ///
    /// # Arguments
    /// * `source` - The category `A` the functor maps from
    /// * `target` - The category `B` the functor maps into
    /// * `functor` - The left adjoint candidate `F: A -> B`
    pub fn new(source: &'a Category, target: &'a Category, functor: &'a Functor) -> Self {
        Self {
            source,
            target,
            functor,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration
    ///
    /// Fails with [`CategoryError::Configuration`](crate::CategoryError::Configuration)
    /// if a guard or the budget is zero.
    pub fn with_config(mut self, config: SearchConfig) -> CategoryResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Assign to every object of `B` the first object of `A` whose Hom-set sizes match
    pub fn find_right_adjoint(&self) -> SearchOutcome<RightAdjointCandidate> {
        let max = self.config.max_adjoint_objects;
        if self.source.object_count() > max || self.target.object_count() > max {
            warn!(
                functor = %self.functor.name,
                source_objects = self.source.object_count(),
                target_objects = self.target.object_count(),
                max,
                "categories too large for brute-force adjoint search"
            );
            return SearchOutcome::Infeasible {
                reason: format!(
                    "categories too large for brute-force adjoint search ({} and {} objects, limit {})",
                    self.source.object_count(),
                    self.target.object_count(),
                    max
                ),
            };
        }

        let unmapped = self.functor.unmapped_objects(self.source);
        if let Some(first) = unmapped.first() {
            return SearchOutcome::NotFound {
                reason: format!(
                    "no right adjoint found: functor {} does not map object {}",
                    self.functor.name, first
                ),
            };
        }

        info!(
            functor = %self.functor.name,
            source = %self.source.name(),
            target = %self.target.name(),
            "searching for right adjoint"
        );

        let mut budget = SearchBudget::new(self.config.max_candidates);
        let mut assignments = BTreeMap::new();

        for b in self.target.sorted_objects() {
            match self.representing_object(b, &mut budget) {
                Ok(Some(a)) => {
                    debug!(%b, %a, "assigned G(b)");
                    assignments.insert(b.clone(), a.clone());
                }
                Ok(None) => {
                    info!(%b, "no object of the source category matches");
                    return SearchOutcome::NotFound {
                        reason: format!(
                            "no right adjoint found: no object of {} matches Hom-set sizes for {}",
                            self.source.name(),
                            b
                        ),
                    };
                }
                Err(exhausted) => {
                    warn!(
                        explored = exhausted.explored,
                        budget = exhausted.budget,
                        "adjoint search budget exhausted"
                    );
                    return SearchOutcome::exhausted(exhausted);
                }
            }
        }

        SearchOutcome::Found {
            value: RightAdjointCandidate {
                functor: self.functor.name.clone(),
                assignments,
                verification: Verification::HomCardinalityOnly,
            },
        }
    }

    /// First `a` with `|Hom_B(F(x), b)| == |Hom_A(x, a)|` for every `x`
    fn representing_object(
        &self,
        b: &str,
        budget: &mut SearchBudget,
    ) -> Result<Option<&'a ObjectId>, BudgetExhausted> {
        let objects = self.source.sorted_objects();
        for a in &objects {
            budget.charge()?;
            let matches = objects.iter().all(|x| {
                let fx = match self.functor.object_image(x) {
                    Some(fx) => fx,
                    None => return false,
                };
                self.target.hom_size(fx, b) == self.source.hom_size(x, a)
            });
            if matches {
                return Ok(Some(*a));
            }
        }
        Ok(None)
    }
}
