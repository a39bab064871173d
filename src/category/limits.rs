// Copyright 2025 Cowboy AI, LLC.

//! Brute-force limit search
//!
//! A limit of a diagram `D: S -> C` is a cone through which every other cone
//! factors via exactly one mediating morphism. For a small finite category
//! this can be decided by enumeration:
//!
//! 1. pick an apex `a` and one leg `a -> D(n)` per node,
//! 2. keep the assignment if it commutes with every edge of `S`,
//! 3. accept it if, for every cone `(a2, legs2)`, exactly one `m: a2 -> a`
//!    satisfies `leg(n) . m == legs2(n)` for all nodes.
//!
//! Step 3 re-enumerates every cone for every candidate, so the cost is
//! exponential in the Hom-set sizes. An object-count guard refuses large
//! categories outright and a candidate budget stops runaway searches.
//!
//! Enumeration order is fixed: apexes, nodes and Hom-sets are visited in
//! lexicographic order of their ids, so repeated calls on the same input
//! return the same cone.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use super::cone::{verify_cone, Cone};
use super::finite_category::{Category, MorphismId, ObjectId};
use super::search::{BudgetExhausted, SearchBudget, SearchOutcome};
use super::shape::{Diagram, NodeId, Shape};
use crate::config::SearchConfig;
use crate::errors::CategoryResult;

/// Search for a limit with the default [`SearchConfig`]
pub fn find_limit(category: &Category, shape: &Shape, diagram: &Diagram) -> SearchOutcome<Cone> {
    LimitFinder::new(category).find_limit(shape, diagram)
}

/// Limit search over one category
#[derive(Debug, Clone)]
pub struct LimitFinder<'a> {
    category: &'a Category,
    config: SearchConfig,
}

impl<'a> LimitFinder<'a> {
    /// Create a finder with the default configuration
    pub fn new(category: &'a Category) -> Self {
        Self {
            category,
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

    /// Find the first universal cone over `diagram` in enumeration order
    pub fn find_limit(&self, shape: &Shape, diagram: &Diagram) -> SearchOutcome<Cone> {
        let objects = self.category.object_count();
        if objects > self.config.max_limit_objects {
            warn!(
                category = %self.category.name(),
                objects,
                max = self.config.max_limit_objects,
                "category too large for brute-force limit search"
            );
            return SearchOutcome::Infeasible {
                reason: format!(
                    "category {} too large for brute-force limit search ({} objects > {})",
                    self.category.name(),
                    objects,
                    self.config.max_limit_objects
                ),
            };
        }

        info!(
            category = %self.category.name(),
            diagram = %diagram.name,
            nodes = shape.node_count(),
            edges = shape.edge_count(),
            "searching for limit"
        );

        let search = Search {
            category: self.category,
            shape,
            diagram,
            nodes: shape.sorted_nodes(),
            apexes: self.category.sorted_objects(),
        };
        let mut budget = SearchBudget::new(self.config.max_candidates);

        match search.run(&mut budget) {
            Ok(Some(cone)) => {
                info!(apex = %cone.apex, explored = budget.explored(), "limit found");
                SearchOutcome::Found { value: cone }
            }
            Ok(None) => {
                info!(explored = budget.explored(), "no limit found");
                SearchOutcome::NotFound {
                    reason: format!(
                        "no limit found for diagram {} after {} candidates",
                        diagram.name,
                        budget.explored()
                    ),
                }
            }
            Err(exhausted) => {
                warn!(
                    explored = exhausted.explored,
                    budget = exhausted.budget,
                    "limit search budget exhausted"
                );
                SearchOutcome::exhausted(exhausted)
            }
        }
    }
}

/// Immutable state shared by the outer and inner enumerations
struct Search<'s> {
    category: &'s Category,
    shape: &'s Shape,
    diagram: &'s Diagram,
    nodes: Vec<&'s NodeId>,
    apexes: Vec<&'s ObjectId>,
}

impl<'s> Search<'s> {
    fn run(&self, budget: &mut SearchBudget) -> Result<Option<Cone>, BudgetExhausted> {
        for apex in &self.apexes {
            let Some(choices) = self.leg_choices(apex) else {
                continue;
            };

            for legs in LegCombinations::new(&self.nodes, &choices) {
                budget.charge()?;
                let cone = Cone::new(apex.as_str(), legs);
                if !verify_cone(self.category, self.shape, self.diagram, &cone).commutes() {
                    continue;
                }
                if self.is_universal(&cone, budget)? {
                    return Ok(Some(cone));
                }
            }
        }
        Ok(None)
    }

    /// Per-node Hom-sets from `apex`, or `None` if some node cannot be reached
    fn leg_choices(&self, apex: &str) -> Option<Vec<Vec<&'s MorphismId>>> {
        let mut choices = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let Some(image) = self.diagram.node_image(node) else {
                debug!(%apex, node = %node, "node has no image; apex skipped");
                return None;
            };
            let hom = self.category.hom(apex, image);
            if hom.is_empty() {
                debug!(%apex, node = %node, target = %image, "empty Hom-set; apex skipped");
                return None;
            }
            choices.push(hom);
        }
        Some(choices)
    }

    /// Every cone factors through `candidate` via exactly one mediating morphism
    fn is_universal(&self, candidate: &Cone, budget: &mut SearchBudget) -> Result<bool, BudgetExhausted> {
        for other_apex in &self.apexes {
            let Some(choices) = self.leg_choices(other_apex) else {
                continue;
            };
            let mediators = self.category.hom(other_apex, &candidate.apex);

            for legs in LegCombinations::new(&self.nodes, &choices) {
                budget.charge()?;
                let other = Cone::new(other_apex.as_str(), legs);
                if !verify_cone(self.category, self.shape, self.diagram, &other).commutes() {
                    continue;
                }

                let factorizations = mediators
                    .iter()
                    .filter(|m| self.factors_through(candidate, &other, m))
                    .count();
                if factorizations != 1 {
                    debug!(
                        apex = %candidate.apex,
                        other = %other.apex,
                        factorizations,
                        "universality fails"
                    );
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }

    /// `candidate.leg(n) . mediator == other.leg(n)` for every node
    fn factors_through(&self, candidate: &Cone, other: &Cone, mediator: &str) -> bool {
        self.nodes.iter().all(|node| {
            match (candidate.leg(node), other.leg(node)) {
                (Some(leg), Some(other_leg)) => {
                    self.category.compose(leg, mediator) == Some(other_leg)
                }
                _ => false,
            }
        })
    }
}

/// Cartesian product of per-node Hom-sets in lexicographic order
///
/// The last node varies fastest. With no nodes the product holds exactly one
/// empty assignment.
struct LegCombinations<'c, 's> {
    nodes: &'c [&'s NodeId],
    choices: &'c [Vec<&'s MorphismId>],
    cursor: Vec<usize>,
    done: bool,
}

impl<'c, 's> LegCombinations<'c, 's> {
    fn new(nodes: &'c [&'s NodeId], choices: &'c [Vec<&'s MorphismId>]) -> Self {
        Self {
            nodes,
            choices,
            cursor: vec![0; choices.len()],
            done: choices.iter().any(Vec::is_empty),
        }
    }
}

impl Iterator for LegCombinations<'_, '_> {
    type Item = BTreeMap<NodeId, MorphismId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let legs = self
            .nodes
            .iter()
            .zip(&self.cursor)
            .enumerate()
            .map(|(i, (node, &pick))| ((*node).clone(), self.choices[i][pick].clone()))
            .collect();

        // Advance the odometer from the last position
        let mut position = self.cursor.len();
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            self.cursor[position] += 1;
            if self.cursor[position] < self.choices[position].len() {
                break;
            }
            self.cursor[position] = 0;
        }

        Some(legs)
    }
}
