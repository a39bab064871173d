// Copyright 2025 Cowboy AI, LLC.

//! Cones over diagrams and their commutativity check

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::finite_category::{Category, MorphismId, ObjectId};
use super::shape::{Diagram, EdgeId, NodeId, Shape};

/// An apex together with one leg per shape node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cone {
    /// Apex object
    pub apex: ObjectId,
    /// Shape node -> morphism `apex -> D(node)`
    pub legs: BTreeMap<NodeId, MorphismId>,
}

impl Cone {
    /// Create a cone from an apex and its legs
    pub fn new(apex: impl Into<ObjectId>, legs: BTreeMap<NodeId, MorphismId>) -> Self {
        Self {
            apex: apex.into(),
            legs,
        }
    }

    /// Leg at a node
    pub fn leg(&self, node: &str) -> Option<&MorphismId> {
        self.legs.get(node)
    }
}

impl fmt::Display for Cone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found limit with apex: {}", self.apex)?;
        write!(f, "Legs:")?;
        for (node, leg) in &self.legs {
            write!(f, "\n - {} : {}", node, leg)?;
        }
        Ok(())
    }
}

/// Which piece of input a candidate check could not find
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IncompleteInput {
    /// The diagram gives no morphism for an edge
    MissingEdgeImage {
        /// Edge without an image
        edge: EdgeId,
    },
    /// The cone has no leg at one end of an edge
    MissingLeg {
        /// Edge being checked
        edge: EdgeId,
        /// Node without a leg
        node: NodeId,
    },
}

impl fmt::Display for IncompleteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncompleteInput::MissingEdgeImage { edge } => {
                write!(f, "diagram incomplete: edge {} has no image", edge)
            }
            IncompleteInput::MissingLeg { edge, node } => {
                write!(f, "cone incomplete: no leg at node {} of edge {}", node, edge)
            }
        }
    }
}

/// Result of checking one cone candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ConeVerdict {
    /// Every edge triangle commutes
    Commutes,
    /// Some required image or leg is missing
    Incomplete(IncompleteInput),
    /// `D(e) . leg(source)` is undeclared or differs from `leg(target)`
    DoesNotCommute {
        /// First failing edge
        edge: EdgeId,
        /// Declared composite, if any
        composite: Option<MorphismId>,
        /// Leg the composite had to equal
        expected: MorphismId,
    },
}

impl ConeVerdict {
    /// Whether the candidate is a cone
    pub fn commutes(&self) -> bool {
        matches!(self, ConeVerdict::Commutes)
    }
}

/// Check a cone candidate against every edge of the shape
///
/// Completeness is checked for all edges before any composite is looked up,
/// so a missing edge image or leg is always reported as
/// [`ConeVerdict::Incomplete`].
pub fn verify_cone(category: &Category, shape: &Shape, diagram: &Diagram, cone: &Cone) -> ConeVerdict {
    let edges = shape.sorted_edges();

    let mut checks = Vec::with_capacity(edges.len());
    for edge in &edges {
        let image = match diagram.edge_image(&edge.id) {
            Some(image) => image,
            None => {
                return ConeVerdict::Incomplete(IncompleteInput::MissingEdgeImage {
                    edge: edge.id.clone(),
                })
            }
        };
        let leg_at = |node: &NodeId| {
            cone.leg(node).ok_or_else(|| IncompleteInput::MissingLeg {
                edge: edge.id.clone(),
                node: node.clone(),
            })
        };
        let source_leg = match leg_at(&edge.source) {
            Ok(leg) => leg,
            Err(missing) => return ConeVerdict::Incomplete(missing),
        };
        let target_leg = match leg_at(&edge.target) {
            Ok(leg) => leg,
            Err(missing) => return ConeVerdict::Incomplete(missing),
        };
        checks.push((&edge.id, image, source_leg, target_leg));
    }

    for (edge, image, source_leg, target_leg) in checks {
        let composite = category.compose(image, source_leg);
        if composite != Some(target_leg) {
            return ConeVerdict::DoesNotCommute {
                edge: edge.clone(),
                composite: composite.cloned(),
                expected: target_leg.clone(),
            };
        }
    }

    ConeVerdict::Commutes
}
