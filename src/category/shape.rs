// Copyright 2025 Cowboy AI, LLC.

//! Shapes and diagrams
//!
//! A shape is a small indexing graph with no composition of its own. A
//! diagram assigns each node an object and each edge a morphism of some
//! target category. Diagrams may be partial; the cone verifier reports the
//! gaps instead of rejecting the diagram up front.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::finite_category::{MorphismId, ObjectId};
use crate::errors::{CategoryError, CategoryResult};

/// Identifier of a shape node
pub type NodeId = String;

/// Identifier of a shape edge
pub type EdgeId = String;

/// A directed edge of a shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeEdge {
    /// Edge identifier
    pub id: EdgeId,
    /// Source node
    pub source: NodeId,
    /// Target node
    pub target: NodeId,
}

/// Indexing graph for a diagram
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Shape name
    pub name: String,
    nodes: IndexSet<NodeId>,
    edges: IndexMap<EdgeId, ShapeEdge>,
}

impl Shape {
    /// Create an empty shape
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: IndexSet::new(),
            edges: IndexMap::new(),
        }
    }

    /// Add a node
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> CategoryResult<()> {
        let id = id.into();
        if self.nodes.contains(&id) {
            return Err(CategoryError::NodeAlreadyExists {
                shape: self.name.clone(),
                node: id,
            });
        }
        self.nodes.insert(id);
        Ok(())
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(
        &mut self,
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
    ) -> CategoryResult<()> {
        let (id, source, target) = (id.into(), source.into(), target.into());
        for node in [&source, &target] {
            if !self.nodes.contains(node) {
                return Err(CategoryError::UnknownNode {
                    shape: self.name.clone(),
                    node: node.clone(),
                });
            }
        }
        if self.edges.contains_key(&id) {
            return Err(CategoryError::EdgeAlreadyExists {
                shape: self.name.clone(),
                edge: id,
            });
        }
        self.edges.insert(id.clone(), ShapeEdge { id, source, target });
        Ok(())
    }

    /// Whether the node exists
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Look up an edge
    pub fn edge(&self, id: &str) -> Option<&ShapeEdge> {
        self.edges.get(id)
    }

    /// Nodes in lexicographic order
    pub fn sorted_nodes(&self) -> Vec<&NodeId> {
        let mut nodes: Vec<&NodeId> = self.nodes.iter().collect();
        nodes.sort();
        nodes
    }

    /// Edges in lexicographic order of their ids
    pub fn sorted_edges(&self) -> Vec<&ShapeEdge> {
        let mut edges: Vec<&ShapeEdge> = self.edges.values().collect();
        edges.sort_by(|a, b| a.id.cmp(&b.id));
        edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Image of a shape inside a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagram {
    /// Diagram name
    pub name: String,
    /// Name of the indexing shape
    pub shape: String,
    /// Name of the target category
    pub category: String,
    /// Shape node -> category object
    pub node_map: IndexMap<NodeId, ObjectId>,
    /// Shape edge -> category morphism
    pub edge_map: IndexMap<EdgeId, MorphismId>,
}

impl Diagram {
    /// Create a diagram with no images yet
    pub fn new(
        name: impl Into<String>,
        shape: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shape: shape.into(),
            category: category.into(),
            node_map: IndexMap::new(),
            edge_map: IndexMap::new(),
        }
    }

    /// Set the image of a node, replacing any earlier one
    pub fn map_node(&mut self, node: impl Into<NodeId>, object: impl Into<ObjectId>) -> &mut Self {
        self.node_map.insert(node.into(), object.into());
        self
    }

    /// Set the image of an edge, replacing any earlier one
    pub fn map_edge(&mut self, edge: impl Into<EdgeId>, morphism: impl Into<MorphismId>) -> &mut Self {
        self.edge_map.insert(edge.into(), morphism.into());
        self
    }

    /// Object assigned to a node
    pub fn node_image(&self, node: &str) -> Option<&ObjectId> {
        self.node_map.get(node)
    }

    /// Morphism assigned to an edge
    pub fn edge_image(&self, edge: &str) -> Option<&MorphismId> {
        self.edge_map.get(edge)
    }

    /// Every node and edge of `shape` has an image
    pub fn is_complete(&self, shape: &Shape) -> bool {
        shape.nodes.iter().all(|n| self.node_map.contains_key(n))
            && shape.edges.keys().all(|e| self.edge_map.contains_key(e))
    }
}
