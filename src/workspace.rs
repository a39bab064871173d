// Copyright 2025 Cowboy AI, LLC.

//! Named registry of categories, shapes, diagrams and functors
//!
//! The workspace is the validation boundary: every cross reference (a
//! diagram's shape, a functor's categories, a node image) is checked when it
//! is recorded, so the searches only ever see well-formed input. Entities are
//! added, never removed.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::category::{
    AdjointChecker, Category, Cone, Diagram, Functor, LimitFinder, NaturalTransformation,
    RightAdjointCandidate, SearchOutcome, Shape,
};
use crate::config::EngineConfig;
use crate::errors::{CategoryError, CategoryResult};

/// In-memory store for one session
#[derive(Debug, Clone, Default)]
pub struct Workspace {
    config: EngineConfig,
    categories: IndexMap<String, Category>,
    shapes: IndexMap<String, Shape>,
    diagrams: IndexMap<String, Diagram>,
    functors: IndexMap<String, Functor>,
    transformations: IndexMap<String, NaturalTransformation>,
}

impl Workspace {
    /// Create an empty workspace with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty workspace with the given configuration
    pub fn with_config(config: EngineConfig) -> CategoryResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create an empty category using the configured validation mode
    pub fn new_category(&mut self, name: impl Into<String>) -> CategoryResult<&mut Category> {
        let name = name.into();
        if self.categories.contains_key(&name) {
            return Err(CategoryError::already_exists("category", name));
        }
        let category = Category::with_validation(name.clone(), self.config.composition_validation);
        info!(category = %name, "category created");
        Ok(self.categories.entry(name).or_insert(category))
    }

    /// Look up a category
    pub fn category(&self, name: &str) -> CategoryResult<&Category> {
        self.categories
            .get(name)
            .ok_or_else(|| CategoryError::not_found("category", name))
    }

    /// Look up a category for modification
    pub fn category_mut(&mut self, name: &str) -> CategoryResult<&mut Category> {
        self.categories
            .get_mut(name)
            .ok_or_else(|| CategoryError::not_found("category", name))
    }

    /// Create an empty shape
    pub fn new_shape(&mut self, name: impl Into<String>) -> CategoryResult<&mut Shape> {
        let name = name.into();
        if self.shapes.contains_key(&name) {
            return Err(CategoryError::already_exists("shape", name));
        }
        info!(shape = %name, "shape created");
        Ok(self.shapes.entry(name.clone()).or_insert(Shape::new(name)))
    }

    /// Look up a shape
    pub fn shape(&self, name: &str) -> CategoryResult<&Shape> {
        self.shapes
            .get(name)
            .ok_or_else(|| CategoryError::not_found("shape", name))
    }

    /// Look up a shape for modification
    pub fn shape_mut(&mut self, name: &str) -> CategoryResult<&mut Shape> {
        self.shapes
            .get_mut(name)
            .ok_or_else(|| CategoryError::not_found("shape", name))
    }

    /// Create an empty diagram of an existing shape in an existing category
    pub fn new_diagram(
        &mut self,
        name: impl Into<String>,
        shape: &str,
        category: &str,
    ) -> CategoryResult<()> {
        let name = name.into();
        if self.diagrams.contains_key(&name) {
            return Err(CategoryError::already_exists("diagram", name));
        }
        self.shape(shape)?;
        self.category(category)?;

        info!(diagram = %name, %shape, %category, "diagram created");
        self.diagrams
            .insert(name.clone(), Diagram::new(name, shape, category));
        Ok(())
    }

    /// Look up a diagram
    pub fn diagram(&self, name: &str) -> CategoryResult<&Diagram> {
        self.diagrams
            .get(name)
            .ok_or_else(|| CategoryError::not_found("diagram", name))
    }

    /// Send a shape node to an object of the diagram's category
    pub fn map_diagram_node(&mut self, diagram: &str, node: &str, object: &str) -> CategoryResult<()> {
        let target = self
            .diagrams
            .get_mut(diagram)
            .ok_or_else(|| CategoryError::not_found("diagram", diagram))?;
        let shape = self
            .shapes
            .get(&target.shape)
            .ok_or_else(|| CategoryError::not_found("shape", target.shape.clone()))?;
        let category = self
            .categories
            .get(&target.category)
            .ok_or_else(|| CategoryError::not_found("category", target.category.clone()))?;

        if !shape.contains_node(node) {
            return Err(CategoryError::UnknownNode {
                shape: shape.name.clone(),
                node: node.to_string(),
            });
        }
        if !category.contains_object(object) {
            return Err(CategoryError::UnknownObject {
                category: category.name().to_string(),
                object: object.to_string(),
            });
        }

        debug!(%diagram, %node, %object, "node mapped");
        target.map_node(node, object);
        Ok(())
    }

    /// Send a shape edge to a morphism of the diagram's category
    pub fn map_diagram_edge(&mut self, diagram: &str, edge: &str, morphism: &str) -> CategoryResult<()> {
        let target = self
            .diagrams
            .get_mut(diagram)
            .ok_or_else(|| CategoryError::not_found("diagram", diagram))?;
        let shape = self
            .shapes
            .get(&target.shape)
            .ok_or_else(|| CategoryError::not_found("shape", target.shape.clone()))?;
        let category = self
            .categories
            .get(&target.category)
            .ok_or_else(|| CategoryError::not_found("category", target.category.clone()))?;

        if shape.edge(edge).is_none() {
            return Err(CategoryError::UnknownEdge {
                shape: shape.name.clone(),
                edge: edge.to_string(),
            });
        }
        if category.morphism(morphism).is_none() {
            return Err(CategoryError::UnknownMorphism {
                category: category.name().to_string(),
                morphism: morphism.to_string(),
            });
        }

        debug!(%diagram, %edge, %morphism, "edge mapped");
        target.map_edge(edge, morphism);
        Ok(())
    }

    /// Register a functor between two existing categories
    pub fn define_functor(&mut self, functor: Functor) -> CategoryResult<()> {
        if self.functors.contains_key(&functor.name) {
            return Err(CategoryError::already_exists("functor", functor.name));
        }
        let source = self.category(&functor.source)?;
        let target = self.category(&functor.target)?;
        functor.validate_against(source, target)?;

        info!(
            functor = %functor.name,
            source = %functor.source,
            target = %functor.target,
            "functor defined"
        );
        self.functors.insert(functor.name.clone(), functor);
        Ok(())
    }

    /// Look up a functor
    pub fn functor(&self, name: &str) -> CategoryResult<&Functor> {
        self.functors
            .get(name)
            .ok_or_else(|| CategoryError::not_found("functor", name))
    }

    /// Record a natural transformation between two registered functors
    pub fn add_natural_transformation(&mut self, transformation: NaturalTransformation) -> CategoryResult<()> {
        if self.transformations.contains_key(&transformation.name) {
            return Err(CategoryError::already_exists(
                "natural transformation",
                transformation.name,
            ));
        }
        self.functor(&transformation.from)?;
        self.functor(&transformation.to)?;

        self.transformations
            .insert(transformation.name.clone(), transformation);
        Ok(())
    }

    /// Look up a natural transformation
    pub fn natural_transformation(&self, name: &str) -> CategoryResult<&NaturalTransformation> {
        self.transformations
            .get(name)
            .ok_or_else(|| CategoryError::not_found("natural transformation", name))
    }

    /// Run the limit search for a named diagram
    pub fn compute_limit(&self, diagram: &str) -> CategoryResult<SearchOutcome<Cone>> {
        let diagram = self.diagram(diagram)?;
        let shape = self.shape(&diagram.shape)?;
        let category = self.category(&diagram.category)?;

        Ok(LimitFinder::new(category)
            .with_config(self.config.search.clone())?
            .find_limit(shape, diagram))
    }

    /// Run the right-adjoint heuristic for a named functor
    pub fn check_adjunction(&self, functor: &str) -> CategoryResult<SearchOutcome<RightAdjointCandidate>> {
        let functor = self.functor(functor)?;
        let source = self.category(&functor.source)?;
        let target = self.category(&functor.target)?;

        Ok(AdjointChecker::new(source, target, functor)
            .with_config(self.config.search.clone())?
            .find_right_adjoint())
    }

    /// Counts and references of everything registered
    pub fn summary(&self) -> WorkspaceSummary {
        WorkspaceSummary {
            categories: self
                .categories
                .values()
                .map(|c| CategorySummary {
                    name: c.name().to_string(),
                    objects: c.object_count(),
                    morphisms: c.morphism_count(),
                })
                .collect(),
            functors: self
                .functors
                .values()
                .map(|f| FunctorSummary {
                    name: f.name.clone(),
                    source: f.source.clone(),
                    target: f.target.clone(),
                })
                .collect(),
            shapes: self
                .shapes
                .values()
                .map(|s| ShapeSummary {
                    name: s.name.clone(),
                    nodes: s.node_count(),
                    edges: s.edge_count(),
                })
                .collect(),
            diagrams: self
                .diagrams
                .values()
                .map(|d| DiagramSummary {
                    name: d.name.clone(),
                    shape: d.shape.clone(),
                    category: d.category.clone(),
                })
                .collect(),
            natural_transformations: self.transformations.len(),
        }
    }
}

/// Listing of a workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSummary {
    /// Registered categories
    pub categories: Vec<CategorySummary>,
    /// Registered functors
    pub functors: Vec<FunctorSummary>,
    /// Registered shapes
    pub shapes: Vec<ShapeSummary>,
    /// Registered diagrams
    pub diagrams: Vec<DiagramSummary>,
    /// Number of stored natural transformations
    pub natural_transformations: usize,
}

/// Size of one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category name
    pub name: String,
    /// Object count
    pub objects: usize,
    /// Morphism count
    pub morphisms: usize,
}

/// Endpoints of one functor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctorSummary {
    /// Functor name
    pub name: String,
    /// Source category
    pub source: String,
    /// Target category
    pub target: String,
}

/// Size of one shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSummary {
    /// Shape name
    pub name: String,
    /// Node count
    pub nodes: usize,
    /// Edge count
    pub edges: usize,
}

/// References of one diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramSummary {
    /// Diagram name
    pub name: String,
    /// Indexing shape
    pub shape: String,
    /// Target category
    pub category: String,
}

impl fmt::Display for WorkspaceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Categories:")?;
        for c in &self.categories {
            writeln!(f, " - {} (|O|={}, |M|={})", c.name, c.objects, c.morphisms)?;
        }
        writeln!(f, "Functors:")?;
        for func in &self.functors {
            writeln!(f, " - {} : {} -> {}", func.name, func.source, func.target)?;
        }
        writeln!(f, "Shapes:")?;
        for s in &self.shapes {
            writeln!(f, " - {} (nodes={}, edges={})", s.name, s.nodes, s.edges)?;
        }
        writeln!(f, "Diagrams:")?;
        for d in &self.diagrams {
            writeln!(f, " - {} : {} -> {}", d.name, d.shape, d.category)?;
        }
        write!(f, "Natural transformations: {}", self.natural_transformations)
    }
}
