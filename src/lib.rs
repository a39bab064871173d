//! # Diagram Chaser
//!
//! Brute-force categorical reasoning over small finite categories.
//!
//! The crate provides:
//! - **Category**: objects, morphisms and a partial composition table
//! - **Shape / Diagram**: an indexing graph and its image in a category
//! - **Cone verification**: commutativity of a candidate cone
//! - **Limit search**: the first universal cone in a fixed enumeration order
//! - **Adjoint search**: a Hom-set cardinality heuristic for right adjoints
//! - **Workspace**: a named registry that validates references up front
//!
//! ## Design Principles
//!
//! 1. **Lookup, not inference**: composition answers only for declared pairs
//! 2. **Reproducible**: every enumeration runs in lexicographic order of ids
//! 3. **Bounded**: object-count guards and a candidate budget cap each search
//! 4. **Honest results**: "too large", "gave up" and "none exists" are distinct
//!    [`SearchOutcome`] variants, and adjoint results are tagged as unverified
//!
//! ## Example
//!
//! ```
//! use diagram_chaser::{find_limit, Category, Diagram, SearchOutcome, Shape};
//!
//! let mut category = Category::new("C");
//! category.add_object("X").unwrap();
//! category.ensure_identities();
//! category.register_identity_laws();
//!
//! let mut shape = Shape::new("point");
//! shape.add_node("1").unwrap();
//!
//! let mut diagram = Diagram::new("d", "point", "C");
//! diagram.map_node("1", "X");
//!
//! match find_limit(&category, &shape, &diagram) {
//!     SearchOutcome::Found { value: cone } => assert_eq!(cone.apex, "X"),
//!     other => panic!("{}", other),
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod errors;
pub mod category;
pub mod workspace;

pub use config::{
    CompositionValidation, EngineConfig, SearchConfig, DEFAULT_MAX_ADJOINT_OBJECTS,
    DEFAULT_MAX_CANDIDATES, DEFAULT_MAX_LIMIT_OBJECTS,
};
pub use errors::{CategoryError, CategoryResult};
pub use category::{
    find_limit, find_right_adjoint, verify_cone, AdjointChecker, Category, Cone, ConeVerdict,
    Diagram, Functor, IncompleteInput, LimitFinder, Morphism, MorphismId, NaturalTransformation,
    NodeId, ObjectId, RightAdjointCandidate, SearchOutcome, Shape, ShapeEdge, Verification,
};
pub use workspace::{Workspace, WorkspaceSummary};
