//! Finite categories and brute-force universal constructions
//!
//! This module holds the category, shape, diagram and functor data model
//! together with the two searches that run over it: the limit finder and the
//! right-adjoint checker.

pub mod finite_category;
pub mod shape;
pub mod functor;
pub mod natural_transformation;
pub mod cone;
pub mod search;
pub mod limits;
pub mod adjunction;

pub use finite_category::{Category, Morphism, MorphismId, ObjectId};
pub use shape::{Diagram, EdgeId, NodeId, Shape, ShapeEdge};
pub use functor::Functor;
pub use natural_transformation::NaturalTransformation;
pub use cone::{verify_cone, Cone, ConeVerdict, IncompleteInput};
pub use search::SearchOutcome;
pub use limits::{find_limit, LimitFinder};
pub use adjunction::{find_right_adjoint, AdjointChecker, RightAdjointCandidate, Verification};
