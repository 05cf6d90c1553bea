//! Denavit-Hartenberg forward kinematics for serial revolute manipulators.
//!
//! Builds per-joint homogeneous transforms from a DH parameter table, chains
//! them into cumulative base-to-joint transforms, and cross-checks the
//! end-effector pose via two independent composition paths.
//!
//! # Architecture
//!
//! ```text
//! DhTable ──► joint_transform (per joint) ──► compose ──► FkSolution
//!                     ▲                           ▲
//!                 Convention                  tolerance
//! ```
//!
//! The [`DhTable`] holds the geometric constants (link length, link offset,
//! twist angle); joint angles are supplied at evaluation time. All kinematics
//! code is generic over the scalar type via [`nalgebra::RealField`], so the
//! same algorithm serves `f32`, `f64`, or any exact scalar implementing the
//! trait.

pub mod chain;
pub mod engine;
pub mod params;
pub mod presets;
pub mod transform;

pub use chain::{compose, Composition};
pub use engine::{FkEngine, FkSolution};
pub use params::{DhTable, JointParams};
pub use transform::{joint_transform, Convention};
