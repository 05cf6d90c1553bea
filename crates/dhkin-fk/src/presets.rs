//! Reference DH tables for common manipulators.
//!
//! These are example configurations, not assumptions baked into the engine;
//! any table of the same shape works.

use crate::params::DhTable;

/// 7-DOF Panda-class arm, modified-convention (Craig) DH table.
///
/// Rows are `(a, d, alpha_deg)`; the joint angles are the seven variables.
/// With all joints at zero the end-effector sits at
/// `(0.088, 0, 0.333 + 0.316 + 0.384)` in the base frame.
pub fn panda7() -> DhTable<f64> {
    DhTable::from_rows_degrees(&[
        (0.0, 0.333, 0.0),
        (0.0, 0.0, -90.0),
        (0.0, 0.316, 90.0),
        (0.0825, 0.0, 90.0),
        (-0.0825, 0.384, -90.0),
        (0.0, 0.0, 90.0),
        (0.088, 0.0, 90.0),
    ])
}
