//! DH parameter table: per-joint geometric constants, ordered base outward.

use nalgebra::RealField;

use dhkin_core::{ConfigError, RobotConfig};

/// Geometric constants of one joint, DH convention.
///
/// Joint angles are not stored here; they are supplied per evaluation. The
/// twist angle is kept in radians so that the transform builders never touch
/// unit conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointParams<T> {
    /// Link length (m).
    pub a: T,
    /// Link offset (m).
    pub d: T,
    /// Twist angle (rad).
    pub alpha: T,
}

impl<T: RealField + Copy> JointParams<T> {
    /// Create joint parameters with the twist angle already in radians.
    pub const fn new(a: T, d: T, alpha: T) -> Self {
        Self { a, d, alpha }
    }
}

impl JointParams<f64> {
    /// Create joint parameters from a twist angle in degrees, the unit used
    /// by published DH tables.
    pub fn from_degrees(a: f64, d: f64, alpha_deg: f64) -> Self {
        Self::new(a, d, alpha_deg.to_radians())
    }
}

/// An ordered DH parameter table, joint 1 (nearest the base) first.
#[derive(Debug, Clone, PartialEq)]
pub struct DhTable<T> {
    joints: Vec<JointParams<T>>,
}

impl<T: RealField + Copy> DhTable<T> {
    pub fn new(joints: Vec<JointParams<T>>) -> Self {
        Self { joints }
    }

    /// Number of joints.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Access the joint definitions in chain order.
    pub fn joints(&self) -> &[JointParams<T>] {
        &self.joints
    }
}

impl DhTable<f64> {
    /// Build a table from `(a, d, alpha_deg)` rows.
    pub fn from_rows_degrees(rows: &[(f64, f64, f64)]) -> Self {
        Self::new(
            rows.iter()
                .map(|&(a, d, alpha_deg)| JointParams::from_degrees(a, d, alpha_deg))
                .collect(),
        )
    }

    /// Build a table from a validated [`RobotConfig`].
    pub fn from_config(config: &RobotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            config
                .joints
                .iter()
                .map(|row| JointParams::from_degrees(row.a, row.d, row.alpha_deg))
                .collect(),
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
