//! Forward-kinematics engine: owns the parameter table and convention,
//! builds the per-joint chain, and composes it into a solution.

use nalgebra::{Matrix4, RealField, Vector3};

use dhkin_core::{ConfigError, KinematicsError, RobotConfig};

use crate::chain::compose;
use crate::params::DhTable;
use crate::transform::{joint_transform, Convention};

/// Forward-kinematics result for one joint configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct FkSolution<T> {
    /// Local transforms, frame i-1 → frame i, one per joint.
    pub per_joint: Vec<Matrix4<T>>,
    /// Base-to-joint transforms; `cumulative[i]` maps frame i+1 to the base.
    pub cumulative: Vec<Matrix4<T>>,
    /// Base-to-end-effector transform. Equals the last cumulative transform
    /// within the engine's agreement tolerance.
    pub end_effector: Matrix4<T>,
}

impl<T: RealField + Copy> FkSolution<T> {
    /// Translation component of the end-effector pose.
    pub fn end_effector_translation(&self) -> Vector3<T> {
        self.end_effector.fixed_view::<3, 1>(0, 3).into_owned()
    }
}

/// Forward-kinematics engine for one manipulator.
///
/// The table, convention, and agreement tolerance are fixed at construction;
/// a different convention requires a new engine, since every derived
/// transform depends on it. `solve` is pure, so one engine may be shared
/// across threads and evaluated concurrently.
#[derive(Debug, Clone)]
pub struct FkEngine<T> {
    table: DhTable<T>,
    convention: Convention,
    tolerance: T,
}

impl<T: RealField + Copy> FkEngine<T> {
    /// Create an engine with the default agreement tolerance, the square
    /// root of the scalar's machine epsilon.
    ///
    /// # Errors
    ///
    /// Returns [`KinematicsError::EmptyTable`] if the table has no joints.
    pub fn new(table: DhTable<T>, convention: Convention) -> Result<Self, KinematicsError> {
        if table.is_empty() {
            return Err(KinematicsError::EmptyTable);
        }
        let tolerance = T::default_epsilon().sqrt();
        Ok(Self {
            table,
            convention,
            tolerance,
        })
    }

    /// Replace the agreement tolerance. Zero means exact comparison.
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Number of joints.
    pub fn dof(&self) -> usize {
        self.table.dof()
    }

    pub fn table(&self) -> &DhTable<T> {
        &self.table
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// Compute forward kinematics at the joint angles `q` (radians, one per
    /// joint, base outward).
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::VariableCountMismatch`] if `q.len() != dof()`.
    /// - [`KinematicsError::CompositionMismatch`] if the incremental and
    ///   direct composition paths disagree beyond the tolerance. This is a
    ///   correctness assertion on the computation itself; the caller must
    ///   not use the pose from a mismatched result.
    pub fn solve(&self, q: &[T]) -> Result<FkSolution<T>, KinematicsError> {
        if q.len() != self.table.dof() {
            return Err(KinematicsError::VariableCountMismatch {
                expected: self.table.dof(),
                got: q.len(),
            });
        }

        let per_joint: Vec<Matrix4<T>> = self
            .table
            .joints()
            .iter()
            .zip(q.iter())
            .map(|(params, &theta)| joint_transform(params, theta, self.convention))
            .collect();

        let composition = compose(&per_joint, self.tolerance);
        if !composition.agrees {
            return Err(KinematicsError::CompositionMismatch {
                max_deviation: nalgebra::try_convert(composition.max_deviation)
                    .unwrap_or(f64::NAN),
                tolerance: nalgebra::try_convert(self.tolerance).unwrap_or(f64::NAN),
            });
        }

        Ok(FkSolution {
            per_joint,
            cumulative: composition.cumulative,
            end_effector: composition.end_effector,
        })
    }
}

impl FkEngine<f64> {
    /// Build an engine from a [`RobotConfig`]: parses the convention string,
    /// validates the joint table, and applies the configured tolerance.
    pub fn from_config(config: &RobotConfig) -> Result<Self, ConfigError> {
        let convention: Convention = config.convention.parse()?;
        let table = DhTable::from_config(config)?;
        // from_config validated the table, so new cannot fail here; map the
        // empty-table case anyway to keep the error path total.
        Self::new(table, convention)
            .map(|engine| engine.with_tolerance(config.agreement_tolerance))
            .map_err(|_| ConfigError::EmptyJointTable)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
