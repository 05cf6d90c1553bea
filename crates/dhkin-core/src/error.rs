use thiserror::Error;

/// Top-level error type for the dhkin workspace.
#[derive(Debug, Error)]
pub enum DhkinError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Joint table is empty: at least one joint is required")]
    EmptyJointTable,

    #[error("Non-finite value for {field} at joint {joint}: {value}")]
    NonFiniteParameter {
        joint: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid agreement tolerance: {0} (must be >= 0 and finite)")]
    InvalidTolerance(f64),

    #[error("Unknown DH convention: {0:?} (expected \"standard\" or \"modified\")")]
    UnknownConvention(String),

    #[error("Unknown preset: {0:?}")]
    UnknownPreset(String),
}

/// Kinematics runtime errors.
///
/// `CompositionMismatch` is a correctness assertion, not an expected runtime
/// condition: it means the incremental and direct composition paths produced
/// different end-effector matrices.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KinematicsError {
    #[error("Parameter table is empty")]
    EmptyTable,

    #[error("Joint variable count mismatch: expected {expected}, got {got}")]
    VariableCountMismatch { expected: usize, got: usize },

    #[error("Composition paths disagree: max deviation {max_deviation:e} exceeds tolerance {tolerance:e}")]
    CompositionMismatch { max_deviation: f64, tolerance: f64 },
}
