use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

fn default_convention() -> String {
    "standard".into()
}
const fn default_agreement_tolerance() -> f64 {
    1e-9
}

// ---------------------------------------------------------------------------
// RobotMeta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RobotMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// ---------------------------------------------------------------------------
// JointRow
// ---------------------------------------------------------------------------

/// One row of the DH parameter table.
///
/// `a` is the link length and `d` the link offset, both in meters. The twist
/// angle is given in degrees in the file (the on-disk unit matches published
/// DH tables); it is converted to radians when the kinematic chain is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointRow {
    /// Optional joint name, for display only.
    #[serde(default)]
    pub name: Option<String>,
    /// Link length (m).
    #[serde(default)]
    pub a: f64,
    /// Link offset (m).
    #[serde(default)]
    pub d: f64,
    /// Twist angle (degrees).
    #[serde(default)]
    pub alpha_deg: f64,
}

// ---------------------------------------------------------------------------
// RobotConfig
// ---------------------------------------------------------------------------

/// Robot description loaded from TOML: metadata, DH convention, and the
/// ordered joint table (base outward).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    #[serde(default)]
    pub meta: RobotMeta,

    /// DH convention: `"standard"` or `"modified"` (Craig).
    #[serde(default = "default_convention")]
    pub convention: String,

    /// Elementwise tolerance for the composition agreement check.
    #[serde(default = "default_agreement_tolerance")]
    pub agreement_tolerance: f64,

    /// Ordered DH rows, joint 1 first.
    #[serde(default)]
    pub joints: Vec<JointRow>,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            meta: RobotMeta::default(),
            convention: default_convention(),
            agreement_tolerance: default_agreement_tolerance(),
            joints: Vec::new(),
        }
    }
}

impl RobotConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.joints.is_empty() {
            return Err(ConfigError::EmptyJointTable);
        }
        for (i, row) in self.joints.iter().enumerate() {
            for (field, value) in [("a", row.a), ("d", row.d), ("alpha_deg", row.alpha_deg)] {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteParameter {
                        joint: i + 1,
                        field,
                        value,
                    });
                }
            }
        }
        if !self.agreement_tolerance.is_finite() || self.agreement_tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.agreement_tolerance));
        }
        Ok(())
    }

    /// Number of joints in the table.
    pub fn dof(&self) -> usize {
        self.joints.len()
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
