// dhkin-core: Configuration and error types shared across the dhkin workspace.

pub mod config;
pub mod error;

pub use config::{JointRow, RobotConfig, RobotMeta};
pub use error::{ConfigError, DhkinError, KinematicsError};
