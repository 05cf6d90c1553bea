//! Per-joint homogeneous transform construction.
//!
//! A local DH transform is always built as the product of four elementary
//! matrices (rotation about z, translation along z, translation along x,
//! rotation about x). The two conventions differ only in the order of that
//! product; neither form is hand-simplified, so the builder is a direct
//! transcription of the convention's definition.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix4, RealField};

use dhkin_core::ConfigError;

use crate::params::JointParams;

// ---------------------------------------------------------------------------
// Convention
// ---------------------------------------------------------------------------

/// Which DH convention the transform builder follows.
///
/// The two conventions are not interchangeable: for the same parameter tuple
/// they produce different local transforms, and a chain must use a single
/// convention throughout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Convention {
    /// Classic (distal) convention: RotZ(θ) · TransZ(d) · TransX(a) · RotX(α).
    #[default]
    Standard,
    /// Craig's modified (proximal) convention:
    /// RotX(α) · TransX(a) · RotZ(θ) · TransZ(d).
    Modified,
}

impl FromStr for Convention {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "modified" => Ok(Self::Modified),
            other => Err(ConfigError::UnknownConvention(other.to_string())),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Modified => write!(f, "modified"),
        }
    }
}

// ---------------------------------------------------------------------------
// Elementary matrices
// ---------------------------------------------------------------------------

/// Rotation about the z axis by `theta`.
pub fn rot_z<T: RealField + Copy>(theta: T) -> Matrix4<T> {
    let (s, c) = theta.sin_cos();
    let o = T::one();
    let z = T::zero();
    Matrix4::new(
        c, -s, z, z, //
        s, c, z, z, //
        z, z, o, z, //
        z, z, z, o,
    )
}

/// Rotation about the x axis by `alpha`.
pub fn rot_x<T: RealField + Copy>(alpha: T) -> Matrix4<T> {
    let (s, c) = alpha.sin_cos();
    let o = T::one();
    let z = T::zero();
    Matrix4::new(
        o, z, z, z, //
        z, c, -s, z, //
        z, s, c, z, //
        z, z, z, o,
    )
}

/// Translation along the z axis by `d`.
pub fn trans_z<T: RealField + Copy>(d: T) -> Matrix4<T> {
    let mut m = Matrix4::identity();
    m[(2, 3)] = d;
    m
}

/// Translation along the x axis by `a`.
pub fn trans_x<T: RealField + Copy>(a: T) -> Matrix4<T> {
    let mut m = Matrix4::identity();
    m[(0, 3)] = a;
    m
}

// ---------------------------------------------------------------------------
// Joint transform
// ---------------------------------------------------------------------------

/// Build the local transform (frame i-1 → frame i) for one joint.
///
/// `theta` is the joint angle in radians; unit consistency with the stored
/// twist angle is the caller's responsibility.
pub fn joint_transform<T: RealField + Copy>(
    params: &JointParams<T>,
    theta: T,
    convention: Convention,
) -> Matrix4<T> {
    match convention {
        Convention::Standard => {
            rot_z(theta) * trans_z(params.d) * trans_x(params.a) * rot_x(params.alpha)
        }
        Convention::Modified => {
            rot_x(params.alpha) * trans_x(params.a) * rot_z(theta) * trans_z(params.d)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
