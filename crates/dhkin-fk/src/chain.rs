//! Chain composition: cumulative base-to-joint transforms and the
//! end-effector pose, cross-checked via two independent products.

use nalgebra::{Matrix4, RealField};

/// Result of composing a transform chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition<T> {
    /// `cumulative[i]` is the transform from the base frame to frame i+1,
    /// the left-to-right product of the first i+1 local transforms.
    pub cumulative: Vec<Matrix4<T>>,
    /// Base-to-end-effector transform, computed by the direct chain product.
    pub end_effector: Matrix4<T>,
    /// Whether the direct product and the incremental fold agree elementwise
    /// within the tolerance.
    pub agrees: bool,
    /// Largest elementwise absolute difference between the two paths.
    pub max_deviation: T,
}

/// Compose an ordered chain of local transforms (base outward).
///
/// Two independent composition paths are evaluated: an incremental fold
/// producing every cumulative transform, and a direct left-to-right product
/// of the whole chain. Matrix multiplication is not commutative, so both
/// paths must multiply in joint order; their disagreement beyond `tolerance`
/// signals a composition bug, which the caller must surface rather than
/// ignore.
///
/// # Panics
///
/// Panics if `transforms` is empty. Emptiness is a configuration error that
/// the engine rejects before composition.
pub fn compose<T: RealField + Copy>(transforms: &[Matrix4<T>], tolerance: T) -> Composition<T> {
    assert!(!transforms.is_empty(), "transform chain must not be empty");

    // Path 1: incremental fold, recording every base-to-joint transform.
    let mut cumulative = Vec::with_capacity(transforms.len());
    let mut acc = transforms[0];
    cumulative.push(acc);
    for t in &transforms[1..] {
        acc = acc * *t;
        cumulative.push(acc);
    }

    // Path 2: direct left-to-right chain product.
    let end_effector = transforms
        .iter()
        .fold(Matrix4::identity(), |product, t| product * *t);

    let last = cumulative[cumulative.len() - 1];
    let mut max_deviation = T::zero();
    for (a, b) in end_effector.iter().zip(last.iter()) {
        let diff: T = *a - *b;
        let dev = diff.abs();
        if dev > max_deviation {
            max_deviation = dev;
        }
    }

    Composition {
        cumulative,
        end_effector,
        agrees: max_deviation <= tolerance,
        max_deviation,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
