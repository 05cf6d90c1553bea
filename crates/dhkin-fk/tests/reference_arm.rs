//! End-to-end forward kinematics on the 7-DOF reference arm, plus
//! randomized invariant checks across table sizes and conventions.

use approx::assert_relative_eq;
use nalgebra::Matrix4;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use dhkin_fk::{presets, Convention, DhTable, FkEngine, JointParams};

fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn random_table(rng: &mut ChaCha8Rng, dof: usize) -> DhTable<f64> {
    DhTable::new(
        (0..dof)
            .map(|_| {
                JointParams::from_degrees(
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-0.5..0.5),
                    rng.gen_range(-180.0..180.0),
                )
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Reference arm regression baselines
// ---------------------------------------------------------------------------

#[test]
fn panda7_modified_zero_pose() {
    // The published table follows Craig's convention; at q = 0 the z offsets
    // 0.333 + 0.316 + 0.384 stack to 1.033 and the last link length shifts x
    // by 0.088.
    let engine = FkEngine::new(presets::panda7(), Convention::Modified).unwrap();
    let solution = engine.solve(&[0.0; 7]).unwrap();
    let t = solution.end_effector_translation();
    assert_relative_eq!(t.x, 0.088, epsilon = 1e-12);
    assert_relative_eq!(t.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(t.z, 1.033, epsilon = 1e-12);
}

#[test]
fn panda7_standard_zero_pose() {
    // Same rows read under the standard convention: a different arm, kept as
    // a regression baseline for the standard builder on a nontrivial table.
    let engine = FkEngine::new(presets::panda7(), Convention::Standard).unwrap();
    let solution = engine.solve(&[0.0; 7]).unwrap();
    let t = solution.end_effector_translation();
    assert_relative_eq!(t.x, 0.088, epsilon = 1e-12);
    assert_relative_eq!(t.y, -0.068, epsilon = 1e-12);
    assert_relative_eq!(t.z, 0.333, epsilon = 1e-12);
}

#[test]
fn panda7_zero_pose_rotation_block() {
    // At q = 0 the alternating ±90° twists cancel into a half-turn about x:
    // R = diag(1, -1, -1), identically for both conventions.
    for convention in [Convention::Standard, Convention::Modified] {
        let engine = FkEngine::new(presets::panda7(), convention).unwrap();
        let solution = engine.solve(&[0.0; 7]).unwrap();
        let r = solution.end_effector.fixed_view::<3, 3>(0, 0);
        for i in 0..3 {
            for j in 0..3 {
                let expected = match (i, j) {
                    (0, 0) => 1.0,
                    (1, 1) | (2, 2) => -1.0,
                    _ => 0.0,
                };
                assert_relative_eq!(r[(i, j)], expected, epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn swapping_joints_changes_the_pose() {
    let mut rows = vec![
        (0.0, 0.333, 0.0),
        (0.0, 0.0, -90.0),
        (0.0, 0.316, 90.0),
        (0.0825, 0.0, 90.0),
        (-0.0825, 0.384, -90.0),
        (0.0, 0.0, 90.0),
        (0.088, 0.0, 90.0),
    ];
    let reference = FkEngine::new(DhTable::from_rows_degrees(&rows), Convention::Modified)
        .unwrap()
        .solve(&[0.0; 7])
        .unwrap();

    rows.swap(3, 4);
    let permuted = FkEngine::new(DhTable::from_rows_degrees(&rows), Convention::Modified)
        .unwrap()
        .solve(&[0.0; 7])
        .unwrap();

    let max_diff = (reference.end_effector - permuted.end_effector).abs().max();
    assert!(
        max_diff > 1e-6,
        "permuting the chain left the pose unchanged"
    );
}

// ---------------------------------------------------------------------------
// Randomized invariants
// ---------------------------------------------------------------------------

#[test]
fn agreement_holds_for_random_tables() {
    let mut rng = seeded_rng(42);
    for convention in [Convention::Standard, Convention::Modified] {
        for dof in 1..=10 {
            let table = random_table(&mut rng, dof);
            let q: Vec<f64> = (0..dof)
                .map(|_| rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI))
                .collect();

            let engine = FkEngine::new(table, convention)
                .unwrap()
                .with_tolerance(1e-9);
            let solution = engine.solve(&q).unwrap();

            let last = &solution.cumulative[dof - 1];
            let max_diff = (solution.end_effector - *last).abs().max();
            assert!(max_diff <= 1e-9, "paths diverged by {max_diff}");
        }
    }
}

#[test]
fn bottom_row_invariant_for_random_tables() {
    let mut rng = seeded_rng(7);
    for dof in 1..=6 {
        let table = random_table(&mut rng, dof);
        let q: Vec<f64> = (0..dof).map(|_| rng.gen_range(-3.0..3.0)).collect();
        let engine = FkEngine::new(table, Convention::Standard).unwrap();
        let solution = engine.solve(&q).unwrap();

        for matrix in solution
            .per_joint
            .iter()
            .chain(solution.cumulative.iter())
            .chain(std::iter::once(&solution.end_effector))
        {
            assert_relative_eq!(matrix[(3, 0)], 0.0);
            assert_relative_eq!(matrix[(3, 1)], 0.0);
            assert_relative_eq!(matrix[(3, 2)], 0.0);
            assert_relative_eq!(matrix[(3, 3)], 1.0);
        }
    }
}

#[test]
fn rotation_blocks_stay_orthonormal() {
    let mut rng = seeded_rng(99);
    for convention in [Convention::Standard, Convention::Modified] {
        let table = random_table(&mut rng, 7);
        let q: Vec<f64> = (0..7).map(|_| rng.gen_range(-3.0..3.0)).collect();
        let engine = FkEngine::new(table, convention).unwrap();
        let solution = engine.solve(&q).unwrap();

        for matrix in solution.cumulative.iter() {
            let r = matrix.fixed_view::<3, 3>(0, 0).into_owned();
            let rrt = r * r.transpose();
            let identity = nalgebra::Matrix3::<f64>::identity();
            let max_diff = (rrt - identity).abs().max();
            assert!(max_diff < 1e-12, "rotation drifted by {max_diff}");
        }
    }
}

#[test]
fn solve_is_deterministic() {
    let engine = FkEngine::new(presets::panda7(), Convention::Modified).unwrap();
    let q = [0.5, -0.3, 0.2, 0.1, 0.4, -0.2, 0.3];
    let first = engine.solve(&q).unwrap();
    let second = engine.solve(&q).unwrap();
    assert_eq!(first.end_effector, second.end_effector);
    assert_eq!(first.cumulative, second.cumulative);
}

#[test]
fn identity_joint_contributes_nothing() {
    // Appending an all-zero joint must leave the pose unchanged.
    let mut rng = seeded_rng(3);
    let table = random_table(&mut rng, 4);
    let q: Vec<f64> = (0..4).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let base = FkEngine::new(table.clone(), Convention::Standard)
        .unwrap()
        .solve(&q)
        .unwrap();

    let mut joints = table.joints().to_vec();
    joints.push(JointParams::new(0.0, 0.0, 0.0));
    let mut q_ext = q;
    q_ext.push(0.0);
    let extended = FkEngine::new(DhTable::new(joints), Convention::Standard)
        .unwrap()
        .solve(&q_ext)
        .unwrap();

    let diff: Matrix4<f64> = base.end_effector - extended.end_effector;
    assert!(diff.abs().max() < 1e-12);
}
