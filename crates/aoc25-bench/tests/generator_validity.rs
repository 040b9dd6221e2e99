//! Generated inputs are well formed and generated machines are solvable.
#![allow(clippy::expect_used)]

use aoc25_bench::{COORDINATE_RANGE, MachineShape, SizeTier, generate_machine, generate_points};
use aoc25_core::{SolverConfig, solve_min_sum};
use proptest::prelude::*;

#[test]
fn points_stay_in_range() {
    for tier in [SizeTier::Small, SizeTier::Medium] {
        let points = generate_points(tier.points(), 42);
        assert_eq!(points.len(), tier.points());
        let limit = f64::from(COORDINATE_RANGE);
        for p in points {
            for v in [p.x, p.y, p.z] {
                assert!((0.0..limit).contains(&v), "{p:?}");
                assert_eq!(v.fract(), 0.0, "{p:?}");
            }
        }
    }
}

#[test]
fn small_machines_solve() {
    let config = SolverConfig {
        max_candidates: u64::MAX,
        ..SolverConfig::default()
    };
    for seed in [42, 123, 999, 7777, 54321] {
        let (matrix, presses) = generate_machine(SizeTier::Small.machine_shape(), seed);
        let solution = solve_min_sum(&matrix, &config).expect("hidden presses solve it");
        assert!(
            solution.total <= presses.iter().sum(),
            "seed={seed}: {} > {:?}",
            solution.total,
            presses
        );
    }
}

fn arb_shape() -> impl Strategy<Value = MachineShape> {
    (1usize..=6, 1usize..=8, 0u32..=6).prop_map(|(counters, buttons, max_presses)| MachineShape {
        counters,
        buttons,
        max_presses,
    })
}

proptest! {
    #[test]
    fn hidden_presses_satisfy_every_counter(shape in arb_shape(), seed in any::<u64>()) {
        let (matrix, presses) = generate_machine(shape, seed);
        prop_assert_eq!(matrix.rows(), shape.counters);
        prop_assert_eq!(matrix.variables(), shape.buttons);
        prop_assert_eq!(presses.len(), shape.buttons);
        for row in matrix.iter_rows() {
            let (coefficients, target) = row.split_at(shape.buttons);
            prop_assert!(coefficients.iter().all(|&c| c == 0.0 || c == 1.0));
            let reached: f64 = coefficients
                .iter()
                .zip(&presses)
                .map(|(&c, &p)| c * p as f64)
                .sum();
            prop_assert_eq!(reached, target[0]);
        }
        for button in 0..shape.buttons {
            prop_assert!(matrix.iter_rows().any(|row| row[button] == 1.0));
        }
    }
}
