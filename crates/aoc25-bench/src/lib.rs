//! Deterministic input generators for benchmarking `aoc25-core`.
//!
//! Every generator takes a seed and returns the same data for the same seed,
//! so benchmark runs are comparable and property tests can shrink on it.
use aoc25_core::{Matrix, Point3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Largest coordinate of a generated junction box.
pub const COORDINATE_RANGE: i32 = 100_000;

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// The size of a worked example.
    Small,
    /// The size of a typical puzzle input.
    Medium,
    /// Ten times a puzzle input.
    Large,
}

impl SizeTier {
    /// Number of junction boxes (or union-find elements) for this tier.
    pub fn points(self) -> usize {
        match self {
            SizeTier::Small => 20,
            SizeTier::Medium => 1_000,
            SizeTier::Large => 10_000,
        }
    }

    /// Random edges per union-find benchmark run.
    pub fn edges(self) -> usize {
        self.points() * 2
    }

    /// Joltage system shape for this tier.
    pub fn machine_shape(self) -> MachineShape {
        match self {
            SizeTier::Small => MachineShape {
                counters: 4,
                buttons: 6,
                max_presses: 5,
            },
            SizeTier::Medium => MachineShape {
                counters: 7,
                buttons: 9,
                max_presses: 10,
            },
            SizeTier::Large => MachineShape {
                counters: 10,
                buttons: 12,
                max_presses: 12,
            },
        }
    }

    /// Short label used in benchmark IDs.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }
}

/// Generates `count` junction boxes with integer coordinates in
/// `0..COORDINATE_RANGE`.
pub fn generate_points(count: usize, seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut coord = || f64::from(rng.gen_range(0..COORDINATE_RANGE));
            Point3::new(coord(), coord(), coord())
        })
        .collect()
}

/// Generates `count` random edges between `n` elements. Self-loops and
/// repeats are allowed.
pub fn generate_edges(n: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut rng = StdRng::seed_from_u64(seed);
    if n == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect()
}

/// Shape of a generated machine joltage system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineShape {
    /// Joltage counters (matrix rows).
    pub counters: usize,
    /// Buttons (matrix variables).
    pub buttons: usize,
    /// Largest number of presses of any one button in the hidden solution.
    pub max_presses: u32,
}

/// Generates a consistent machine joltage system.
///
/// Each button touches a random non-empty set of counters; the targets are
/// the counter values reached by a hidden press vector, so the returned
/// system always has a non-negative integer solution. The hidden press
/// vector is returned alongside the augmented matrix.
pub fn generate_machine(shape: MachineShape, seed: u64) -> (Matrix, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix = Matrix::zeros(shape.counters, shape.buttons + 1);
    if shape.counters == 0 {
        return (matrix, vec![0; shape.buttons]);
    }

    for button in 0..shape.buttons {
        let first = rng.gen_range(0..shape.counters);
        matrix[(first, button)] = 1.0;
        for counter in 0..shape.counters {
            if rng.gen_bool(0.4) {
                matrix[(counter, button)] = 1.0;
            }
        }
    }

    let presses: Vec<i64> = (0..shape.buttons)
        .map(|_| i64::from(rng.gen_range(0..=shape.max_presses)))
        .collect();
    for counter in 0..shape.counters {
        let target: f64 = presses
            .iter()
            .enumerate()
            .map(|(button, &p)| matrix[(counter, button)] * p as f64)
            .sum();
        matrix[(counter, shape.buttons)] = target;
    }
    (matrix, presses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_are_deterministic() {
        assert_eq!(generate_points(50, 7), generate_points(50, 7));
        assert_eq!(generate_edges(10, 30, 7), generate_edges(10, 30, 7));
        let shape = MachineShape {
            counters: 4,
            buttons: 6,
            max_presses: 5,
        };
        assert_eq!(generate_machine(shape, 7), generate_machine(shape, 7));
    }

    #[test]
    fn tiers_grow() {
        assert!(SizeTier::Small.points() < SizeTier::Medium.points());
        assert!(SizeTier::Medium.points() < SizeTier::Large.points());
    }

    #[test]
    fn edges_stay_in_range() {
        assert!(generate_edges(5, 100, 1).iter().all(|&(a, b)| a < 5 && b < 5));
        assert!(generate_edges(0, 100, 1).is_empty());
    }
}
