//! Lazy Cartesian product over inclusive integer ranges.
//!
//! [`Combinations`] behaves like an odometer: the last position advances
//! fastest and the first slowest, so assignments come out in lexicographic
//! order. No range means exactly one (empty) assignment; any empty range
//! means none at all.
use std::ops::RangeInclusive;

/// Iterator over every assignment drawn from a list of inclusive ranges.
#[derive(Debug, Clone)]
pub struct Combinations {
    ranges: Vec<RangeInclusive<i64>>,
    next: Option<Vec<i64>>,
}

impl Combinations {
    /// Creates the product iterator for `ranges`.
    pub fn new(ranges: Vec<RangeInclusive<i64>>) -> Self {
        let next = if ranges.iter().any(RangeInclusive::is_empty) {
            None
        } else {
            Some(ranges.iter().map(|r| *r.start()).collect())
        };
        Self { ranges, next }
    }

    /// Returns the total number of assignments, saturating at `u64::MAX`.
    pub fn count_total(ranges: &[RangeInclusive<i64>]) -> u64 {
        ranges.iter().fold(1u64, |acc, r| {
            let width = if r.is_empty() {
                0
            } else {
                r.end().abs_diff(*r.start()).saturating_add(1)
            };
            acc.saturating_mul(width)
        })
    }
}

impl Iterator for Combinations {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Vec<i64>> {
        let current = self.next.take()?;

        let mut successor = current.clone();
        for position in (0..successor.len()).rev() {
            let range = &self.ranges[position];
            if successor[position] < *range.end() {
                successor[position] += 1;
                self.next = Some(successor);
                return Some(current);
            }
            successor[position] = *range.start();
        }
        // Every position wrapped: `current` was the last assignment.
        Some(current)
    }
}
