//! The point capability and the concrete 2-D and 3-D point types.
use serde::{Deserialize, Serialize};

/// A fixed-dimension point usable by [`crate::KdTree`].
pub trait Point {
    /// Number of axes in the space.
    const DIMENSIONS: usize;

    /// Returns the coordinate along `axis`, taken modulo [`Self::DIMENSIONS`].
    fn coordinate(&self, axis: usize) -> f64;

    /// Calls `visit(axis, value)` once per axis in ascending axis order.
    fn for_each_coordinate(&self, visit: impl FnMut(usize, f64));
}

/// Euclidean distance between two points of the same type.
pub fn distance<P: Point>(a: &P, b: &P) -> f64 {
    let mut sum = 0.0;
    a.for_each_coordinate(|axis, va| {
        let diff = va - b.coordinate(axis);
        sum += diff * diff;
    });
    sum.sqrt()
}

/// Orders two points lexicographically by coordinate using
/// [`f64::total_cmp`].
pub(crate) fn cmp_coordinates<P: Point>(a: &P, b: &P) -> std::cmp::Ordering {
    (0..P::DIMENSIONS)
        .map(|axis| a.coordinate(axis).total_cmp(&b.coordinate(axis)))
        .find(|ord| ord.is_ne())
        .unwrap_or(std::cmp::Ordering::Equal)
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Point for Point2 {
    const DIMENSIONS: usize = 2;

    fn coordinate(&self, axis: usize) -> f64 {
        if axis % Self::DIMENSIONS == 0 {
            self.x
        } else {
            self.y
        }
    }

    fn for_each_coordinate(&self, mut visit: impl FnMut(usize, f64)) {
        visit(0, self.x);
        visit(1, self.y);
    }
}

/// A point in 3-space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Point for Point3 {
    const DIMENSIONS: usize = 3;

    fn coordinate(&self, axis: usize) -> f64 {
        match axis % Self::DIMENSIONS {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    fn for_each_coordinate(&self, mut visit: impl FnMut(usize, f64)) {
        visit(0, self.x);
        visit(1, self.y);
        visit(2, self.z);
    }
}
