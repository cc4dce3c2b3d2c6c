//! Minimal two-dimensional vector value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An immutable 2-D vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector2 {
    /// Creates a vector from two coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Unit vector pointing along `angle` (radians).
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Sum of `self` and `other`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// `self` multiplied by `scalar`.
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction.
    ///
    /// The zero vector normalizes to the zero vector instead of NaN.
    pub fn normalized(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Self::zero();
        }
        Self::new(self.x / mag, self.y / mag)
    }

    /// Exact component-wise equality.
    pub fn equals(self, other: Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// `self` rotated by +90°.
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector2::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_do_not_mutate() {
        let a = Vector2::new(3.0, 4.0);
        let b = a.add(Vector2::new(1.0, 1.0)).scale(2.0);
        assert_eq!(a, Vector2::new(3.0, 4.0));
        assert_eq!(b, Vector2::new(8.0, 10.0));
        assert_eq!(a.magnitude(), 5.0);
        assert_eq!(a.dot(Vector2::new(1.0, 0.0)), 3.0);
    }

    #[test]
    fn zero_vector_normalizes_to_zero() {
        let n = Vector2::zero().normalized();
        assert!(n.equals(Vector2::zero()));
        assert!(!n.x.is_nan());
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = Vector2::new(-7.0, 2.5).normalized();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        let d = Vector2::from_angle(0.7);
        assert!(d.dot(d.perpendicular()).abs() < 1e-12);
        assert_eq!(Vector2::new(1.0, 0.0).perpendicular(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn display_matches_tuple_notation() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
