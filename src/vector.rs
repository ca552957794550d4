/*
 * Vector Module
 *
 * A small f64 2D vector used for both positions and velocities.
 * Every operation returns a new value; nothing is mutated through a
 * shared reference.
 *
 * Division by a scalar follows IEEE semantics (dividing by zero yields
 * infinities or NaN). Callers in the simulation core never divide by a
 * value that can be zero; use `normalize` when a direction is needed.
 */

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{FlockError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    // Computes self - other
    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }

    // Euclidean distance between two points
    pub fn distance(self, other: Vector2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    // Length is the distance from the origin
    pub fn length(self) -> f64 {
        self.distance(Vector2::ZERO)
    }

    pub fn normalize(self) -> Result<Vector2> {
        let len = self.length();
        if len == 0.0 {
            return Err(FlockError::DegenerateVector);
        }
        Ok(self / len)
    }

    /// Angle of the vector in radians, `atan2(y, x)`.
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::add(self, rhs)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        *self = Vector2::add(*self, rhs);
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        self.subtract(rhs)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = self.subtract(rhs);
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        self.scale(k)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, k: f64) -> Vector2 {
        Vector2::new(self.x / k, self.y / k)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, Vector2::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_is_left_minus_right() {
        let a = Vector2::new(3.0, 7.0);
        let b = Vector2::new(1.0, 10.0);
        assert_eq!(a.subtract(b), Vector2::new(2.0, -3.0));
        assert_eq!(a - b, Vector2::new(2.0, -3.0));
    }

    #[test]
    fn operations_do_not_mutate_operands() {
        let a = Vector2::new(1.0, 2.0);
        let b = a;
        let _ = a.add(Vector2::new(5.0, 5.0));
        let _ = a.scale(10.0);
        assert_eq!(a, b);
    }

    #[test]
    fn distance_and_length() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vector2::new(1.0, 1.0).distance(Vector2::new(4.0, 5.0)), 5.0);
        assert_eq!(Vector2::ZERO.length(), 0.0);
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let v = Vector2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(!v.is_finite());
    }

    #[test]
    fn normalize_rejects_zero_vector() {
        assert!(matches!(
            Vector2::ZERO.normalize(),
            Err(FlockError::DegenerateVector)
        ));
        let unit = Vector2::new(0.0, -2.0).normalize().unwrap();
        assert_eq!(unit, Vector2::new(0.0, -1.0));
    }

    #[test]
    fn heading_uses_atan2() {
        assert_eq!(Vector2::new(1.0, 0.0).heading(), 0.0);
        assert!((Vector2::new(0.0, 1.0).heading() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn sum_of_vectors() {
        let total: Vector2 = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Vector2::new(4.0, 6.0));
    }
}
