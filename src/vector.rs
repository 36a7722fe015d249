// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimal 3D vector type used for galactic coordinates

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A point (or displacement) in 3D galactic space, in light years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// X coordinate (left/right of the galactic core line)
    pub x: f64,
    /// Y coordinate (above/below the galactic plane)
    pub y: f64,
    /// Z coordinate (towards/away from the core)
    pub z: f64,
}

impl Vector3 {
    /// Create a new vector from its components
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm; always >= 0
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Distance from this point to another
    #[must_use]
    pub fn distance_to(&self, other: Vector3) -> f64 {
        (*self - other).length()
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert!((Vector3::new(3.0, 4.0, 0.0).length() - 5.0).abs() < f64::EPSILON);
        assert_eq!(Vector3::new(0.0, 0.0, 0.0).length(), 0.0);
    }

    #[test]
    fn test_sub_and_distance() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 2.0, 7.0);
        assert_eq!((b - a), Vector3::new(0.0, 0.0, 4.0));
        assert!((a.distance_to(b) - 4.0).abs() < f64::EPSILON);
    }
}
