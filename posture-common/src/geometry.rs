//! Planar joint-angle geometry

use crate::landmarks::Landmark;
use crate::{Error, Result};

/// Anything with 2D image coordinates
pub trait Point2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Point2 for Landmark {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2 for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl<P: Point2 + ?Sized> Point2 for &P {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// Angle in degrees formed at `vertex` by the rays towards `a` and `b`
///
/// Uses the cosine relation `cos = (v1 . v2) / (|v1| |v2|)`, clamped to
/// [-1, 1] before `acos` so near-collinear rays cannot overshoot.
///
/// # Returns
/// Angle in [0, 180] degrees, or `Error::DegenerateGeometry` when either
/// ray has zero length (the vertex coincides with `a` or `b`).
pub fn angle_at<V, A, B>(vertex: V, a: A, b: B) -> Result<f64>
where
    V: Point2,
    A: Point2,
    B: Point2,
{
    let (v1x, v1y) = (a.x() - vertex.x(), a.y() - vertex.y());
    let (v2x, v2y) = (b.x() - vertex.x(), b.y() - vertex.y());

    let norm1 = v1x.hypot(v1y);
    let norm2 = v2x.hypot(v2y);
    if norm1 == 0.0 || norm2 == 0.0 {
        return Err(Error::DegenerateGeometry(format!(
            "zero-length ray from vertex ({}, {})",
            vertex.x(),
            vertex.y()
        )));
    }

    let cos = (v1x * v2x + v1y * v2y) / (norm1 * norm2);
    if !cos.is_finite() {
        return Err(Error::DegenerateGeometry(format!(
            "non-finite cosine at vertex ({}, {})",
            vertex.x(),
            vertex.y()
        )));
    }

    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_right_angle() {
        let angle = angle_at((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)).unwrap();
        assert!((angle - 90.0).abs() < EPS, "got {}", angle);
    }

    #[test]
    fn test_straight_angle() {
        let angle = angle_at((0.0, 0.0), (1.0, 0.0), (-1.0, 0.0)).unwrap();
        assert!((angle - 180.0).abs() < EPS, "got {}", angle);
    }

    #[test]
    fn test_coincident_rays() {
        let angle = angle_at((0.0, 0.0), (1.0, 0.0), (3.0, 0.0)).unwrap();
        assert!(angle.abs() < EPS, "got {}", angle);
    }

    #[test]
    fn test_argument_order_of_rays_is_irrelevant() {
        let a = angle_at((3.0, 4.0), (10.0, 1.0), (-2.0, 7.0)).unwrap();
        let b = angle_at((3.0, 4.0), (-2.0, 7.0), (10.0, 1.0)).unwrap();
        assert!((a - b).abs() < EPS);
    }

    #[test]
    fn test_landmarks_as_points() {
        let hip = Landmark::new("left_hip", 100.0, 300.0, 0.9);
        let shoulder = Landmark::new("left_shoulder", 100.0, 100.0, 0.9);
        let knee = Landmark::new("left_knee", 300.0, 300.0, 0.9);

        let angle = angle_at(&hip, &shoulder, &knee).unwrap();
        assert!((angle - 90.0).abs() < EPS);
    }

    #[test]
    fn test_zero_length_ray_is_degenerate() {
        let result = angle_at((1.0, 1.0), (1.0, 1.0), (2.0, 3.0));
        assert!(matches!(result, Err(Error::DegenerateGeometry(_))));

        let result = angle_at((1.0, 1.0), (2.0, 3.0), (1.0, 1.0));
        assert!(matches!(result, Err(Error::DegenerateGeometry(_))));
    }

    #[test]
    fn test_nan_coordinates_are_degenerate() {
        let result = angle_at((0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0));
        assert!(result.is_err());
    }
}
