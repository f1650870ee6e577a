//! Open Catmull-Rom spline over 3D control points
//!
//! Backs the camera path: one curve for positions, one for look targets.

use glam::Vec3;
use thiserror::Error;

/// Squared distance below which consecutive control points count as coincident
const MIN_SEGMENT_LENGTH_SQ: f32 = 1e-10;

/// Errors from spline construction
#[derive(Debug, Clone, Error)]
pub enum SplineError {
    #[error("a path needs at least 2 control points, got {0}")]
    TooFewPoints(usize),

    #[error("control points {0} and {1} are coincident")]
    CoincidentPoints(usize, usize),
}

/// Open (non-looping) Catmull-Rom curve through a fixed set of control points.
///
/// The normalized parameter `u` maps linearly across the control-point index
/// span: segment spacing is uniform in index, not in Euclidean distance, so
/// traversal speed varies with how far apart the control points sit. Callers
/// must not assume constant linear speed.
#[derive(Debug, Clone)]
pub struct CatmullRom3 {
    points: Vec<Vec3>,
    tension: f32,
}

impl CatmullRom3 {
    /// Standard Catmull-Rom tangent scale
    pub const DEFAULT_TENSION: f32 = 0.5;

    /// Build a curve with the default tension
    pub fn new(points: Vec<Vec3>) -> Result<Self, SplineError> {
        Self::with_tension(points, Self::DEFAULT_TENSION)
    }

    /// Build a curve with an explicit tension.
    ///
    /// Requires at least 2 points; consecutive points must not be coincident,
    /// since zero-length segments degrade the tangent computation.
    pub fn with_tension(points: Vec<Vec3>, tension: f32) -> Result<Self, SplineError> {
        if points.len() < 2 {
            return Err(SplineError::TooFewPoints(points.len()));
        }
        for i in 1..points.len() {
            if points[i].distance_squared(points[i - 1]) < MIN_SEGMENT_LENGTH_SQ {
                return Err(SplineError::CoincidentPoints(i - 1, i));
            }
        }
        Ok(Self { points, tension })
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction requires at least 2 points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The control points this curve interpolates
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Sample the curve at `u`; values outside `[0, 1]` are clamped.
    ///
    /// `u = 0` returns the first control point and `u = 1` the last. Interior
    /// control points are hit exactly at `u = i / (len - 1)`.
    pub fn sample(&self, u: f32) -> Vec3 {
        let n = self.points.len();
        let span = (n - 1) as f32;
        let p = u.clamp(0.0, 1.0) * span;
        let i = (p.floor() as usize).min(n - 2);
        let w = p - i as f32;

        let p1 = self.points[i];
        let p2 = self.points[i + 1];
        // Virtual endpoints mirror the first/last segment
        let p0 = if i > 0 {
            self.points[i - 1]
        } else {
            p1 + (p1 - p2)
        };
        let p3 = if i + 2 < n {
            self.points[i + 2]
        } else {
            p2 + (p2 - p1)
        };

        // Hermite form: segment endpoints plus tension-scaled tangents
        let t1 = (p2 - p0) * self.tension;
        let t2 = (p3 - p1) * self.tension;
        let c2 = (p2 - p1) * 3.0 - t1 * 2.0 - t2;
        let c3 = (p1 - p2) * 2.0 + t1 + t2;

        let w2 = w * w;
        p1 + t1 * w + c2 * w2 + c3 * (w2 * w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zigzag() -> CatmullRom3 {
        CatmullRom3::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 2.0, -1.0),
            Vec3::new(3.0, 1.0, 0.5),
            Vec3::new(4.0, 4.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_endpoints() {
        let curve = zigzag();
        assert!((curve.sample(0.0) - Vec3::ZERO).length() < 1e-6);
        assert!((curve.sample(1.0) - Vec3::new(4.0, 4.0, 2.0)).length() < 1e-6);
    }

    #[test]
    fn test_interpolates_interior_points() {
        let curve = zigzag();
        let n = curve.len();
        for i in 0..n {
            let point = curve.points()[i];
            let u = i as f32 / (n - 1) as f32;
            assert!(
                (curve.sample(u) - point).length() < 1e-5,
                "control point {i} missed"
            );
        }
    }

    #[test]
    fn test_sample_is_finite_across_span() {
        let curve = zigzag();
        for step in 0..=1000 {
            let u = step as f32 / 1000.0;
            assert!(curve.sample(u).is_finite(), "non-finite sample at u={u}");
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let curve = zigzag();
        assert_eq!(curve.sample(-0.5), curve.sample(0.0));
        assert_eq!(curve.sample(1.5), curve.sample(1.0));
    }

    #[test]
    fn test_two_point_path_is_the_segment() {
        let curve = CatmullRom3::new(vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]).unwrap();
        let mid = curve.sample(0.5);
        assert!((mid - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);

        // Monotone in u along the segment axis
        let mut previous = curve.sample(0.0).x;
        for step in 1..=20 {
            let x = curve.sample(step as f32 / 20.0).x;
            assert!(x >= previous);
            previous = x;
        }
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(matches!(
            CatmullRom3::new(vec![Vec3::ZERO]),
            Err(SplineError::TooFewPoints(1))
        ));
        assert!(matches!(
            CatmullRom3::new(vec![Vec3::ZERO, Vec3::ZERO, Vec3::ONE]),
            Err(SplineError::CoincidentPoints(0, 1))
        ));
    }
}
