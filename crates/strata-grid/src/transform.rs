//! Affine position-to-index transform for regular seismic grids.

use strata_core::{IndexDouble3, Point3};

use crate::error::GridError;

/// Maps world positions to fractional grid indices and back.
///
/// The lateral part is a 2x2 linear map (possibly rotated or sheared)
/// from `(I, J)` steps to `(x, y)` offsets; the vertical part is a plain
/// scale and shift. The grid node `(i, j, k)` sits at
///
/// ```text
/// origin + i * i_step + j * j_step + (0, 0, k * k_step)
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IndexTransform {
    origin: Point3,
    i_step: (f64, f64),
    j_step: (f64, f64),
    k_step: f64,
    /// Cached inverse of the lateral matrix, row-major.
    inverse: [f64; 4],
}

impl IndexTransform {
    /// Relative tolerance below which the lateral axes count as parallel.
    const DEGENERATE_TOLERANCE: f64 = 1e-12;

    /// Build a transform from an origin, the two lateral step vectors and
    /// the vertical sample interval.
    ///
    /// # Errors
    ///
    /// - [`GridError::NonFiniteGeometry`] if any component is NaN or infinite.
    /// - [`GridError::ZeroSampleInterval`] if `k_step == 0`.
    /// - [`GridError::DegenerateAxes`] if `i_step` and `j_step` are parallel.
    pub fn new(
        origin: Point3,
        i_step: (f64, f64),
        j_step: (f64, f64),
        k_step: f64,
    ) -> Result<Self, GridError> {
        let parts = [i_step.0, i_step.1, j_step.0, j_step.1, k_step];
        if !origin.is_finite() || parts.iter().any(|v| !v.is_finite()) {
            return Err(GridError::NonFiniteGeometry);
        }
        if k_step == 0.0 {
            return Err(GridError::ZeroSampleInterval);
        }
        let (a, b) = i_step;
        let (c, d) = j_step;
        let det = a * d - c * b;
        let scale = (a.abs() + b.abs()) * (c.abs() + d.abs());
        if scale == 0.0 || det.abs() <= Self::DEGENERATE_TOLERANCE * scale {
            return Err(GridError::DegenerateAxes { determinant: det });
        }
        Ok(Self {
            origin,
            i_step,
            j_step,
            k_step,
            inverse: [d / det, -c / det, -b / det, a / det],
        })
    }

    /// Identity transform: index equals position.
    pub fn unit() -> Self {
        Self {
            origin: Point3::default(),
            i_step: (1.0, 0.0),
            j_step: (0.0, 1.0),
            k_step: 1.0,
            inverse: [1.0, 0.0, 0.0, 1.0],
        }
    }

    /// Fractional index of a world position.
    pub fn index_at(&self, p: Point3) -> IndexDouble3 {
        let dx = p.x - self.origin.x;
        let dy = p.y - self.origin.y;
        let [m00, m01, m10, m11] = self.inverse;
        IndexDouble3 {
            i: m00 * dx + m01 * dy,
            j: m10 * dx + m11 * dy,
            k: (p.z - self.origin.z) / self.k_step,
        }
    }

    /// World position of a (possibly fractional) index.
    pub fn position_at(&self, idx: IndexDouble3) -> Point3 {
        Point3 {
            x: self.origin.x + idx.i * self.i_step.0 + idx.j * self.j_step.0,
            y: self.origin.y + idx.i * self.i_step.1 + idx.j * self.j_step.1,
            z: self.origin.z + idx.k * self.k_step,
        }
    }

    /// Grid origin (position of index `[0, 0, 0]`).
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Vertical sample interval.
    pub fn k_step(&self) -> f64 {
        self.k_step
    }
}

impl Default for IndexTransform {
    fn default() -> Self {
        Self::unit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unit_transform_is_identity() {
        let t = IndexTransform::unit();
        let idx = t.index_at(Point3::new(3.5, 7.0, 12.25));
        assert_eq!(idx, IndexDouble3::new(3.5, 7.0, 12.25));
    }

    #[test]
    fn scaled_and_shifted_grid() {
        let t = IndexTransform::new(
            Point3::new(1000.0, 2000.0, 500.0),
            (25.0, 0.0),
            (0.0, 12.5),
            4.0,
        )
        .unwrap();
        let idx = t.index_at(Point3::new(1100.0, 2025.0, 540.0));
        assert!((idx.i - 4.0).abs() < 1e-12);
        assert!((idx.j - 2.0).abs() < 1e-12);
        assert!((idx.k - 10.0).abs() < 1e-12);
    }

    #[test]
    fn rotated_grid_inverts() {
        let s = std::f64::consts::FRAC_1_SQRT_2 * 10.0;
        let t = IndexTransform::new(Point3::default(), (s, s), (-s, s), 2.0).unwrap();
        let p = t.position_at(IndexDouble3::new(3.0, 4.0, 5.0));
        let back = t.index_at(p);
        assert!((back.i - 3.0).abs() < 1e-9);
        assert!((back.j - 4.0).abs() < 1e-9);
        assert!((back.k - 5.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_parallel_axes() {
        let err = IndexTransform::new(Point3::default(), (1.0, 1.0), (2.0, 2.0), 1.0).unwrap_err();
        assert!(matches!(err, GridError::DegenerateAxes { .. }));
    }

    #[test]
    fn rejects_zero_interval_and_non_finite() {
        assert_eq!(
            IndexTransform::new(Point3::default(), (1.0, 0.0), (0.0, 1.0), 0.0),
            Err(GridError::ZeroSampleInterval)
        );
        assert_eq!(
            IndexTransform::new(Point3::new(f64::NAN, 0.0, 0.0), (1.0, 0.0), (0.0, 1.0), 1.0),
            Err(GridError::NonFiniteGeometry)
        );
    }

    proptest! {
        #[test]
        fn position_index_round_trip(
            i in -50.0f64..50.0,
            j in -50.0f64..50.0,
            k in -50.0f64..50.0,
            angle in 0.0f64..std::f64::consts::TAU,
        ) {
            let (sin, cos) = angle.sin_cos();
            let t = IndexTransform::new(
                Point3::new(500.0, -200.0, 10.0),
                (25.0 * cos, 25.0 * sin),
                (-12.5 * sin, 12.5 * cos),
                -4.0,
            ).unwrap();
            let back = t.index_at(t.position_at(IndexDouble3::new(i, j, k)));
            prop_assert!((back.i - i).abs() < 1e-6);
            prop_assert!((back.j - j).abs() < 1e-6);
            prop_assert!((back.k - k).abs() < 1e-6);
        }
    }
}
