use std::f32::consts::PI;
use std::ops;

use warpix_image::ImageError;

/// Determinants below this magnitude are treated as singular.
const DET_EPSILON: f32 = 1e-6;

/// Homogeneous coordinates below this magnitude cannot be divided by.
const W_EPSILON: f32 = 1e-6;

/// A 2D homogeneous transform as a row-major 3x3 matrix.
///
/// The identity is the initial state; primitive operations compose by
/// left-multiplication, `M' = X * M`, so primitives take effect in the order
/// they are applied.
///
/// # Example
///
/// ```
/// use warpix_imgproc::warp::Transform;
///
/// let m = Transform::identity().rotate(90.0).translate(10.0, 0.0);
/// let (x, y) = m.transform_point(1.0, 0.0);
///
/// assert!((x - 10.0).abs() < 1e-4);
/// assert!((y - 1.0).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform(pub [f32; 9]);

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let m = &self.0;
        writeln!(f, "[{:10.4} {:10.4} {:10.4}]", m[0], m[1], m[2])?;
        writeln!(f, "[{:10.4} {:10.4} {:10.4}]", m[3], m[4], m[5])?;
        write!(f, "[{:10.4} {:10.4} {:10.4}]", m[6], m[7], m[8])
    }
}

impl ops::Mul for Transform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;
        let mut m = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                m[row * 3 + col] = a[row * 3] * b[col]
                    + a[row * 3 + 1] * b[3 + col]
                    + a[row * 3 + 2] * b[6 + col];
            }
        }
        Self(m)
    }
}

impl Transform {
    /// Create the identity transform.
    pub fn identity() -> Self {
        Self([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0])
    }

    /// Compose a rotation by the given angle in degrees, `M' = R * M`.
    pub fn rotate(self, angle_degrees: f32) -> Self {
        let rad = angle_degrees * PI / 180.0;
        let (sin, cos) = rad.sin_cos();
        let mut r = Self::identity();
        r.0[0] = cos;
        r.0[1] = -sin;
        r.0[3] = sin;
        r.0[4] = cos;
        r * self
    }

    /// Compose a scale on the x/y axes, `M' = S * M`.
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        let mut s = Self::identity();
        s.0[0] = sx;
        s.0[4] = sy;
        s * self
    }

    /// Compose a translation, `M' = T * M`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        let mut t = Self::identity();
        t.0[2] = dx;
        t.0[5] = dy;
        t * self
    }

    /// Compose a shear with the given off-diagonal factors, `M' = H * M`.
    pub fn shear(self, hx: f32, hy: f32) -> Self {
        let mut h = Self::identity();
        h.0[1] = hx;
        h.0[3] = hy;
        h * self
    }

    /// Compose a flip over the x and/or y axis, `M' = F * M`.
    pub fn flip(self, fx: bool, fy: bool) -> Self {
        let mut f = Self::identity();
        if fx {
            f.0[0] = -1.0;
        }
        if fy {
            f.0[4] = -1.0;
        }
        f * self
    }

    /// Compose a perspective skew with the given bottom-row terms, `M' = P * M`.
    pub fn perspective_skew(self, px: f32, py: f32) -> Self {
        let mut p = Self::identity();
        p.0[6] = px;
        p.0[7] = py;
        p * self
    }

    /// The determinant of the matrix.
    #[rustfmt::skip]
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * (m[4] * m[8] - m[5] * m[7]) -
        m[1] * (m[3] * m[8] - m[5] * m[6]) +
        m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    #[rustfmt::skip]
    fn adjugate(&self) -> [f32; 9] {
        let m = &self.0;
        [
            m[4] * m[8] - m[5] * m[7],  // [0, 0]
            m[2] * m[7] - m[1] * m[8],  // [0, 1]
            m[1] * m[5] - m[2] * m[4],  // [0, 2]
            m[5] * m[6] - m[3] * m[8],  // [1, 0]
            m[0] * m[8] - m[2] * m[6],  // [1, 1]
            m[2] * m[3] - m[0] * m[5],  // [1, 2]
            m[3] * m[7] - m[4] * m[6],  // [2, 0]
            m[1] * m[6] - m[0] * m[7],  // [2, 1]
            m[0] * m[4] - m[1] * m[3],  // [2, 2]
        ]
    }

    /// The inverse of the matrix.
    ///
    /// # Errors
    ///
    /// Fails with [`ImageError::CannotComputeDeterminant`] if the matrix is
    /// singular.
    pub fn inverse(&self) -> Result<Self, ImageError> {
        let det = self.determinant();

        if det.abs() < DET_EPSILON {
            return Err(ImageError::CannotComputeDeterminant);
        }

        let adj = self.adjugate();
        let inv_det = 1.0 / det;

        let mut inv_m = [0.0; 9];
        for (dst, src) in inv_m.iter_mut().zip(adj.iter()) {
            *dst = src * inv_det;
        }

        Ok(Self(inv_m))
    }

    /// Map a 2D point through the matrix, dividing by the homogeneous w.
    ///
    /// A w near zero yields non-finite coordinates; resampling bounds checks
    /// reject those. Use [`Transform::transform_point_checked`] where the
    /// division must be validated.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.0;
        let w = m[6] * x + m[7] * y + m[8];
        let xp = (m[0] * x + m[1] * y + m[2]) / w;
        let yp = (m[3] * x + m[4] * y + m[5]) / w;
        (xp, yp)
    }

    /// Map a 2D point through the matrix, failing on a near-zero w.
    ///
    /// # Errors
    ///
    /// Fails with [`ImageError::HomogeneousDivideByZero`] if the homogeneous
    /// coordinate is too close to zero or the result is not finite.
    pub fn transform_point_checked(&self, x: f32, y: f32) -> Result<(f32, f32), ImageError> {
        let m = &self.0;
        let w = m[6] * x + m[7] * y + m[8];
        if w.abs() < W_EPSILON {
            return Err(ImageError::HomogeneousDivideByZero);
        }
        let xp = (m[0] * x + m[1] * y + m[2]) / w;
        let yp = (m[3] * x + m[4] * y + m[5]) / w;
        if !xp.is_finite() || !yp.is_finite() {
            return Err(ImageError::HomogeneousDivideByZero);
        }
        Ok((xp, yp))
    }
}

#[cfg(test)]
mod tests {
    use super::Transform;
    use warpix_image::ImageError;

    #[test]
    fn identity_maps_points_to_themselves() {
        let m = Transform::identity();
        assert_eq!(m.transform_point(3.0, -2.0), (3.0, -2.0));
        assert_eq!(m.determinant(), 1.0);
    }

    #[test]
    fn translate_then_shear() {
        let m = Transform::identity().translate(1.0, -1.0).shear(0.5, 0.0);
        // translation applies first, then the shear mixes y into x
        let (x, y) = m.transform_point(0.0, 0.0);
        assert!((x - 0.5).abs() < 1e-6);
        assert!((y + 1.0).abs() < 1e-6);
    }

    #[test]
    fn composition_order_is_left_multiplication() {
        let rotate_first = Transform::identity().rotate(90.0).translate(10.0, 0.0);
        let translate_first = Transform::identity().translate(10.0, 0.0).rotate(90.0);

        let (x1, y1) = rotate_first.transform_point(1.0, 0.0);
        assert!((x1 - 10.0).abs() < 1e-4);
        assert!((y1 - 1.0).abs() < 1e-4);

        let (x2, y2) = translate_first.transform_point(1.0, 0.0);
        assert!(x2.abs() < 1e-4);
        assert!((y2 - 11.0).abs() < 1e-4);
    }

    #[test]
    fn flip_negates_the_selected_axis() {
        let m = Transform::identity().flip(true, false);
        assert_eq!(m.transform_point(2.0, 3.0), (-2.0, 3.0));

        let m = Transform::identity().flip(false, true);
        assert_eq!(m.transform_point(2.0, 3.0), (2.0, -3.0));
    }

    #[test]
    fn inverse_round_trips_points() -> Result<(), ImageError> {
        let m = Transform::identity()
            .rotate(30.0)
            .scale(2.0, 0.5)
            .translate(5.0, -3.0)
            .shear(0.25, 0.0);
        let m_inv = m.inverse()?;

        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (-3.5, 7.25), (100.0, 100.0)] {
            let (xf, yf) = m.transform_point(x, y);
            let (xb, yb) = m_inv.transform_point(xf, yf);
            assert!((xb - x).abs() < 1e-4, "x: {xb} vs {x}");
            assert!((yb - y).abs() < 1e-4, "y: {yb} vs {y}");
        }

        Ok(())
    }

    #[test]
    fn inverse_of_perspective_skew() -> Result<(), ImageError> {
        let m = Transform::identity().perspective_skew(0.001, 0.002);
        let m_inv = m.inverse()?;

        let (xf, yf) = m.transform_point(50.0, 25.0);
        let (xb, yb) = m_inv.transform_point(xf, yf);
        assert!((xb - 50.0).abs() < 1e-3);
        assert!((yb - 25.0).abs() < 1e-3);

        Ok(())
    }

    #[test]
    fn singular_matrix_fails_to_invert() {
        let m = Transform::identity().scale(0.0, 1.0);
        assert!(matches!(
            m.inverse(),
            Err(ImageError::CannotComputeDeterminant)
        ));
    }

    #[test]
    fn checked_transform_rejects_near_zero_w() {
        // maps the line x = 1 to w = 0
        let m = Transform::identity().perspective_skew(-1.0, 0.0);
        assert!(matches!(
            m.transform_point_checked(1.0, 0.0),
            Err(ImageError::HomogeneousDivideByZero)
        ));
        assert!(m.transform_point_checked(0.5, 0.0).is_ok());
    }
}
