//! Affine 2D transforms.
//!
//! [`TransformMatrix`] holds six coefficients laid out as the rows of a
//! 3x3 matrix acting on row vectors:
//!
//! ```text
//! | m11  m12  0 |
//! | m21  m22  0 |
//! | dx   dy   1 |
//! ```
//!
//! A point maps as `x' = x*m11 + y*m21 + dx`, `y' = x*m12 + y*m22 + dy`.
//!
//! Every mutating operation (`multiply`, `translate`, `scale`, `rotate`)
//! **prepends**: the new operation is applied to coordinates before the
//! transform already held. Building "translate, then scale" therefore
//! scales a point first and translates the result.

use std::hash::{Hash, Hasher};

use glam::{DAffine2, DMat2, DVec2};

use crate::errors::TransformError;
use crate::geometry::{PointD, RectD, SizeD};
use crate::log::{debug, warn};
use crate::types::Coord;

/// A mutable affine transform. Defaults to the identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformMatrix {
    affine: DAffine2,
}

impl Default for TransformMatrix {
    fn default() -> Self {
        TransformMatrix::new()
    }
}

impl TransformMatrix {
    pub const IDENTITY: TransformMatrix = TransformMatrix {
        affine: DAffine2::IDENTITY,
    };

    pub const fn new() -> Self {
        TransformMatrix::IDENTITY
    }

    /// Build from `m11, m12, m21, m22, dx, dy`.
    pub fn from_elements(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        TransformMatrix {
            affine: DAffine2::from_cols_array(&[m11, m12, m21, m22, dx, dy]),
        }
    }

    pub fn create_translation(offset_x: f64, offset_y: f64) -> Self {
        TransformMatrix {
            affine: DAffine2::from_translation(DVec2::new(offset_x, offset_y)),
        }
    }

    pub fn create_scale(scale_x: f64, scale_y: f64) -> Self {
        TransformMatrix {
            affine: DAffine2::from_scale(DVec2::new(scale_x, scale_y)),
        }
    }

    /// Clockwise rotation by `angle` degrees about the origin.
    pub fn create_rotation(angle: f64) -> Self {
        let mut matrix = TransformMatrix::new();
        matrix.rotate(angle);
        matrix
    }

    // ---- coefficients ----

    pub fn m11(&self) -> f64 {
        self.affine.matrix2.x_axis.x
    }

    pub fn m12(&self) -> f64 {
        self.affine.matrix2.x_axis.y
    }

    pub fn m21(&self) -> f64 {
        self.affine.matrix2.y_axis.x
    }

    pub fn m22(&self) -> f64 {
        self.affine.matrix2.y_axis.y
    }

    pub fn dx(&self) -> f64 {
        self.affine.translation.x
    }

    pub fn dy(&self) -> f64 {
        self.affine.translation.y
    }

    pub fn set_m11(&mut self, value: f64) {
        self.affine.matrix2.x_axis.x = value;
    }

    pub fn set_m12(&mut self, value: f64) {
        self.affine.matrix2.x_axis.y = value;
    }

    pub fn set_m21(&mut self, value: f64) {
        self.affine.matrix2.y_axis.x = value;
    }

    pub fn set_m22(&mut self, value: f64) {
        self.affine.matrix2.y_axis.y = value;
    }

    pub fn set_dx(&mut self, value: f64) {
        self.affine.translation.x = value;
    }

    pub fn set_dy(&mut self, value: f64) {
        self.affine.translation.y = value;
    }

    /// `[m11, m12, m21, m22, dx, dy]`
    pub fn elements(&self) -> [f64; 6] {
        self.affine.to_cols_array()
    }

    pub fn set_elements(&mut self, elements: [f64; 6]) {
        self.affine = DAffine2::from_cols_array(&elements);
    }

    /// The underlying glam transform (column-vector convention).
    pub fn as_affine(&self) -> &DAffine2 {
        &self.affine
    }

    // ---- queries ----

    /// `m11*m22 - m12*m21`
    pub fn determinant(&self) -> f64 {
        self.m11() * self.m22() - self.m12() * self.m21()
    }

    /// Exact comparison against `(1, 0, 0, 1, 0, 0)`.
    pub fn is_identity(&self) -> bool {
        self.affine == DAffine2::IDENTITY
    }

    pub fn is_mirrored_x(&self) -> bool {
        self.m11() < 0.0
    }

    pub fn is_mirrored_y(&self) -> bool {
        self.m22() < 0.0
    }

    pub fn is_mirrored(&self) -> bool {
        self.is_mirrored_x() || self.is_mirrored_y()
    }

    /// Rotation angle in radians within `[0, 2π)`, or zero when the linear
    /// part is (nearly) unrotated.
    pub fn rotation_angle_radians(&self) -> f64 {
        const EPSILON: f64 = 0.00001;
        if (self.m11() - 1.0).abs() < EPSILON && self.m21().abs() < EPSILON {
            return 0.0;
        }
        let angle = self.m21().atan2(self.m11());
        if angle < 0.0 {
            angle + std::f64::consts::TAU
        } else {
            angle
        }
    }

    pub fn rotation_angle_degrees(&self) -> f64 {
        self.rotation_angle_radians().to_degrees()
    }

    // ---- mutation ----

    /// Back to the identity.
    pub fn reset(&mut self) {
        self.affine = DAffine2::IDENTITY;
    }

    /// Prepend `other`: the result applies `other` first, then `self`.
    pub fn multiply(&mut self, other: &TransformMatrix) {
        self.affine = self.affine * other.affine;
    }

    /// Prepend a translation.
    pub fn translate(&mut self, offset_x: f64, offset_y: f64) {
        self.affine = self.affine * DAffine2::from_translation(DVec2::new(offset_x, offset_y));
    }

    /// Prepend a scale.
    pub fn scale(&mut self, scale_x: f64, scale_y: f64) {
        self.affine.matrix2.x_axis *= scale_x;
        self.affine.matrix2.y_axis *= scale_y;
    }

    /// Prepend a clockwise rotation of `angle` degrees. The angle is
    /// reduced modulo 360 before conversion to radians.
    pub fn rotate(&mut self, angle: f64) {
        self.rotate_radians((angle % 360.0).to_radians());
    }

    /// Prepend a clockwise rotation of `angle` radians.
    pub fn rotate_radians(&mut self, angle: f64) {
        self.affine.matrix2 = self.affine.matrix2 * DMat2::from_angle(angle);
    }

    /// Replace with the inverse transform.
    ///
    /// A matrix with a zero determinant has no inverse; it is left as is.
    pub fn invert(&mut self) -> Result<(), TransformError> {
        let det = self.determinant();
        if det == 0.0 {
            warn!(elements = ?self.elements(), "cannot invert singular matrix");
            return Err(TransformError::Singular);
        }

        let (m11, m12, m21, m22) = (self.m11(), self.m12(), self.m21(), self.m22());
        let (dx, dy) = (self.dx(), self.dy());
        self.set_elements([
            m22 / det,
            -m12 / det,
            -m21 / det,
            m11 / det,
            (m21 * dy - m22 * dx) / det,
            (-m11 * dy + m12 * dx) / det,
        ]);
        debug!(determinant = det, "inverted matrix");
        Ok(())
    }

    /// Inverted copy, see [`TransformMatrix::invert`].
    pub fn inverted(&self) -> Result<TransformMatrix, TransformError> {
        let mut result = *self;
        result.invert()?;
        Ok(result)
    }

    // ---- application ----

    /// Apply the full transform, translation included.
    pub fn transform_point(&self, point: PointD) -> PointD {
        if self.is_identity() {
            return point;
        }
        let p = self.affine.transform_point2(DVec2::new(point.x, point.y));
        PointD::new(p.x, p.y)
    }

    /// Apply only the linear part; sizes are extents, not positions.
    pub fn transform_size(&self, size: SizeD) -> SizeD {
        if self.is_identity() {
            return size;
        }
        let v = self.affine.transform_vector2(DVec2::new(size.width, size.height));
        SizeD::new(v.x, v.y)
    }

    /// Transform the location as a point and the size as an extent.
    pub fn transform_rect(&self, rect: RectD) -> RectD {
        RectD::from_location_size(
            self.transform_point(rect.location()),
            self.transform_size(rect.size()),
        )
    }
}

impl Hash for TransformMatrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for element in self.elements() {
            element.hash_coord(state);
        }
    }
}

impl From<DAffine2> for TransformMatrix {
    fn from(affine: DAffine2) -> Self {
        TransformMatrix { affine }
    }
}
