//! Affine transformations in homogeneous coordinates
//!
//! A [`Transformation`] owns a 4x4 [`Matrix`]. The constructors set cells of an
//! otherwise-identity matrix:
//!
//! - **translation**: column 3, rows 0 to 2
//! - **scale**: diagonal entries 0 to 2
//! - **rotation**: the 2x2 block in rows/cols 0 and 1 (rotation in the XY plane)
//!
//! Composition is the matrix product in call order: `a.compose(&b)` applies `b`
//! to a point first, then `a`.

use std::ops::Mul;

use crate::matrix::Matrix;

/// Side length of every transformation matrix
pub const DIMENSION: usize = 4;

/// A 4x4 affine transformation
#[derive(Clone, Debug, PartialEq)]
pub struct Transformation {
    matrix: Matrix,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix::identity(DIMENSION),
        }
    }

    /// Shift by `(x, y, z)`
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let mut matrix = Matrix::identity(DIMENSION);
        matrix[(0, 3)] = x;
        matrix[(1, 3)] = y;
        matrix[(2, 3)] = z;
        Self { matrix }
    }

    /// Per-axis scale factors; pass `1.0` to leave an axis untouched
    pub fn scale(sx: f32, sy: f32, sz: f32) -> Self {
        let mut matrix = Matrix::identity(DIMENSION);
        matrix[(0, 0)] = sx;
        matrix[(1, 1)] = sy;
        matrix[(2, 2)] = sz;
        Self { matrix }
    }

    /// Rotation by `angle` radians about the origin in the XY plane
    pub fn rotation(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut matrix = Matrix::identity(DIMENSION);
        matrix[(0, 0)] = cos;
        matrix[(0, 1)] = -sin;
        matrix[(1, 0)] = sin;
        matrix[(1, 1)] = cos;
        Self { matrix }
    }

    /// Rotation by `angle` radians about the pivot `(px, py)`
    ///
    /// Built as `T(pivot) * R(angle) * T(-pivot)`: move the pivot to the origin,
    /// rotate, move it back.
    pub fn rotation_about(px: f32, py: f32, angle: f32) -> Self {
        Self::translation(px, py, 0.0)
            .compose(&Self::rotation(angle))
            .compose(&Self::translation(-px, -py, 0.0))
    }

    /// `self * other`
    pub fn compose(&self, other: &Transformation) -> Transformation {
        // Both operands are always 4x4
        Transformation {
            matrix: &self.matrix * &other.matrix,
        }
    }

    /// Borrow the underlying matrix
    pub fn export_matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// The 16 cells in row-major order
    pub fn export_buffer(&self) -> Vec<f32> {
        self.matrix.serialize()
    }

    /// The 16 cells as a fixed-size array, row-major
    pub fn to_array(&self) -> [f32; DIMENSION * DIMENSION] {
        let mut cells = [0.0; DIMENSION * DIMENSION];
        cells.copy_from_slice(self.matrix.as_slice());
        cells
    }

    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Apply to the point `vec4(x, y, 0, 1)` and return the transformed `(x, y)`
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.matrix;
        (
            m[(0, 0)] * x + m[(0, 1)] * y + m[(0, 3)],
            m[(1, 0)] * x + m[(1, 1)] * y + m[(1, 3)],
        )
    }

    /// True when every cell is within `epsilon` of the identity
    pub fn is_identity_within(&self, epsilon: f32) -> bool {
        self.matrix
            .as_slice()
            .iter()
            .zip(Matrix::identity(DIMENSION).as_slice())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Mul for &Transformation {
    type Output = Transformation;

    fn mul(self, rhs: &Transformation) -> Transformation {
        self.compose(rhs)
    }
}

impl Mul for Transformation {
    type Output = Transformation;

    fn mul(self, rhs: Transformation) -> Transformation {
        self.compose(&rhs)
    }
}
