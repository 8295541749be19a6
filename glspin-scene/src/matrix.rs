//! Column-major 4×4 matrix math for the model-view uniform.
//!
//! The layout matches what `uniformMatrix4fv` expects with
//! `transpose = false`, so the upload is a plain 16-float slice.

use bytemuck::{Pod, Zeroable};

/// A 4×4 `f32` matrix stored as 4 columns.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub cols: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Pure rotation about the Z axis by `theta` radians.
    ///
    /// `rotation_z(0.0)` equals [`IDENTITY`](Self::IDENTITY) exactly
    /// (`cos 0 = 1`, `sin 0 = 0`).
    pub fn rotation_z(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4 {
            cols: [
                [cos, sin, 0.0, 0.0],
                [-sin, cos, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// The 16 floats in upload order (column-major). No copy.
    pub fn as_slice(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.cols)
    }

    /// Apply the matrix to a point (w = 1).
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let c = &self.cols;
        [
            c[0][0] * p[0] + c[1][0] * p[1] + c[2][0] * p[2] + c[3][0],
            c[0][1] * p[0] + c[1][1] * p[1] + c[2][1] * p[2] + c[3][1],
            c[0][2] * p[0] + c[1][2] * p[1] + c[2][2] * p[2] + c[3][2],
        ]
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: [f32; 3], b: [f32; 3]) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-5, "expected {b:?}, got {a:?}");
        }
    }

    #[test]
    fn test_rotation_at_zero_is_identity() {
        assert_eq!(Mat4::rotation_z(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_identity_leaves_points_alone() {
        let p = [0.3, -0.7, 0.0];
        assert_eq!(Mat4::IDENTITY.transform_point(p), p);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        assert_close(m.transform_point([1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_close(m.transform_point([0.0, 1.0, 0.0]), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_rotation_formula() {
        // (x, y, 0) must map to (x·cosθ − y·sinθ, x·sinθ + y·cosθ, 0).
        let theta = 0.37_f32;
        let (x, y) = (0.5, -0.25);
        let m = Mat4::rotation_z(theta);
        assert_close(
            m.transform_point([x, y, 0.0]),
            [
                x * theta.cos() - y * theta.sin(),
                x * theta.sin() + y * theta.cos(),
                0.0,
            ],
        );
    }

    #[test]
    fn test_rotation_preserves_z() {
        let m = Mat4::rotation_z(1.2);
        let out = m.transform_point([0.4, 0.6, 0.0]);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn test_as_slice_is_column_major() {
        let theta = 0.8_f32;
        let s = Mat4::rotation_z(theta).as_slice().to_vec();
        assert_eq!(s.len(), 16);
        assert!((s[0] - theta.cos()).abs() < 1e-6); // col 0, row 0
        assert!((s[1] - theta.sin()).abs() < 1e-6); // col 0, row 1
        assert!((s[4] + theta.sin()).abs() < 1e-6); // col 1, row 0
        assert!((s[5] - theta.cos()).abs() < 1e-6); // col 1, row 1
        assert_eq!(s[10], 1.0); // Z untouched
        assert_eq!(s[15], 1.0);
    }
}
