use nalgebra::Matrix3;

use crate::types::Point3D;

/// A 3x3 rotation matrix for one of the coordinate axes, built fresh from an
/// angle in radians (right-hand rule).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(pub Matrix3<f64>);

impl RotationMatrix {
    pub fn about_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self(Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, cos, -sin, //
            0.0, sin, cos,
        ))
    }

    pub fn about_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self(Matrix3::new(
            cos, 0.0, sin, //
            0.0, 1.0, 0.0, //
            -sin, 0.0, cos,
        ))
    }

    pub fn about_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self(Matrix3::new(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ))
    }

    /// Standard matrix-vector product.
    pub fn apply(&self, point: &Point3D) -> Point3D {
        Point3D::from_vector(self.0 * point.0)
    }

    pub fn inner(&self) -> Matrix3<f64> {
        self.0
    }
}
