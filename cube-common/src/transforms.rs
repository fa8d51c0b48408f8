//! In-place rotations over slices of points.
//!
//! Two equivalent techniques are kept deliberately distinct: the matrix path
//! ([`rotate`] and the per-axis helpers) and the spherical path
//! ([`rotate_azimuth`]). Away from the origin they agree within
//! floating-point tolerance; at the origin the spherical path falls back to
//! the documented zero-angle convention and leaves the point in place.

use crate::types::{Point3D, RotationMatrix, SphericalPoint};

/// Applies `matrix` to every point in the slice.
pub fn rotate(points: &mut [Point3D], matrix: &RotationMatrix) {
    for point in points.iter_mut() {
        *point = matrix.apply(point);
    }
}

pub fn rotate_x(points: &mut [Point3D], angle: f64) {
    rotate(points, &RotationMatrix::about_x(angle));
}

pub fn rotate_y(points: &mut [Point3D], angle: f64) {
    rotate(points, &RotationMatrix::about_y(angle));
}

pub fn rotate_z(points: &mut [Point3D], angle: f64) {
    rotate(points, &RotationMatrix::about_z(angle));
}

/// Rotates every point about the Z axis by shifting its spherical azimuth.
///
/// The accumulated azimuth is not wrapped back into (-pi, pi]; see
/// [`SphericalPoint::normalized_azimuth`].
pub fn rotate_azimuth(points: &mut [Point3D], angle: f64) {
    for point in points.iter_mut() {
        let mut spherical = SphericalPoint::from_cartesian(point);
        spherical.azimuth += angle;
        *point = spherical.to_cartesian();
    }
}
