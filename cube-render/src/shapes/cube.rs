use cube_common::constants::{CUBE_HALF_EXTENT, N_CUBE_CORNERS, N_QUAD_VERTICES};
use cube_common::Point3D;

use crate::shapes::Quadrangle;

/// Axis-aligned cube centered at the origin with half-extent 0.5.
///
/// Corners are stored front face first (z = +0.5), then back face
/// (z = -0.5), each face ordered bottom-left, bottom-right, top-right,
/// top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cube {
    corners: [Point3D; N_CUBE_CORNERS],
}

impl Cube {
    pub fn new() -> Self {
        let h = CUBE_HALF_EXTENT;
        let corners = [
            Point3D::new([-h, -h, h]),
            Point3D::new([h, -h, h]),
            Point3D::new([h, h, h]),
            Point3D::new([-h, h, h]),
            Point3D::new([-h, -h, -h]),
            Point3D::new([h, -h, -h]),
            Point3D::new([h, h, -h]),
            Point3D::new([-h, h, -h]),
        ];

        Self { corners }
    }

    pub fn from_corners(corners: [Point3D; N_CUBE_CORNERS]) -> Self {
        Self { corners }
    }

    pub fn corners(&self) -> &[Point3D; N_CUBE_CORNERS] {
        &self.corners
    }

    /// The face that gets animated and drawn: the first four corners.
    pub fn front_face(&self) -> Quadrangle {
        let mut face = [Point3D::default(); N_QUAD_VERTICES];
        face.copy_from_slice(&self.corners[..N_QUAD_VERTICES]);
        Quadrangle::new(face)
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
