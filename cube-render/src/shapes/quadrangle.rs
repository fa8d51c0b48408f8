use cube_common::constants::{N_QUAD_VERTICES, N_TRIANGLE_COORDINATES, N_TRIANGLE_VERTICES};
use cube_common::Point3D;

/// Four ordered vertices forming a planar-ish face. The GPU primitive only
/// draws triangles, so a quadrangle is always rendered as the two triangles
/// produced by [`Quadrangle::split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrangle([Point3D; N_QUAD_VERTICES]);

impl Quadrangle {
    pub fn new(points: [Point3D; N_QUAD_VERTICES]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point3D; N_QUAD_VERTICES] {
        &self.0
    }

    pub fn into_points(self) -> [Point3D; N_QUAD_VERTICES] {
        self.0
    }

    /// Fixed diagonal split between vertices 1 and 3.
    ///
    /// The order is load-bearing: swapping the diagonal changes the
    /// tessellation and the interpolation artifacts visible on non-planar
    /// quads.
    pub fn split(&self) -> (Triangle, Triangle) {
        let [q0, q1, q2, q3] = self.0;
        (Triangle::new([q0, q1, q3]), Triangle::new([q1, q2, q3]))
    }
}

/// Three vertices, flattened to 9 floats for submission to a sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle([Point3D; N_TRIANGLE_VERTICES]);

impl Triangle {
    pub fn new(points: [Point3D; N_TRIANGLE_VERTICES]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point3D; N_TRIANGLE_VERTICES] {
        &self.0
    }

    pub fn to_vertex_array(&self) -> [f32; N_TRIANGLE_COORDINATES] {
        let mut vertices = [0.0; N_TRIANGLE_COORDINATES];
        for (chunk, point) in vertices.chunks_exact_mut(3).zip(self.0.iter()) {
            chunk[0] = point.x() as f32;
            chunk[1] = point.y() as f32;
            chunk[2] = point.z() as f32;
        }
        vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_face() -> Quadrangle {
        Quadrangle::new([
            Point3D::new([-0.5, -0.5, 0.5]),
            Point3D::new([0.5, -0.5, 0.5]),
            Point3D::new([0.5, 0.5, 0.5]),
            Point3D::new([-0.5, 0.5, 0.5]),
        ])
    }

    #[test]
    fn test_split_diagonal() {
        let (triangle_a, triangle_b) = front_face().split();
        assert_eq!(
            triangle_a.points(),
            &[
                Point3D::new([-0.5, -0.5, 0.5]),
                Point3D::new([0.5, -0.5, 0.5]),
                Point3D::new([-0.5, 0.5, 0.5]),
            ]
        );
        assert_eq!(
            triangle_b.points(),
            &[
                Point3D::new([0.5, -0.5, 0.5]),
                Point3D::new([0.5, 0.5, 0.5]),
                Point3D::new([-0.5, 0.5, 0.5]),
            ]
        );
    }

    #[test]
    fn test_split_shares_diagonal() {
        let (triangle_a, triangle_b) = front_face().split();
        // The shared edge is q1-q3.
        assert_eq!(triangle_a.points()[1], triangle_b.points()[0]);
        assert_eq!(triangle_a.points()[2], triangle_b.points()[2]);
    }

    #[test]
    fn test_to_vertex_array() {
        let triangle = Triangle::new([
            Point3D::new([1.0, 2.0, 3.0]),
            Point3D::new([4.0, 5.0, 6.0]),
            Point3D::new([7.0, 8.0, 9.0]),
        ]);
        assert_eq!(
            triangle.to_vertex_array(),
            [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]
        );
    }
}
