use cube_common::transforms;
use cube_common::TriangleSink;

use crate::shapes::{Cube, Quadrangle};

/// Per-frame state for the rotating cube face: the fixed geometry and the
/// current rotation angle, owned by the caller instead of living in a
/// global.
#[derive(Debug, Clone, Copy)]
pub struct CubeScene {
    cube: Cube,
    rotation: f64,
}

impl CubeScene {
    pub fn new(rotation: f64) -> Self {
        Self {
            cube: Cube::new(),
            rotation,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Runs one frame: rotate the front face about Z via the spherical
    /// path, split the quadrangle, submit both triangles. Recomputed from
    /// the stored corners every call; nothing carries over between frames.
    pub fn render(&self, sink: &mut dyn TriangleSink) {
        let mut face = self.cube.front_face().into_points();
        transforms::rotate_azimuth(&mut face, self.rotation);
        let (triangle_a, triangle_b) = Quadrangle::new(face).split();
        sink.draw_triangle(&triangle_a.to_vertex_array());
        sink.draw_triangle(&triangle_b.to_vertex_array());
    }
}

impl Default for CubeScene {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::SinkMock;

    #[test]
    fn test_frame_submits_two_triangles() {
        let scene = CubeScene::new(1.0);
        let mut sink = SinkMock::new();
        scene.render(&mut sink);
        assert_eq!(sink.triangles().len(), 2);
    }

    #[test]
    fn test_zero_rotation_draws_front_face_split() {
        let scene = CubeScene::new(0.0);
        let mut sink = SinkMock::new();
        scene.render(&mut sink);
        assert_eq!(
            sink.triangles()[0],
            [-0.5, -0.5, 0.5, 0.5, -0.5, 0.5, -0.5, 0.5, 0.5]
        );
        assert_eq!(
            sink.triangles()[1],
            [0.5, -0.5, 0.5, 0.5, 0.5, 0.5, -0.5, 0.5, 0.5]
        );
    }

    #[test]
    fn test_frames_are_stateless() {
        let scene = CubeScene::new(0.7);
        let mut sink = SinkMock::new();
        scene.render(&mut sink);
        scene.render(&mut sink);
        assert_eq!(sink.triangles()[0], sink.triangles()[2]);
        assert_eq!(sink.triangles()[1], sink.triangles()[3]);
    }
}
