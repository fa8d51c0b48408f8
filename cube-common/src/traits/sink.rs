use crate::constants::N_TRIANGLE_COORDINATES;

/// The sole GPU-facing contract: accepts one triangle as 9 floats
/// (3 vertices x xyz) and issues one draw.
pub trait TriangleSink {
    fn draw_triangle(&mut self, vertices: &[f32; N_TRIANGLE_COORDINATES]);
}
