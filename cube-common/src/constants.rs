pub const N_POINT_COORDINATES: usize = 3;
pub const N_TRIANGLE_VERTICES: usize = 3;
pub const N_TRIANGLE_COORDINATES: usize = N_TRIANGLE_VERTICES * N_POINT_COORDINATES;
pub const N_QUAD_VERTICES: usize = 4;
pub const N_CUBE_CORNERS: usize = 8;

pub const CUBE_HALF_EXTENT: f64 = 0.5;
