//! Shared geometry for the rotating-cube renderer: Cartesian and spherical
//! point types, axis rotation matrices, and the triangle sink contract that
//! the GPU backend implements.

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod transforms;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::TriangleSink;

// Re-export types
#[doc(inline)]
pub use types::{Point3D, RotationMatrix, SphericalPoint};
