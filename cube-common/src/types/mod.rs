pub mod point;
pub mod rotation;
pub mod spherical;

pub use point::*;
pub use rotation::*;
pub use spherical::*;
