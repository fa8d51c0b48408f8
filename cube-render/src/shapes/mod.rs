pub mod cube;
pub mod quadrangle;

pub use cube::Cube;
pub use quadrangle::{Quadrangle, Triangle};
