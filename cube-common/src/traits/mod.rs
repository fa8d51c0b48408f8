pub mod sink;

pub use crate::traits::sink::TriangleSink;
