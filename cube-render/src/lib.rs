//! # Crate cube-render
//!
//! ## cube-render
//!
//! The `cube-render` crate draws one animated cube face. It holds the eight
//! fixed cube corners, rotates the front face about the Z axis through the
//! spherical-coordinate path in `cube_common`, splits the resulting
//! quadrangle into two triangles, and hands each triangle to a
//! [`TriangleSink`](cube_common::TriangleSink).
//!
//! Features include:
//! - A pure, GL-free per-frame pipeline ([`CubeScene`]) that can be driven
//!   against any sink, including the recording mock in `test_utils`.
//! - An OpenGL adapter ([`GlRenderer`]) built on `glow` that compiles the
//!   fixed shader pair, owns the program and vertex buffer, and submits the
//!   triangles, rebinding GPU state unconditionally every frame.
//!
//! Window and context creation stay with the caller; see
//! `examples/spin.rs` for a `glutin`-driven event loop.

pub mod gl;
pub mod models;
pub mod scene;
pub mod shapes;

pub use gl::GlRenderer;
pub use models::errors::RenderError;
pub use scene::CubeScene;
pub use shapes::{Cube, Quadrangle, Triangle};
