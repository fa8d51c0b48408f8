pub mod renderer;

pub use renderer::GlRenderer;
