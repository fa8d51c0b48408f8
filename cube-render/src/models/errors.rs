//! Module errors

/// Represents the different types of errors that can occur while setting up
/// the GL renderer. All of them abort initialization before the first frame.
#[derive(Debug)]
pub enum RenderError {
    /// Error indicating that a shader source failed to compile.
    ShaderCompile(String),

    /// Error indicating that the shader program failed to link.
    ProgramLink(String),

    /// Error indicating that a GPU object could not be created.
    ResourceAlloc(String),
}
