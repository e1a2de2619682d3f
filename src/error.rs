//! Error type shared by the windowing and OpenGL wrappers.

use crate::abs::ShaderStage;

/// Errors raised while setting up the window or creating GPU resources.
#[derive(thiserror::Error, Debug)]
pub enum GlError {
    /// SDL or the OpenGL context could not be initialized.
    #[error("context error: {0}")]
    Context(String),

    /// A buffer, vertex array or program object could not be allocated.
    #[error("failed to create GL object: {0}")]
    Resource(String),

    /// The driver rejected a shader. `log` is the driver's info log.
    #[error("{stage} shader failed to compile:\n{log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    /// The driver failed to link a program.
    #[error("shader program failed to link:\n{0}")]
    ProgramLink(String),
}
