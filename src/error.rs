use thiserror::Error;

use crate::shader::ShaderStage;

pub type Result<T> = std::result::Result<T, ViewerError>;

/// Everything that stops the viewer from starting. None of these are shown to
/// the user; they are logged to the console and rendering never begins.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("canvas `{0}` not found")]
    CanvasNotFound(String),
    #[error("{0} unavailable")]
    Unavailable(&'static str),
    #[error("WebGL2 not supported")]
    WebGl2Unsupported,
    #[error("failed to create {0}")]
    ResourceCreation(&'static str),
    #[error("{stage} shader compile error: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },
    #[error("program link error: {0}")]
    ProgramLink(String),
    #[error("attribute `{0}` not found in program")]
    MissingAttribute(&'static str),
    #[error("failed to fetch `{path}`: {reason}")]
    Fetch { path: String, reason: String },
    #[error("javascript error: {0}")]
    Js(String),
}
