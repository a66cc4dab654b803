//! GLSL sources and shader path resolution.

use std::fmt;

/// Passes the fullscreen triangle straight through to clip space.
pub const VERTEX_SHADER_SOURCE: &str = r#"#version 300 es
precision lowp float;
layout(location = 0) in vec3 aVertexPosition;
void main() {
    gl_Position = vec4(aVertexPosition, 1.0);
}"#;

/// Used when no shader is requested or neither fetch succeeds.
pub const DEFAULT_FRAGMENT_SHADER_SOURCE: &str = r#"#version 300 es
precision mediump float;
out vec4 FragColor;
void main() {
    FragColor = vec4(0.3451, 0.1725, 0.6706, 1.0);
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Second location tried for a shader: `shaders/<path>` next to the page.
///
/// `page_pathname` is `location.pathname`; everything after its last `/` (the
/// page file name) is dropped. `shader_path` is appended verbatim.
pub fn fallback_path(page_pathname: &str, shader_path: &str) -> String {
    let base = match page_pathname.rfind('/') {
        Some(idx) => &page_pathname[..=idx],
        None => "",
    };
    format!("{base}shaders/{shader_path}")
}
