//! The single oversized triangle that covers clip space.

/// Name of the position input in [`crate::shader::VERTEX_SHADER_SOURCE`].
pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";

pub const COMPONENTS_PER_VERTEX: i32 = 3;
pub const VERTEX_COUNT: i32 = 3;

/// Bottom-left, bottom-right, top-left. The right and top vertices sit at 3.0
/// so the clipped triangle fills the whole [-1, 1] square for any aspect ratio.
pub const FULLSCREEN_TRIANGLE: [f32; 9] = [
    -1.0, -1.0, 0.0, //
    3.0, -1.0, 0.0, //
    -1.0, 3.0, 0.0,
];
