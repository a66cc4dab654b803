//! Per-frame uniform values, computed without touching the GL context.

pub const TIME_UNIFORM: &str = "u_time";
pub const RESOLUTION_UNIFORM: &str = "u_resolution";
pub const MOUSE_UNIFORM: &str = "u_mouse";

/// Seconds between two `performance.now()` readings.
pub fn elapsed_seconds(start_ms: f64, now_ms: f64) -> f32 {
    ((now_ms - start_ms) / 1000.0) as f32
}

/// Last pointer position in canvas pixels with the origin at the bottom left,
/// matching `gl_FragCoord`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
}

impl MouseState {
    /// Converts DOM client coordinates (top-left origin).
    pub fn from_client(client_x: i32, client_y: i32, canvas_height: u32) -> Self {
        Self {
            x: client_x as f32,
            y: canvas_height as f32 - client_y as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub mouse: [f32; 2],
}

impl FrameUniforms {
    pub fn sample(start_ms: f64, now_ms: f64, size: (u32, u32), mouse: MouseState) -> Self {
        Self {
            time: elapsed_seconds(start_ms, now_ms),
            resolution: [size.0 as f32, size.1 as f32],
            mouse: [mouse.x, mouse.y],
        }
    }
}
