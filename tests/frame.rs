use fullscreen_shader::frame::{elapsed_seconds, FrameUniforms, MouseState};
use fullscreen_shader::geometry::{COMPONENTS_PER_VERTEX, FULLSCREEN_TRIANGLE, VERTEX_COUNT};

#[test]
fn triangle_is_fixed_and_covers_clip_space() {
    assert_eq!(
        FULLSCREEN_TRIANGLE,
        [-1.0, -1.0, 0.0, 3.0, -1.0, 0.0, -1.0, 3.0, 0.0]
    );
    assert_eq!(
        FULLSCREEN_TRIANGLE.len(),
        (VERTEX_COUNT * COMPONENTS_PER_VERTEX) as usize
    );

    // The corner (1, 1) lies on the hypotenuse x + y = 2, so every point of
    // the [-1, 1] square is inside or on the triangle.
    for &(x, y) in &[(-1.0f32, -1.0f32), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (0.0, 0.0)] {
        assert!(x >= -1.0 && y >= -1.0 && x + y <= 2.0, "({x}, {y}) outside");
    }
}

#[test]
fn elapsed_is_in_seconds() {
    assert_eq!(elapsed_seconds(1000.0, 1000.0), 0.0);
    assert_eq!(elapsed_seconds(250.0, 2750.0), 2.5);
}

#[test]
fn mouse_y_is_measured_from_bottom() {
    let mouse = MouseState::from_client(120, 30, 480);
    assert_eq!(mouse, MouseState { x: 120.0, y: 450.0 });

    let bottom = MouseState::from_client(0, 480, 480);
    assert_eq!(bottom.y, 0.0);
}

#[test]
fn mouse_starts_at_origin() {
    assert_eq!(MouseState::default(), MouseState { x: 0.0, y: 0.0 });
}

#[test]
fn sample_collects_all_uniforms() {
    let uniforms = FrameUniforms::sample(
        500.0,
        1500.0,
        (1920, 1080),
        MouseState::from_client(10, 80, 1080),
    );
    assert_eq!(uniforms.time, 1.0);
    assert_eq!(uniforms.resolution, [1920.0, 1080.0]);
    assert_eq!(uniforms.mouse, [10.0, 1000.0]);
}
