use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    HtmlCanvasElement, MouseEvent, WebGl2RenderingContext as GL, WebGlProgram,
    WebGlUniformLocation, Window,
};

use super::program::FullscreenTriangle;
use crate::error::{Result, ViewerError};
use crate::frame::{FrameUniforms, MouseState, MOUSE_UNIFORM, RESOLUTION_UNIFORM, TIME_UNIFORM};
use crate::geometry::VERTEX_COUNT;

/// Locations are `None` for uniforms the fragment shader does not use; GL
/// ignores uploads to a `None` location.
pub struct UniformLocations {
    pub time: Option<WebGlUniformLocation>,
    pub resolution: Option<WebGlUniformLocation>,
    pub mouse: Option<WebGlUniformLocation>,
}

impl UniformLocations {
    pub fn lookup(gl: &GL, program: &WebGlProgram) -> Self {
        Self {
            time: gl.get_uniform_location(program, TIME_UNIFORM),
            resolution: gl.get_uniform_location(program, RESOLUTION_UNIFORM),
            mouse: gl.get_uniform_location(program, MOUSE_UNIFORM),
        }
    }
}

pub fn webgl2_context(canvas: &HtmlCanvasElement, power_preference: &str) -> Result<GL> {
    let attributes = js_sys::Object::new();
    js_sys::Reflect::set(
        &attributes,
        &"powerPreference".into(),
        &power_preference.into(),
    )?;

    canvas
        .get_context_with_context_options("webgl2", &attributes)?
        .ok_or(ViewerError::WebGl2Unsupported)?
        .dyn_into::<GL>()
        .map_err(|_| ViewerError::WebGl2Unsupported)
}

/// Matches the canvas backing store and the GL viewport to the window's inner
/// size.
pub fn resize_canvas(window: &Window, canvas: &HtmlCanvasElement, gl: &GL) -> Result<()> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
    let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    gl.viewport(0, 0, width as i32, height as i32);
    Ok(())
}

/// Issues one frame: viewport, clear, uniforms, one draw of the triangle.
pub fn draw_frame(
    gl: &GL,
    program: &WebGlProgram,
    locations: &UniformLocations,
    triangle: &FullscreenTriangle,
    uniforms: &FrameUniforms,
) {
    let [width, height] = uniforms.resolution;
    gl.viewport(0, 0, width as i32, height as i32);
    gl.clear(GL::COLOR_BUFFER_BIT);

    gl.use_program(Some(program));
    gl.uniform1f(locations.time.as_ref(), uniforms.time);
    gl.uniform2f(locations.resolution.as_ref(), width, height);
    gl.uniform2f(locations.mouse.as_ref(), uniforms.mouse[0], uniforms.mouse[1]);

    gl.bind_vertex_array(Some(&triangle.vao));
    gl.draw_arrays(GL::TRIANGLES, 0, VERTEX_COUNT);
    gl.bind_vertex_array(None);
}

/// Installs the input listeners and starts the animation loop. Listeners and
/// the frame closure are leaked; they live as long as the page.
pub fn start(
    window: Window,
    canvas: HtmlCanvasElement,
    gl: GL,
    program: WebGlProgram,
    triangle: FullscreenTriangle,
) -> Result<()> {
    let performance = window
        .performance()
        .ok_or(ViewerError::Unavailable("performance"))?;
    let mouse = Rc::new(Cell::new(MouseState::default()));

    // Track the pointer in bottom-left-origin canvas pixels
    let mouse_closure = {
        let canvas = canvas.clone();
        let mouse = mouse.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            mouse.set(MouseState::from_client(
                event.client_x(),
                event.client_y(),
                canvas.height(),
            ));
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    canvas.add_event_listener_with_callback("mousemove", mouse_closure.as_ref().unchecked_ref())?;
    mouse_closure.forget();

    // Resize canvas to fit window
    let resize_closure = {
        let window = window.clone();
        let canvas = canvas.clone();
        let gl = gl.clone();
        Closure::wrap(Box::new(move || {
            if let Err(err) = resize_canvas(&window, &canvas, &gl) {
                log::warn!("resize failed: {err}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    resize_canvas(&window, &canvas, &gl)?;

    let locations = UniformLocations::lookup(&gl, &program);
    let start_ms = performance.now();

    // Frame loop: the closure reschedules itself through `f`, so the slot is
    // filled after the closure exists.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let uniforms = FrameUniforms::sample(
            start_ms,
            performance.now(),
            (canvas.width(), canvas.height()),
            mouse.get(),
        );
        draw_frame(&gl, &program, &locations, &triangle, &uniforms);

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(next.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        window.request_animation_frame(first.as_ref().unchecked_ref())?;
    }

    Ok(())
}
