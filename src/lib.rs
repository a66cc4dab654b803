//! Fullscreen fragment-shader viewer for the browser.
//!
//! The platform-independent pieces (shader sources, triangle geometry, uniform
//! math, URL configuration) build everywhere; the WebGL2 code in [`wasm`] is
//! only compiled for `wasm32`.

pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod shader;

pub use config::ViewerConfig;
pub use error::{Result, ViewerError};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, UrlSearchParams, Window};

    use crate::config::{ViewerConfig, LOG_PARAM, SHADER_PARAM};
    use crate::error::{Result, ViewerError};
    use crate::shader::VERTEX_SHADER_SOURCE;

    pub mod loader;
    pub mod program;
    pub mod render;

    impl From<JsValue> for ViewerError {
        fn from(value: JsValue) -> Self {
            ViewerError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
        }
    }

    impl From<ViewerError> for JsValue {
        fn from(err: ViewerError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let config = web_sys::window()
            .ok_or(ViewerError::NoWindow)
            .and_then(|window| read_config(&window));
        let config = match config {
            Ok(config) => config,
            Err(err) => {
                web_sys::console::warn_1(&format!("using default config: {err}").into());
                ViewerConfig::default()
            }
        };
        if let Err(err) = console_log::init_with_level(config.log_level) {
            web_sys::console::error_1(&format!("logger init failed: {err}").into());
        }

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = start(config).await {
                log::error!("{err}");
            }
        });
    }

    /// Reads `?shader=` and `?log=` from the page URL.
    pub fn read_config(window: &Window) -> Result<ViewerConfig> {
        let search = window.location().search()?;
        let params = UrlSearchParams::new_with_str(&search)?;
        Ok(ViewerConfig::from_params(
            params.get(SHADER_PARAM),
            params.get(LOG_PARAM),
        ))
    }

    /// Resolves the fragment shader, builds the GL program and starts the
    /// frame loop on the configured canvas.
    pub async fn start(config: ViewerConfig) -> Result<()> {
        let window = web_sys::window().ok_or(ViewerError::NoWindow)?;
        let fragment_source =
            loader::resolve_fragment_source(&window, config.shader.as_deref()).await;

        let document = window.document().ok_or(ViewerError::NoDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| ViewerError::CanvasNotFound(config.canvas_id.clone()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ViewerError::CanvasNotFound(config.canvas_id.clone()))?;

        let gl = render::webgl2_context(&canvas, config.power_preference)?;
        let program = program::link_program(&gl, VERTEX_SHADER_SOURCE, &fragment_source)?;
        let triangle = program::upload_fullscreen_triangle(&gl, &program)?;
        log::info!(
            "rendering {} on #{}",
            config.shader.as_deref().unwrap_or("default shader"),
            config.canvas_id
        );

        render::start(window, canvas, gl, program, triangle)
    }
}
