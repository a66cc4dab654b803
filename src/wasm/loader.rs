//! Fragment shader source resolution: requested path, then `shaders/<path>`
//! next to the page, then the built-in default.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::{Result, ViewerError};
use crate::shader::{fallback_path, DEFAULT_FRAGMENT_SHADER_SOURCE};

/// Never fails: a shader that cannot be fetched from either location is
/// replaced by [`DEFAULT_FRAGMENT_SHADER_SOURCE`].
pub async fn resolve_fragment_source(window: &Window, shader: Option<&str>) -> String {
    let Some(path) = shader else {
        return DEFAULT_FRAGMENT_SHADER_SOURCE.to_string();
    };

    match fetch_text(window, path).await {
        Ok(source) => return source,
        Err(err) => log::info!("first attempt failed: {path} ({err}), trying modified path"),
    }

    let pathname = window.location().pathname().unwrap_or_default();
    let likely_path = fallback_path(&pathname, path);
    log::info!("attempting: {likely_path}");

    match fetch_text(window, &likely_path).await {
        Ok(source) => source,
        Err(err) => {
            log::error!("both attempts failed ({err}), using default shader");
            DEFAULT_FRAGMENT_SHADER_SOURCE.to_string()
        }
    }
}

/// GETs `path` and returns the body as text. Non-2xx responses are errors.
pub async fn fetch_text(window: &Window, path: &str) -> Result<String> {
    let fetch_error = |reason: String| ViewerError::Fetch {
        path: path.to_string(),
        reason,
    };

    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|err| fetch_error(js_reason(&err)))?
        .dyn_into()
        .map_err(|_| fetch_error("not a Response".to_string()))?;
    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response.text().map_err(|err| fetch_error(js_reason(&err)))?;
    JsFuture::from(body)
        .await
        .map_err(|err| fetch_error(js_reason(&err)))?
        .as_string()
        .ok_or_else(|| fetch_error("body is not text".to_string()))
}

fn js_reason(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
