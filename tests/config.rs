use fullscreen_shader::config::{ViewerConfig, CANVAS_ID};

#[test]
fn defaults_match_page_layout() {
    let config = ViewerConfig::default();
    assert_eq!(config.shader, None);
    assert_eq!(config.canvas_id, CANVAS_ID);
    assert_eq!(config.canvas_id, "glCanvas");
    assert_eq!(config.log_level, log::Level::Info);
    assert_eq!(config.power_preference, "low-power");
}

#[test]
fn shader_param_is_taken_verbatim() {
    let config = ViewerConfig::from_params(Some("waves/ocean.frag".to_string()), None);
    assert_eq!(config.shader.as_deref(), Some("waves/ocean.frag"));
}

#[test]
fn empty_shader_param_means_default() {
    let config = ViewerConfig::from_params(Some(String::new()), None);
    assert_eq!(config.shader, None);
}

#[test]
fn log_param_sets_level() {
    let config = ViewerConfig::from_params(None, Some("debug".to_string()));
    assert_eq!(config.log_level, log::Level::Debug);

    let config = ViewerConfig::from_params(None, Some("WARN".to_string()));
    assert_eq!(config.log_level, log::Level::Warn);
}

#[test]
fn unknown_log_level_keeps_default() {
    let config = ViewerConfig::from_params(None, Some("loud".to_string()));
    assert_eq!(config.log_level, log::Level::Info);
}
