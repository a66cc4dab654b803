use web_sys::{
    WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlVertexArrayObject,
};

use crate::error::{Result, ViewerError};
use crate::geometry::{COMPONENTS_PER_VERTEX, FULLSCREEN_TRIANGLE, POSITION_ATTRIBUTE};
use crate::shader::ShaderStage;

/// GPU side of the fullscreen triangle. Both objects live for the page
/// lifetime; the buffer is never written again after upload.
pub struct FullscreenTriangle {
    pub vao: WebGlVertexArrayObject,
    pub vbo: WebGlBuffer,
}

pub fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(ViewerError::ResourceCreation("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }

    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(ViewerError::ShaderCompile { stage, log })
}

/// Compiles both stages and links them. The program must link before it is
/// used for drawing.
pub fn link_program(gl: &GL, vertex_source: &str, fragment_source: &str) -> Result<WebGlProgram> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_source)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_source) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(Some(&vertex));
            return Err(err);
        }
    };

    let program = gl
        .create_program()
        .ok_or(ViewerError::ResourceCreation("program"))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // Flagged for deletion; freed once the program goes away.
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }

    let log = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(ViewerError::ProgramLink(log))
}

/// Uploads [`FULLSCREEN_TRIANGLE`] and records its layout in a VAO. Leaves no
/// VAO bound.
pub fn upload_fullscreen_triangle(gl: &GL, program: &WebGlProgram) -> Result<FullscreenTriangle> {
    let location = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
    if location < 0 {
        return Err(ViewerError::MissingAttribute(POSITION_ATTRIBUTE));
    }
    let location = location as u32;

    let vao = gl
        .create_vertex_array()
        .ok_or(ViewerError::ResourceCreation("vertex array"))?;
    let vbo = gl
        .create_buffer()
        .ok_or(ViewerError::ResourceCreation("vertex buffer"))?;

    gl.bind_vertex_array(Some(&vao));
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vbo));
    let positions = js_sys::Float32Array::from(&FULLSCREEN_TRIANGLE[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::STATIC_DRAW);

    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, COMPONENTS_PER_VERTEX, GL::FLOAT, false, 0, 0);
    gl.bind_vertex_array(None);

    Ok(FullscreenTriangle { vao, vbo })
}
