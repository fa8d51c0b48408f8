use glow::{Context, HasContext, NativeBuffer, NativeProgram, NativeShader};
use log::error;

use cube_common::constants::{N_POINT_COORDINATES, N_TRIANGLE_COORDINATES, N_TRIANGLE_VERTICES};
use cube_common::TriangleSink;

use crate::models::errors::RenderError;
use crate::scene::CubeScene;

/// Pass-through vertex shader: position comes in, position goes out.
const VERTEX_SHADER_SRC: &str = "attribute vec4 vPosition;
void main()
{
    gl_Position = vPosition;
}
";

/// Colors each fragment by its screen-space position.
const FRAGMENT_SHADER_SRC: &str = "precision mediump float;
void main()
{
    gl_FragColor = vec4(gl_FragCoord.x / 1000.0, gl_FragCoord.y / 1000.0, 1.0, 1.0);
}
";

const POSITION_ATTRIBUTE: u32 = 0;

/// Owns the GPU program and vertex buffer for the cube demo.
///
/// Creation compiles and links the fixed shader pair; any failure there is
/// logged with the driver diagnostic and aborts initialization. Each
/// [`draw`](GlRenderer::draw) call rebinds the buffer and re-enables the
/// position attribute unconditionally, so frames never depend on leftover
/// GL state.
pub struct GlRenderer {
    program: NativeProgram,
    vertex_buffer: NativeBuffer,
}

impl GlRenderer {
    pub fn new(gl: &Context) -> Result<Self, RenderError> {
        let vertex_shader = compile_shader(gl, glow::VERTEX_SHADER, VERTEX_SHADER_SRC)?;
        let fragment_shader = compile_shader(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER_SRC)?;
        let program = link_program(gl, vertex_shader, fragment_shader)?;
        let vertex_buffer = unsafe { gl.create_buffer() }.map_err(RenderError::ResourceAlloc)?;
        unsafe {
            gl.clear_color(0.0, 0.0, 0.0, 0.0);
        }
        Ok(Self {
            program,
            vertex_buffer,
        })
    }

    /// Draw callback body: runs one frame of `scene` into the window of the
    /// given pixel size.
    pub fn draw(&self, gl: &Context, width: i32, height: i32, scene: &CubeScene) {
        unsafe {
            gl.viewport(0, 0, width, height);
            gl.clear(glow::COLOR_BUFFER_BIT);
            gl.use_program(Some(self.program));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
            gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);
        }
        let mut sink = GlTriangleSink { gl };
        scene.render(&mut sink);
    }

    /// Releases the program and buffer. The renderer must not be used
    /// afterwards.
    pub fn destroy(&self, gl: &Context) {
        unsafe {
            gl.delete_buffer(self.vertex_buffer);
            gl.delete_program(self.program);
        }
    }
}

/// Uploads 9 floats to the bound buffer and issues one 3-vertex draw.
struct GlTriangleSink<'a> {
    gl: &'a Context,
}

impl TriangleSink for GlTriangleSink<'_> {
    fn draw_triangle(&mut self, vertices: &[f32; N_TRIANGLE_COORDINATES]) {
        unsafe {
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );
            self.gl.vertex_attrib_pointer_f32(
                POSITION_ATTRIBUTE,
                N_POINT_COORDINATES as i32,
                glow::FLOAT,
                false,
                0,
                0,
            );
            self.gl
                .draw_arrays(glow::TRIANGLES, 0, N_TRIANGLE_VERTICES as i32);
        }
    }
}

fn compile_shader(
    gl: &Context,
    shader_type: u32,
    source: &str,
) -> Result<NativeShader, RenderError> {
    let shader = unsafe { gl.create_shader(shader_type) }.map_err(RenderError::ResourceAlloc)?;
    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            let info_log = gl.get_shader_info_log(shader);
            error!("Error compiling shader:\n{}", info_log);
            gl.delete_shader(shader);
            return Err(RenderError::ShaderCompile(info_log));
        }
    }
    Ok(shader)
}

fn link_program(
    gl: &Context,
    vertex_shader: NativeShader,
    fragment_shader: NativeShader,
) -> Result<NativeProgram, RenderError> {
    let program = unsafe { gl.create_program() }.map_err(RenderError::ResourceAlloc)?;
    unsafe {
        gl.attach_shader(program, vertex_shader);
        gl.attach_shader(program, fragment_shader);
        gl.bind_attrib_location(program, POSITION_ATTRIBUTE, "vPosition");
        gl.link_program(program);
        // The program holds the binaries from here on.
        gl.delete_shader(vertex_shader);
        gl.delete_shader(fragment_shader);
        if !gl.get_program_link_status(program) {
            let info_log = gl.get_program_info_log(program);
            error!("Error linking program:\n{}", info_log);
            gl.delete_program(program);
            return Err(RenderError::ProgramLink(info_log));
        }
    }
    Ok(program)
}
