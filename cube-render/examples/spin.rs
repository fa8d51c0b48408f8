use glutin::event::{Event, WindowEvent};
use glutin::event_loop::ControlFlow;

use cube_render::{CubeScene, GlRenderer};

const ANGLE_STEP_PER_FRAME: f64 = 0.01;

fn main() {
    env_logger::init();

    let event_loop = glutin::event_loop::EventLoop::new();
    let window_builder = glutin::window::WindowBuilder::new()
        .with_title("Spinning quadrangle")
        .with_inner_size(glutin::dpi::LogicalSize::new(720.0, 720.0));
    let windowed_context = glutin::ContextBuilder::new()
        .with_vsync(true)
        .build_windowed(window_builder, &event_loop)
        .unwrap();
    let windowed_context = unsafe { windowed_context.make_current().unwrap() };
    let gl = unsafe {
        glow::Context::from_loader_function(|s| windowed_context.get_proc_address(s) as *const _)
    };

    let renderer = GlRenderer::new(&gl).expect("Error creating GL renderer");
    let mut scene = CubeScene::new(1.0);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::MainEventsCleared => windowed_context.window().request_redraw(),
            Event::RedrawRequested(_) => {
                let size = windowed_context.window().inner_size();
                renderer.draw(&gl, size.width as i32, size.height as i32, &scene);
                windowed_context.swap_buffers().unwrap();
                scene.set_rotation(scene.rotation() + ANGLE_STEP_PER_FRAME);
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                renderer.destroy(&gl);
                *control_flow = ControlFlow::Exit;
            }
            _ => (),
        }
    });
}
