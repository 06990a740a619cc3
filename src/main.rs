use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use orbit_pyramid::camera::OrbitCamera;
use orbit_pyramid::cli::Args;
use orbit_pyramid::input::InputController;
use orbit_pyramid::renderer::Renderer;

struct App {
    args: Args,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    input: InputController,
}

impl App {
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes().with_title("orbit-pyramid");
        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let size = window.inner_size();
        let aspect = size.width.max(1) as f64 / size.height.max(1) as f64;
        let camera = OrbitCamera::new(self.args.camera_options(aspect)?);

        let renderer = pollster::block_on(Renderer::new(window.clone(), camera, self.args.mode))?;
        self.input.set_viewport(size.width, size.height);
        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("Failed to start renderer: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let (Some(window), Some(renderer)) = (self.window.as_ref(), self.renderer.as_mut()) else {
            return;
        };

        let consumed = renderer.handle_window_event(window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } if !consumed => {
                self.input.handle_keyboard(key, state, &mut renderer.camera);
            }
            // Releases always reach the camera so a drag can't get stuck over the panel
            WindowEvent::MouseInput {
                button,
                state: ElementState::Released,
                ..
            } => {
                self.input
                    .handle_mouse_button(button, ElementState::Released, &mut renderer.camera);
            }
            WindowEvent::MouseInput { button, state, .. } if !consumed => {
                self.input
                    .handle_mouse_button(button, state, &mut renderer.camera);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input
                    .handle_mouse_move(position.x, position.y, &mut renderer.camera);
            }
            WindowEvent::MouseWheel { delta, .. } if !consumed => {
                self.input.handle_scroll(delta, &mut renderer.camera);
            }
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size);
                self.input
                    .set_viewport(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                match renderer.render(window) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.resize(renderer.size)
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of GPU memory");
                        event_loop.exit();
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
                window.request_redraw();
            }
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Fail before opening a window if the options are unusable
    args.camera_options(1.0)?;
    log::info!(
        "Starting at distance {}, fov {}°, mode {:?}",
        args.distance,
        args.fov,
        args.mode
    );

    // Create window and run
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App {
        args,
        window: None,
        renderer: None,
        input: InputController::new(0, 0),
    };

    event_loop.run_app(&mut app)?;

    Ok(())
}
