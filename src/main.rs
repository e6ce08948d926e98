//! Orbdust - a noise-displaced sphere rendered as circular point sprites
//!
//! Tens of thousands of points are generated deterministically at startup,
//! expanded into billboard quads, and drawn through a custom sprite shader
//! under a free-fly keyboard camera.

mod camera;
mod cli;
mod density;
mod field;
mod mesh;
mod params;
mod points;
mod rendering;
mod rng;

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use camera::{CameraSystem, KeySnapshot};
use cli::Args;
use mesh::MeshBuffers;
use params::RenderConfig;
use points::PointGenerator;
use rendering::{RenderSystem, Uniforms};

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Generated geometry (built once, before the first frame)
    mesh: MeshBuffers,

    // Simulation state
    camera: CameraSystem,
    keys: KeySnapshot,

    // Configuration
    render_config: RenderConfig,

    // Time tracking
    start_time: Instant,
}

impl App {
    fn new(args: &Args) -> Result<Self, String> {
        let config = args.generation_config();
        let generator = PointGenerator::new(config)?;

        let generation_start = Instant::now();
        let points = generator.generate();
        let mesh = mesh::build(&points);
        println!(
            "Generated {} points ({} vertices, {} indices) in {:.1?}",
            points.len(),
            mesh.vertex_count(),
            mesh.indices.len(),
            generation_start.elapsed()
        );

        let camera = CameraSystem::new(&args.camera_params());

        Ok(Self {
            window: None,
            render_system: None,
            mesh,
            camera,
            keys: KeySnapshot::default(),
            render_config: RenderConfig::default(),
            start_time: Instant::now(),
        })
    }

    fn handle_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowLeft => self.keys.yaw_left = pressed,
            KeyCode::ArrowRight => self.keys.yaw_right = pressed,
            KeyCode::ArrowUp => self.keys.pitch_up = pressed,
            KeyCode::ArrowDown => self.keys.pitch_down = pressed,
            KeyCode::KeyW => self.keys.forward = pressed,
            KeyCode::KeyS => self.keys.back = pressed,
            KeyCode::KeyA => self.keys.strafe_left = pressed,
            KeyCode::KeyD => self.keys.strafe_right = pressed,
            _ => {}
        }
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        // Snapshot of the key map for this frame's camera step
        let keys = self.keys;
        self.camera.update(&keys, time_s);

        let (view, proj, _eye) = self.camera.matrices(&self.render_config);

        let uniforms = Uniforms {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            point_size: self.render_config.point_size,
            use_vertex_color: if self.mesh.colors.is_some() { 1.0 } else { 0.0 },
            time: time_s,
            _padding: 0.0,
        };
        render_system.update_uniforms(&uniforms);

        if let Err(e) = render_system.render() {
            eprintln!("Render error: {:?}", e);
        }
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Orbdust - Sphere Point Sprites")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system =
            pollster::block_on(RenderSystem::new(Arc::clone(&window), &self.mesh)).unwrap();

        println!("\nOrbdust is running!");
        println!("WASD moves, arrow keys look, ESC quits\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key: PhysicalKey::Code(code),
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state == ElementState::Pressed {
                    event_loop.exit();
                } else {
                    self.handle_key(code, state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
            }
            _ => {}
        }
    }
}

fn main() {
    let args = Args::parse();

    println!("Orbdust - noise-displaced sphere point sprites");
    println!("Generating geometry...\n");

    let mut app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
