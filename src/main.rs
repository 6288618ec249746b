//! Clifford Torus Projection
//!
//! Animates a Clifford torus rotating in 4D, stereographically projected to
//! 3D and drawn as depth-cued circles. Drag to rotate the 3D projection.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalPosition,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use clifford::config::AppConfig;
use clifford::input::{InputAction, InputMapper, ParameterPanel};
use clifford::systems::{RenderError, RenderSystem, WindowSystem};
use clifford_core::{Animation, MarkerScene, RotationParameters, Viewport};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Keyboard stand-in for the slider panel
    panel: ParameterPanel,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    animation: Option<Animation<MarkerScene>>,
    /// Last cursor position, for drag deltas
    last_cursor: Option<PhysicalPosition<f64>>,
    /// Finger currently driving the drag
    active_touch: Option<u64>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let panel = ParameterPanel::new(config.parameters)
            .with_defaults(RotationParameters::default());

        Self {
            config,
            panel,
            window: None,
            render: None,
            animation: None,
            last_cursor: None,
            active_touch: None,
        }
    }

    /// Forward the pointer movement since the last position to an active drag
    fn pointer_moved(&mut self, position: PhysicalPosition<f64>) {
        if let (Some(last), Some(animation), Some(window)) =
            (self.last_cursor, &mut self.animation, &self.window)
        {
            if animation.is_dragging() {
                // Drag sensitivity is per logical pixel
                let scale = window.scale_factor();
                let dx = (position.x - last.x) / scale;
                let dy = (position.y - last.y) / scale;
                animation.drag_move(dx, dy);
            }
        }
        self.last_cursor = Some(position);
    }

    /// Release the animation's bindings and stop the event loop
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(animation) = &mut self.animation {
            animation.unmount();
        }
        event_loop.exit();
    }

    /// Deliver the panel's current parameters to the animation
    fn push_parameters(&mut self, params: RotationParameters) {
        if let Some(animation) = &mut self.animation {
            animation.set_parameters(params);
        }
        self.update_title();
    }

    fn update_title(&self) {
        if let Some(window) = &self.window {
            window.update_title(&self.panel.status_line(), self.panel.info_visible());
        }
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::Exit => self.shutdown(event_loop),
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ResetParameters => {
                let params = self.panel.reset();
                self.push_parameters(params);
            }
            InputAction::ToggleInfo => {
                self.panel.toggle_info();
                self.update_title();
            }
            InputAction::SelectPlane(plane) => {
                self.panel.select(plane);
                self.update_title();
            }
            InputAction::AdjustSpeed(steps) => {
                let params = self.panel.adjust_speed(steps);
                self.push_parameters(params);
            }
            InputAction::AdjustPointCount(steps) => {
                let params = self.panel.adjust_point_count(steps);
                self.push_parameters(params);
            }
            InputAction::DragStart => {
                if let Some(animation) = &mut self.animation {
                    animation.drag_start();
                }
                if let Some(window) = &mut self.window {
                    window.set_dragging(true);
                }
            }
            InputAction::DragEnd => {
                if let Some(animation) = &mut self.animation {
                    animation.drag_end();
                }
                if let Some(window) = &mut self.window {
                    window.set_dragging(false);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let result = {
            let (Some(animation), Some(render)) = (&mut self.animation, &mut self.render) else {
                return;
            };

            if animation.frame(Instant::now()).is_none() {
                // Unmounted: nothing more to draw
                return;
            }
            render.render_frame(animation.surface())
        };

        match result {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                if let Some(render) = &mut self.render {
                    render.recover_surface();
                }
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                self.shutdown(event_loop);
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                log::error!("Failed to initialise GPU: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = render.size();
        let scene = MarkerScene::new(Viewport::new(width as f64, height as f64));
        let animation = Animation::mount(
            scene,
            self.panel.parameters(),
            self.config.animation_options(),
        );

        self.window = Some(window);
        self.render = Some(render);
        self.animation = Some(animation);
        self.update_title();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
                if let Some(animation) = &mut self.animation {
                    let (w, h) = (physical_size.width as f64, physical_size.height as f64);
                    animation.resize(w, h);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(render) = &mut self.render {
                    render.set_point_scale(scale_factor);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if let Some(action) = InputMapper::map_keyboard(key, event.state) {
                        self.handle_action(action, event_loop);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(action) = InputMapper::map_mouse_button(button, state) {
                    self.handle_action(action, event_loop);
                }
            }

            WindowEvent::CursorMoved { position, .. } => self.pointer_moved(position),

            WindowEvent::Touch(touch) => {
                // Only the first finger down steers the view
                if self.active_touch.is_some_and(|id| id != touch.id) {
                    return;
                }
                match InputMapper::map_touch_phase(touch.phase) {
                    Some(InputAction::DragStart) => {
                        self.active_touch = Some(touch.id);
                        self.last_cursor = Some(touch.location);
                        self.handle_action(InputAction::DragStart, event_loop);
                    }
                    Some(action) => {
                        self.active_touch = None;
                        self.last_cursor = None;
                        self.handle_action(action, event_loop);
                    }
                    None => {
                        if self.active_touch.is_some() {
                            self.pointer_moved(touch.location);
                        }
                    }
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(animation) = &mut self.animation {
            animation.unmount();
        }
    }
}

fn main() {
    let config = AppConfig::load();

    // RUST_LOG takes precedence over the configured level
    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });
    log::info!("Starting {}", config.window.title);

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
