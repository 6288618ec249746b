//! Window management system
//!
//! Handles window creation, the drag cursor, fullscreen toggle, and title updates.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorIcon, Fullscreen, Window},
};
use crate::config::WindowConfig;
use crate::input::{DRAG_HINT, INFO_TEXT};

/// Manages the application window and cursor state
pub struct WindowSystem {
    window: Arc<Window>,
    dragging: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );
        window.set_cursor(CursorIcon::Grab);

        Ok(Self {
            window,
            dragging: false,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Physical pixels per logical pixel
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Switch between the open and closed hand cursor
    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        let icon = if dragging { CursorIcon::Grabbing } else { CursorIcon::Grab };
        self.window.set_cursor(icon);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with the parameter status
    pub fn update_title(&self, status: &str, show_info: bool) {
        self.window.set_title(&format_title(&self.base_title, status, show_info));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title text: base title, parameter status, then the info text or drag hint
pub fn format_title(base: &str, status: &str, show_info: bool) -> String {
    let tail = if show_info { INFO_TEXT } else { DRAG_HINT };
    format!("{} - {} - {}", base, status, tail)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
