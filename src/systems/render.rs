//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - The marker pipeline
//! - Frame rendering from the retained marker scene

use std::sync::Arc;
use winit::window::Window;
use clifford_render::{
    context::{ContextError, RenderContext},
    pipeline::{MarkerPipeline, MarkerUniforms},
    srgb_to_linear, MarkerScene, RenderableMarkers,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: MarkerPipeline,
    markers: RenderableMarkers,
    render_config: RenderingConfig,
    point_scale: f32,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, ContextError> {
        let point_scale = window.scale_factor() as f32;
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let pipeline = MarkerPipeline::new(
            &context.device,
            context.config.format,
            render_config.max_markers as usize,
        );

        log::info!(
            "Render system ready: {:?}, {}x{}",
            context.config.format,
            context.size.width,
            context.size.height
        );

        Ok(Self {
            context,
            pipeline,
            markers: RenderableMarkers::new(),
            render_config,
            point_scale,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
    }

    /// Track a DPI change
    pub fn set_point_scale(&mut self, scale_factor: f64) {
        self.point_scale = scale_factor as f32;
    }

    /// Reconfigure after the surface was lost
    pub fn recover_surface(&mut self) {
        log::warn!("Surface lost, reconfiguring");
        self.context.reconfigure();
    }

    /// Render a single frame
    pub fn render_frame(&mut self, scene: &MarkerScene) -> Result<(), RenderError> {
        let linear = self.context.is_srgb();
        self.markers.rebuild(scene, linear);

        let (width, height) = self.size();
        let uniforms = MarkerUniforms::new(width as f32, height as f32, self.point_scale);
        self.pipeline.update_uniforms(&self.context.queue, &uniforms);
        self.pipeline.upload_instances(
            &self.context.device,
            &self.context.queue,
            &self.markers.instances,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.pipeline
            .render(&mut encoder, &view, clear_color(self.render_config.background_color, linear));

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

/// Background clear color, converted for sRGB surfaces
fn clear_color(bg: [f32; 4], linear: bool) -> wgpu::Color {
    let channel = |c: f32| if linear { srgb_to_linear(c) as f64 } else { c as f64 };
    wgpu::Color {
        r: channel(bg[0]),
        g: channel(bg[1]),
        b: channel(bg[2]),
        a: bg[3] as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
    }

    #[test]
    fn test_black_clear_color() {
        let c = clear_color([0.0, 0.0, 0.0, 1.0], true);
        assert_eq!((c.r, c.g, c.b, c.a), (0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_clear_color_linearized_for_srgb() {
        let srgb = clear_color([0.5, 0.5, 0.5, 1.0], false);
        let linear = clear_color([0.5, 0.5, 0.5, 1.0], true);
        assert_eq!(srgb.r, 0.5);
        assert!(linear.r < srgb.r);
    }
}
