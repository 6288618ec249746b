//! Animation clock and frame scheduler
//!
//! [`Animation::mount`] registers the visualization against a drawing surface
//! and returns the handle that owns all mutable state: parameters, the point
//! cloud, the view rotation, the viewport and the drag controller. The host
//! drives it by forwarding frame ticks, resizes, drags and parameter updates.
//!
//! [`Animation::unmount`] releases the frame, resize and drag bindings at
//! once. After that every entry point is a no-op, so a host may keep
//! delivering queued events without touching a torn-down surface.

use std::f64::consts::FRAC_PI_4;
use std::time::Instant;
use bitflags::bitflags;
use rand::rngs::StdRng;
use rand::SeedableRng;
use clifford_input::{DragController, DEFAULT_DRAG_SENSITIVITY};
use clifford_math::ViewState;
use crate::params::RotationParameters;
use crate::points::PointCloud;
use crate::projection::{project_frame, Viewport};
use crate::scene::{join_frame, DrawingSurface, SceneChanges};

bitflags! {
    /// Host bindings held by a mounted animation
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Bindings: u8 {
        /// Per-frame callback
        const FRAME = 1 << 0;
        /// Surface size observer
        const RESIZE = 1 << 1;
        /// Pointer drag handlers
        const DRAG = 1 << 2;
        const ALL = Self::FRAME.bits() | Self::RESIZE.bits() | Self::DRAG.bits();
    }
}

/// Elapsed time since the animation started
///
/// Readings never go backwards, even if the host hands in an earlier instant.
#[derive(Clone, Copy, Debug)]
pub struct AnimationClock {
    start: Instant,
    last: f64,
}

impl AnimationClock {
    /// Start the clock now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start the clock at a given instant
    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: 0.0 }
    }

    /// Seconds from start to `now`
    pub fn elapsed_secs(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        self.last = self.last.max(elapsed);
        self.last
    }

    /// Most recent reading
    pub fn last_elapsed(&self) -> f64 {
        self.last
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Options fixed for the lifetime of one mounted animation
#[derive(Clone, Copy, Debug)]
pub struct AnimationOptions {
    /// View rotation at mount time
    pub initial_view: ViewState,
    /// Radians per pixel of drag
    pub drag_sensitivity: f64,
    /// Seed for point generation; entropy when None
    pub seed: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            initial_view: ViewState::new(FRAC_PI_4, FRAC_PI_4),
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            seed: None,
        }
    }
}

impl AnimationOptions {
    /// Builder: set the initial view
    pub fn with_initial_view(mut self, view: ViewState) -> Self {
        self.initial_view = view;
        self
    }

    /// Builder: set the drag sensitivity
    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    /// Builder: seed point generation
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A mounted Clifford torus animation
pub struct Animation<S: DrawingSurface> {
    surface: S,
    bindings: Bindings,
    clock: AnimationClock,
    params: RotationParameters,
    cloud: PointCloud,
    view: ViewState,
    controller: DragController,
    rng: StdRng,
}

impl<S: DrawingSurface> Animation<S> {
    /// Mount onto `surface` and start the clock
    pub fn mount(surface: S, params: RotationParameters, options: AnimationOptions) -> Self {
        Self::mount_at(surface, params, options, Instant::now())
    }

    /// Mount with an explicit clock start
    pub fn mount_at(
        surface: S,
        params: RotationParameters,
        options: AnimationOptions,
        start: Instant,
    ) -> Self {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cloud = PointCloud::generate(params.point_count(), &mut rng);
        let viewport = surface.viewport();

        log::info!(
            "Mounted animation: {} points, viewport {}x{}",
            cloud.len(),
            viewport.width,
            viewport.height
        );

        Self {
            surface,
            bindings: Bindings::ALL,
            clock: AnimationClock::starting_at(start),
            params,
            cloud,
            view: ViewState::new(options.initial_view.pitch, options.initial_view.yaw),
            controller: DragController::new().with_sensitivity(options.drag_sensitivity),
            rng,
        }
    }

    /// Check if any binding is still held
    pub fn is_mounted(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Bindings currently held
    pub fn bindings(&self) -> Bindings {
        self.bindings
    }

    /// Frame callback: render for the time elapsed at `now`
    pub fn frame(&mut self, now: Instant) -> Option<SceneChanges> {
        if !self.bindings.contains(Bindings::FRAME) {
            return None;
        }
        let elapsed = self.clock.elapsed_secs(now);
        self.frame_at(elapsed)
    }

    /// Render the frame for `elapsed_secs` seconds after start
    ///
    /// Returns None once the frame binding has been released.
    pub fn frame_at(&mut self, elapsed_secs: f64) -> Option<SceneChanges> {
        if !self.bindings.contains(Bindings::FRAME) {
            return None;
        }
        let t = if elapsed_secs.is_finite() { elapsed_secs } else { 0.0 };

        let angles = self.params.angles_at(t);
        let frame = project_frame(self.cloud.points(), &angles, &self.view, self.surface.viewport());
        let changes = join_frame(&mut self.surface, &frame);

        log::trace!("Frame t={:.3}s, {} markers, {:?}", t, frame.len(), changes);
        Some(changes)
    }

    /// Size observer: record the new surface size
    ///
    /// Does not render; the next frame picks up the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !self.bindings.contains(Bindings::RESIZE) {
            return;
        }
        log::debug!("Viewport resized to {}x{}", width, height);
        self.surface.set_viewport(Viewport::new(width, height));
    }

    /// Pointer pressed on the surface
    pub fn drag_start(&mut self) {
        if self.bindings.contains(Bindings::DRAG) {
            self.controller.drag_start();
        }
    }

    /// Pointer moved by (dx, dy) pixels
    pub fn drag_move(&mut self, delta_x: f64, delta_y: f64) -> bool {
        if !self.bindings.contains(Bindings::DRAG) {
            return false;
        }
        self.controller.drag_move(delta_x, delta_y, &mut self.view)
    }

    /// Pointer released
    pub fn drag_end(&mut self) {
        if self.bindings.contains(Bindings::DRAG) {
            self.controller.drag_end();
        }
    }

    /// Check if a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    /// Replace the rotation parameters
    ///
    /// The point cloud is regenerated, ids from 0, only when the count changes.
    pub fn set_parameters(&mut self, params: RotationParameters) {
        if !self.is_mounted() {
            return;
        }
        if params.point_count != self.params.point_count {
            self.cloud = PointCloud::generate(params.point_count(), &mut self.rng);
            log::info!("Regenerated {} points", self.cloud.len());
        }
        self.params = params;
    }

    /// Release every binding; idempotent
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.controller.drag_end();
        self.bindings = Bindings::empty();
        log::info!("Unmounted animation");
    }

    pub fn parameters(&self) -> &RotationParameters {
        &self.params
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current surface size, as reported by the surface
    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    pub fn points(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
