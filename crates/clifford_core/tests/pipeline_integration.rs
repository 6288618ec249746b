//! Integration tests for the animation pipeline
//!
//! These tests drive a mounted animation the way a host does:
//! 1. Frames project the torus onto the marker scene
//! 2. Drags steer the view, with pitch held within ±π/2
//! 3. Parameter updates replace the point set wholesale
//! 4. Unmount stops everything

use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
use clifford_core::{
    project_frame, torus_point, Animation, AnimationOptions, DrawingSurface, MarkerScene,
    PlaneAngles, PointCloud, RotationParameters, SceneChanges, ViewState, Viewport,
    FOCAL_LENGTH,
};
use clifford_math::{rotate4d, stereographic_projection, Vec3, Vec4};

fn mount(params: RotationParameters, view: ViewState) -> Animation<MarkerScene> {
    Animation::mount(
        MarkerScene::new(Viewport::new(800.0, 600.0)),
        params,
        AnimationOptions::default().with_initial_view(view).with_seed(2024),
    )
}

// ==================== End-to-end Projection ====================

/// θ = φ = 0 with everything at rest lands where the formula says
#[test]
fn test_rest_pose_screen_position() {
    let point = torus_point(0, 0.0, 0.0);
    assert_eq!(point.original, Vec4::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2, 0.0));

    let rotated = rotate4d(point.original, &PlaneAngles::ZERO);
    let projected = stereographic_projection(rotated);
    assert_eq!(projected, Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2));

    let viewport = Viewport::new(800.0, 600.0);
    let cloud = PointCloud::from_points(vec![point]);
    let frame = project_frame(cloud.points(), &PlaneAngles::ZERO, &ViewState::default(), viewport);

    let perspective = FOCAL_LENGTH / (FOCAL_LENGTH + FRAC_1_SQRT_2);
    let expected_x = 400.0 + FRAC_1_SQRT_2 * 240.0 * perspective;
    assert!((frame[0].x - expected_x).abs() < 1e-9);
    assert!((frame[0].y - 300.0).abs() < 1e-9);
}

/// Markers on the surface follow the projected frame for the same instant
#[test]
fn test_frame_matches_direct_projection() {
    let params = RotationParameters::default();
    let mut anim = mount(params, ViewState::new(0.2, -0.4));
    anim.frame_at(3.25);

    let expected = project_frame(
        anim.points().points(),
        &params.angles_at(3.25),
        &ViewState::new(0.2, -0.4),
        Viewport::new(800.0, 600.0),
    );
    let ids: Vec<u32> = expected.iter().map(|p| p.id).collect();
    assert_eq!(anim.surface().draw_order_ids(), ids);

    for p in &expected {
        let marker = anim.surface().get(p.id).expect("marker for every point");
        assert_eq!(marker.x, p.x);
        assert_eq!(marker.y, p.y);
    }
}

/// Rotation keeps every point on the unit 3-sphere over many frames
#[test]
fn test_rotation_keeps_points_on_sphere() {
    let params = RotationParameters::default();
    let anim = mount(params, ViewState::default());
    for t in [0.0, 0.5, 10.0, 1234.5] {
        let angles = params.angles_at(t);
        for p in anim.points().points() {
            let r = rotate4d(p.original, &angles);
            assert!((r.length_squared() - 1.0).abs() < 1e-9);
        }
    }
}

/// Far markers come first in the draw order
#[test]
fn test_draw_order_is_back_to_front() {
    let params = RotationParameters::default();
    let mut anim = mount(params, ViewState::new(0.7, 0.7));
    anim.frame_at(7.0);

    let frame = project_frame(
        anim.points().points(),
        &params.angles_at(7.0),
        &ViewState::new(0.7, 0.7),
        Viewport::new(800.0, 600.0),
    );
    for pair in frame.windows(2) {
        assert!(pair[0].z <= pair[1].z);
    }
    // Opacity grows along the draw order
    let opacities: Vec<f64> = anim
        .surface()
        .iter_draw_order()
        .map(|(_, m)| m.fill_opacity)
        .collect();
    for pair in opacities.windows(2) {
        assert!(pair[0] <= pair[1] + 1e-12);
    }
}

// ==================== Interaction ====================

/// Dragging far upward pins pitch at exactly π/2, and far downward at −π/2
#[test]
fn test_drag_pitch_clamps() {
    let mut anim = mount(RotationParameters::still(10), ViewState::default());
    anim.drag_start();
    for _ in 0..100 {
        anim.drag_move(0.0, -50.0);
    }
    assert_eq!(anim.view().pitch, FRAC_PI_2);

    for _ in 0..200 {
        anim.drag_move(0.0, 50.0);
    }
    assert_eq!(anim.view().pitch, -FRAC_PI_2);
    anim.drag_end();
    assert!(!anim.is_dragging());
}

// ==================== Parameter Updates ====================

/// Changing the count from N to M yields exactly ids 0..M on the surface
#[test]
fn test_count_change_replaces_markers() {
    let mut anim = mount(RotationParameters::still(40), ViewState::default());
    anim.frame_at(0.0);
    assert_eq!(anim.surface().len(), 40);

    anim.set_parameters(RotationParameters::still(15));
    let changes = anim.frame_at(0.1).expect("mounted");
    assert!(changes.contains(SceneChanges::REMOVED));

    let mut ids = anim.surface().marker_ids();
    ids.sort_unstable();
    assert_eq!(ids, (0..15).collect::<Vec<u32>>());

    anim.set_parameters(RotationParameters::still(30));
    let changes = anim.frame_at(0.2).expect("mounted");
    assert!(changes.contains(SceneChanges::INSERTED));
    let mut ids = anim.surface().marker_ids();
    ids.sort_unstable();
    assert_eq!(ids, (0..30).collect::<Vec<u32>>());
}

/// Dropping from the maximum count leaves only the new points, in depth order
#[test]
fn test_large_count_drop() {
    let mut anim = mount(RotationParameters::still(10_000), ViewState::default());
    anim.frame_at(0.0);
    assert_eq!(anim.surface().len(), 10_000);

    anim.set_parameters(RotationParameters::still(500));
    anim.frame_at(0.1);

    let expected = project_frame(
        anim.points().points(),
        &PlaneAngles::ZERO,
        &ViewState::default(),
        Viewport::new(800.0, 600.0),
    );
    let ids: Vec<u32> = expected.iter().map(|p| p.id).collect();
    assert_eq!(anim.surface().len(), 500);
    assert_eq!(anim.surface().draw_order_ids(), ids);
}

/// Zero points render an empty scene without error
#[test]
fn test_zero_points() {
    let mut anim = mount(RotationParameters::still(0), ViewState::default());
    assert_eq!(anim.frame_at(1.0), Some(SceneChanges::empty()));
    assert!(anim.surface().is_empty());
}

// ==================== Teardown ====================

/// After unmount nothing reaches the surface
#[test]
fn test_unmount_stops_frames() {
    let mut anim = mount(RotationParameters::default(), ViewState::default());
    anim.frame_at(0.0);
    let before = anim.surface().draw_order_ids();

    anim.unmount();
    assert_eq!(anim.frame_at(5.0), None);
    assert_eq!(anim.surface().draw_order_ids(), before);
}
