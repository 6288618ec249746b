//! Retained marker scene keyed by point id
//!
//! Frames are joined into the drawing surface by id: markers whose id is in
//! the frame are updated in place, new ids are inserted, and ids missing from
//! the frame are removed. The surface then draws markers in the frame's order.

use std::collections::{HashMap, HashSet};
use bitflags::bitflags;
use slotmap::{new_key_type, SlotMap};
use crate::color::Color;
use crate::projection::{ProjectedPoint, Viewport};

new_key_type! {
    /// Key for a marker stored in a [`MarkerScene`]
    pub struct MarkerKey;
}

bitflags! {
    /// What a join changed on the surface
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SceneChanges: u8 {
        /// At least one marker was created
        const INSERTED = 1 << 0;
        /// At least one existing marker was updated
        const UPDATED = 1 << 1;
        /// At least one marker was removed
        const REMOVED = 1 << 2;
    }
}

/// A filled circle on the drawing surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    /// Centre x in pixels
    pub x: f64,
    /// Centre y in pixels
    pub y: f64,
    pub radius: f64,
    pub fill: Color,
    pub fill_opacity: f64,
}

impl From<&ProjectedPoint> for Marker {
    fn from(p: &ProjectedPoint) -> Self {
        Self {
            x: p.x,
            y: p.y,
            radius: p.radius(),
            fill: p.color,
            fill_opacity: p.opacity(),
        }
    }
}

/// A 2D surface that holds circle markers identified by a stable key
pub trait DrawingSurface {
    /// Current size of the surface
    fn viewport(&self) -> Viewport;

    /// Record a new surface size
    fn set_viewport(&mut self, viewport: Viewport);

    /// Insert or update the marker for `id`; returns true if it was inserted
    fn upsert_marker(&mut self, id: u32, marker: Marker) -> bool;

    /// Remove the marker for `id`; returns true if it existed
    fn remove_marker(&mut self, id: u32) -> bool;

    /// Ids of every marker currently on the surface
    fn marker_ids(&self) -> Vec<u32>;

    /// Order in which markers are drawn, first to last
    fn set_draw_order(&mut self, ids: &[u32]);
}

/// Join a depth-sorted frame into the surface
pub fn join_frame<S: DrawingSurface + ?Sized>(surface: &mut S, frame: &[ProjectedPoint]) -> SceneChanges {
    let mut changes = SceneChanges::empty();

    let live: HashSet<u32> = frame.iter().map(|p| p.id).collect();
    for id in surface.marker_ids() {
        if !live.contains(&id) && surface.remove_marker(id) {
            changes |= SceneChanges::REMOVED;
        }
    }

    for p in frame {
        if surface.upsert_marker(p.id, Marker::from(p)) {
            changes |= SceneChanges::INSERTED;
        } else {
            changes |= SceneChanges::UPDATED;
        }
    }

    let order: Vec<u32> = frame.iter().map(|p| p.id).collect();
    surface.set_draw_order(&order);

    changes
}

struct SceneEntry {
    id: u32,
    marker: Marker,
}

/// In-memory retained scene graph of markers
///
/// Markers live in a slot map; a side index maps point ids to slot keys.
pub struct MarkerScene {
    markers: SlotMap<MarkerKey, SceneEntry>,
    index: HashMap<u32, MarkerKey>,
    draw_order: Vec<MarkerKey>,
    viewport: Viewport,
}

impl MarkerScene {
    /// Create an empty scene for a surface of the given size
    pub fn new(viewport: Viewport) -> Self {
        Self {
            markers: SlotMap::with_key(),
            index: HashMap::new(),
            draw_order: Vec::new(),
            viewport,
        }
    }

    /// Get the marker for a point id
    pub fn get(&self, id: u32) -> Option<&Marker> {
        self.index
            .get(&id)
            .and_then(|key| self.markers.get(*key))
            .map(|entry| &entry.marker)
    }

    /// Get the slot key for a point id
    pub fn key_of(&self, id: u32) -> Option<MarkerKey> {
        self.index.get(&id).copied()
    }

    /// Markers in draw order, far to near
    pub fn iter_draw_order(&self) -> impl Iterator<Item = (u32, &Marker)> + '_ {
        self.draw_order
            .iter()
            .filter_map(|key| self.markers.get(*key))
            .map(|entry| (entry.id, &entry.marker))
    }

    /// Ids in draw order
    pub fn draw_order_ids(&self) -> Vec<u32> {
        self.iter_draw_order().map(|(id, _)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Remove every marker
    pub fn clear(&mut self) {
        self.markers.clear();
        self.index.clear();
        self.draw_order.clear();
    }
}

impl DrawingSurface for MarkerScene {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn upsert_marker(&mut self, id: u32, marker: Marker) -> bool {
        if let Some(entry) = self.index.get(&id).and_then(|key| self.markers.get_mut(*key)) {
            entry.marker = marker;
            return false;
        }
        let key = self.markers.insert(SceneEntry { id, marker });
        self.index.insert(id, key);
        true
    }

    fn remove_marker(&mut self, id: u32) -> bool {
        match self.index.remove(&id) {
            Some(key) => {
                // Stale keys left in draw_order are skipped until the next set_draw_order
                self.markers.remove(key);
                true
            }
            None => false,
        }
    }

    fn marker_ids(&self) -> Vec<u32> {
        self.index.keys().copied().collect()
    }

    fn set_draw_order(&mut self, ids: &[u32]) {
        self.draw_order.clear();
        self.draw_order
            .extend(ids.iter().filter_map(|id| self.index.get(id).copied()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(id: u32, z: f64) -> ProjectedPoint {
        ProjectedPoint {
            id,
            x: id as f64,
            y: 2.0 * id as f64,
            z,
            color: Color::WHITE,
        }
    }

    #[test]
    fn test_first_join_inserts() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        let changes = join_frame(&mut scene, &[point(0, -1.0), point(1, 0.0)]);
        assert_eq!(changes, SceneChanges::INSERTED);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.draw_order_ids(), vec![0, 1]);
    }

    #[test]
    fn test_second_join_updates_in_place() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        join_frame(&mut scene, &[point(0, -1.0), point(1, 0.0)]);
        let key = scene.key_of(1);

        let mut moved = point(1, 0.5);
        moved.x = 42.0;
        let changes = join_frame(&mut scene, &[point(0, -1.0), moved]);

        assert_eq!(changes, SceneChanges::UPDATED);
        assert_eq!(scene.key_of(1), key);
        assert_eq!(scene.get(1).map(|m| m.x), Some(42.0));
    }

    #[test]
    fn test_join_removes_missing_ids() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        join_frame(&mut scene, &[point(0, 0.0), point(1, 0.0), point(2, 0.0)]);
        let changes = join_frame(&mut scene, &[point(1, 0.0)]);

        assert!(changes.contains(SceneChanges::REMOVED));
        assert!(changes.contains(SceneChanges::UPDATED));
        assert_eq!(scene.len(), 1);
        assert!(scene.get(0).is_none());
        assert!(scene.get(2).is_none());
    }

    #[test]
    fn test_draw_order_follows_frame() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        join_frame(&mut scene, &[point(0, -1.0), point(1, 0.0), point(2, 1.0)]);
        join_frame(&mut scene, &[point(2, -1.0), point(0, 0.0), point(1, 1.0)]);
        assert_eq!(scene.draw_order_ids(), vec![2, 0, 1]);
    }

    #[test]
    fn test_empty_frame_clears_scene() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        join_frame(&mut scene, &[point(0, 0.0)]);
        let changes = join_frame(&mut scene, &[]);
        assert_eq!(changes, SceneChanges::REMOVED);
        assert!(scene.is_empty());
        assert_eq!(scene.iter_draw_order().count(), 0);
    }

    #[test]
    fn test_large_shrink_keeps_order_consistent() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        let big: Vec<ProjectedPoint> = (0..10_000).map(|id| point(id, id as f64)).collect();
        join_frame(&mut scene, &big);
        assert_eq!(scene.len(), 10_000);

        // Reverse depth so the new order differs from insertion order
        let small: Vec<ProjectedPoint> = (0..500).rev().map(|id| point(id, -(id as f64))).collect();
        let changes = join_frame(&mut scene, &small);

        assert!(changes.contains(SceneChanges::REMOVED));
        assert_eq!(scene.len(), 500);
        assert_eq!(scene.draw_order_ids(), (0..500).rev().collect::<Vec<u32>>());
    }

    #[test]
    fn test_removed_marker_skipped_in_draw_order() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        join_frame(&mut scene, &[point(0, 0.0), point(1, 0.0), point(2, 0.0)]);
        assert!(scene.remove_marker(1));
        assert!(!scene.remove_marker(1));
        assert_eq!(scene.draw_order_ids(), vec![0, 2]);
    }

    #[test]
    fn test_set_viewport_through_trait() {
        let mut scene = MarkerScene::new(Viewport::new(100.0, 100.0));
        DrawingSurface::set_viewport(&mut scene, Viewport::new(30.0, 20.0));
        assert_eq!(scene.viewport(), Viewport::new(30.0, 20.0));
    }

    #[test]
    fn test_marker_depth_cues_from_point() {
        let marker = Marker::from(&point(3, 0.5));
        assert!((marker.radius - 1.6).abs() < 1e-12);
        assert!((marker.fill_opacity - 1.0).abs() < 1e-12);
    }
}
