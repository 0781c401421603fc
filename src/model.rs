use crate::geometry;
use eframe::egui;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub id: u64,
    pub center: egui::Pos2,
    pub radius_x: f32,
    pub radius_y: f32,
    pub rotation_degrees: f32,
}

/// Sizes used for shapes created without a template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeDefaults {
    pub radius_x: f32,
    pub radius_y: f32,
    pub duplicate_offset: f32,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            radius_x: 100.0,
            radius_y: 50.0,
            duplicate_offset: 15.0,
        }
    }
}

/// All ellipses of a session.
///
/// `shapes` keeps creation order forever; removal only records the id in
/// `removed`. Paint order lives separately in `z_order` so that raising the
/// selected shape never disturbs the numbering.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    removed: HashSet<u64>,
    z_order: Vec<u64>,
    next_id: u64,
    active: Option<u64>,
    pub defaults: ShapeDefaults,
}

impl Scene {
    pub fn new(defaults: ShapeDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_shape(&mut self, position: egui::Pos2, template: Option<&Shape>) -> u64 {
        let id = self.allocate_id();
        let shape = match template {
            Some(t) => Shape {
                id,
                center: t.center + egui::Vec2::splat(self.defaults.duplicate_offset),
                radius_x: t.radius_x,
                radius_y: t.radius_y,
                rotation_degrees: t.rotation_degrees,
            },
            None => Shape {
                id,
                center: position,
                radius_x: self.defaults.radius_x,
                radius_y: self.defaults.radius_y,
                rotation_degrees: 0.0,
            },
        };
        self.shapes.push(shape);
        self.z_order.push(id);
        self.select_shape(Some(id));
        id
    }

    /// Soft-removes the active shape. The selection is left untouched.
    pub fn remove_active(&mut self) -> Option<u64> {
        let id = self.active?;
        if !self.shapes.iter().any(|s| s.id == id) {
            return None;
        }
        self.removed.insert(id).then_some(id)
    }

    /// Returns whether the shape was replaced; stale ids are ignored.
    pub fn replace_shape(&mut self, id: u64, new_shape: Shape) -> bool {
        if self.removed.contains(&id) {
            return false;
        }
        let Some(slot) = self.shapes.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        *slot = Shape { id, ..new_shape };
        true
    }

    pub fn select_shape(&mut self, id: Option<u64>) {
        self.active = id;
        if let Some(id) = id {
            if self.shape(id).is_some() {
                self.raise(id);
            }
        }
    }

    fn raise(&mut self, id: u64) {
        if let Some(pos) = self.z_order.iter().position(|&z| z == id) {
            let z = self.z_order.remove(pos);
            self.z_order.push(z);
        }
    }

    pub fn active(&self) -> Option<u64> {
        self.active
    }

    pub fn is_removed(&self, id: u64) -> bool {
        self.removed.contains(&id)
    }

    /// A live (present, non-removed) shape by id.
    pub fn shape(&self, id: u64) -> Option<&Shape> {
        if self.removed.contains(&id) {
            return None;
        }
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.active.and_then(|id| self.shape(id))
    }

    pub fn live_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(|s| !self.removed.contains(&s.id))
    }

    pub fn last_live_shape(&self) -> Option<&Shape> {
        self.live_shapes().last()
    }

    /// Live shapes bottom first.
    pub fn render_order(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|&id| self.shape(id))
    }

    pub fn topmost_hit(&self, point: egui::Pos2, slack: f32) -> Option<u64> {
        let order: Vec<&Shape> = self.render_order().collect();
        order
            .into_iter()
            .rev()
            .find(|s| geometry::hit_test_ellipse(s, point, slack))
            .map(|s| s.id)
    }

    pub fn is_empty(&self) -> bool {
        self.live_shapes().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(ShapeDefaults::default())
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut scene = scene();
        let ids: Vec<u64> = (0..4)
            .map(|i| scene.add_shape(egui::pos2(i as f32 * 10.0, 0.0), None))
            .collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);

        scene.select_shape(Some(2));
        assert_eq!(scene.remove_active(), Some(2));
        assert_eq!(scene.add_shape(egui::pos2(0.0, 0.0), None), 4);
        assert_eq!(scene.len(), 5);
        let live: Vec<u64> = scene.live_shapes().map(|s| s.id).collect();
        assert_eq!(live, vec![0, 1, 3, 4]);
    }

    #[test]
    fn add_uses_defaults_and_selects() {
        let mut scene = scene();
        let id = scene.add_shape(egui::pos2(40.0, 60.0), None);
        let s = scene.shape(id).copied().unwrap();
        assert_eq!(s.center, egui::pos2(40.0, 60.0));
        assert_eq!((s.radius_x, s.radius_y, s.rotation_degrees), (100.0, 50.0, 0.0));
        assert_eq!(scene.active(), Some(id));
    }

    #[test]
    fn add_from_template_copies_size_and_offsets_center() {
        let mut scene = scene();
        let template = Shape {
            id: 9,
            center: egui::pos2(10.0, 20.0),
            radius_x: 30.0,
            radius_y: 12.0,
            rotation_degrees: 45.0,
        };
        let id = scene.add_shape(egui::pos2(500.0, 500.0), Some(&template));
        let s = scene.shape(id).copied().unwrap();
        assert_eq!(s.id, 0);
        assert_eq!(s.center, egui::pos2(25.0, 35.0));
        assert_eq!((s.radius_x, s.radius_y, s.rotation_degrees), (30.0, 12.0, 45.0));
    }

    #[test]
    fn removed_shapes_ignore_replacement() {
        let mut scene = scene();
        let id = scene.add_shape(egui::pos2(0.0, 0.0), None);
        scene.remove_active();
        let replacement = Shape {
            id,
            center: egui::pos2(99.0, 99.0),
            radius_x: 1.0,
            radius_y: 1.0,
            rotation_degrees: 0.0,
        };
        assert!(!scene.replace_shape(id, replacement));
        assert!(scene.shape(id).is_none());
        assert!(scene.is_empty());
        assert!(scene.render_order().next().is_none());
        // Selection is stale but resolves to nothing.
        assert_eq!(scene.active(), Some(id));
        assert!(scene.active_shape().is_none());
    }

    #[test]
    fn replace_unknown_id_is_a_no_op() {
        let mut scene = scene();
        scene.add_shape(egui::pos2(0.0, 0.0), None);
        let before = scene.shape(0).copied();
        let other = Shape {
            id: 7,
            center: egui::pos2(1.0, 1.0),
            radius_x: 2.0,
            radius_y: 2.0,
            rotation_degrees: 0.0,
        };
        assert!(!scene.replace_shape(7, other));
        assert_eq!(scene.shape(0).copied(), before);
    }

    #[test]
    fn replace_keeps_slot_id() {
        let mut scene = scene();
        let id = scene.add_shape(egui::pos2(0.0, 0.0), None);
        let mut s = *scene.shape(id).unwrap();
        s.id = 42;
        s.radius_x = 7.0;
        assert!(scene.replace_shape(id, s));
        assert_eq!(scene.shape(id).map(|s| (s.id, s.radius_x)), Some((id, 7.0)));
    }

    #[test]
    fn remove_without_selection_does_nothing() {
        let mut scene = scene();
        scene.add_shape(egui::pos2(0.0, 0.0), None);
        scene.select_shape(None);
        assert_eq!(scene.remove_active(), None);
        scene.select_shape(Some(8));
        assert_eq!(scene.remove_active(), None);
        assert!(!scene.is_empty());
    }

    #[test]
    fn selection_raises_without_reordering_creation() {
        let mut scene = scene();
        for _ in 0..3 {
            scene.add_shape(egui::pos2(0.0, 0.0), None);
        }
        scene.select_shape(Some(0));
        let z: Vec<u64> = scene.render_order().map(|s| s.id).collect();
        assert_eq!(z, vec![1, 2, 0]);
        let created: Vec<u64> = scene.live_shapes().map(|s| s.id).collect();
        assert_eq!(created, vec![0, 1, 2]);
        assert_eq!(scene.topmost_hit(egui::pos2(0.0, 0.0), 0.0), Some(0));
    }

    #[test]
    fn selecting_missing_id_is_legal() {
        let mut scene = scene();
        scene.select_shape(Some(9));
        assert_eq!(scene.active(), Some(9));
        assert!(scene.active_shape().is_none());
    }
}
