//! Pure shape transforms.
//!
//! Each function takes the current shape plus a raw world-space target and
//! returns the replacement shape. Nothing here touches the scene.

use crate::geometry::{Axis, Corner, atan2_degrees, corner_position, rotate_vec};
use crate::model::Shape;
use eframe::egui;

pub fn move_to(shape: &Shape, target: egui::Pos2) -> Shape {
    Shape {
        center: target,
        ..*shape
    }
}

/// Drags `handle` to `target` while the diagonally opposite corner stays put.
///
/// The segment from the fixed corner to the target becomes the new bounding
/// box diagonal; its direction, measured in the shape's own rotated frame,
/// splits the half-diagonal into the two radii.
pub fn resize_corner(shape: &Shape, handle: Corner, target: egui::Pos2) -> Shape {
    let opposite = corner_position(shape, handle.opposite());
    let diagonal = target - opposite;
    let center = opposite + diagonal * 0.5;
    let theta = (atan2_degrees(diagonal.y, diagonal.x) - shape.rotation_degrees).to_radians();
    let half = diagonal.length() * 0.5;
    Shape {
        center,
        radius_x: (half * theta.cos()).abs(),
        radius_y: (half * theta.sin()).abs(),
        ..*shape
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotateOutcome {
    pub shape: Shape,
    /// Where the rotation handle should be drawn for the new rotation.
    pub handle: egui::Pos2,
}

pub fn rotate_towards(shape: &Shape, target: egui::Pos2, guide_length: f32) -> RotateOutcome {
    let offset = target - shape.center;
    let distance = offset.length();
    // Inside the top edge the angle is unstable; the target snaps back to the
    // current top midpoint, which keeps the rotation as it is.
    let rotation_degrees = if distance < shape.radius_y || distance <= f32::EPSILON {
        shape.rotation_degrees
    } else {
        atan2_degrees(offset.x, -offset.y)
    };
    let shape = Shape {
        rotation_degrees,
        ..*shape
    };
    RotateOutcome {
        shape,
        handle: rotate_handle_position(&shape, guide_length),
    }
}

pub fn rotate_handle_position(shape: &Shape, guide_length: f32) -> egui::Pos2 {
    shape.center
        + rotate_vec(
            egui::vec2(0.0, -(shape.radius_y + guide_length)),
            shape.rotation_degrees,
        )
}

/// The quantity a single step nudges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NudgeTarget {
    Center(Axis),
    Radius(Axis),
    Rotation,
}

pub fn nudge(shape: &Shape, target: NudgeTarget, amount: f32) -> Shape {
    let mut next = *shape;
    match target {
        NudgeTarget::Center(Axis::X) => next.center.x += amount,
        NudgeTarget::Center(Axis::Y) => next.center.y += amount,
        NudgeTarget::Radius(Axis::X) => next.radius_x = (next.radius_x + amount).max(0.0),
        NudgeTarget::Radius(Axis::Y) => next.radius_y = (next.radius_y + amount).max(0.0),
        NudgeTarget::Rotation => next.rotation_degrees += amount,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn shape(rotation_degrees: f32) -> Shape {
        Shape {
            id: 3,
            center: egui::pos2(300.0, 200.0),
            radius_x: 100.0,
            radius_y: 50.0,
            rotation_degrees,
        }
    }

    #[test]
    fn move_only_changes_center() {
        let s = shape(12.0);
        let moved = move_to(&s, egui::pos2(1.0, 2.0));
        assert_eq!(moved.center, egui::pos2(1.0, 2.0));
        assert_eq!((moved.id, moved.radius_x, moved.radius_y, moved.rotation_degrees), (3, 100.0, 50.0, 12.0));
    }

    #[test]
    fn dragging_corner_onto_itself_is_identity() {
        let s = shape(0.0);
        let r = resize_corner(&s, Corner::BottomRight, egui::pos2(400.0, 250.0));
        assert_relative_eq!(r.radius_x, 100.0, epsilon = 1e-3);
        assert_relative_eq!(r.radius_y, 50.0, epsilon = 1e-3);
        assert_relative_eq!(r.center.x, 300.0, epsilon = 1e-3);
        assert_relative_eq!(r.center.y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn axis_aligned_resize_pivots_on_top_left() {
        let s = shape(0.0);
        for (k, m) in [(20.0, 80.0), (150.0, 5.0), (1.0, 1.0)] {
            let r = resize_corner(&s, Corner::BottomRight, egui::pos2(300.0 + k, 200.0 + m));
            assert_relative_eq!(r.radius_x, (k + 100.0) / 2.0, epsilon = 1e-3);
            assert_relative_eq!(r.radius_y, (m + 50.0) / 2.0, epsilon = 1e-3);
            assert_relative_eq!(r.center.x, 200.0 + r.radius_x, epsilon = 1e-3);
            assert_relative_eq!(r.center.y, 150.0 + r.radius_y, epsilon = 1e-3);
        }
    }

    #[test]
    fn resize_keeps_opposite_corner_for_any_rotation() {
        for rotation in [0.0, 17.0, 45.0, 90.0, 133.0, -60.0, 390.0] {
            let s = shape(rotation);
            for handle in Corner::ALL {
                let fixed = corner_position(&s, handle.opposite());
                // Push the handle outward along its own diagonal and sideways a little.
                let outward = corner_position(&s, handle) - s.center;
                let target = corner_position(&s, handle) + outward * 0.3
                    + rotate_vec(egui::vec2(4.0, -3.0), rotation) * 0.1;
                let r = resize_corner(&s, handle, target);
                let after = corner_position(&r, handle.opposite());
                assert_relative_eq!(after.x, fixed.x, epsilon = 1e-2);
                assert_relative_eq!(after.y, fixed.y, epsilon = 1e-2);
                assert_relative_eq!(r.rotation_degrees, rotation);
            }
        }
    }

    #[test]
    fn resize_to_opposite_corner_collapses_without_nan() {
        let s = shape(30.0);
        let target = corner_position(&s, Corner::TopLeft);
        let r = resize_corner(&s, Corner::BottomRight, target);
        assert_eq!(r.radius_x, 0.0);
        assert_eq!(r.radius_y, 0.0);
        assert!(r.center.x.is_finite() && r.center.y.is_finite());

        // A collapsed shape can still be resized and rotated.
        let grown = resize_corner(&r, Corner::BottomRight, r.center + egui::vec2(10.0, 10.0));
        assert!(grown.radius_x.is_finite() && grown.radius_y.is_finite());
        let turned = rotate_towards(&r, r.center, 10.0);
        assert!(turned.shape.rotation_degrees.is_finite());
    }

    #[test]
    fn handle_straight_above_gives_zero_rotation() {
        let s = shape(70.0);
        let target = s.center + egui::vec2(0.0, -(s.radius_y + 10.0));
        let out = rotate_towards(&s, target, 10.0);
        assert_relative_eq!(out.shape.rotation_degrees, 0.0, epsilon = 1e-4);
        assert_relative_eq!(out.handle.x, target.x, epsilon = 1e-3);
        assert_relative_eq!(out.handle.y, target.y, epsilon = 1e-3);
    }

    #[test]
    fn rotation_increases_clockwise() {
        let s = shape(0.0);
        let right = rotate_towards(&s, s.center + egui::vec2(100.0, 0.0), 10.0);
        assert_relative_eq!(right.shape.rotation_degrees, 90.0, epsilon = 1e-4);
        let below = rotate_towards(&s, s.center + egui::vec2(0.0, 100.0), 10.0);
        assert_relative_eq!(below.shape.rotation_degrees.abs(), 180.0, epsilon = 1e-4);
        let left = rotate_towards(&s, s.center + egui::vec2(-100.0, 0.0), 10.0);
        assert_relative_eq!(left.shape.rotation_degrees, -90.0, epsilon = 1e-4);
    }

    #[test]
    fn inward_drag_keeps_rotation_and_anchors_at_top_mid() {
        for rotation in [0.0, 30.0, -75.0, 390.0] {
            let s = shape(rotation);
            let expected = s.center + rotate_vec(egui::vec2(0.0, -60.0), rotation);
            for jitter in [
                egui::vec2(3.0, 3.0),
                egui::vec2(0.01, 0.01),
                egui::vec2(-0.01, 0.02),
                egui::vec2(0.0, 1.0),
                egui::vec2(49.0, 0.0),
            ] {
                let out = rotate_towards(&s, s.center + jitter, 10.0);
                assert_relative_eq!(out.shape.rotation_degrees, rotation, epsilon = 1e-3);
                assert_relative_eq!(out.handle.x, expected.x, epsilon = 1e-3);
                assert_relative_eq!(out.handle.y, expected.y, epsilon = 1e-3);
            }
        }
    }

    #[test]
    fn drag_just_outside_the_top_edge_rotates() {
        let s = shape(0.0);
        let out = rotate_towards(&s, s.center + egui::vec2(50.0, 0.0), 10.0);
        assert_relative_eq!(out.shape.rotation_degrees, 90.0, epsilon = 1e-3);
    }

    #[test]
    fn drag_onto_center_keeps_rotation() {
        let s = shape(25.0);
        let out = rotate_towards(&s, s.center, 10.0);
        assert_relative_eq!(out.shape.rotation_degrees, 25.0, epsilon = 1e-3);
    }

    #[test]
    fn nudges_follow_their_target() {
        let s = shape(0.0);
        assert_eq!(nudge(&s, NudgeTarget::Center(Axis::X), -5.0).center, egui::pos2(295.0, 200.0));
        assert_eq!(nudge(&s, NudgeTarget::Center(Axis::Y), 5.0).center, egui::pos2(300.0, 205.0));
        assert_eq!(nudge(&s, NudgeTarget::Radius(Axis::X), 5.0).radius_x, 105.0);
        assert_eq!(nudge(&s, NudgeTarget::Radius(Axis::Y), -5.0).radius_y, 45.0);
        assert_eq!(nudge(&s, NudgeTarget::Rotation, 2.0).rotation_degrees, 2.0);
    }

    #[test]
    fn radius_nudge_never_goes_negative() {
        let mut s = shape(0.0);
        s.radius_y = 3.0;
        assert_eq!(nudge(&s, NudgeTarget::Radius(Axis::Y), -25.0).radius_y, 0.0);
    }
}
