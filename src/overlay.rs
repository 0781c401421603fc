//! Guide geometry for the selected shape: corner handles, the bounding box
//! and the rotation handle. Pure data; the shell paints it.

use crate::geometry::{Corner, corner_position, rotate_vec};
use crate::model::Shape;
use crate::transform::rotate_handle_position;
use eframe::egui;

#[derive(Clone, Debug, PartialEq)]
pub struct Guides {
    pub shape_id: u64,
    pub corners: [(Corner, egui::Pos2); 4],
    /// Midpoint of the top edge, where the rotation guide starts.
    pub top_mid: egui::Pos2,
    pub rotate_handle: egui::Pos2,
}

impl Guides {
    pub fn for_shape(shape: &Shape, guide_length: f32) -> Self {
        let corners = Corner::ALL.map(|c| (c, corner_position(shape, c)));
        let top_mid =
            shape.center + rotate_vec(egui::vec2(0.0, -shape.radius_y), shape.rotation_degrees);
        Self {
            shape_id: shape.id,
            corners,
            top_mid,
            rotate_handle: rotate_handle_position(shape, guide_length),
        }
    }

    /// Uses the engine's anchor when it belongs to this shape.
    pub fn with_rotate_handle(mut self, handle: Option<(u64, egui::Pos2)>) -> Self {
        if let Some((id, pos)) = handle {
            if id == self.shape_id {
                self.rotate_handle = pos;
            }
        }
        self
    }

    /// Bounding box outline, clockwise from top-left.
    pub fn bounding_box(&self) -> [egui::Pos2; 4] {
        self.corners.map(|(_, p)| p)
    }
}
