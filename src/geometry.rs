use crate::model::Shape;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    fn signs(self) -> (f32, f32) {
        match self {
            Corner::TopLeft => (-1.0, -1.0),
            Corner::TopRight => (1.0, -1.0),
            Corner::BottomLeft => (-1.0, 1.0),
            Corner::BottomRight => (1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Axis {
    #[default]
    X,
    Y,
}

/// Rotates `v` clockwise (screen coordinates, Y down) by `angle_degrees`.
pub fn rotate_vec(v: egui::Vec2, angle_degrees: f32) -> egui::Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    egui::vec2(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

pub fn rotate_point(point: egui::Pos2, center: egui::Pos2, angle_degrees: f32) -> egui::Pos2 {
    center + rotate_vec(point - center, angle_degrees)
}

/// Un-rotated offset of a bounding-box corner from the shape's center.
pub fn corner_offset(shape: &Shape, corner: Corner) -> egui::Vec2 {
    let (sx, sy) = corner.signs();
    egui::vec2(sx * shape.radius_x, sy * shape.radius_y)
}

pub fn corner_position(shape: &Shape, corner: Corner) -> egui::Pos2 {
    rotate_point(
        shape.center + corner_offset(shape, corner),
        shape.center,
        shape.rotation_degrees,
    )
}

/// `atan2` in degrees with the `atan2(0, 0) == 0` convention made explicit.
pub fn atan2_degrees(y: f32, x: f32) -> f32 {
    if y == 0.0 && x == 0.0 {
        return 0.0;
    }
    y.atan2(x).to_degrees()
}

pub fn ellipse_outline(shape: &Shape, steps: usize) -> Vec<egui::Pos2> {
    if shape.radius_x <= f32::EPSILON || shape.radius_y <= f32::EPSILON || steps == 0 {
        return vec![];
    }
    (0..steps)
        .map(|i| {
            let t = (i as f32) / (steps as f32) * std::f32::consts::TAU;
            let local = egui::vec2(t.cos() * shape.radius_x, t.sin() * shape.radius_y);
            shape.center + rotate_vec(local, shape.rotation_degrees)
        })
        .collect()
}

pub fn hit_test_ellipse(shape: &Shape, point: egui::Pos2, slack: f32) -> bool {
    let rx = shape.radius_x + slack;
    let ry = shape.radius_y + slack;
    if shape.radius_x <= f32::EPSILON || shape.radius_y <= f32::EPSILON {
        return false;
    }
    let local = rotate_vec(point - shape.center, -shape.rotation_degrees);
    let dx = local.x / rx;
    let dy = local.y / ry;
    dx * dx + dy * dy <= 1.0
}
