use crate::geometry::ellipse_outline;
use crate::model::Scene;
use crate::overlay::Guides;
use eframe::egui;

const SHAPE_FILL: egui::Color32 = egui::Color32::from_rgb(40, 90, 200);
const SHAPE_STROKE: egui::Color32 = egui::Color32::from_rgb(20, 40, 110);
const GUIDE_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const ROTATE_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 160, 70);

pub(super) fn draw_background(painter: &egui::Painter, rect: egui::Rect) {
    let bg = painter.ctx().style().visuals.extreme_bg_color;
    painter.rect_filled(rect, 0.0, bg);
    let grid_color = egui::Color32::from_gray(60);
    let spacing = 64.0;
    let mut x = rect.min.x;
    while x < rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, grid_color),
        );
        x += spacing;
    }
    let mut y = rect.min.y;
    while y < rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, grid_color),
        );
        y += spacing;
    }
}

pub(super) fn draw_shapes(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scene: &Scene,
    show_numbers: bool,
) {
    let stroke = egui::Stroke::new(1.5, SHAPE_STROKE);
    for shape in scene.render_order() {
        let points: Vec<egui::Pos2> = ellipse_outline(shape, 64)
            .into_iter()
            .map(|p| origin + p.to_vec2())
            .collect();
        if !points.is_empty() {
            painter.add(egui::Shape::convex_polygon(points, SHAPE_FILL, stroke));
        }
        if show_numbers {
            painter.text(
                origin + shape.center.to_vec2(),
                egui::Align2::CENTER_CENTER,
                shape.id.to_string(),
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
        }
    }
}

pub(super) fn draw_guides(
    painter: &egui::Painter,
    origin: egui::Pos2,
    guides: &Guides,
    handle_size: f32,
) {
    let stroke = egui::Stroke::new(2.0, GUIDE_COLOR);
    let corners = guides.bounding_box().map(|p| origin + p.to_vec2());
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        draw_dashed_line(painter, a, b, stroke, 8.0, 5.0);
    }
    for p in corners {
        let r = egui::Rect::from_center_size(p, egui::vec2(handle_size, handle_size));
        painter.rect_filled(r, 1.0, GUIDE_COLOR);
    }

    let top = origin + guides.top_mid.to_vec2();
    let handle = origin + guides.rotate_handle.to_vec2();
    painter.line_segment([top, handle], egui::Stroke::new(1.0, ROTATE_COLOR));
    painter.add(egui::Shape::circle_filled(
        handle,
        handle_size * 0.5,
        ROTATE_COLOR,
    ));
}

pub(super) fn draw_empty_hint(painter: &egui::Painter, rect: egui::Rect) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Double-click to add an ellipse",
        egui::FontId::proportional(22.0),
        egui::Color32::from_gray(160),
    );
}

fn draw_dashed_line(
    painter: &egui::Painter,
    a: egui::Pos2,
    b: egui::Pos2,
    stroke: egui::Stroke,
    dash: f32,
    gap: f32,
) {
    let v = b - a;
    let len = v.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = v / len;
    let mut t = 0.0;
    while t < len {
        let end = (t + dash).min(len);
        painter.line_segment([a + dir * t, a + dir * end], stroke);
        t += dash + gap;
    }
}
