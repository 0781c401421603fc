use crate::dispatch::{EditorEvent, KeyInput, PointerEvent};
use crate::overlay::Guides;
use eframe::egui;

use super::render::{draw_background, draw_empty_hint, draw_guides, draw_shapes};
use super::{ActiveDrag, EllipseApp};

const HANDLE_SIZE: f32 = 10.0;
const HIT_SLACK: f32 = 2.0;

fn to_world(origin: egui::Pos2, screen: egui::Pos2) -> egui::Pos2 {
    (screen - origin).to_pos2()
}

fn to_screen(origin: egui::Pos2, world: egui::Pos2) -> egui::Pos2 {
    origin + world.to_vec2()
}

impl EllipseApp {
    pub(super) fn collect_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let keys: Vec<KeyInput> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Key {
                        key,
                        pressed: true,
                        modifiers,
                        ..
                    } => Some(KeyInput::new(*key, *modifiers)),
                    _ => None,
                })
                .collect()
        });
        for key in keys {
            self.queue.push(EditorEvent::Key(key));
        }
    }

    pub(super) fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let origin = response.rect.min;
        let pointer_world = ui
            .input(|i| i.pointer.interact_pos())
            .map(|p| to_world(origin, p));

        self.interact_handles(ui, origin);
        self.interact_canvas(ui, &response, origin, pointer_world);
        self.apply_events();

        draw_background(&painter, response.rect);
        let scene = &self.session.scene;
        draw_shapes(
            &painter,
            origin,
            scene,
            self.session.settings.show_numbers,
        );
        if let Some(shape) = scene.active_shape() {
            let guides = Guides::for_shape(shape, self.session.settings.rotate_guide_length)
                .with_rotate_handle(self.session.rotate_handle());
            draw_guides(&painter, origin, &guides, HANDLE_SIZE);
        }
        if scene.is_empty() {
            draw_empty_hint(&painter, response.rect);
        }
    }

    /// Registers drag areas for the selected shape's corner and rotation handles.
    fn interact_handles(&mut self, ui: &egui::Ui, origin: egui::Pos2) {
        let Some(shape) = self.session.scene.active_shape().copied() else {
            return;
        };
        let guides = Guides::for_shape(&shape, self.session.settings.rotate_guide_length)
            .with_rotate_handle(self.session.rotate_handle());
        let handle_size = egui::vec2(HANDLE_SIZE, HANDLE_SIZE);

        for (corner, pos) in guides.corners {
            let r = egui::Rect::from_center_size(to_screen(origin, pos), handle_size);
            let id = ui.id().with(("corner", shape.id, corner as u8));
            let resp = ui.interact(r, id, egui::Sense::drag());
            if resp.drag_started() {
                self.active_drag = Some(ActiveDrag::Corner {
                    id: shape.id,
                    corner,
                });
            }
            if resp.hovered() || resp.dragged() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        }

        let r = egui::Rect::from_center_size(to_screen(origin, guides.rotate_handle), handle_size);
        let id = ui.id().with(("rotate", shape.id));
        let resp = ui.interact(r, id, egui::Sense::drag());
        if resp.drag_started() {
            self.active_drag = Some(ActiveDrag::Rotate { id: shape.id });
        }
        if resp.hovered() || resp.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    fn interact_canvas(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        origin: egui::Pos2,
        pointer_world: Option<egui::Pos2>,
    ) {
        let scene = &self.session.scene;

        if response.drag_started() && self.active_drag.is_none() {
            let press_world = ui
                .input(|i| i.pointer.press_origin())
                .map(|p| to_world(origin, p));
            if let Some(press) = press_world {
                if let Some(shape) = scene
                    .topmost_hit(press, HIT_SLACK)
                    .and_then(|id| scene.shape(id))
                {
                    self.active_drag = Some(ActiveDrag::Body {
                        id: shape.id,
                        grab_offset: shape.center - press,
                    });
                }
            }
        }

        if response.double_clicked() {
            if let Some(p) = pointer_world {
                if scene.topmost_hit(p, HIT_SLACK).is_none() {
                    self.queue
                        .push(EditorEvent::Pointer(PointerEvent::AddAt(p)));
                }
            }
        } else if response.clicked() {
            if let Some(id) = pointer_world.and_then(|p| scene.topmost_hit(p, HIT_SLACK)) {
                self.queue
                    .push(EditorEvent::Pointer(PointerEvent::ToggleSelect(id)));
            }
        } else if response.secondary_clicked() {
            self.queue
                .push(EditorEvent::Pointer(PointerEvent::ClearSelection));
        }

        let Some(drag) = self.active_drag else {
            return;
        };
        let primary_down = ui.input(|i| i.pointer.primary_down());
        if !primary_down {
            self.active_drag = None;
            self.queue.push(EditorEvent::Pointer(PointerEvent::DragEnd));
            return;
        }
        let Some(target) = pointer_world else {
            return;
        };
        let event = match drag {
            ActiveDrag::Body { id, grab_offset } => PointerEvent::DragBody {
                id,
                target: target + grab_offset,
            },
            ActiveDrag::Corner { id, corner } => PointerEvent::DragCorner { id, corner, target },
            ActiveDrag::Rotate { id } => PointerEvent::DragRotate { id, target },
        };
        self.queue.push(EditorEvent::Pointer(event));
    }
}
