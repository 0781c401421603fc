use crate::dispatch::EditMode;
use crate::geometry::Axis;
use eframe::egui;
use crate::voice::SpeechSource;
use std::time::Duration;

use super::EllipseApp;
use super::help::draw_help_window;

impl eframe::App for EllipseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::F1)) {
            self.show_help = true;
        }
        self.collect_keys(ctx);
        self.collect_voice();

        egui::SidePanel::right("controls")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.controls_ui(ui));
            });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(status) = &self.status {
                    ui.label(status);
                } else {
                    ui.label("Ready");
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Mode: {}", self.session.mode.label()));
                    ui.separator();
                    let live = self.session.scene.live_shapes().count();
                    ui.label(format!("Ellipses: {live}"));
                    ui.separator();
                    match self.session.scene.active() {
                        Some(id) => ui.label(format!("Selected: {id}")),
                        None => ui.label("Selected: -"),
                    };
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.canvas_ui(ui));

        // Events from the side panel or a frame without a canvas pass.
        self.apply_events();

        if self.voice_active() {
            ctx.request_repaint_after(Duration::from_millis(
                self.session.settings.volume_tick_ms,
            ));
        }

        draw_help_window(ctx, &mut self.show_help);
    }
}

impl EllipseApp {
    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Ellipses");
        ui.separator();

        ui.label("1. Add: double-click, + or p, say \"A\"");
        ui.label("2. Select: click, 0-9, say a digit");
        ui.small(format!("{} created so far", self.session.scene.len()));
        ui.horizontal_wrapped(|ui| {
            let active = self.session.scene.active();
            for shape in self.session.scene.live_shapes() {
                let text = egui::RichText::new(shape.id.to_string());
                if active == Some(shape.id) {
                    ui.label(text.strong().underline());
                } else {
                    ui.label(text.weak());
                }
            }
        });

        ui.label("3. Transform: drag, m/s/r + arrows or hjkl, say M/S/R/X/Y + volume");
        ui.horizontal(|ui| {
            for mode in EditMode::ALL {
                let label = format!("{} : {}", mode.label(), &mode.label()[..1]);
                if ui.selectable_label(self.session.mode == mode, label).clicked() {
                    self.session.mode = mode;
                }
            }
        });
        if self.voice_active() {
            ui.horizontal(|ui| {
                ui.label("voice axis:");
                for (axis, name) in [(Axis::X, "x"), (Axis::Y, "y")] {
                    if ui
                        .selectable_label(self.session.voice_axis == axis, name)
                        .clicked()
                    {
                        self.session.voice_axis = axis;
                    }
                }
            });
        }

        ui.add_space(8.0);
        ui.label("4. Voice");
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                self.start_voice();
            }
            if ui.button("Stop").clicked() {
                self.stop_voice();
            }
        });
        ui.horizontal(|ui| {
            ui.label("Floor:");
            ui.add(egui::DragValue::new(&mut self.session.settings.volume_floor).speed(0.1));
            ui.label("+/- threshold:");
            ui.add(egui::DragValue::new(&mut self.session.settings.volume_threshold).speed(0.1));
        });
        ui.small(format!(
            "Runs of more than 5 samples above {} steer the selection: \
             {} or louder grows, quieter shrinks.",
            self.session.settings.volume_floor, self.session.settings.volume_threshold,
        ));

        ui.horizontal(|ui| {
            ui.label("Say:");
            let resp = ui.text_edit_singleline(&mut self.utterance);
            if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let utterance = std::mem::take(&mut self.utterance);
                self.speech.recognize(&utterance);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Mic level:");
            ui.add(egui::Slider::new(&mut self.volume.level, 0.0..=50.0));
        });

        ui.label(format!("Your message: {}", self.speech.transcript()));
        let level = self
            .last_level
            .map(|l| format!("{l:.1}"))
            .unwrap_or_else(|| "-".to_string());
        ui.label(format!("Your volume: {level}"));
        ui.label(format!("Your voice length: {}", self.session.volume_window.len()));

        ui.separator();
        ui.checkbox(&mut self.session.settings.show_numbers, "Show numbers");
        ui.horizontal(|ui| {
            if ui.button("Save settings").clicked() {
                self.save_settings();
            }
            if ui.button("Help (F1)").clicked() {
                self.show_help = true;
            }
        });
    }
}
