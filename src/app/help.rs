use eframe::egui;

pub(super) fn draw_help_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("Help")
        .open(open)
        .resizable(true)
        .default_width(480.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Pointer");
                ui.separator();
                help_row(ui, "Double-click", "Add an ellipse on empty canvas");
                help_row(ui, "Click", "Select / deselect an ellipse");
                help_row(ui, "Drag body", "Move (switches to move mode)");
                help_row(ui, "Drag corner", "Resize around the opposite corner");
                help_row(ui, "Drag green", "Rotate");

                ui.add_space(10.0);
                ui.heading("Keyboard");
                ui.separator();
                help_row(ui, "Escape", "Clear selection");
                help_row(ui, "Delete / Backspace", "Remove selected ellipse");
                help_row(ui, "0-9", "Select ellipse by number");
                help_row(ui, "m / s / r", "Move / scale / rotate mode");
                help_row(ui, "Arrows / hjkl", "Step in the current mode");
                help_row(ui, "Ctrl + Arrows", "Step five times as far");
                help_row(ui, "+ / p", "Duplicate selected (or last) ellipse");
                help_row(ui, "F1", "This window");

                ui.add_space(10.0);
                ui.heading("Voice");
                ui.separator();
                help_row(ui, "\"0\"-\"9\"", "Select ellipse by number");
                help_row(ui, "\"M\" \"S\" \"R\"", "Switch mode");
                help_row(ui, "\"A\"", "Duplicate");
                help_row(ui, "\"X\" \"Y\"", "Axis for volume control");
                ui.add_space(5.0);
                ui.label("Hold a sound above the floor level: after five samples the");
                ui.label("selection keeps drifting, up when loud and down when quiet.");
                ui.add_space(5.0);
                ui.label("Settings are read from ~/.config/daen.toml or ./settings.toml:");
                ui.code("volume_floor = 2.0\nvolume_threshold = 10.0\nvolume_tick_ms = 50");
            });
        });
}

fn help_row(ui: &mut egui::Ui, shortcut: &str, description: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [120.0, 16.0],
            egui::Label::new(egui::RichText::new(shortcut).monospace().strong()),
        );
        ui.label(description);
    });
}
