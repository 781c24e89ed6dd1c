use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    if !app.show_help {
        return;
    }

    egui::Window::new("Help")
        .collapsible(false)
        .resizable(false)
        .open(&mut app.show_help)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.heading("Rasterview");
            ui.add_space(4.0);
            ui.label("Open a JPEG, PNG, BMP or GIF image from the File menu.");
            ui.label("GIF images can be viewed but must be saved in another format.");
            ui.add_space(8.0);

            ui.strong("Viewport");
            ui.label("Scroll to zoom toward the cursor.");
            ui.label("Drag to pan. Double-click to fit the image to the window.");
            ui.add_space(8.0);

            ui.strong("Adjustments");
            ui.label("Brightness and Channel Offset open a parameter dialog with a");
            ui.label("live preview on a scaled-down copy. Apply commits the change");
            ui.label("to the full image; Cancel leaves it untouched.");
            ui.label("Applied adjustments can be exported as a preset and replayed");
            ui.label("on another image via File > Import Preset.");
            ui.add_space(8.0);

            ui.strong("Shortcuts");
            egui::Grid::new("help_shortcuts").num_columns(2).show(ui, |ui| {
                ui.label("Cmd+O");
                ui.label("Open image");
                ui.end_row();
                ui.label("Cmd+S");
                ui.label("Save as");
                ui.end_row();
                ui.label("Cmd+H");
                ui.label("Brightness dialog");
                ui.end_row();
                ui.label("Cmd+R");
                ui.label("Channel offset dialog");
                ui.end_row();
                ui.label("F1");
                ui.label("Help");
                ui.end_row();
                ui.label("Cmd+Q");
                ui.label("Quit");
                ui.end_row();
            });
        });
}
