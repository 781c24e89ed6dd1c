use crate::app::ViewerApp;

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            match app.ui_state.file_path {
                Some(ref path) => {
                    let marker = if app.ui_state.document_modified { "*" } else { "" };
                    ui.label(format!("File: {}{marker}", path.display()));
                }
                None => {
                    ui.label("No image loaded");
                }
            }
            if let Some(size) = app.ui_state.image_size {
                ui.separator();
                ui.label(format!("{}x{}", size[0], size[1]));
            }
            if let Some(format) = app.ui_state.format {
                ui.separator();
                ui.label(format.name());
            }
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.viewport.zoom * 100.0));
        });

        ui.add_space(2.0);
    });
}
