use rasterview_core::adjust;
use rasterview_core::consts::{DELTA_MAX, DELTA_MIN};

use crate::app::ViewerApp;
use crate::convert::raster_to_color_image;
use crate::messages::WorkerCommand;
use crate::state::AdjustKind;

enum DialogOutcome {
    Apply,
    Cancel,
}

/// Modal parameter dialog for the currently selected adjustment.
///
/// Slider changes mark the preview stale; the preview is then recomputed
/// from the pristine base thumbnail, so repeated changes never compound.
pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    let Some(mut dialog) = app.dialog.take() else {
        return;
    };

    let mut outcome: Option<DialogOutcome> = None;
    let mut open = true;

    egui::Window::new(dialog.title())
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            match dialog.kind {
                AdjustKind::Brightness => {
                    ui.label("Set the desired brightness change.");
                    ui.add_space(4.0);
                    if ui
                        .add(
                            egui::Slider::new(&mut dialog.brightness, DELTA_MIN..=DELTA_MAX)
                                .text("delta"),
                        )
                        .changed()
                    {
                        dialog.preview_stale = true;
                    }
                }
                AdjustKind::ChannelOffset => {
                    ui.label("Set the desired per-channel offsets.");
                    ui.add_space(4.0);
                    for (value, label) in [
                        (&mut dialog.red, "red"),
                        (&mut dialog.green, "green"),
                        (&mut dialog.blue, "blue"),
                        (&mut dialog.alpha, "alpha"),
                    ] {
                        if ui
                            .add(egui::Slider::new(value, DELTA_MIN..=DELTA_MAX).text(label))
                            .changed()
                        {
                            dialog.preview_stale = true;
                        }
                    }
                }
            }

            ui.add_space(8.0);

            if dialog.preview_stale || dialog.preview_texture.is_none() {
                let mut preview = dialog.base_preview.clone();
                adjust::apply(&mut preview, &dialog.adjustment());
                dialog.preview_texture = Some(ctx.load_texture(
                    "adjust_preview",
                    raster_to_color_image(&preview),
                    egui::TextureOptions::NEAREST,
                ));
                dialog.preview_stale = false;
            }

            if let Some(texture) = &dialog.preview_texture {
                let size = texture.size_vec2();
                ui.vertical_centered(|ui| {
                    ui.image((texture.id(), size));
                    ui.small("Preview");
                });
            }

            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Apply").clicked() {
                    outcome = Some(DialogOutcome::Apply);
                }
                if ui.button("Cancel").clicked() {
                    outcome = Some(DialogOutcome::Cancel);
                }
            });
        });

    if !open {
        outcome = Some(DialogOutcome::Cancel);
    }

    match outcome {
        Some(DialogOutcome::Apply) => {
            app.send_command(WorkerCommand::ApplyAdjustment {
                adjustment: dialog.adjustment(),
            });
        }
        Some(DialogOutcome::Cancel) => {
            app.ui_state
                .add_log(format!("{} cancelled.", dialog.title()));
        }
        None => {
            app.dialog = Some(dialog);
        }
    }
}
