use std::path::Path;
use std::sync::mpsc;

use rasterview_core::preset::AdjustmentPreset;
use rasterview_core::raster::ImageFormatTag;

use crate::app::ViewerApp;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::state::{AdjustDialogState, AdjustKind};

const ALL_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "jpe", "jfif", "png", "bmp", "dib", "gif"];

pub fn show(ctx: &egui::Context, app: &mut ViewerApp) {
    let has_document = app.ui_state.has_document();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(app);
                }

                let save_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui
                    .add_enabled(
                        has_document,
                        egui::Button::new("Save As...")
                            .shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    save_file(app);
                }

                if ui
                    .add_enabled(has_document, egui::Button::new("Close"))
                    .clicked()
                {
                    ui.close();
                    app.send_command(WorkerCommand::CloseDocument);
                }

                ui.separator();

                if ui.button("Import Preset...").clicked() {
                    ui.close();
                    import_preset(app);
                }

                if ui
                    .add_enabled(
                        !app.ui_state.applied_history.is_empty(),
                        egui::Button::new("Export Preset..."),
                    )
                    .clicked()
                {
                    ui.close();
                    export_preset(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Adjust", |ui| {
                let brightness_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::H);
                if ui
                    .add_enabled(
                        has_document,
                        egui::Button::new("Brightness...")
                            .shortcut_text(ctx.format_shortcut(&brightness_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_dialog(app, AdjustKind::Brightness);
                }

                let offset_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
                if ui
                    .add_enabled(
                        has_document,
                        egui::Button::new("Channel Offset...")
                            .shortcut_text(ctx.format_shortcut(&offset_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_dialog(app, AdjustKind::ChannelOffset);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("Help").clicked() {
                    ui.close();
                    app.show_help = true;
                }
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_file(app);
        }
        if has_document
            && ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND,
                    egui::Key::S,
                ))
            })
        {
            save_file(app);
        }
        if has_document
            && ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND,
                    egui::Key::H,
                ))
            })
        {
            open_dialog(app, AdjustKind::Brightness);
        }
        if has_document
            && ctx.input_mut(|i| {
                i.consume_shortcut(&egui::KeyboardShortcut::new(
                    egui::Modifiers::COMMAND,
                    egui::Key::R,
                ))
            })
        {
            open_dialog(app, AdjustKind::ChannelOffset);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::NONE,
                egui::Key::F1,
            ))
        }) {
            app.show_help = true;
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_dialog(app: &mut ViewerApp, kind: AdjustKind) {
    if app.dialog.is_some() {
        return;
    }
    if let Some(ref document) = app.document {
        app.dialog = Some(AdjustDialogState::new(kind, document));
    }
}

/// Post a cancellation message to the status log. A dismissed file dialog is
/// an outcome the user should see, not a silent return.
fn notify_cancelled(result_tx: &mpsc::Sender<WorkerResult>, action: &str) {
    let _ = result_tx.send(WorkerResult::Log {
        message: format!("{action} cancelled."),
    });
}

fn open_file(app: &mut ViewerApp) {
    let cmd_tx = app.cmd_tx.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        match rfd::FileDialog::new()
            .add_filter("All image files", ALL_IMAGE_EXTENSIONS)
            .add_filter("JPEG", ImageFormatTag::Jpeg.extensions())
            .add_filter("PNG", ImageFormatTag::Png.extensions())
            .add_filter("BMP", ImageFormatTag::Bmp.extensions())
            .add_filter("GIF", ImageFormatTag::Gif.extensions())
            .pick_file()
        {
            Some(path) => {
                let _ = cmd_tx.send(WorkerCommand::LoadImage { path });
            }
            None => notify_cancelled(&result_tx, "Open"),
        }
    });
}

fn save_file(app: &mut ViewerApp) {
    let cmd_tx = app.cmd_tx.clone();
    let result_tx = app.result_tx.clone();

    // Suggest the source file's stem with the canonical extension of its
    // format; GIF sources fall back to PNG since GIF is read-only.
    let format = match app.ui_state.format {
        Some(ImageFormatTag::Gif) | None => ImageFormatTag::Png,
        Some(f) => f,
    };
    let stem = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".into());
    let suggested = format!("{stem}.{}", format.extensions()[0]);

    std::thread::spawn(move || {
        match rfd::FileDialog::new()
            .add_filter("JPEG", ImageFormatTag::Jpeg.extensions())
            .add_filter("PNG", ImageFormatTag::Png.extensions())
            .add_filter("BMP", ImageFormatTag::Bmp.extensions())
            .set_file_name(suggested)
            .save_file()
        {
            Some(path) => {
                let _ = cmd_tx.send(WorkerCommand::SaveImage { path });
            }
            None => notify_cancelled(&result_tx, "Save"),
        }
    });
}

/// Read and parse a preset file, mapping both failure modes to a message
/// fit for the status log.
fn read_preset(path: &Path) -> Result<AdjustmentPreset, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    toml::from_str(&content).map_err(|e| format!("Invalid preset file {}: {e}", path.display()))
}

fn import_preset(app: &mut ViewerApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            notify_cancelled(&result_tx, "Preset import");
            return;
        };
        match read_preset(&path) {
            Ok(preset) => {
                let _ = result_tx.send(WorkerResult::PresetImported {
                    adjustments: preset.adjustments,
                });
            }
            Err(message) => {
                let _ = result_tx.send(WorkerResult::Error { message });
            }
        }
    });
}

fn export_preset(app: &mut ViewerApp) {
    let result_tx = app.result_tx.clone();
    let preset = AdjustmentPreset {
        adjustments: app.ui_state.applied_history.clone(),
    };

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("adjustments.toml")
            .save_file()
        else {
            notify_cancelled(&result_tx, "Preset export");
            return;
        };
        let result = toml::to_string_pretty(&preset)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                std::fs::write(&path, content).map_err(|e| e.to_string())
            });
        match result {
            Ok(()) => {
                let _ = result_tx.send(WorkerResult::Log {
                    message: format!("Preset exported: {}", path.display()),
                });
            }
            Err(e) => {
                let _ = result_tx.send(WorkerResult::Error {
                    message: format!("Preset export failed: {e}"),
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterview_core::adjust::Adjustment;

    #[test]
    fn test_cancelled_dialog_posts_log_message() {
        let (tx, rx) = mpsc::channel();
        notify_cancelled(&tx, "Open");
        match rx.try_recv().unwrap() {
            WorkerResult::Log { message } => assert_eq!(message, "Open cancelled."),
            _ => panic!("expected a log message"),
        }
    }

    #[test]
    fn test_read_preset_parses_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preset.toml");
        std::fs::write(
            &path,
            "[[adjustments]]\n[adjustments.Brightness]\ndelta = 40\n",
        )
        .unwrap();

        let preset = read_preset(&path).unwrap();
        assert_eq!(preset.adjustments, vec![Adjustment::Brightness { delta: 40 }]);
    }

    #[test]
    fn test_read_preset_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "not valid toml [[").unwrap();

        let err = read_preset(&path).unwrap_err();
        assert!(err.contains("Invalid preset file"), "got: {err}");
    }

    #[test]
    fn test_read_preset_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_preset(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.contains("Failed to read"), "got: {err}");
    }
}
