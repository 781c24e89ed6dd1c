use std::sync::mpsc;

use rasterview_core::raster::Raster;

use crate::convert::raster_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{AdjustDialogState, UIState, ViewportState};
use crate::worker;

pub struct ViewerApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub viewport: ViewportState,

    /// UI-side copy of the current document, used to snapshot the scaled
    /// preview when an adjustment dialog opens. The worker owns the
    /// authoritative full-size raster.
    pub document: Option<Raster>,

    /// Open adjustment dialog, if any. At most one at a time.
    pub dialog: Option<AdjustDialogState>,

    pub show_about: bool,
    pub show_help: bool,
}

impl ViewerApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            document: None,
            dialog: None,
            show_about: false,
            show_help: false,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { path, raster } => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{}, {})",
                        path.display(),
                        raster.width(),
                        raster.height(),
                        raster.format.map(|f| f.name()).unwrap_or("unknown"),
                    ));
                    self.ui_state.file_path = Some(path);
                    self.ui_state.format = raster.format;
                    self.ui_state.image_size =
                        Some([raster.width() as usize, raster.height() as usize]);
                    self.ui_state.document_modified = false;
                    self.ui_state.applied_history.clear();
                    self.viewport.zoom = 1.0;
                    self.viewport.pan_offset = egui::Vec2::ZERO;
                    self.update_viewport_texture(ctx, &raster, &name);
                    self.document = Some(raster);
                    self.dialog = None;
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                    self.ui_state.format =
                        rasterview_core::raster::ImageFormatTag::from_path(&path);
                    self.ui_state.file_path = Some(path);
                    self.ui_state.document_modified = false;
                }
                WorkerResult::AdjustmentApplied {
                    raster,
                    applied,
                    elapsed,
                } => {
                    let label = match applied.as_slice() {
                        [single] => single.name().to_string(),
                        many => format!("{} adjustments", many.len()),
                    };
                    self.ui_state
                        .add_log(format!("{label} applied in {}", format_duration(elapsed)));
                    self.ui_state.applied_history.extend(applied);
                    self.ui_state.document_modified = true;
                    self.update_viewport_texture(ctx, &raster, &label);
                    self.document = Some(raster);
                }
                WorkerResult::DocumentClosed => {
                    self.document = None;
                    self.dialog = None;
                    self.viewport.clear();
                    self.ui_state.file_path = None;
                    self.ui_state.format = None;
                    self.ui_state.image_size = None;
                    self.ui_state.document_modified = false;
                    self.ui_state.applied_history.clear();
                    self.ui_state.add_log("Image closed.".into());
                }
                WorkerResult::PresetImported { adjustments } => {
                    if self.document.is_some() {
                        self.ui_state.add_log(format!(
                            "Preset imported: {} adjustment(s)",
                            adjustments.len()
                        ));
                        self.send_command(WorkerCommand::ApplyPreset { adjustments });
                    } else {
                        self.ui_state
                            .add_log("ERROR: Open an image before importing a preset.".into());
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context, raster: &Raster, label: &str) {
        let image = raster_to_color_image(raster);
        let size = image.size;
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some(size);
        self.viewport.viewing_label = label.to_string();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::adjust_dialog::show(ctx, self);
        panels::help::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Rasterview")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Rasterview");
                        ui.label("Raster image viewer with color adjustments");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
