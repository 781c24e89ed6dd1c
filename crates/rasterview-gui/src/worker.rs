use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use rasterview_core::adjust::{self, Adjustment};
use rasterview_core::error::RasterError;
use rasterview_core::io::image_io::{load_raster, save_raster};
use rasterview_core::raster::Raster;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
///
/// The worker owns the full-size document raster; the UI thread only ever
/// sees clones of it for display and preview snapshots.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("rasterview-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    let mut document: Option<Raster> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path } => {
                handle_load(&path, &mut document, &tx, &ctx);
            }
            WorkerCommand::SaveImage { path } => {
                handle_save(&path, &mut document, &tx, &ctx);
            }
            WorkerCommand::ApplyAdjustment { adjustment } => {
                handle_apply(&[adjustment], &mut document, &tx, &ctx);
            }
            WorkerCommand::ApplyPreset { adjustments } => {
                handle_apply(&adjustments, &mut document, &tx, &ctx);
            }
            WorkerCommand::CloseDocument => {
                document = None;
                send(&tx, &ctx, WorkerResult::DocumentClosed);
            }
        }
    }
}

fn handle_load(
    path: &Path,
    document: &mut Option<Raster>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_raster(path) {
        Ok(raster) => {
            *document = Some(raster.clone());
            send(tx, ctx, WorkerResult::ImageLoaded {
                path: path.to_path_buf(),
                raster,
            });
        }
        Err(e) => send_error(tx, ctx, format!("Open failed: {e}")),
    }
}

fn handle_save(
    path: &Path,
    document: &mut Option<Raster>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let raster = match document.as_mut() {
        Some(r) => r,
        None => {
            send_error(tx, ctx, "No image to save.");
            return;
        }
    };

    match save_raster(raster, path) {
        Ok(()) => {
            // Saving rebinds the document to the new file.
            raster.source_path = Some(path.to_path_buf());
            raster.format = rasterview_core::raster::ImageFormatTag::from_path(path);
            send(tx, ctx, WorkerResult::ImageSaved {
                path: path.to_path_buf(),
            });
        }
        Err(RasterError::TargetNotWritable(dir)) => {
            send_error(tx, ctx, format!("Target folder not writable: {}", dir.display()));
        }
        Err(e) => send_error(tx, ctx, format!("Save failed: {e}")),
    }
}

fn handle_apply(
    adjustments: &[Adjustment],
    document: &mut Option<Raster>,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let raster = match document.as_mut() {
        Some(r) => r,
        None => {
            send_error(tx, ctx, "No image loaded.");
            return;
        }
    };

    if adjustments.is_empty() {
        send_log(tx, ctx, "Preset is empty, nothing to apply.");
        return;
    }

    let start = Instant::now();
    for adjustment in adjustments {
        tracing::debug!(name = adjustment.name(), "applying adjustment");
        adjust::apply(raster, adjustment);
    }
    let elapsed = start.elapsed();

    send(tx, ctx, WorkerResult::AdjustmentApplied {
        raster: raster.clone(),
        applied: adjustments.to_vec(),
        elapsed,
    });
}
