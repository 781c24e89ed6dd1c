use std::path::PathBuf;
use std::time::Duration;

use rasterview_core::adjust::Adjustment;
use rasterview_core::raster::Raster;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image file and make it the current document.
    LoadImage { path: PathBuf },

    /// Encode the current document to the given path.
    SaveImage { path: PathBuf },

    /// Apply one adjustment to the full-size document.
    ApplyAdjustment { adjustment: Adjustment },

    /// Apply a list of adjustments in order (preset import).
    ApplyPreset { adjustments: Vec<Adjustment> },

    /// Drop the current document.
    CloseDocument,
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        path: PathBuf,
        raster: Raster,
    },

    ImageSaved {
        path: PathBuf,
    },

    /// One or more adjustments were committed to the document.
    AdjustmentApplied {
        raster: Raster,
        applied: Vec<Adjustment>,
        elapsed: Duration,
    },

    DocumentClosed,

    /// A preset file was parsed on a dialog thread and awaits application.
    PresetImported {
        adjustments: Vec<Adjustment>,
    },

    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
