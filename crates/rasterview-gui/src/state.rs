use std::path::PathBuf;

use rasterview_core::adjust::Adjustment;
use rasterview_core::raster::{ImageFormatTag, Raster};

/// Most log lines retained; the status panel only ever shows the tail.
const LOG_CAPACITY: usize = 200;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub image_size: Option<[usize; 2]>,
    pub format: Option<ImageFormatTag>,

    /// True when the document has adjustments not yet written to disk.
    pub document_modified: bool,

    /// Adjustments committed to the current document, in order.
    /// Exported as a preset; cleared on load/close.
    pub applied_history: Vec<Adjustment>,

    /// Log messages shown in the status panel.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn has_document(&self) -> bool {
        self.image_size.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
        if self.log_messages.len() > LOG_CAPACITY {
            let excess = self.log_messages.len() - LOG_CAPACITY;
            self.log_messages.drain(..excess);
        }
    }
}

/// Viewport display state.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub image_size: Option<[usize; 2]>,
    pub zoom: f32,
    pub pan_offset: egui::Vec2,
    pub viewing_label: String,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            texture: None,
            image_size: None,
            zoom: 1.0,
            pan_offset: egui::Vec2::ZERO,
            viewing_label: String::new(),
        }
    }
}

impl ViewportState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.zoom = 1.0;
        self.pan_offset = egui::Vec2::ZERO;
        self.viewing_label.clear();
    }
}

/// Which adjustment dialog is open.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AdjustKind {
    Brightness,
    ChannelOffset,
}

/// State of the modal parameter dialog: slider values plus the pristine
/// scaled-down copy the live preview is recomputed from on every change.
pub struct AdjustDialogState {
    pub kind: AdjustKind,

    pub brightness: i32,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    pub alpha: i32,

    /// Unmodified thumbnail snapshotted when the dialog opened. Previews are
    /// always derived from this copy, never from a previous preview.
    pub base_preview: Raster,
    pub preview_texture: Option<egui::TextureHandle>,
    pub preview_stale: bool,
}

impl AdjustDialogState {
    pub fn new(kind: AdjustKind, document: &Raster) -> Self {
        Self {
            kind,
            brightness: 0,
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
            base_preview: document.preview_copy(),
            preview_texture: None,
            preview_stale: true,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            AdjustKind::Brightness => "Brightness",
            AdjustKind::ChannelOffset => "Channel Offset",
        }
    }

    /// Adjustment described by the current slider values.
    pub fn adjustment(&self) -> Adjustment {
        match self.kind {
            AdjustKind::Brightness => Adjustment::Brightness {
                delta: self.brightness,
            },
            AdjustKind::ChannelOffset => Adjustment::ChannelOffset {
                red: self.red,
                green: self.green,
                blue: self.blue,
                alpha: self.alpha,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_capped_and_keeps_newest() {
        let mut state = UIState::default();
        for i in 0..LOG_CAPACITY + 50 {
            state.add_log(format!("line {i}"));
        }
        assert_eq!(state.log_messages.len(), LOG_CAPACITY);
        assert_eq!(state.log_messages.first().unwrap(), "line 50");
        assert_eq!(
            state.log_messages.last().unwrap(),
            &format!("line {}", LOG_CAPACITY + 49)
        );
    }
}
