use serde::{Deserialize, Serialize};

use crate::adjust::Adjustment;

/// An ordered list of adjustments, serialized to TOML by the binaries for
/// import/export. Applying a preset means applying its adjustments in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentPreset {
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl AdjustmentPreset {
    pub fn is_empty(&self) -> bool {
        self.adjustments.is_empty()
    }
}
