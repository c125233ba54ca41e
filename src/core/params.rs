use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::EncodeProfile;

/// Compositing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeParams {
    /// Grayscale masks applied as-is
    pub masks: Vec<PathBuf>,
    /// Grayscale masks complemented (`1 - value`) at load time
    pub invert_masks: Vec<PathBuf>,
    /// Optional destination for the blended weight grid as an 8-bit grayscale image
    pub save_mask: Option<PathBuf>,
    /// Mask contrast/gamma aggressiveness; 0 disables normalization
    pub normalize_level: f64,
    /// Output encoding trade-off hint
    pub encode: EncodeProfile,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            masks: Vec::new(),
            invert_masks: Vec::new(),
            save_mask: None,
            normalize_level: 0.0,
            encode: EncodeProfile::Small,
        }
    }
}
