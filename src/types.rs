//! Shared types and enums used across maskblend.
//! Includes the `EncodeProfile` output hint and `MaskPolarity`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Trade-off hint passed through to the PNG writer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum EncodeProfile {
    /// Minimal compression, fastest writes.
    Fast,
    /// Best compression, smallest files.
    Small,
}

impl std::fmt::Display for EncodeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeProfile::Fast => write!(f, "Fast"),
            EncodeProfile::Small => write!(f, "Small"),
        }
    }
}

/// Whether a mask contributes its luminance directly or complemented (`1 - value`).
/// Inversion happens once at load time; downstream code never sees the polarity.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum MaskPolarity {
    Positive,
    Inverted,
}

impl std::fmt::Display for MaskPolarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskPolarity::Positive => write!(f, "Positive"),
            MaskPolarity::Inverted => write!(f, "Inverted"),
        }
    }
}
