use clap::Parser;
use std::path::PathBuf;

use maskblend::EncodeProfile;

#[derive(Parser)]
#[command(name = "maskblend", version, about = "Mask-driven image compositor")]
pub struct CliArgs {
    /// Background image
    #[arg(short, long)]
    pub background: Option<PathBuf>,

    /// Overlay image composited onto the background
    #[arg(short = 'c', long)]
    pub overlay: Option<PathBuf>,

    /// Output image path (PNG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Grayscale mask paths, separated by ';' (or ',')
    #[arg(short, long)]
    pub masks: Option<String>,

    /// Mask paths whose luminance is complemented before blending
    #[arg(short = 'i', long)]
    pub invert_masks: Option<String>,

    /// Optional path to save the blended weight grid as a grayscale image
    #[arg(long)]
    pub save_mask: Option<PathBuf>,

    /// Mask normalization level (0 = off; higher values sharpen the mask
    /// toward a binary threshold)
    #[arg(short = 'n', long, default_value_t = 0.0)]
    pub normalize: f64,

    /// Output encoding trade-off (fast writes vs small files)
    #[arg(long, value_enum, default_value_t = EncodeProfile::Small)]
    pub encode: EncodeProfile,

    /// Prefer speed over file size (shorthand for --encode fast)
    #[arg(long, default_value_t = false)]
    pub fast: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
