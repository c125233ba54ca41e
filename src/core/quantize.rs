use ndarray::{Array2, Array3};

/// Rescale a [0,1] weight grid to [0,255] and truncate to bytes,
/// row-major.
pub fn mask_to_u8(mask: &Array2<f64>) -> Vec<u8> {
    mask.iter()
        .map(|&v| (v * 255.0).clamp(0.0, 255.0) as u8)
        .collect()
}

/// Truncate an H×W×C float layer to interleaved bytes, clamping each
/// channel sample to the valid [0,255] range.
pub fn layer_to_u8(layer: &Array3<f64>) -> Vec<u8> {
    layer.iter().map(|&v| v.clamp(0.0, 255.0) as u8).collect()
}
