//! High-level, ergonomic library API: composite two layers through their
//! masks to a file or to in-memory buffers. Prefer these entrypoints over
//! the low-level `core` modules when embedding maskblend.
use std::path::Path;

use ndarray::{Array2, Array3};
use tracing::info;

use crate::core::blend::{blend_masks, uniform_weight};
use crate::core::composite::composite_layers;
use crate::core::normalize::{invert_mask, normalize_mask};
use crate::core::params::CompositeParams;
use crate::core::quantize::{layer_to_u8, mask_to_u8};
use crate::core::validate::check_dimensions;
use crate::error::{Error, Result};
use crate::io::reader::{load_layer, load_mask};
use crate::io::writers::batch::{WriteRequest, write_all};
use crate::io::writers::png::{encode_color_png, encode_gray_png};
use crate::types::MaskPolarity;

/// Result of in-memory compositing
#[derive(Debug, Clone)]
pub struct CompositeImage {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    /// Interleaved 8-bit composite, row-major
    pub pixels: Vec<u8>,
    /// Blended weight grid rescaled to 8-bit grayscale
    pub weight: Vec<u8>,
}

fn load_mask_grids(params: &CompositeParams) -> Result<Vec<Array2<f64>>> {
    info!(
        "opening {} positive and {} negative masks",
        params.masks.len(),
        params.invert_masks.len()
    );
    let polarized = params
        .masks
        .iter()
        .map(|p| (p, MaskPolarity::Positive))
        .chain(params.invert_masks.iter().map(|p| (p, MaskPolarity::Inverted)));

    let mut grids = Vec::with_capacity(params.masks.len() + params.invert_masks.len());
    for (path, polarity) in polarized {
        let grid = load_mask(path)?;
        // Inversion happens exactly once, here; downstream code never sees
        // the polarity again.
        grids.push(match polarity {
            MaskPolarity::Positive => grid,
            MaskPolarity::Inverted => invert_mask(&grid),
        });
    }
    Ok(grids)
}

fn build_weight_grid(
    masks: Vec<Array2<f64>>,
    rows: usize,
    cols: usize,
    level: f64,
) -> Array2<f64> {
    if masks.is_empty() {
        info!("no masks supplied, compositing at 50%");
        return uniform_weight(rows, cols, 0.5);
    }

    info!("normalizing {} masks at level {}", masks.len(), level);
    let normalized: Vec<Array2<f64>> = masks
        .iter()
        .map(|mask| normalize_mask(mask, level))
        .collect();
    blend_masks(&normalized)
}

fn composite_arrays(
    background: &Array3<f64>,
    overlay: &Array3<f64>,
    params: &CompositeParams,
) -> Result<(Array3<f64>, Array2<f64>)> {
    let masks = load_mask_grids(params)?;

    let (rows, cols, channels) = background.dim();
    let (ov_rows, ov_cols, ov_channels) = overlay.dim();
    if channels != ov_channels {
        return Err(Error::Processing(format!(
            "background and overlay channel counts differ: {channels} vs {ov_channels}"
        )));
    }
    let mut shapes = vec![(rows, cols), (ov_rows, ov_cols)];
    shapes.extend(masks.iter().map(|m| m.dim()));
    check_dimensions(&shapes)?;

    let weight = build_weight_grid(masks, rows, cols, params.normalize_level);

    info!("compositing layers");
    let composite = composite_layers(background, overlay, &weight);
    Ok((composite, weight))
}

/// Composite `background` and `overlay` in memory (no output written).
///
/// Loads both layers and every mask, validates that all grids share the
/// same height and width, builds the blend-weight grid (constant 0.5 when
/// no masks are supplied), and returns the quantized composite together
/// with the quantized weight grid.
pub fn composite_to_buffer(
    background: &Path,
    overlay: &Path,
    params: &CompositeParams,
) -> Result<CompositeImage> {
    info!("opening layers");
    let background = load_layer(background)?;
    let overlay = load_layer(overlay)?;

    let (composite, weight) = composite_arrays(&background, &overlay, params)?;

    let (height, width, channels) = composite.dim();
    Ok(CompositeImage {
        width,
        height,
        channels,
        pixels: layer_to_u8(&composite),
        weight: mask_to_u8(&weight),
    })
}

/// Composite `background` and `overlay` and write the result to `output`
/// as PNG.
///
/// When `params.save_mask` names a destination, the blend-weight grid is
/// written there as 8-bit grayscale. All outputs are encoded up front and
/// persisted concurrently; the call returns once every write has finished,
/// surfacing the first failure. A load or validation error aborts before
/// anything is written.
pub fn composite_to_path(
    background: &Path,
    overlay: &Path,
    output: &Path,
    params: &CompositeParams,
) -> Result<()> {
    let image = composite_to_buffer(background, overlay, params)?;

    let mut writes = Vec::with_capacity(2);
    if let Some(mask_out) = &params.save_mask {
        let bytes = encode_gray_png(image.width, image.height, &image.weight, params.encode)?;
        writes.push(WriteRequest::new(mask_out, bytes));
    }
    let bytes = encode_color_png(
        image.width,
        image.height,
        image.channels,
        &image.pixels,
        params.encode,
    )?;
    writes.push(WriteRequest::new(output, bytes));

    info!("saving outputs");
    write_all(writes)?;
    info!("finished");
    Ok(())
}
