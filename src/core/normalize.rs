use ndarray::Array2;
use tracing::debug;

/// Observed (min, max) over a grid.
fn value_range(grid: &Array2<f64>) -> (f64, f64) {
    grid.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), &v| (lo.min(v), hi.max(v)),
    )
}

/// Complement a mask: `1 - value` elementwise.
/// Applied once at load time for inverted masks, so downstream code only
/// ever handles one kind of mask.
pub fn invert_mask(mask: &Array2<f64>) -> Array2<f64> {
    mask.mapv(|v| 1.0 - v)
}

/// Normalize a mask grid according to `level`.
///
/// `level <= 0` is the identity. Any positive level starts with a min-max
/// stretch of the observed range to [0,1]; levels above 1 additionally apply
/// a luminance cutoff clip, re-expansion, gamma correction, and a final
/// stretch. Higher levels sharpen the mask toward a binary threshold.
///
/// Output is guaranteed in [0,1] for `level >= 1`. Degenerate (flat) grids
/// are legal inputs and are resolved deterministically, never an error:
/// a flat grid becomes all-zero at the initial stretch, a clip that
/// collapses the range becomes constant 0.5, and a grid that is flat after
/// gamma keeps its flat value.
pub fn normalize_mask(mask: &Array2<f64>, level: f64) -> Array2<f64> {
    if level <= 0.0 {
        return mask.clone();
    }

    let (lo, hi) = value_range(mask);
    debug!("mask range before stretch: {:.3} - {:.3}", lo, hi);

    // Initial stretch of the observed range onto [0,1]
    let mut mask = if hi - lo > f64::EPSILON {
        mask.mapv(|v| (v - lo) / (hi - lo))
    } else {
        Array2::zeros(mask.raw_dim())
    };

    if level <= 1.0 {
        return mask;
    }

    // Truncate by luminance cutoff. Cutoff approaches 0.5 from below as the
    // level increases: 0.25 at level 2, ~0.348 at level 3, 0.5 in the limit.
    let cutoff = 0.5 - 0.25 * (-(level - 2.0) * 0.5).exp();
    debug!("luminance cutoff: {:.3}", cutoff);

    mask.mapv_inplace(|v| v.clamp(cutoff, 1.0 - cutoff));

    // Re-expand [cutoff, 1-cutoff] back to [0,1]
    let denom = 1.0 - 2.0 * cutoff;
    if denom.abs() > f64::EPSILON {
        mask.mapv_inplace(|v| (v - cutoff) / denom);
    } else {
        // cutoff ~ 0.5: the clip collapsed every sample to mid-gray
        mask.fill(0.5);
    }

    // Gamma approaches 0.25 from above as the level increases:
    // 1.0 at level 1, ~0.351 at level 2, 0.25 in the limit.
    let gamma = 1.0 - 0.75 * (1.0 - (-(level - 1.0) * 2.0).exp());
    debug!("gamma: {:.3}", gamma);
    mask.mapv_inplace(|v| v.powf(gamma));

    // Final stretch onto [0,1]; a grid left flat by the gamma step keeps
    // its flat value rather than resetting to zero.
    let (lo, hi) = value_range(&mask);
    debug!("mask range before final stretch: {:.3} - {:.3}", lo, hi);
    if hi - lo > f64::EPSILON {
        mask.mapv_inplace(|v| (v - lo) / (hi - lo));
    } else {
        mask.fill(lo);
    }

    mask
}
