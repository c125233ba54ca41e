use ndarray::{Array2, Array3, Zip};
use tracing::debug;

/// Linear interpolation between two H×W×C layers driven by an H×W weight
/// grid broadcast across the channel axis:
/// `background * (1 - w) + overlay * w`.
///
/// Weight 0 yields pure background, weight 1 pure overlay. No clamping here;
/// with weights in [0,1] and channel samples in [0,255] the result stays in
/// range, and rounding to integers happens at emission.
pub fn composite_layers(
    background: &Array3<f64>,
    overlay: &Array3<f64>,
    weight: &Array2<f64>,
) -> Array3<f64> {
    debug!("compositing layers {:?}", background.dim());
    let mut out = Array3::<f64>::zeros(background.raw_dim());
    Zip::indexed(&mut out).for_each(|(row, col, ch), res| {
        let w = weight[(row, col)];
        *res = background[(row, col, ch)] * (1.0 - w) + overlay[(row, col, ch)] * w;
    });
    out
}
