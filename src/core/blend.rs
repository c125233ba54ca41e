use ndarray::Array2;
use tracing::debug;

/// Elementwise arithmetic mean of already-normalized mask grids.
/// The caller guarantees a non-empty sequence of identically shaped grids
/// (shape validation happens in the orchestrator before any mask work).
pub fn blend_masks(masks: &[Array2<f64>]) -> Array2<f64> {
    debug!("blending {} masks", masks.len());
    let mut acc = Array2::<f64>::zeros(masks[0].raw_dim());
    for mask in masks {
        acc += mask;
    }
    acc / masks.len() as f64
}

/// Constant weight grid, used as the neutral 50/50 blend when no masks are
/// supplied.
pub fn uniform_weight(rows: usize, cols: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((rows, cols), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn singleton_blend_is_identity() {
        let mask = array![[0.1, 0.5], [0.9, 1.0]];
        assert_eq!(blend_masks(std::slice::from_ref(&mask)), mask);
    }

    #[test]
    fn blend_is_order_independent() {
        let a = array![[0.0, 0.4], [0.8, 1.0]];
        let b = array![[1.0, 0.2], [0.6, 0.0]];
        let ab = blend_masks(&[a.clone(), b.clone()]);
        let ba = blend_masks(&[b, a]);
        for (x, y) in ab.iter().zip(ba.iter()) {
            assert!((x - y).abs() < 1e-15);
        }
    }

    #[test]
    fn blend_averages_elementwise() {
        let a = array![[0.0, 1.0]];
        let b = array![[1.0, 0.0]];
        let out = blend_masks(&[a, b]);
        assert_eq!(out, array![[0.5, 0.5]]);
    }

    #[test]
    fn uniform_weight_fills_shape() {
        let w = uniform_weight(2, 3, 0.5);
        assert_eq!(w.dim(), (2, 3));
        assert!(w.iter().all(|&v| v == 0.5));
    }
}
