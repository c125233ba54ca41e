use crate::error::{Error, Result};

/// Check that every H×W pair matches the first one.
/// Runs before any compositing or writing so a mismatch aborts with nothing
/// on disk. Channel counts are deliberately not compared: masks are
/// single-channel by construction and layers may differ from them.
pub fn check_dimensions(shapes: &[(usize, usize)]) -> Result<()> {
    let Some(&reference) = shapes.first() else {
        return Ok(());
    };
    for &shape in &shapes[1..] {
        if shape != reference {
            return Err(Error::ShapeMismatch {
                expected: reference,
                got: shape,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_singleton_pass() {
        assert!(check_dimensions(&[]).is_ok());
        assert!(check_dimensions(&[(4, 4)]).is_ok());
    }

    #[test]
    fn matching_shapes_pass() {
        assert!(check_dimensions(&[(100, 100), (100, 100), (100, 100)]).is_ok());
    }

    #[test]
    fn mismatch_carries_both_shapes() {
        let err = check_dimensions(&[(100, 100), (100, 50)]).unwrap_err();
        match err {
            Error::ShapeMismatch { expected, got } => {
                assert_eq!(expected, (100, 100));
                assert_eq!(got, (100, 50));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
