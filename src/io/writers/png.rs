use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{Error, Result};
use crate::types::EncodeProfile;

fn encoder_settings(profile: EncodeProfile) -> (CompressionType, FilterType) {
    match profile {
        EncodeProfile::Fast => (CompressionType::Fast, FilterType::NoFilter),
        EncodeProfile::Small => (CompressionType::Best, FilterType::Adaptive),
    }
}

fn encode_png(
    cols: usize,
    rows: usize,
    color: ExtendedColorType,
    data: &[u8],
    profile: EncodeProfile,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let (compression, filter) = encoder_settings(profile);
    let encoder = PngEncoder::new_with_quality(&mut buf, compression, filter);
    encoder
        .write_image(data, cols as u32, rows as u32, color)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf)
}

/// Encode an 8-bit grayscale grid as PNG bytes.
pub fn encode_gray_png(
    cols: usize,
    rows: usize,
    data: &[u8],
    profile: EncodeProfile,
) -> Result<Vec<u8>> {
    encode_png(cols, rows, ExtendedColorType::L8, data, profile)
}

/// Encode an interleaved 8-bit layer as PNG bytes; the color type follows
/// the channel count (1 gray, 2 gray+alpha, 3 RGB, 4 RGBA).
pub fn encode_color_png(
    cols: usize,
    rows: usize,
    channels: usize,
    data: &[u8],
    profile: EncodeProfile,
) -> Result<Vec<u8>> {
    let color = match channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        other => {
            return Err(Error::Processing(format!(
                "unsupported channel count: {other}"
            )));
        }
    };
    encode_png(cols, rows, color, data, profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_png_round_trips() {
        let data = vec![0u8, 64, 128, 255];
        let bytes = encode_gray_png(2, 2, &data, EncodeProfile::Small).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.as_raw(), &data);
    }

    #[test]
    fn fast_profile_still_round_trips() {
        let data = vec![10u8, 20, 30, 40, 50, 60];
        let bytes = encode_color_png(2, 1, 3, &data, EncodeProfile::Fast).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.as_raw(), &data);
    }

    #[test]
    fn bad_channel_count_is_rejected() {
        let err = encode_color_png(1, 1, 5, &[0; 5], EncodeProfile::Small).unwrap_err();
        assert!(matches!(err, Error::Processing(_)));
    }
}
