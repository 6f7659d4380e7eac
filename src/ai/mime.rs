/// Pick a file extension for decoded image bytes by sniffing magic numbers.
///
/// Gemini does not guarantee a format for inline image data, so saved files
/// are named from the bytes rather than the advertised mime type.
pub fn image_file_extension(bytes: &[u8]) -> &'static str {
    match bytes {
        [0xFF, 0xD8, 0xFF, ..] => "jpg",
        [0x89, 0x50, 0x4E, 0x47, ..] => "png",
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => "webp",
        _ => {
            tracing::warn!(
                "Unrecognized image format (first 4 bytes: {:02X?}), falling back to png",
                &bytes[..bytes.len().min(4)]
            );
            "png"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        assert_eq!(
            image_file_extension(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            "png"
        );
    }

    #[test]
    fn test_detect_jpeg() {
        assert_eq!(image_file_extension(&[0xFF, 0xD8, 0xFF, 0xE0]), "jpg");
    }

    #[test]
    fn test_detect_webp() {
        assert_eq!(
            image_file_extension(&[
                0x52, 0x49, 0x46, 0x46, 0x00, 0x00, 0x00, 0x00, 0x57, 0x45, 0x42, 0x50
            ]),
            "webp"
        );
    }

    #[test]
    fn test_unknown_falls_back_to_png() {
        assert_eq!(image_file_extension(&[0x00, 0x01, 0x02, 0x03]), "png");
    }

    #[test]
    fn test_empty_falls_back_to_png() {
        assert_eq!(image_file_extension(&[]), "png");
    }
}
