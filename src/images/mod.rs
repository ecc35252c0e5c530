use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Image decoding error: {0}")]
    DecodeError(String),
}

// Decode raw encoded bytes into a bitmap, format guessed from the data
pub fn decode(data: &[u8]) -> Result<DynamicImage, ImageError> {
    image::load_from_memory(data)
        .map_err(|e| ImageError::DecodeError(format!("Failed to load image: {}", e)))
}

// Detect image content type from the leading bytes (magic numbers).
// Each arm only needs as many bytes as its own signature; starts_with
// returns false on short input, so no blanket length gate is required.
pub fn detect_content_type(data: &[u8]) -> &'static str {
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        // JPEG signature
        "image/jpeg"
    } else if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        // PNG signature
        "image/png"
    } else if data.starts_with(&[0x47, 0x49, 0x46, 0x38]) {
        // GIF signature
        "image/gif"
    } else if data.starts_with(&[0x52, 0x49, 0x46, 0x46])
        && data.get(8..12) == Some(&[0x57, 0x45, 0x42, 0x50])
    {
        // WEBP signature
        "image/webp"
    } else if data.starts_with(&[0x42, 0x4D]) {
        // BMP signature
        "image/bmp"
    } else if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A]) {
        // TIFF signature
        "image/tiff"
    } else if data.starts_with(&[0x00, 0x00, 0x01, 0x00]) {
        // ICO signature
        "image/x-icon"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let img = DynamicImage::new_rgba8(2, 2);
        let mut out = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut out),
            image::ImageFormat::Png,
        )
        .unwrap();
        out
    }

    #[test]
    fn decodes_png_bytes() {
        let decoded = decode(&png_bytes()).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
    }

    #[test]
    fn rejects_garbage_bytes() {
        let result = decode(b"not an image at all");
        assert!(matches!(result, Err(ImageError::DecodeError(_))));
    }

    #[test]
    fn detects_common_signatures() {
        assert_eq!(detect_content_type(&png_bytes()), "image/png");
        assert_eq!(
            detect_content_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46]),
            "image/jpeg"
        );
        assert_eq!(
            detect_content_type(b"GIF89a__trailing"),
            "image/gif"
        );
    }

    #[test]
    fn detects_truncated_signatures() {
        // Prefixes shorter than 8 bytes still classify when the magic
        // number itself is complete.
        assert_eq!(detect_content_type(b"BM"), "image/bmp");
        assert_eq!(detect_content_type(&[0xFF, 0xD8, 0xFF]), "image/jpeg");
        assert_eq!(detect_content_type(b"GIF8"), "image/gif");
    }

    #[test]
    fn unknown_data_falls_back() {
        assert_eq!(detect_content_type(b""), "application/octet-stream");
        assert_eq!(detect_content_type(b"??"), "application/octet-stream");
        assert_eq!(
            detect_content_type(b"plain text, long enough"),
            "application/octet-stream"
        );
    }
}
