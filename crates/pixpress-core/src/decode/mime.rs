//! MIME type helpers for ingestion.

/// Returns true if a declared MIME type names an image (`image/*`).
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Detect the MIME type of encoded bytes from their magic number.
///
/// Returns `None` if the bytes don't start with a recognized image signature.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    image::guess_format(bytes).ok().map(|format| format.to_mime_type())
}

/// Normalize a declared MIME type for comparison.
pub fn normalize_mime(mime: &str) -> String {
    mime.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_mime() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("IMAGE/JPEG"));
        assert!(is_image_mime(" image/webp "));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn test_sniff_png() {
        let signature = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff_mime(&signature), Some("image/png"));
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0, 0, 0]), Some("image/jpeg"));
    }

    #[test]
    fn test_sniff_unknown() {
        assert_eq!(sniff_mime(b"hello world"), None);
        assert_eq!(sniff_mime(&[]), None);
    }

    #[test]
    fn test_normalize_mime() {
        assert_eq!(normalize_mime("  Image/JPG "), "image/jpg");
    }
}
