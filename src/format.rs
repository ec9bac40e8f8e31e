//! Source image format, as far as load planning cares.

/// Container formats the load pipeline distinguishes.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
    Bmp,
}

impl ImageFormat {
    /// Sniff the format from leading magic bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        match data {
            [0xFF, 0xD8, 0xFF, ..] => Some(ImageFormat::Jpeg),
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(ImageFormat::Png),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(ImageFormat::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => {
                Some(ImageFormat::WebP)
            }
            [b'B', b'M', ..] => Some(ImageFormat::Bmp),
            _ => None,
        }
    }

    /// Map a MIME type such as a decoder's reported `image/gif`. Case-insensitive.
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let mime = mime.trim();
        [
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::Gif,
            ImageFormat::WebP,
            ImageFormat::Bmp,
        ]
        .into_iter()
        .find(|format| format.mime_type().eq_ignore_ascii_case(mime))
        .or_else(|| mime.eq_ignore_ascii_case("image/jpg").then_some(ImageFormat::Jpeg))
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Gif => "image/gif",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
        }
    }

    /// Whether the container can hold more than one frame.
    pub fn supports_animation(self) -> bool {
        matches!(self, ImageFormat::Gif | ImageFormat::WebP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_formats() {
        assert_eq!(
            ImageFormat::detect(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::detect(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some(ImageFormat::Png)
        );
        assert_eq!(ImageFormat::detect(b"GIF87a...."), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::detect(b"GIF89a"), Some(ImageFormat::Gif));
        assert_eq!(
            ImageFormat::detect(b"RIFF\x00\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::detect(b"BM\x36\x00"), Some(ImageFormat::Bmp));
    }

    #[test]
    fn detect_rejects_short_or_unknown() {
        assert_eq!(ImageFormat::detect(&[0xFF, 0xD8]), None);
        assert_eq!(ImageFormat::detect(b"GIF88a"), None);
        assert_eq!(ImageFormat::detect(b"RIFF\x00\x00\x00\x00WAVE"), None);
        assert_eq!(ImageFormat::detect(b""), None);
    }

    #[test]
    fn mime_types() {
        assert_eq!(ImageFormat::from_mime_type("IMAGE/GIF"), Some(ImageFormat::Gif));
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("text/html"), None);
        assert_eq!(ImageFormat::WebP.mime_type(), "image/webp");
    }

    #[test]
    fn animation_capable_formats() {
        assert!(ImageFormat::Gif.supports_animation());
        assert!(ImageFormat::WebP.supports_animation());
        assert!(!ImageFormat::Jpeg.supports_animation());
        assert!(!ImageFormat::Png.supports_animation());
        assert!(!ImageFormat::Bmp.supports_animation());
    }
}
