use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{PixviewError, Result};
use crate::geometry::Size;

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A `data:<mime>;base64,<payload>` string holding a complete image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri(String);

impl DataUri {
    pub fn encode(media_type: &str, bytes: &[u8]) -> Self {
        Self(format!("{SCHEME}{media_type}{BASE64_MARKER}{}", BASE64.encode(bytes)))
    }

    /// Accept an existing string, checking only its framing.
    pub fn parse(uri: impl Into<String>) -> Result<Self> {
        let uri = uri.into();
        if !uri.starts_with(SCHEME) {
            return Err(PixviewError::InvalidDataUri("missing `data:` scheme".into()));
        }
        if !uri.contains(BASE64_MARKER) {
            return Err(PixviewError::InvalidDataUri(
                "only base64 payloads are supported".into(),
            ));
        }
        Ok(Self(uri))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn media_type(&self) -> &str {
        let rest = &self.0[SCHEME.len()..];
        rest.split_once(BASE64_MARKER).map_or("", |(mime, _)| mime)
    }

    fn payload(&self) -> &str {
        self.0
            .split_once(BASE64_MARKER)
            .map_or("", |(_, payload)| payload)
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(self.payload())
            .map_err(|e| PixviewError::InvalidDataUri(e.to_string()))
    }
}

/// A displayable image: its data URI plus the natural pixel dimensions
/// measured once it has been decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    pub uri: DataUri,
    pub natural: Size,
}

/// Pixels decoded from a data URI, ready to upload to a texture.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub source: ImageSource,
    pub pixels: image::RgbaImage,
}

impl DecodedImage {
    /// Decode the URI payload. Fails for undecodable or zero-sized images.
    pub fn decode(uri: DataUri) -> Result<Self> {
        let bytes = uri.decode_bytes()?;
        let pixels = image::load_from_memory(&bytes)?.to_rgba8();
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(PixviewError::InvalidDimensions { width, height });
        }

        Ok(Self {
            source: ImageSource {
                uri,
                natural: Size::new(width as f32, height as f32),
            },
            pixels,
        })
    }
}
