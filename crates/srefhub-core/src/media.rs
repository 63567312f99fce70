//! Media helpers - natural size probing and data URIs for fetched images.

use std::io::Cursor;

use base64::Engine;
use image::ImageReader;

use crate::error::{HubError, HubResult};
use crate::layout::NaturalSize;

/// A fetched image ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub url: String,
    pub natural: NaturalSize,
    /// `data:<mime>;base64,...` for inline display
    pub data_uri: String,
}

impl MediaItem {
    /// Decode the header of `bytes` fetched from `url`.
    pub fn from_bytes(url: impl Into<String>, bytes: &[u8]) -> HubResult<Self> {
        Ok(Self {
            url: url.into(),
            natural: probe_dimensions(bytes)?,
            data_uri: data_uri(bytes)?,
        })
    }
}

/// Intrinsic width/height of an encoded image without decoding pixels.
pub fn probe_dimensions(bytes: &[u8]) -> HubResult<NaturalSize> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;

    NaturalSize::new(width, height)
        .ok_or_else(|| HubError::InvalidInput(format!("image has zero size ({}x{})", width, height)))
}

/// Encode `bytes` as a base64 data URI using the sniffed MIME type.
pub fn data_uri(bytes: &[u8]) -> HubResult<String> {
    let format = image::guess_format(bytes)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::new(width, height);
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_probe_png_dimensions() {
        let natural = probe_dimensions(&png(30, 45)).unwrap();
        assert_eq!(natural, NaturalSize { width: 30, height: 45 });
    }

    #[test]
    fn test_data_uri_mime() {
        let uri = data_uri(&png(2, 2)).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(probe_dimensions(b"not an image").is_err());
        assert!(MediaItem::from_bytes("x", b"nope").is_err());
    }
}
