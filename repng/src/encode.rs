//! PNG encoding

use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, DynamicImage, GenericImageView, ImageEncoder};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

impl From<PngCompression> for CompressionType {
    fn from(compression: PngCompression) -> Self {
        match compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// Encode an image to PNG format with the specified compression level
pub fn encode_png<W>(img: &DynamicImage, writer: &mut W, compression: PngCompression) -> Result<()>
where
    W: Write,
{
    let is_grayscale = img.color() == ColorType::L8 || img.color() == ColorType::La8;

    let encoder = PngEncoder::new_with_quality(
        writer,
        compression.into(),
        if is_grayscale {
            FilterType::NoFilter
        } else {
            FilterType::Adaptive
        },
    );

    let (width, height) = img.dimensions();
    encoder
        .write_image(img.as_bytes(), width, height, img.color().into())
        .map_err(|source| Error::Encode { source })
}
