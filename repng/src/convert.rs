//! End-to-end conversion: read, decode, re-encode as PNG, write.

use std::path::Path;

use image::GenericImageView;
use tempfile::NamedTempFile;

use crate::decode;
use crate::encode::{encode_png, PngCompression};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ConvertOptions {
    pub compression: PngCompression,
}

/// Re-save the image at `source` as a PNG at `dest`.
///
/// The PNG is encoded into a temporary file in the destination directory and
/// renamed into place, so `dest` is either replaced whole or left untouched.
pub fn convert(source: &Path, dest: &Path, options: &ConvertOptions) -> Result<()> {
    let img = decode::decode(source)?;

    let (width, height) = img.dimensions();
    log::debug!(
        "Decoded {}: {width}x{height} {:?}",
        source.display(),
        img.color()
    );

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::write(dest, e))?;

    encode_png(&img, &mut tmp, options.compression)?;
    tmp.persist(dest).map_err(|e| Error::write(dest, e.error))?;

    log::info!("Created PNG: {}", dest.display());
    Ok(())
}
