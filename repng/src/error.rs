use std::io;
use std::path::{Path, PathBuf};

use image::error::{ImageError, ImageFormatHint};

pub type Result<T> = std::result::Result<T, Error>;

/// Conversion failures, tagged by the pipeline step that produced them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The format was recognized but no codec for it is built into the
    /// image stack. An environment problem, not a data problem.
    #[error("no codec available for {format}")]
    MissingCodec {
        format: ImageFormatHint,
        #[source]
        source: ImageError,
    },

    /// The source is missing, unreadable, or not a decodable image.
    #[error("cannot decode `{}`: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },

    /// PNG encoding of the decoded raster failed.
    #[error("cannot encode PNG: {source}")]
    Encode {
        #[source]
        source: ImageError,
    },

    /// The destination could not be created or replaced.
    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Classify a decode failure.
    ///
    /// `Unsupported` with a concrete format hint means the stack knows what
    /// the file is but has no codec for it; anything else (including read
    /// errors, which the image crate folds into `IoError`) is a plain
    /// decode failure.
    pub(crate) fn decode(path: &Path, source: ImageError) -> Self {
        match source {
            ImageError::Unsupported(err)
                if !matches!(err.format_hint(), ImageFormatHint::Unknown) =>
            {
                Error::MissingCodec {
                    format: err.format_hint(),
                    source: ImageError::Unsupported(err),
                }
            }
            source => Error::Decode {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
