pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;

// Re-export commonly used types
pub use convert::{convert, ConvertOptions};
pub use encode::{encode_png, PngCompression};
pub use error::{Error, Result};
