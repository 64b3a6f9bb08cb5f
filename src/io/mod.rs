//! I/O layer: decoding source images, encoding results as PNG or JPEG, and the
//! path rules that decide which files are images and where outputs land.
pub mod decode;
pub mod encode;
pub mod paths;

pub use decode::read_image;
pub use encode::{JPEG_QUALITY, encode_image};
pub use paths::{
    DEFAULT_OUTPUT_DIR_NAME, SUPPORTED_EXTENSIONS, batch_output_name, dotted_extension,
    is_supported_image, is_webp, resolve_output_path,
};
