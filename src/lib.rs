//! # zenbmp
//!
//! Windows Bitmap (BMP/DIB) decoder.
//!
//! ## Supported Input
//!
//! - `BITMAPCOREHEADER` (12 bytes) and `BITMAPINFOHEADER` (40 bytes)
//! - 1, 4 and 8-bit indexed color, decoded to palette indices plus palette
//! - 16-bit packed RGB (5-6-5 by default, or explicit `BI_BITFIELDS` masks),
//!   widened to 16 bits per channel
//! - 24-bit BGR and 32-bit packed RGBA (0xAARRGGBB by default, or explicit
//!   masks), decoded to 8-bit RGBA
//! - bottom-up (positive height) and top-down (negative height) row order;
//!   the decoded image always has row 0 at the top
//!
//! ## Non-Goals
//!
//! - Encoding
//! - RLE4/RLE8, embedded JPEG/PNG
//! - V4/V5 headers, ICC profiles, OS/2 2.x headers
//! - Gamma correction
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{BmpImage, ImageInfo};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.bit_depth);
//!
//! let image = zenbmp::decode_bytes(data)?;
//! if let Some(px) = image.rgba8(0, 0) {
//!     println!("top-left: {px:?}");
//! }
//! if let BmpImage::Indexed(indexed) = &image {
//!     println!("{} palette entries", indexed.palette().len());
//! }
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod error;
mod image;
mod info;
mod limits;
mod pixel;

use std::io::{Read, Seek};

// Re-exports
pub use bmp::header::{Compression, FileHeader, HeaderVariant, InfoHeader};
pub use bmp::masks::{ChannelMask, ChannelMasks, mask_shift};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use image::{BmpImage, IndexedImage};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{BitDepth, PixelLayout};

/// Decode a BMP from a seekable stream, with no limits.
pub fn decode<R: Read + Seek>(reader: R) -> Result<BmpImage, BmpError> {
    DecodeRequest::new(reader).decode(Unstoppable)
}

/// Decode an in-memory BMP.
pub fn decode_bytes(data: &[u8]) -> Result<BmpImage, BmpError> {
    decode(std::io::Cursor::new(data))
}

/// Read only the headers. The stream does not need to be seekable.
pub fn probe<R: Read>(reader: R) -> Result<ImageInfo, BmpError> {
    ImageInfo::from_reader(reader)
}
