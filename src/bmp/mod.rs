//! BMP decode pipeline (internal).
//!
//! Use top-level [`crate::decode`], [`crate::probe`] or
//! [`crate::DecodeRequest`].

mod decode;
pub(crate) mod header;
pub(crate) mod masks;
mod palette;
mod utils;

use std::io::{Read, Seek, SeekFrom};

use enough::Stop;

use crate::error::BmpError;
use crate::image::BmpImage;
use crate::limits::Limits;
use header::{Compression, FileHeader, InfoHeader};

/// Parse the file header and info header, leaving the reader just past
/// the info header.
pub(crate) fn read_headers<R: Read>(reader: &mut R) -> Result<(FileHeader, InfoHeader), BmpError> {
    let file = header::read_file_header(reader)?;
    let info = header::read_info_header(reader)?;
    Ok((file, info))
}

/// Decode a whole BMP stream: headers, palette, bit-field masks, then one
/// seek to the pixel array.
pub(crate) fn decode<R: Read + Seek>(
    reader: &mut R,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<BmpImage, BmpError> {
    let (file, mut info) = read_headers(reader)?;
    check_limits(limits, &info)?;
    stop.check()?;

    let palette = palette::read_palette(reader, &info, limits)?;
    if info.compression == Compression::Bitfields {
        info.masks = Some(masks::read_bitfields(reader)?);
    }

    log::debug!("seeking to pixel data at {}", file.data_offset);
    reader.seek(SeekFrom::Start(u64::from(file.data_offset)))?;

    decode::decode_pixels(reader, &info, palette, stop)
}

fn check_limits(limits: Option<&Limits>, info: &InfoHeader) -> Result<(), BmpError> {
    let (width, height) = (info.width(), info.height());
    if let Some(limits) = limits {
        limits.check(width, height)?;
        let out_bytes = (u64::from(width) * u64::from(height))
            .saturating_mul(info.bit_depth.output_layout().bytes_per_pixel() as u64);
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}
