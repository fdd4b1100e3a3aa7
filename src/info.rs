use std::io::Read;

use crate::bmp::header::{Compression, FileHeader, HeaderVariant, InfoHeader};
use crate::error::BmpError;
use crate::pixel::{BitDepth, PixelLayout};

/// Header summary returned by [`crate::probe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// First stored row is the top of the image (negative declared height).
    pub top_down: bool,
    pub bit_depth: BitDepth,
    pub compression: Compression,
    pub header_variant: HeaderVariant,
    /// Layout [`crate::decode`] will produce.
    pub layout: PixelLayout,
    pub file: FileHeader,
    pub info: InfoHeader,
}

impl ImageInfo {
    /// Parse only the file and info headers.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, BmpError> {
        let (file, info) = crate::bmp::read_headers(&mut reader)?;
        Ok(Self::from_headers(file, info))
    }

    /// Parse the headers of an in-memory BMP.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        Self::from_reader(data)
    }

    fn from_headers(file: FileHeader, info: InfoHeader) -> Self {
        Self {
            width: info.width(),
            height: info.height(),
            top_down: !info.is_bottom_up(),
            bit_depth: info.bit_depth,
            compression: info.compression,
            header_variant: info.variant,
            layout: info.bit_depth.output_layout(),
            file,
            info,
        }
    }
}
