//! File header and info header parsing.
//!
//! Both info header variants are read into a byte array and decoded by
//! explicit offset, then normalized into one [`InfoHeader`].

use std::io::Read;

use super::masks::ChannelMasks;
use crate::error::BmpError;
use crate::pixel::BitDepth;

pub(crate) const FILE_HEADER_SIZE: usize = 14;
const CORE_HEADER_SIZE: u32 = 12;
const INFO_HEADER_SIZE: u32 = 40;

/// Which info header layout the file uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVariant {
    /// `BITMAPCOREHEADER`: 16-bit dimensions, no compression field.
    Core,
    /// `BITMAPINFOHEADER`: signed 32-bit dimensions plus compression and
    /// color-count fields.
    Info,
}

impl HeaderVariant {
    /// The size tag stored in the first 4 bytes of the info header.
    pub fn size(self) -> u32 {
        match self {
            Self::Core => CORE_HEADER_SIZE,
            Self::Info => INFO_HEADER_SIZE,
        }
    }
}

/// Pixel array compression mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// `BI_RGB`: uncompressed, implicit channel layout.
    Rgb,
    /// `BI_BITFIELDS`: uncompressed, four explicit channel masks follow.
    Bitfields,
}

impl Compression {
    fn from_u32(value: u32) -> Result<Self, BmpError> {
        match value {
            0 => Ok(Self::Rgb),
            3 => Ok(Self::Bitfields),
            other => Err(BmpError::UnsupportedCompression(other)),
        }
    }
}

/// The 14-byte header at the start of every BMP file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Always `b"BM"` once parsed.
    pub signature: [u8; 2],
    /// Declared total file size. Not checked against the stream.
    pub file_size: u32,
    pub reserved: u32,
    /// Byte offset of the pixel array from the start of the file.
    pub data_offset: u32,
}

/// Canonical info header, whichever variant the file stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub variant: HeaderVariant,
    pub width: i32,
    /// Positive for bottom-up rows, negative for top-down.
    pub height: i32,
    pub planes: u16,
    pub bit_depth: BitDepth,
    pub compression: Compression,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
    /// Present only when `compression` is [`Compression::Bitfields`] and
    /// the masks have been read.
    pub masks: Option<ChannelMasks>,
}

impl InfoHeader {
    /// Width in pixels. Always nonzero once parsed.
    pub fn width(&self) -> u32 {
        self.width.unsigned_abs()
    }

    /// Height in pixels, regardless of row order.
    pub fn height(&self) -> u32 {
        self.height.unsigned_abs()
    }

    /// Whether the first stored row is the bottom of the image.
    pub fn is_bottom_up(&self) -> bool {
        self.height > 0
    }
}

#[inline]
fn u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

#[inline]
fn u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[inline]
fn i32_le(bytes: &[u8]) -> i32 {
    u32_le(bytes) as i32
}

pub(crate) fn read_array<R: Read, const N: usize>(reader: &mut R) -> Result<[u8; N], BmpError> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read the 14-byte file header and check the signature.
pub(crate) fn read_file_header<R: Read>(reader: &mut R) -> Result<FileHeader, BmpError> {
    let raw: [u8; FILE_HEADER_SIZE] = read_array(reader)?;
    let signature = [raw[0], raw[1]];
    if &signature != b"BM" {
        return Err(BmpError::InvalidSignature(signature));
    }
    let header = FileHeader {
        signature,
        file_size: u32_le(&raw[2..6]),
        reserved: u32_le(&raw[6..10]),
        data_offset: u32_le(&raw[10..14]),
    };
    log::trace!(
        "file header: size {}, pixel data at {}",
        header.file_size,
        header.data_offset
    );
    Ok(header)
}

/// Read the size tag and the matching info header variant.
pub(crate) fn read_info_header<R: Read>(reader: &mut R) -> Result<InfoHeader, BmpError> {
    let size = u32::from_le_bytes(read_array(reader)?);
    let header = match size {
        CORE_HEADER_SIZE => parse_core(&read_array::<R, 8>(reader)?)?,
        INFO_HEADER_SIZE => parse_info(&read_array::<R, 36>(reader)?)?,
        other => return Err(BmpError::UnsupportedHeader(other)),
    };

    if header.width <= 0 {
        return Err(BmpError::InvalidHeader(format!(
            "width must be positive, got {}",
            header.width
        )));
    }
    if header.height == 0 {
        return Err(BmpError::InvalidHeader("height is zero".into()));
    }

    log::trace!(
        "info header: {:?} {}x{} {:?} {:?}, {} colors used",
        header.variant,
        header.width,
        header.height,
        header.bit_depth,
        header.compression,
        header.colors_used
    );
    Ok(header)
}

/// Fields after the size tag of a `BITMAPCOREHEADER`.
fn parse_core(raw: &[u8; 8]) -> Result<InfoHeader, BmpError> {
    Ok(InfoHeader {
        variant: HeaderVariant::Core,
        width: i32::from(u16_le(&raw[0..2])),
        height: i32::from(u16_le(&raw[2..4])),
        planes: u16_le(&raw[4..6]),
        bit_depth: BitDepth::from_bit_count(u16_le(&raw[6..8]))?,
        compression: Compression::Rgb,
        image_size: 0,
        x_pixels_per_meter: 0,
        y_pixels_per_meter: 0,
        colors_used: 0,
        colors_important: 0,
        masks: None,
    })
}

/// Fields after the size tag of a `BITMAPINFOHEADER`.
fn parse_info(raw: &[u8; 36]) -> Result<InfoHeader, BmpError> {
    Ok(InfoHeader {
        variant: HeaderVariant::Info,
        width: i32_le(&raw[0..4]),
        height: i32_le(&raw[4..8]),
        planes: u16_le(&raw[8..10]),
        bit_depth: BitDepth::from_bit_count(u16_le(&raw[10..12]))?,
        compression: Compression::from_u32(u32_le(&raw[12..16]))?,
        image_size: u32_le(&raw[16..20]),
        x_pixels_per_meter: i32_le(&raw[20..24]),
        y_pixels_per_meter: i32_le(&raw[24..28]),
        colors_used: u32_le(&raw[28..32]),
        colors_important: u32_le(&raw[32..36]),
        masks: None,
    })
}
