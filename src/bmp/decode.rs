//! Pixel array decoding for every supported bit depth.
//!
//! All four variants share one padded-row reader and one row flip; each
//! only supplies the conversion of a stored scanline into a row of output
//! pixels.

use std::io::Read;

use enough::Stop;
use imgref::ImgVec;
use rgb::{RGB8, RGBA8, RGBA16};

use super::header::InfoHeader;
use super::masks::{self, ChannelMask, ChannelMasks};
use super::utils::{flip_rows, row_stride, unpack_indices};
use crate::error::BmpError;
use crate::image::{BmpImage, IndexedImage};
use crate::pixel::BitDepth;

/// The closed set of scanline decoders.
#[derive(Debug)]
enum PixelDecoder {
    Indexed { bits: u32, palette: Vec<RGB8> },
    Direct16 { red: ChannelMask, green: ChannelMask, blue: ChannelMask },
    Direct24,
    Direct32 { masks: ChannelMasks },
}

impl PixelDecoder {
    fn new(info: &InfoHeader, palette: Vec<RGB8>) -> Result<Self, BmpError> {
        let resolved = masks::resolve(info)?;
        Ok(match (info.bit_depth, resolved) {
            (BitDepth::One | BitDepth::Four | BitDepth::Eight, _) => Self::Indexed {
                bits: info.bit_depth.bits(),
                palette,
            },
            (BitDepth::Sixteen, Some(m)) => Self::Direct16 {
                red: m.red,
                green: m.green,
                blue: m.blue,
            },
            (BitDepth::ThirtyTwo, Some(masks)) => Self::Direct32 { masks },
            (BitDepth::TwentyFour, _) => Self::Direct24,
            (depth, None) => {
                return Err(BmpError::UnsupportedBitDepth(depth.bits() as u16));
            }
        })
    }
}

/// Decode the pixel array starting at the reader's current position.
pub(crate) fn decode_pixels<R: Read>(
    reader: &mut R,
    info: &InfoHeader,
    palette: Vec<RGB8>,
    stop: &dyn Stop,
) -> Result<BmpImage, BmpError> {
    let rows = RowReader::new(info)?;

    match PixelDecoder::new(info, palette)? {
        PixelDecoder::Indexed { bits, palette } => {
            let indices = rows.decode(reader, stop, |row, out: &mut [u8]| {
                unpack_indices(bits, row, out);
                check_indices(out, palette.len())
            })?;
            Ok(BmpImage::Indexed(IndexedImage::new(indices, palette)))
        }
        PixelDecoder::Direct16 { red, green, blue } => {
            let img = rows.decode(reader, stop, |row, out: &mut [RGBA16]| {
                for (px, raw) in out.iter_mut().zip(row.chunks_exact(2)) {
                    let v = u32::from(u16::from_le_bytes([raw[0], raw[1]]));
                    *px = RGBA16::new(
                        red.extract_u16(v),
                        green.extract_u16(v),
                        blue.extract_u16(v),
                        0xFFFF,
                    );
                }
                Ok(())
            })?;
            Ok(BmpImage::Rgba16(img))
        }
        PixelDecoder::Direct24 => {
            let img = rows.decode(reader, stop, |row, out: &mut [RGBA8]| {
                for (px, raw) in out.iter_mut().zip(row.chunks_exact(3)) {
                    *px = RGBA8::new(raw[2], raw[1], raw[0], 255);
                }
                Ok(())
            })?;
            Ok(BmpImage::Rgba8(img))
        }
        PixelDecoder::Direct32 { masks } => {
            let img = rows.decode(reader, stop, |row, out: &mut [RGBA8]| {
                for (px, raw) in out.iter_mut().zip(row.chunks_exact(4)) {
                    let v = u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]);
                    let a = if masks.alpha.is_absent() {
                        255
                    } else {
                        masks.alpha.extract_u8(v)
                    };
                    *px = RGBA8::new(
                        masks.red.extract_u8(v),
                        masks.green.extract_u8(v),
                        masks.blue.extract_u8(v),
                        a,
                    );
                }
                Ok(())
            })?;
            Ok(BmpImage::Rgba8(img))
        }
    }
}

fn check_indices(indices: &[u8], palette_len: usize) -> Result<(), BmpError> {
    match indices.iter().find(|&&idx| usize::from(idx) >= palette_len) {
        Some(idx) => Err(BmpError::InvalidData(format!(
            "palette index {idx} out of range (palette has {palette_len} entries)"
        ))),
        None => Ok(()),
    }
}

/// Reads padded scanlines in storage order, then flips bottom-up images
/// so row 0 is the top.
struct RowReader {
    width: usize,
    height: usize,
    stride: usize,
    bottom_up: bool,
}

impl RowReader {
    fn new(info: &InfoHeader) -> Result<Self, BmpError> {
        let (width, height) = (info.width(), info.height());
        let stride = row_stride(width, info.bit_depth.bits())
            .map_err(|_| BmpError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width: width as usize,
            height: height as usize,
            stride,
            bottom_up: info.is_bottom_up(),
        })
    }

    fn decode<R, T, F>(
        &self,
        reader: &mut R,
        stop: &dyn Stop,
        mut convert: F,
    ) -> Result<ImgVec<T>, BmpError>
    where
        R: Read,
        T: Copy + Default,
        F: FnMut(&[u8], &mut [T]) -> Result<(), BmpError>,
    {
        let too_large = || BmpError::DimensionsTooLarge {
            width: self.width as u32,
            height: self.height as u32,
        };
        let len = self.width.checked_mul(self.height).ok_or_else(too_large)?;

        // Grows row by row, so a truncated stream fails before the whole
        // declared image is touched.
        let mut pixels: Vec<T> = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| too_large())?;
        let mut row = vec![0u8; self.stride];

        for row_idx in 0..self.height {
            if row_idx % 16 == 0 {
                stop.check()?;
            }
            reader.read_exact(&mut row)?;
            let start = pixels.len();
            pixels.resize(start + self.width, T::default());
            convert(&row, &mut pixels[start..])?;
        }

        if self.bottom_up {
            flip_rows(&mut pixels, self.width);
        }
        Ok(ImgVec::new(pixels, self.width, self.height))
    }
}
