//! Channel masks for 16-bit and 32-bit direct color.

use std::io::Read;

use super::header::{Compression, InfoHeader, read_array};
use crate::error::BmpError;
use crate::pixel::BitDepth;

/// Split a mask into (shift, width): the index of the lowest set bit and
/// the number of contiguous set bits starting there.
///
/// A zero mask gives `(0, 0)`, meaning the channel is absent. Bits above
/// the first run are ignored.
pub const fn mask_shift(mask: u32) -> (u32, u32) {
    if mask == 0 {
        return (0, 0);
    }
    let shift = mask.trailing_zeros();
    (shift, (mask >> shift).trailing_ones())
}

/// One channel's mask with its precomputed shift and width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMask {
    mask: u32,
    shift: u32,
    width: u32,
}

impl ChannelMask {
    pub const fn new(mask: u32) -> Self {
        let (shift, width) = mask_shift(mask);
        Self { mask, shift, width }
    }

    pub const fn mask(&self) -> u32 {
        self.mask
    }

    pub const fn shift(&self) -> u32 {
        self.shift
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn is_absent(&self) -> bool {
        self.mask == 0
    }

    /// Whether the set bits form one run.
    pub const fn is_contiguous(&self) -> bool {
        self.mask == 0 || (self.mask >> self.shift).count_ones() == self.width
    }

    #[inline]
    fn extract(&self, pixel: u32) -> u32 {
        (pixel & self.mask) >> self.shift
    }

    /// Channel value truncated to a byte.
    #[inline]
    pub fn extract_u8(&self, pixel: u32) -> u8 {
        self.extract(pixel) as u8
    }

    /// Channel value widened to 16 bits by bit replication.
    #[inline]
    pub fn extract_u16(&self, pixel: u32) -> u16 {
        expand_to_u16(self.extract(pixel), self.width)
    }
}

/// Widen a `width`-bit sample to 16 bits, repeating its bits into the
/// low end so all-ones maps to 0xFFFF and zero maps to zero.
pub(crate) fn expand_to_u16(value: u32, width: u32) -> u16 {
    match width {
        0 => 0,
        w if w >= 16 => (value >> (w - 16)) as u16,
        w => {
            let mut v = value << (16 - w);
            let mut filled = w;
            while filled < 16 {
                v |= v >> filled;
                filled *= 2;
            }
            v as u16
        }
    }
}

/// Red, green, blue and alpha masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelMasks {
    pub red: ChannelMask,
    pub green: ChannelMask,
    pub blue: ChannelMask,
    pub alpha: ChannelMask,
}

impl ChannelMasks {
    pub const fn from_raw([r, g, b, a]: [u32; 4]) -> Self {
        Self {
            red: ChannelMask::new(r),
            green: ChannelMask::new(g),
            blue: ChannelMask::new(b),
            alpha: ChannelMask::new(a),
        }
    }

    /// Implicit layout for a direct-color depth: 5-6-5 for 16-bit,
    /// 0xAARRGGBB for 32-bit. 24-bit and indexed depths have none.
    pub const fn defaults(depth: BitDepth) -> Option<Self> {
        match depth {
            BitDepth::Sixteen => Some(Self::from_raw([0xF800, 0x07E0, 0x001F, 0])),
            BitDepth::ThirtyTwo => Some(Self::from_raw([
                0x00FF_0000,
                0x0000_FF00,
                0x0000_00FF,
                0xFF00_0000,
            ])),
            _ => None,
        }
    }

    fn channels(&self) -> [(&'static str, ChannelMask); 4] {
        [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ]
    }

    /// Reject masks that are not one run of bits or that reach past the
    /// pixel word. 16-bit pixels have no alpha, so that mask is not checked.
    fn validate(&self, depth: BitDepth) -> Result<(), BmpError> {
        let (word, checked) = match depth {
            BitDepth::Sixteen => (0xFFFF, 3),
            _ => (u32::MAX, 4),
        };
        for (channel, mask) in self.channels().into_iter().take(checked) {
            if !mask.is_contiguous() || mask.mask() & !word != 0 {
                return Err(BmpError::InvalidMask {
                    channel,
                    mask: mask.mask(),
                });
            }
        }
        Ok(())
    }
}

/// Read the four bit-field masks in red, green, blue, alpha order.
pub(crate) fn read_bitfields<R: Read>(reader: &mut R) -> Result<ChannelMasks, BmpError> {
    let raw: [u8; 16] = read_array(reader)?;
    let mut masks = [0u32; 4];
    for (mask, bytes) in masks.iter_mut().zip(raw.chunks_exact(4)) {
        *mask = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    log::trace!(
        "bitfield masks: r {:#010x} g {:#010x} b {:#010x} a {:#010x}",
        masks[0],
        masks[1],
        masks[2],
        masks[3]
    );
    Ok(ChannelMasks::from_raw(masks))
}

/// Masks that apply to the pixel array: the file's bit-fields when that
/// mode is active on a 16/32-bit image, the depth defaults otherwise.
pub(crate) fn resolve(info: &InfoHeader) -> Result<Option<ChannelMasks>, BmpError> {
    let defaults = ChannelMasks::defaults(info.bit_depth);
    match (info.compression, info.masks, defaults) {
        (Compression::Bitfields, Some(masks), Some(_)) => {
            masks.validate(info.bit_depth)?;
            Ok(Some(masks))
        }
        (Compression::Bitfields, Some(_), None) => {
            log::debug!(
                "ignoring bitfield masks for {:?} image",
                info.bit_depth
            );
            Ok(None)
        }
        _ => Ok(defaults),
    }
}
