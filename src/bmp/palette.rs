use std::io::Read;

use rgb::RGB8;

use super::header::{InfoHeader, read_array};
use crate::error::BmpError;
use crate::limits::Limits;

/// Number of color table entries following the info header.
///
/// Zero for direct-color images that declare no color count; otherwise
/// `colors_used` when set, else `2^bits`.
pub(crate) fn palette_len(info: &InfoHeader) -> u64 {
    let bits = info.bit_depth.bits();
    if bits > 8 && info.colors_used == 0 {
        0
    } else if info.colors_used != 0 {
        u64::from(info.colors_used)
    } else {
        1u64 << bits
    }
}

/// Read the color table. Each entry is stored `[b, g, r, reserved]`.
pub(crate) fn read_palette<R: Read>(
    reader: &mut R,
    info: &InfoHeader,
    limits: Option<&Limits>,
) -> Result<Vec<RGB8>, BmpError> {
    let len = palette_len(info);
    if let Some(limits) = limits {
        limits.check_memory(len * 3)?;
    }

    let mut palette = Vec::with_capacity(len.min(256) as usize);
    for _ in 0..len {
        let [b, g, r, _] = read_array::<R, 4>(reader)?;
        palette.push(RGB8::new(r, g, b));
    }
    log::trace!("palette: {} entries", palette.len());
    Ok(palette)
}
