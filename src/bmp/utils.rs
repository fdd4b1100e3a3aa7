//! Scanline geometry and sub-byte index unpacking.
//!
//! `unpack_indices` is forked from zune-bmp 0.5.2 by Caleb Etemesi
//! (MIT/Apache-2.0/Zlib), reduced to the palette-index case.

use crate::error::BmpError;

/// Bytes per stored scanline: `ceil(width * bits / 32) * 4`.
pub(crate) fn row_stride(width: u32, bits: u32) -> Result<usize, BmpError> {
    (width as usize)
        .checked_mul(bits as usize)
        .map(|row_bits| row_bits.div_ceil(32) * 4)
        .ok_or(BmpError::DimensionsTooLarge { width, height: 0 })
}

/// Reverse the row order of a `width`-wide pixel buffer in place, turning
/// bottom-up storage order into top-down.
pub(crate) fn flip_rows<T>(buf: &mut [T], width: usize) {
    if width == 0 {
        return;
    }
    let rows = buf.len() / width;
    let (top, bottom) = buf.split_at_mut(rows / 2 * width);
    let bottom_start = bottom.len() - rows / 2 * width;
    for (upper, lower) in top
        .chunks_exact_mut(width)
        .zip(bottom[bottom_start..].rchunks_exact_mut(width))
    {
        upper.swap_with_slice(lower);
    }
}

/// Unpack 1, 4 or 8-bit palette indices, leftmost pixel in the highest
/// bits of each byte. Fills `out.len()` indices; trailing bits of the last
/// byte are ignored.
pub(crate) fn unpack_indices(depth: u32, input: &[u8], out: &mut [u8]) {
    match depth {
        1 => {
            let mut in_iter = input.iter();
            let mut out_iter = out.chunks_exact_mut(8);

            (&mut out_iter)
                .zip(&mut in_iter)
                .for_each(|(out_vals, in_val)| {
                    for (pos, out_val) in out_vals.iter_mut().enumerate() {
                        *out_val = (in_val >> (7 - pos)) & 0x01;
                    }
                });

            if let Some(in_val) = in_iter.next() {
                let remainder_iter = out_iter.into_remainder().iter_mut();
                remainder_iter.enumerate().for_each(|(pos, out_val)| {
                    *out_val = (in_val >> (7 - pos)) & 0x01;
                });
            }
        }
        4 => {
            let mut in_iter = input.iter();
            let mut out_iter = out.chunks_exact_mut(2);

            (&mut out_iter)
                .zip(&mut in_iter)
                .for_each(|(out_vals, in_val)| {
                    out_vals[0] = (in_val >> 4) & 0x0f;
                    out_vals[1] = in_val & 0x0f;
                });

            if let Some(in_val) = in_iter.next() {
                if let Some(out_val) = out_iter.into_remainder().first_mut() {
                    *out_val = (in_val >> 4) & 0x0f;
                }
            }
        }
        8 => {
            let n = out.len().min(input.len());
            out[..n].copy_from_slice(&input[..n]);
        }
        _ => {}
    }
}
