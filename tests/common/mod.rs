//! Synthetic BMP streams for integration tests.
#![allow(dead_code)]

/// Byte used to fill scanline padding, so a decoder that reads padding
/// as pixels produces visibly wrong output.
pub const PAD: u8 = 0xEE;

pub struct Bmp {
    core: bool,
    width: i32,
    height: i32,
    bit_count: u16,
    compression: u32,
    colors_used: u32,
    palette: Vec<[u8; 3]>,
    masks: Option<[u32; 4]>,
    gap: usize,
    data_offset: Option<u32>,
    pixels: Vec<u8>,
}

impl Bmp {
    pub fn new(width: i32, height: i32, bit_count: u16) -> Self {
        Self {
            core: false,
            width,
            height,
            bit_count,
            compression: 0,
            colors_used: 0,
            palette: Vec::new(),
            masks: None,
            gap: 0,
            data_offset: None,
            pixels: Vec::new(),
        }
    }

    /// Use the 12-byte core header (16-bit dimensions, no compression).
    pub fn core(mut self) -> Self {
        self.core = true;
        self
    }

    /// Color table entries as `[r, g, b]`.
    pub fn palette(mut self, entries: &[[u8; 3]]) -> Self {
        self.palette = entries.to_vec();
        self
    }

    pub fn colors_used(mut self, n: u32) -> Self {
        self.colors_used = n;
        self
    }

    pub fn compression(mut self, c: u32) -> Self {
        self.compression = c;
        self
    }

    /// Switch to bit-fields mode with masks in r, g, b, a order.
    pub fn bitfields(mut self, masks: [u32; 4]) -> Self {
        self.compression = 3;
        self.masks = Some(masks);
        self
    }

    /// Unused bytes between the header data and the pixel array.
    pub fn gap(mut self, n: usize) -> Self {
        self.gap = n;
        self
    }

    pub fn data_offset(mut self, offset: u32) -> Self {
        self.data_offset = Some(offset);
        self
    }

    /// Scanline bytes in storage order; each is padded to the 4-byte
    /// stride with [`PAD`].
    pub fn rows(mut self, rows: &[&[u8]]) -> Self {
        let stride = stride(self.width.unsigned_abs(), u32::from(self.bit_count));
        self.pixels.clear();
        for row in rows {
            assert!(row.len() <= stride, "row longer than stride");
            self.pixels.extend_from_slice(row);
            self.pixels.resize(self.pixels.len() + stride - row.len(), PAD);
        }
        self
    }

    /// Raw pixel array bytes, no padding added.
    pub fn raw_pixels(mut self, bytes: &[u8]) -> Self {
        self.pixels = bytes.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let info_size: u32 = if self.core { 12 } else { 40 };
        let masks_size = if self.masks.is_some() { 16 } else { 0 };
        let offset = 14 + info_size as usize + self.palette.len() * 4 + masks_size + self.gap;
        let data_offset = self.data_offset.unwrap_or(offset as u32);
        let file_size = (offset + self.pixels.len()) as u32;

        let mut out = Vec::new();
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes());
        out.extend_from_slice(&data_offset.to_le_bytes());

        out.extend_from_slice(&info_size.to_le_bytes());
        if self.core {
            out.extend_from_slice(&(self.width as u16).to_le_bytes());
            out.extend_from_slice(&(self.height as u16).to_le_bytes());
            out.extend_from_slice(&1u16.to_le_bytes());
            out.extend_from_slice(&self.bit_count.to_le_bytes());
        } else {
            out.extend_from_slice(&self.width.to_le_bytes());
            out.extend_from_slice(&self.height.to_le_bytes());
            out.extend_from_slice(&1u16.to_le_bytes());
            out.extend_from_slice(&self.bit_count.to_le_bytes());
            out.extend_from_slice(&self.compression.to_le_bytes());
            out.extend_from_slice(&(self.pixels.len() as u32).to_le_bytes());
            out.extend_from_slice(&2835i32.to_le_bytes());
            out.extend_from_slice(&2835i32.to_le_bytes());
            out.extend_from_slice(&self.colors_used.to_le_bytes());
            out.extend_from_slice(&0u32.to_le_bytes());
        }

        for [r, g, b] in &self.palette {
            out.extend_from_slice(&[*b, *g, *r, 0]);
        }
        if let Some(masks) = self.masks {
            for m in masks {
                out.extend_from_slice(&m.to_le_bytes());
            }
        }
        out.resize(out.len() + self.gap, 0);
        out.extend_from_slice(&self.pixels);
        out
    }
}

/// Reference scanline stride, `ceil(width * bits / 32) * 4`.
pub fn stride(width: u32, bits: u32) -> usize {
    ((width * bits + 31) / 32 * 4) as usize
}

/// `n` palette entries with entry `i` = `[i, i, i]`.
pub fn gray_palette(n: usize) -> Vec<[u8; 3]> {
    (0..n).map(|i| [i as u8; 3]).collect()
}
