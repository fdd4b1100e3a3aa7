use imgref::{ImgRef, ImgVec};
use rgb::{ComponentBytes as _, RGB8, RGBA8, RGBA16};

use crate::pixel::PixelLayout;

/// A decoded 1, 4 or 8-bit image: one palette index per pixel plus the
/// palette it indexes.
#[derive(Clone, Debug)]
pub struct IndexedImage {
    indices: ImgVec<u8>,
    palette: Vec<RGB8>,
}

impl IndexedImage {
    /// Every index must be below `palette.len()`.
    pub(crate) fn new(indices: ImgVec<u8>, palette: Vec<RGB8>) -> Self {
        Self { indices, palette }
    }

    pub fn width(&self) -> usize {
        self.indices.width()
    }

    pub fn height(&self) -> usize {
        self.indices.height()
    }

    pub fn palette(&self) -> &[RGB8] {
        &self.palette
    }

    /// Index buffer, row 0 at the top.
    pub fn indices(&self) -> ImgRef<'_, u8> {
        self.indices.as_ref()
    }

    /// Palette index at (x, y), or `None` outside the image.
    pub fn index(&self, x: usize, y: usize) -> Option<u8> {
        (x < self.width() && y < self.height()).then(|| self.indices[(x, y)])
    }

    /// Opaque palette color at (x, y).
    pub fn color(&self, x: usize, y: usize) -> Option<RGBA8> {
        let idx = self.index(x, y)?;
        self.palette
            .get(usize::from(idx))
            .map(|c| RGBA8::new(c.r, c.g, c.b, 255))
    }
}

/// A decoded BMP image with (0, 0) at the visual top-left.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum BmpImage {
    /// 1, 4 and 8-bit images.
    Indexed(IndexedImage),
    /// 16-bit images, channels widened to 16 bits. Alpha is always 0xFFFF.
    Rgba16(ImgVec<RGBA16>),
    /// 24-bit and 32-bit images.
    Rgba8(ImgVec<RGBA8>),
}

impl BmpImage {
    pub fn width(&self) -> usize {
        match self {
            Self::Indexed(img) => img.width(),
            Self::Rgba16(img) => img.width(),
            Self::Rgba8(img) => img.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Indexed(img) => img.height(),
            Self::Rgba16(img) => img.height(),
            Self::Rgba8(img) => img.height(),
        }
    }

    pub fn layout(&self) -> PixelLayout {
        match self {
            Self::Indexed(_) => PixelLayout::Indexed8,
            Self::Rgba16(_) => PixelLayout::Rgba16,
            Self::Rgba8(_) => PixelLayout::Rgba8,
        }
    }

    /// The color table of an indexed image.
    pub fn palette(&self) -> Option<&[RGB8]> {
        match self {
            Self::Indexed(img) => Some(img.palette()),
            _ => None,
        }
    }

    /// Pixel at (x, y) as 8-bit RGBA. 16-bit channels keep their high byte.
    pub fn rgba8(&self, x: usize, y: usize) -> Option<RGBA8> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        match self {
            Self::Indexed(img) => img.color(x, y),
            Self::Rgba16(img) => Some(narrow(img[(x, y)])),
            Self::Rgba8(img) => Some(img[(x, y)]),
        }
    }

    /// Pixel at (x, y) as 16-bit RGBA. 8-bit channels are replicated
    /// (0xAB becomes 0xABAB).
    pub fn rgba16(&self, x: usize, y: usize) -> Option<RGBA16> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        match self {
            Self::Indexed(img) => img.color(x, y).map(widen),
            Self::Rgba16(img) => Some(img[(x, y)]),
            Self::Rgba8(img) => Some(widen(img[(x, y)])),
        }
    }

    /// Copy into a plain 8-bit RGBA buffer, resolving palette indices.
    pub fn to_rgba8(&self) -> ImgVec<RGBA8> {
        let (width, height) = (self.width(), self.height());
        let buf: Vec<RGBA8> = match self {
            Self::Indexed(img) => img
                .indices
                .pixels()
                .map(|idx| {
                    img.palette
                        .get(usize::from(idx))
                        .map_or(RGBA8::new(0, 0, 0, 255), |c| RGBA8::new(c.r, c.g, c.b, 255))
                })
                .collect(),
            Self::Rgba16(img) => img.pixels().map(narrow).collect(),
            Self::Rgba8(img) => img.pixels().collect(),
        };
        ImgVec::new(buf, width, height)
    }

    /// RGBA bytes, 4 per pixel, row 0 first.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.to_rgba8().buf().as_bytes().to_vec()
    }
}

#[inline]
fn narrow(px: RGBA16) -> RGBA8 {
    RGBA8::new(
        (px.r >> 8) as u8,
        (px.g >> 8) as u8,
        (px.b >> 8) as u8,
        (px.a >> 8) as u8,
    )
}

#[inline]
fn widen(px: RGBA8) -> RGBA16 {
    RGBA16::new(
        u16::from(px.r) * 257,
        u16::from(px.g) * 257,
        u16::from(px.b) * 257,
        u16::from(px.a) * 257,
    )
}
