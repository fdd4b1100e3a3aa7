use crate::error::BmpError;

/// Bits per pixel of a BMP pixel array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1-bit indexed.
    One,
    /// 4-bit indexed.
    Four,
    /// 8-bit indexed.
    Eight,
    /// 16-bit packed RGB.
    Sixteen,
    /// 24-bit BGR.
    TwentyFour,
    /// 32-bit packed RGBA.
    ThirtyTwo,
}

impl BitDepth {
    /// Map the header's bit count, rejecting anything outside {1,4,8,16,24,32}.
    pub fn from_bit_count(bit_count: u16) -> Result<Self, BmpError> {
        match bit_count {
            1 => Ok(Self::One),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            24 => Ok(Self::TwentyFour),
            32 => Ok(Self::ThirtyTwo),
            other => Err(BmpError::UnsupportedBitDepth(other)),
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Four => 4,
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::TwentyFour => 24,
            Self::ThirtyTwo => 32,
        }
    }

    /// Whether pixels are palette indices.
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::One | Self::Four | Self::Eight)
    }

    /// Storage layout of the decoded image for this depth.
    pub fn output_layout(self) -> PixelLayout {
        match self {
            Self::One | Self::Four | Self::Eight => PixelLayout::Indexed8,
            Self::Sixteen => PixelLayout::Rgba16,
            Self::TwentyFour | Self::ThirtyTwo => PixelLayout::Rgba8,
        }
    }
}

/// Pixel memory layout of a decoded image.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// One palette index byte per pixel.
    Indexed8,
    /// 4 channels, 16-bit RGBA.
    Rgba16,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Indexed8 => 1,
            Self::Rgba16 => 8,
            Self::Rgba8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Indexed8 => 1,
            Self::Rgba16 | Self::Rgba8 => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unlisted_bit_counts() {
        for bad in [0u16, 2, 3, 15, 48, 64] {
            assert!(matches!(
                BitDepth::from_bit_count(bad),
                Err(BmpError::UnsupportedBitDepth(b)) if b == bad
            ));
        }
    }

    #[test]
    fn indexed_depths_store_one_byte() {
        for bits in [1u16, 4, 8] {
            let depth = BitDepth::from_bit_count(bits).unwrap();
            assert!(depth.is_indexed());
            assert_eq!(depth.bits(), u32::from(bits));
            assert_eq!(depth.output_layout().bytes_per_pixel(), 1);
        }
        assert_eq!(BitDepth::Sixteen.output_layout(), PixelLayout::Rgba16);
        assert_eq!(BitDepth::ThirtyTwo.output_layout().channels(), 4);
    }
}
