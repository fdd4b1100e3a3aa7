use enough::StopReason;

/// Errors from BMP decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("invalid BMP signature {0:02x?}, expected \"BM\"")]
    InvalidSignature([u8; 2]),

    #[error("unsupported header variant: {0}-byte info header")]
    UnsupportedHeader(u32),

    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(u16),

    #[error("unsupported compression mode: {0}")]
    UnsupportedCompression(u32),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid {channel} channel mask {mask:#010x}")]
    InvalidMask { channel: &'static str, mask: u32 },

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl BmpError {
    /// The input is structurally invalid or uses a layout this decoder
    /// does not handle.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignature(_)
                | Self::UnsupportedHeader(_)
                | Self::UnsupportedBitDepth(_)
                | Self::UnsupportedCompression(_)
                | Self::InvalidHeader(_)
                | Self::InvalidMask { .. }
                | Self::InvalidData(_)
        )
    }

    /// The underlying stream ended early or could not seek.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
