use std::io::{Read, Seek};

use enough::Stop;

use crate::error::BmpError;
use crate::image::BmpImage;
use crate::limits::Limits;

/// Configurable decode of one BMP stream.
///
/// ```no_run
/// use zenbmp::{DecodeRequest, Limits, Unstoppable};
///
/// let file = std::fs::File::open("image.bmp")?;
/// let limits = Limits {
///     max_pixels: Some(64 * 1024 * 1024),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(file)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", image.width(), image.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DecodeRequest<'a, R> {
    reader: R,
    limits: Option<&'a Limits>,
}

impl<'a, R: Read + Seek> DecodeRequest<'a, R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            limits: None,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Run the decode. `stop` is checked after the headers and every 16
    /// scanlines.
    pub fn decode(mut self, stop: impl Stop) -> Result<BmpImage, BmpError> {
        crate::bmp::decode(&mut self.reader, self.limits, &stop)
    }
}
