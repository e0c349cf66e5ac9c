//! PNG encoding of solid-color truecolor images.

use std::io::Write;
use std::{error, fmt, io, result};

use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::chunk;
use crate::{BitDepth, ColorType, Rgb, SIGNATURE};

pub type Result<T = ()> = result::Result<T, EncodingError>;

#[derive(Debug)]
pub enum EncodingError {
    IoError(io::Error),
    ZeroWidth,
    ZeroHeight,
}

impl error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EncodingError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        match self {
            Self::IoError(err) => write!(fmt, "{}", err),
            Self::ZeroWidth => write!(fmt, "Image width must be greater than zero"),
            Self::ZeroHeight => write!(fmt, "Image height must be greater than zero"),
        }
    }
}

impl From<io::Error> for EncodingError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<EncodingError> for io::Error {
    fn from(err: EncodingError) -> Self {
        Self::new(io::ErrorKind::Other, err)
    }
}

/// PNG encoder for images filled with a single color.
///
/// The output is a signature followed by exactly one IHDR, one IDAT and one
/// IEND chunk: 8-bit truecolor without alpha, not interlaced, every scanline
/// written with filter type None.
pub struct Encoder {
    width: u32,
    height: u32,
    color: Rgb,
}

impl Encoder {
    pub fn new(width: u32, height: u32, color: Rgb) -> Encoder {
        Encoder {
            width,
            height,
            color,
        }
    }

    /// Writes the complete PNG stream to `w`.
    ///
    /// Dimensions are validated before any byte is written.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result {
        if self.width == 0 {
            return Err(EncodingError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(EncodingError::ZeroHeight);
        }

        w.write_all(&SIGNATURE)?;
        chunk::write_ihdr(w, self.width, self.height, BitDepth::Eight, ColorType::Rgb)?;

        // The whole raw buffer is compressed as one unit and emitted as a
        // single IDAT chunk.
        let mut zenc = ZlibEncoder::new(Vec::new(), Compression::default());
        zenc.write_all(&self.scanlines())?;
        let idat = zenc.finish()?;
        chunk::write_chunk(w, chunk::IDAT, &idat)?;

        chunk::write_chunk(w, chunk::IEND, &[])?;
        Ok(())
    }

    /// The raw image data: per row one filter-type byte (0, "None") followed
    /// by the color bytes of `width` pixels.
    fn scanlines(&self) -> Vec<u8> {
        let bpp = ColorType::Rgb.samples();

        let mut row = Vec::with_capacity(1 + self.width as usize * bpp);
        row.push(0);
        for _ in 0..self.width {
            row.extend_from_slice(&self.color.bytes());
        }

        let mut raw = Vec::with_capacity(row.len() * self.height as usize);
        for _ in 0..self.height {
            raw.extend_from_slice(&row);
        }
        raw
    }
}

/// Encodes a `width` by `height` image in which every pixel is `color`.
///
/// Returns the finished byte stream. Deterministic: identical inputs encode
/// to byte-identical output.
pub fn encode(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    Encoder::new(width, height, color).write_to(&mut out)?;
    Ok(out)
}
