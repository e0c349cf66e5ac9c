//! Chunk types and functions
use core::fmt;

use std::io::{self, Write};

use crate::{BitDepth, ColorType};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkType(pub [u8; 4]);

// -- Critical chunks --

/// Image header
pub const IHDR: ChunkType = ChunkType([b'I', b'H', b'D', b'R']);
/// Image data
pub const IDAT: ChunkType = ChunkType([b'I', b'D', b'A', b'T']);
/// Image trailer
pub const IEND: ChunkType = ChunkType([b'I', b'E', b'N', b'D']);

// -- Chunk type determination --

/// Returns true if the chunk is critical.
pub fn is_critical(ChunkType(type_): ChunkType) -> bool {
    type_[0] & 32 == 0
}

/// Returns true if the chunk is private.
pub fn is_private(ChunkType(type_): ChunkType) -> bool {
    type_[1] & 32 != 0
}

/// Checks whether the reserved bit of the chunk name is set.
/// If it is set the chunk name is invalid.
pub fn reserved_set(ChunkType(type_): ChunkType) -> bool {
    type_[2] & 32 != 0
}

/// Returns true if the chunk is safe to copy if unknown.
pub fn safe_to_copy(ChunkType(type_): ChunkType) -> bool {
    type_[3] & 32 != 0
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        struct DebugType([u8; 4]);

        impl fmt::Debug for DebugType {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for &c in &self.0[..] {
                    write!(f, "{}", char::from(c).escape_debug())?;
                }
                Ok(())
            }
        }

        f.debug_struct("ChunkType")
            .field("type", &DebugType(self.0))
            .field("critical", &is_critical(*self))
            .field("private", &is_private(*self))
            .field("reserved", &reserved_set(*self))
            .field("safecopy", &safe_to_copy(*self))
            .finish()
    }
}

/// Writes one complete chunk: big-endian payload length, type tag, payload
/// and the CRC-32 computed over tag plus payload.
pub fn write_chunk<W: Write>(w: &mut W, chunk: ChunkType, data: &[u8]) -> io::Result<()> {
    w.write_all(&(data.len() as u32).to_be_bytes())?;
    w.write_all(&chunk.0)?;
    w.write_all(data)?;

    let mut crc = crc32fast::Hasher::new();
    crc.update(&chunk.0);
    crc.update(data);
    w.write_all(&crc.finalize().to_be_bytes())
}

/// Writes the 13-byte IHDR chunk.
///
/// Compression, filter and interlace method are always 0; this crate never
/// writes interlaced streams.
pub fn write_ihdr<W: Write>(
    w: &mut W,
    width: u32,
    height: u32,
    bit_depth: BitDepth,
    color_type: ColorType,
) -> io::Result<()> {
    let mut data = [0; 13];
    data[..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = bit_depth as u8;
    data[9] = color_type as u8;
    write_chunk(w, IHDR, &data)
}
