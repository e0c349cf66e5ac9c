//! # Solid-color PNG icon generation
//!
//! This crate contains a minimal PNG encoder and the build-time generator
//! that emits this project's icon assets. The encoder produces complete,
//! well-formed byte streams for images in which every pixel has the same
//! 8-bit truecolor value; the generator writes three such images in the
//! conventional browser-extension sizes (16, 48 and 128 pixels).
//!
//! ## Using the encoder
//! ```
//! use icongen::{encode, Rgb};
//!
//! let png = encode(16, 16, Rgb::new(0x42, 0x85, 0xF4)).unwrap();
//! assert_eq!(&png[..8], &icongen::SIGNATURE);
//! ```
//!
//! ## Generating the assets
//! The `icongen` binary calls [`generate`] with a fixed output directory and
//! prints one status line per file. [`generate`] can also be driven directly
//! with any directory, which is how the tests exercise it.
//!
//! Only 8-bit truecolor output is supported: no interlacing, no ancillary
//! chunks, no other color types.

#![deny(unsafe_code)]

pub mod chunk;
mod common;
mod encoder;
mod icons;

pub use common::{BitDepth, ColorType, Rgb, SIGNATURE};
pub use encoder::{encode, Encoder, EncodingError, Result};
pub use icons::{generate, IconSpec, ICONS, ICON_COLOR};
