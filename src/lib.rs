//! # bmpscale
//!
//! Nearest-neighbor scaling of uncompressed 24-bit BMP files.
//!
//! Scaling happens in two stages:
//!
//! - **Header rewrite** ([`bmp::header`]): the 54-byte file/info header pair is
//!   read, validated, and rewritten with the new width, height, image size and
//!   file size. Every other field passes through untouched.
//! - **Resampling** ([`bmp::resample`]): each output pixel is copied from the
//!   source pixel at `min(floor(i / f), bound - 1)` per axis, read by explicit
//!   offset, then each row is padded to a 4-byte boundary.
//!
//! Pixel data is never held in memory: the source is any [`ByteSource`]
//! (random access by offset), the output any [`ByteSink`] (sequential).
//!
//! ## Non-Goals
//!
//! - Compressed BMPs, palettes, or bit depths other than 24
//! - Any interpolation other than nearest-neighbor
//!
//! ## Usage
//!
//! ```no_run
//! use bmpscale::{ScaleFactor, scale_bmp};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let factor: ScaleFactor = "2.5".parse()?;
//! let scaled = scale_bmp(data, factor, Unstoppable)?;
//! # Ok::<(), bmpscale::ScaleError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod factor;
mod limits;
mod pixel;
mod scale;

pub mod bmp;
pub mod io;

#[cfg(feature = "std")]
pub mod fs;

// Re-exports
pub use enough::{Stop, Unstoppable};
pub use error::ScaleError;
pub use factor::ScaleFactor;
pub use io::{ByteSink, ByteSource};
pub use limits::Limits;
pub use pixel::Triple;
pub use scale::{ScaleOutput, ScaleRequest, scale_bmp};

#[cfg(feature = "std")]
pub use fs::scale_file;
