//! 24-bit BMP header rewriting and nearest-neighbor resampling.
//!
//! Use [`crate::ScaleRequest`] or [`crate::scale_bmp`] to run both stages.

pub mod header;
pub mod resample;

pub use header::{BmpHeaders, FileHeader, Geometry, InfoHeader, row_padding};
pub use resample::{source_index, source_offset};
