//! Caps on the size of a scaled image.

use crate::bmp::Geometry;
use crate::error::ScaleError;

/// Resource limits applied to the scaled output.
///
/// Every field defaults to `None`, meaning unbounded. [`ScaleRequest`]
/// checks them against the derived geometry before the header is written,
/// so a rejected request leaves the sink untouched.
///
/// [`ScaleRequest`]: crate::ScaleRequest
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * |height|).
    pub max_pixels: Option<u64>,
    /// Maximum size of the output file in bytes, headers included.
    pub max_output_bytes: Option<u64>,
}

impl Limits {
    /// Reject `geometry` if any output measure is over its cap.
    ///
    /// Measures are tried in the order width, height, pixels, file size and
    /// the first one over its cap names the error.
    pub(crate) fn check(&self, geometry: &Geometry) -> Result<(), ScaleError> {
        let width = u64::from(geometry.new_width);
        let rows = u64::from(geometry.new_rows());
        let measures = [
            ("width", width, self.max_width),
            ("height", rows, self.max_height),
            ("pixel count", width * rows, self.max_pixels),
            ("output bytes", u64::from(geometry.file_size), self.max_output_bytes),
        ];
        match measures
            .into_iter()
            .find(|&(_, value, cap)| cap.is_some_and(|cap| value > cap))
        {
            Some((what, value, Some(cap))) => Err(ScaleError::LimitExceeded(alloc::format!(
                "{what} {value} over limit {cap}"
            ))),
            _ => Ok(()),
        }
    }
}
