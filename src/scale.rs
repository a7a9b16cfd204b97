use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::header::{BmpHeaders, Geometry};
use crate::bmp::resample;
use crate::error::ScaleError;
use crate::factor::ScaleFactor;
use crate::io::{ByteSink, ByteSource};
use crate::limits::Limits;

/// Result of a completed scale: the headers that were written and the
/// geometry the body was produced from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScaleOutput {
    pub headers: BmpHeaders,
    pub geometry: Geometry,
}

/// Builder for a scale operation.
#[derive(Clone, Debug)]
pub struct ScaleRequest<'a> {
    factor: ScaleFactor,
    limits: Option<&'a Limits>,
}

impl<'a> ScaleRequest<'a> {
    pub fn new(factor: ScaleFactor) -> Self {
        Self {
            factor,
            limits: None,
        }
    }

    /// Reject outputs whose derived geometry exceeds `limits`.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Scale the BMP in `source` into `sink`.
    ///
    /// Headers are validated and the output geometry checked before anything
    /// is written, so format and limit errors leave `sink` untouched. Errors
    /// during the body leave a partial image behind.
    pub fn scale<S, W>(
        &self,
        source: &mut S,
        sink: &mut W,
        stop: impl Stop,
    ) -> Result<ScaleOutput, ScaleError>
    where
        S: ByteSource + ?Sized,
        W: ByteSink + ?Sized,
    {
        let input = BmpHeaders::read_from(source)?;
        let geometry = Geometry::derive(&input.info, self.factor)?;
        log::debug!(
            "scaling by {}: {}x{} -> {}x{}, padding {} -> {}",
            self.factor,
            geometry.old_width,
            geometry.old_rows(),
            geometry.new_width,
            geometry.new_rows(),
            geometry.old_padding,
            geometry.new_padding,
        );

        if let Some(limits) = self.limits {
            limits.check(&geometry)?;
        }
        stop.check()?;

        let headers = input.rescaled(&geometry);
        sink.write_all(&headers.to_bytes())?;
        resample::resample(source, sink, &geometry, self.factor, &stop)?;

        Ok(ScaleOutput { headers, geometry })
    }
}

/// Scale an in-memory BMP, returning the complete output file.
pub fn scale_bmp(data: &[u8], factor: ScaleFactor, stop: impl Stop) -> Result<Vec<u8>, ScaleError> {
    let mut source = data;
    let mut out = Vec::new();
    let output = ScaleRequest::new(factor).scale(&mut source, &mut out, stop)?;
    debug_assert_eq!(out.len() as u64, u64::from(output.geometry.file_size));
    Ok(out)
}
