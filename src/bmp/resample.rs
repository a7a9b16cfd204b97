//! Nearest-neighbor emission of the scaled pixel body.

use enough::Stop;

use super::header::{Geometry, HEADERS_SIZE};
use crate::error::ScaleError;
use crate::factor::ScaleFactor;
use crate::io::{ByteSink, ByteSource};
use crate::pixel::Triple;

const ZERO_PADDING: [u8; 3] = [0; 3];

/// Map a destination row or column to its source index.
///
/// `floor(dest / factor)`, clamped to `bound - 1` so rounding in the forward
/// geometry can never address past the source image.
pub fn source_index(dest: u32, factor: ScaleFactor, bound: u32) -> u32 {
    let Some(last) = bound.checked_sub(1) else {
        return 0;
    };
    let mapped = (f64::from(dest) / f64::from(factor.get())).floor();
    if mapped >= f64::from(last) {
        last
    } else {
        mapped as u32
    }
}

/// Byte offset of source pixel (`row`, `col`) within the source file.
pub fn source_offset(geometry: &Geometry, row: u32, col: u32) -> u64 {
    HEADERS_SIZE as u64
        + u64::from(row) * geometry.old_stride()
        + u64::from(col) * Triple::SIZE as u64
}

/// Write the scaled pixel body to `sink`, one source read per output pixel.
///
/// Rows are walked in stored order regardless of the height sign. Returns
/// the number of bytes written, always `geometry.image_size`.
pub(crate) fn resample<S, W>(
    source: &mut S,
    sink: &mut W,
    geometry: &Geometry,
    factor: ScaleFactor,
    stop: &dyn Stop,
) -> Result<u64, ScaleError>
where
    S: ByteSource + ?Sized,
    W: ByteSink + ?Sized,
{
    if geometry.new_width == 0 {
        // Every row is empty and unpadded.
        return Ok(0);
    }
    let old_rows = geometry.old_rows();
    let padding = &ZERO_PADDING[..geometry.new_padding as usize];
    let mut written = 0u64;

    for row in 0..geometry.new_rows() {
        if row % 16 == 0 {
            stop.check()?;
        }
        let src_row = source_index(row, factor, old_rows);
        log::trace!("row {row} <- source row {src_row}");

        for col in 0..geometry.new_width {
            let src_col = source_index(col, factor, geometry.old_width);
            let mut bytes = [0u8; Triple::SIZE];
            source.read_at(source_offset(geometry, src_row, src_col), &mut bytes)?;
            sink.write_all(&Triple::from_bytes(bytes).to_bytes())?;
        }
        sink.write_all(padding)?;
        written += u64::from(geometry.new_width) * Triple::SIZE as u64 + padding.len() as u64;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use enough::{StopReason, Unstoppable};

    struct AlwaysStop;

    impl Stop for AlwaysStop {
        fn check(&self) -> Result<(), StopReason> {
            Err(StopReason::Cancelled)
        }
    }

    fn factor(f: f32) -> ScaleFactor {
        ScaleFactor::new(f).unwrap()
    }

    #[test]
    fn doubling_repeats_each_index() {
        let f = factor(2.0);
        let mapped: Vec<u32> = (0..4).map(|i| source_index(i, f, 2)).collect();
        assert_eq!(mapped, [0, 0, 1, 1]);
    }

    #[test]
    fn halving_skips_indices() {
        let f = factor(0.5);
        let mapped: Vec<u32> = (0..3).map(|i| source_index(i, f, 6)).collect();
        assert_eq!(mapped, [0, 2, 4]);
    }

    #[test]
    fn clamps_to_last_source_index() {
        assert_eq!(source_index(10, ScaleFactor::ONE, 3), 2);
        assert_eq!(source_index(99, factor(0.01), 5), 4);
        assert_eq!(source_index(0, ScaleFactor::ONE, 0), 0);
    }

    #[test]
    fn never_maps_past_bound() {
        let factors = [0.1, 0.3, 0.7, 1.0, 1.3, 1.5, 2.0, 2.7, 3.3, 7.9, 99.99, 100.0];
        for &f in &factors {
            let f = factor(f);
            for old in 1..=40u32 {
                let new = (old as f32 * f.get()).round() as u32;
                for dest in 0..new {
                    assert!(source_index(dest, f, old) < old, "f={f} old={old} dest={dest}");
                }
            }
        }
    }

    #[test]
    fn offsets_account_for_padding() {
        let g = Geometry {
            old_width: 2,
            old_height: 2,
            new_width: 4,
            new_height: 4,
            old_padding: 2,
            new_padding: 0,
            image_size: 48,
            file_size: 102,
        };
        assert_eq!(source_offset(&g, 0, 0), 54);
        assert_eq!(source_offset(&g, 0, 1), 57);
        assert_eq!(source_offset(&g, 1, 0), 62);
        assert_eq!(source_offset(&g, 1, 1), 65);
    }

    #[test]
    fn body_length_matches_image_size() {
        // 3x1 source, width 3 -> padding 3; scale to 2x1 with padding 2
        let mut file = alloc::vec![0u8; 54];
        file.extend_from_slice(&[1, 1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0]);
        let g = Geometry {
            old_width: 3,
            old_height: 1,
            new_width: 2,
            new_height: 1,
            old_padding: 3,
            new_padding: 2,
            image_size: 8,
            file_size: 62,
        };
        let mut out: Vec<u8> = Vec::new();
        let written = resample(&mut &file[..], &mut out, &g, factor(0.6), &Unstoppable).unwrap();
        assert_eq!(written, 8);
        // 1 / 0.6 = 1.67 -> column 1
        assert_eq!(out, [1, 1, 1, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn zero_width_skips_rows() {
        let g = Geometry {
            old_width: 1,
            old_height: i32::MAX,
            new_width: 0,
            new_height: i32::MIN,
            old_padding: 1,
            new_padding: 0,
            image_size: 0,
            file_size: 54,
        };
        // Entering the row loop at all would trip the stop at row 0.
        let file = alloc::vec![0u8; 54];
        let mut out: Vec<u8> = Vec::new();
        let written = resample(&mut &file[..], &mut out, &g, ScaleFactor::ONE, &AlwaysStop).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_source_pixel_is_truncated() {
        let file = alloc::vec![0u8; 56];
        let g = Geometry {
            old_width: 1,
            old_height: 1,
            new_width: 1,
            new_height: 1,
            old_padding: 1,
            new_padding: 1,
            image_size: 4,
            file_size: 58,
        };
        let mut out: Vec<u8> = Vec::new();
        let err = resample(&mut &file[..], &mut out, &g, ScaleFactor::ONE, &Unstoppable).unwrap_err();
        assert!(matches!(err, ScaleError::TruncatedSource { offset: 54, needed: 3 }));
        assert!(out.is_empty());
    }
}
