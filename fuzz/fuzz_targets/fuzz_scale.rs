#![no_main]
use bmpscale::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First 4 bytes pick the factor, the rest is the BMP. Must never panic.
    let Some((head, bmp)) = data.split_first_chunk::<4>() else {
        return;
    };
    let Ok(factor) = ScaleFactor::new(f32::from_le_bytes(*head)) else {
        return;
    };

    let limits = Limits {
        max_width: Some(1 << 12),
        max_height: Some(1 << 12),
        max_pixels: Some(1 << 20),
        max_output_bytes: None,
    };
    let mut source = bmp;
    let mut out: Vec<u8> = Vec::new();
    let Ok(result) = ScaleRequest::new(factor)
        .with_limits(&limits)
        .scale(&mut source, &mut out, enough::Unstoppable)
    else {
        return;
    };

    assert_eq!(out.len() as u64, u64::from(result.geometry.file_size));
    let g = result.geometry;
    assert_eq!((3 * u64::from(g.new_width) + u64::from(g.new_padding)) % 4, 0);
});
