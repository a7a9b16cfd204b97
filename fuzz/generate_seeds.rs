#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_scale";
    fs::create_dir_all(dir).unwrap();

    // Minimal BMP 1x1 24-bit, prefixed with a factor
    let mut bmp = vec![0u8; 58]; // 54 header + 4 pixel (3 + 1 padding)
    bmp[0] = b'B'; bmp[1] = b'M';
    bmp[2..6].copy_from_slice(&58u32.to_le_bytes()); // file size
    bmp[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    bmp[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    bmp[18..22].copy_from_slice(&1i32.to_le_bytes()); // width
    bmp[22..26].copy_from_slice(&1i32.to_le_bytes()); // height
    bmp[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    bmp[28..30].copy_from_slice(&24u16.to_le_bytes()); // bpp
    bmp[54] = 0xff; bmp[55] = 0x00; bmp[56] = 0x00; // BGR

    for (name, factor) in [("x1", 1.0f32), ("x2_5", 2.5), ("x0_3", 0.3)] {
        let mut seed = factor.to_le_bytes().to_vec();
        seed.extend_from_slice(&bmp);
        fs::write(format!("{dir}/bmp_1x1_{name}.bin"), seed).unwrap();
    }

    // 2x2 top-down
    let mut top_down = bmp.clone();
    top_down[18..22].copy_from_slice(&2i32.to_le_bytes());
    top_down[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    top_down.resize(54 + 16, 0x7f);
    let mut seed = 3.0f32.to_le_bytes().to_vec();
    seed.extend_from_slice(&top_down);
    fs::write(format!("{dir}/bmp_2x2_topdown.bin"), seed).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"\x00\x00\x80\x3fBM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
