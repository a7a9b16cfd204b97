//! In-memory 24-bit BMP fixtures.

#![allow(dead_code)]

/// Build a valid 24-bit BMP. `pixel(row, col)` gives the BGR bytes of each
/// stored pixel; rows are in file order.
pub fn bmp24(width: u32, height: i32, pixel: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    let pad = (4 - (width * 3) % 4) % 4;
    let rows = height.unsigned_abs();
    let image_size = (width * 3 + pad) * rows;

    let mut out = Vec::with_capacity(54 + image_size as usize);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(54 + image_size).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&54u32.to_le_bytes()); // data offset
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&image_size.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&2835u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    for row in 0..rows {
        for col in 0..width {
            out.extend_from_slice(&pixel(row, col));
        }
        out.extend(std::iter::repeat_n(0u8, pad as usize));
    }
    out
}

/// Pixel that encodes its own coordinates, so mappings can be checked.
pub fn coords(row: u32, col: u32) -> [u8; 3] {
    [row as u8, col as u8, 0xA5]
}

pub fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

pub fn le_i32(data: &[u8], at: usize) -> i32 {
    le_u32(data, at) as i32
}

/// Width, height, biSizeImage and bfSize of an encoded BMP.
pub fn geometry_fields(data: &[u8]) -> (u32, i32, u32, u32) {
    (
        le_u32(data, 18),
        le_i32(data, 22),
        le_u32(data, 34),
        le_u32(data, 2),
    )
}

/// Stored pixel at (`row`, `col`) of a 24-bit BMP of the given width.
pub fn pixel_at(data: &[u8], width: u32, row: u32, col: u32) -> [u8; 3] {
    let pad = (4 - (width * 3) % 4) % 4;
    let off = 54 + (row * (width * 3 + pad) + col * 3) as usize;
    [data[off], data[off + 1], data[off + 2]]
}
