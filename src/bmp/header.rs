//! Parse, validate and rewrite the 54-byte BMP header pair.

use crate::error::ScaleError;
use crate::factor::ScaleFactor;
use crate::io::ByteSource;
use crate::pixel::Triple;

/// `"BM"` read as a little-endian u16.
pub const MAGIC: u16 = 0x4D42;
/// BITMAPFILEHEADER size.
pub const FILE_HEADER_SIZE: u32 = 14;
/// BITMAPINFOHEADER size.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Size of the header pair, and the only accepted pixel data offset.
pub const HEADERS_SIZE: usize = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as usize;

const BITS_PER_PIXEL: u16 = 24;
const COMPRESSION_NONE: u32 = 0;

// ── Header records ──────────────────────────────────────────────────

/// BITMAPFILEHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: u16,
    pub file_size: u32,
    pub reserved: [u8; 4],
    pub pixel_offset: u32,
}

/// BITMAPINFOHEADER.
///
/// A negative `height` means rows are stored top-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// The file header and info header, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
}

fn le_u16(b: &[u8; HEADERS_SIZE], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8; HEADERS_SIZE], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn le_i32(b: &[u8; HEADERS_SIZE], at: usize) -> i32 {
    le_u32(b, at) as i32
}

impl BmpHeaders {
    /// Decode both headers. No field is checked here; see [`Self::validate`].
    pub fn parse(bytes: &[u8; HEADERS_SIZE]) -> Self {
        Self {
            file: FileHeader {
                magic: le_u16(bytes, 0),
                file_size: le_u32(bytes, 2),
                reserved: [bytes[6], bytes[7], bytes[8], bytes[9]],
                pixel_offset: le_u32(bytes, 10),
            },
            info: InfoHeader {
                size: le_u32(bytes, 14),
                width: le_i32(bytes, 18),
                height: le_i32(bytes, 22),
                planes: le_u16(bytes, 26),
                bit_count: le_u16(bytes, 28),
                compression: le_u32(bytes, 30),
                size_image: le_u32(bytes, 34),
                x_pixels_per_meter: le_i32(bytes, 38),
                y_pixels_per_meter: le_i32(bytes, 42),
                colors_used: le_u32(bytes, 46),
                colors_important: le_u32(bytes, 50),
            },
        }
    }

    /// Read the header pair from offset 0 of `source` and validate it.
    pub fn read_from<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self, ScaleError> {
        let mut buf = [0u8; HEADERS_SIZE];
        source.read_at(0, &mut buf)?;
        let headers = Self::parse(&buf);
        headers.validate()?;
        Ok(headers)
    }

    /// Accept only uncompressed 24-bit BMPs with a BITMAPINFOHEADER and
    /// pixel data directly after the headers.
    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.file.magic != MAGIC {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "magic {:#06x} is not \"BM\"",
                self.file.magic
            )));
        }
        if self.file.pixel_offset != HEADERS_SIZE as u32 {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "pixel data offset is {}, expected {HEADERS_SIZE}",
                self.file.pixel_offset
            )));
        }
        if self.info.size != INFO_HEADER_SIZE {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "info header size is {}, expected {INFO_HEADER_SIZE}",
                self.info.size
            )));
        }
        if self.info.bit_count != BITS_PER_PIXEL {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "{} bits per pixel, only {BITS_PER_PIXEL} is supported",
                self.info.bit_count
            )));
        }
        if self.info.compression != COMPRESSION_NONE {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "compression method {} is not uncompressed",
                self.info.compression
            )));
        }
        if self.info.width < 0 {
            return Err(ScaleError::UnsupportedFormat(alloc::format!(
                "negative width {}",
                self.info.width
            )));
        }
        Ok(())
    }

    /// Headers for the scaled image. Only the geometry and size fields change.
    pub fn rescaled(&self, geometry: &Geometry) -> Self {
        let mut out = *self;
        out.info.width = geometry.new_width as i32;
        out.info.height = geometry.new_height;
        out.info.size_image = geometry.image_size;
        out.file.file_size = geometry.file_size;
        out
    }

    /// Encode both headers back to their on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADERS_SIZE] {
        let mut out = [0u8; HEADERS_SIZE];
        let fields: [&[u8]; 15] = [
            &self.file.magic.to_le_bytes(),
            &self.file.file_size.to_le_bytes(),
            &self.file.reserved,
            &self.file.pixel_offset.to_le_bytes(),
            &self.info.size.to_le_bytes(),
            &self.info.width.to_le_bytes(),
            &self.info.height.to_le_bytes(),
            &self.info.planes.to_le_bytes(),
            &self.info.bit_count.to_le_bytes(),
            &self.info.compression.to_le_bytes(),
            &self.info.size_image.to_le_bytes(),
            &self.info.x_pixels_per_meter.to_le_bytes(),
            &self.info.y_pixels_per_meter.to_le_bytes(),
            &self.info.colors_used.to_le_bytes(),
            &self.info.colors_important.to_le_bytes(),
        ];
        let mut pos = 0;
        for field in fields {
            out[pos..pos + field.len()].copy_from_slice(field);
            pos += field.len();
        }
        out
    }
}

// ── Geometry ────────────────────────────────────────────────────────

/// Zero bytes needed after `width` pixels to reach a 4-byte row boundary.
pub fn row_padding(width: u32) -> u32 {
    let row_bytes = u64::from(width) * Triple::SIZE as u64;
    ((4 - row_bytes % 4) % 4) as u32
}

/// Old and new image geometry, derived once from the source info header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub old_width: u32,
    pub old_height: i32,
    pub new_width: u32,
    /// Keeps the sign of `old_height`.
    pub new_height: i32,
    pub old_padding: u32,
    pub new_padding: u32,
    /// `biSizeImage` of the output.
    pub image_size: u32,
    /// `bfSize` of the output.
    pub file_size: u32,
}

impl Geometry {
    /// Scale both dimensions by `factor`, rounding half away from zero, and
    /// re-derive paddings and sizes.
    pub fn derive(info: &InfoHeader, factor: ScaleFactor) -> Result<Self, ScaleError> {
        let old_width = u32::try_from(info.width).map_err(|_| {
            ScaleError::UnsupportedFormat(alloc::format!("negative width {}", info.width))
        })?;
        let scaled_w = (info.width as f32 * factor.get()).round();
        let scaled_h = (info.height as f32 * factor.get()).round();
        let too_large = || ScaleError::DimensionsTooLarge {
            width: scaled_w as i64,
            height: scaled_h as i64,
        };
        let new_width = fit_i32(scaled_w).ok_or_else(too_large)?;
        let new_height = fit_i32(scaled_h).ok_or_else(too_large)?;
        // `info.width` is non-negative, so is its rounded product with a positive factor.
        let new_width = new_width as u32;

        let old_padding = row_padding(old_width);
        let new_padding = row_padding(new_width);

        let new_stride = u64::from(new_width) * Triple::SIZE as u64 + u64::from(new_padding);
        let image_size = new_stride * u64::from(new_height.unsigned_abs());
        let file_size = image_size + HEADERS_SIZE as u64;
        if file_size > u64::from(u32::MAX) {
            return Err(too_large());
        }

        Ok(Self {
            old_width,
            old_height: info.height,
            new_width,
            new_height,
            old_padding,
            new_padding,
            image_size: image_size as u32,
            file_size: file_size as u32,
        })
    }

    /// Stored source rows.
    pub fn old_rows(&self) -> u32 {
        self.old_height.unsigned_abs()
    }

    /// Rows to emit.
    pub fn new_rows(&self) -> u32 {
        self.new_height.unsigned_abs()
    }

    /// Bytes per stored source row, padding included.
    pub fn old_stride(&self) -> u64 {
        u64::from(self.old_width) * Triple::SIZE as u64 + u64::from(self.old_padding)
    }
}

fn fit_i32(v: f32) -> Option<i32> {
    // i32::MAX is not representable in f32; 2^31 is the first value out of range.
    if (-2_147_483_648.0..2_147_483_648.0).contains(&v) {
        Some(v as i32)
    } else {
        None
    }
}
