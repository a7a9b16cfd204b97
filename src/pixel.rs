/// One stored 24-bit pixel, channels in file order (blue, green, red).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Triple {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl Triple {
    /// Bytes a triple occupies on disk.
    pub const SIZE: usize = 3;

    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            blue: bytes[0],
            green: bytes[1],
            red: bytes[2],
        }
    }

    pub fn to_bytes(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

#[cfg(feature = "rgb")]
impl From<Triple> for rgb::Rgb<u8> {
    fn from(t: Triple) -> Self {
        rgb::Rgb {
            r: t.red,
            g: t.green,
            b: t.blue,
        }
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::Rgb<u8>> for Triple {
    fn from(p: rgb::Rgb<u8>) -> Self {
        Self {
            blue: p.b,
            green: p.g,
            red: p.r,
        }
    }
}
