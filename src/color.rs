//! Iteration count to RGB.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Scales `value` into `0..=0xffff * 0xff` and spreads the bytes over the
/// channels: byte 0 is red, byte 1 blue, byte 2 green. Points that used the
/// whole budget are black.
pub fn map_color(value: u32, max_iterations: u32) -> Rgb {
    if value == max_iterations {
        return Rgb::BLACK;
    }
    let rgb = u64::from(value) * 0xffff / u64::from(max_iterations) * 0xff;
    Rgb {
        r: (rgb & 0xff) as u8,
        b: ((rgb >> 8) & 0xff) as u8,
        g: ((rgb >> 16) & 0xff) as u8,
    }
}
