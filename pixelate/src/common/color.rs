//! Opaque B,G,R triplet read from and written to 4-byte BGRA pixels.

/// Index of each channel inside a BGRA pixel.
pub(crate) const BLUE: usize = 0;
pub(crate) const GREEN: usize = 1;
pub(crate) const RED: usize = 2;

/// Color of one pixel without its alpha channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelColor {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl PixelColor {
    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Perceptual brightness with Rec. 601 weights, used for median ordering.
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }

    #[inline]
    pub fn from_bgra(pixel: &[u8; 4]) -> Self {
        Self {
            b: pixel[BLUE],
            g: pixel[GREEN],
            r: pixel[RED],
        }
    }

    /// Overwrites the color channels of `pixel`, leaving alpha as is.
    #[inline]
    pub fn write_bgra(&self, pixel: &mut [u8; 4]) {
        pixel[BLUE] = self.b;
        pixel[GREEN] = self.g;
        pixel[RED] = self.r;
    }

    pub fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl From<[u8; 3]> for PixelColor {
    fn from(bgr: [u8; 3]) -> Self {
        Self::new(bgr[0], bgr[1], bgr[2])
    }
}

impl From<PixelColor> for [u8; 3] {
    fn from(color: PixelColor) -> Self {
        color.to_bgr()
    }
}

impl std::fmt::Display for PixelColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_weights() {
        assert_eq!(PixelColor::new(0, 0, 0).luminance(), 0.0);
        assert!((PixelColor::new(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
        assert!(PixelColor::new(0, 255, 0).luminance() > PixelColor::new(0, 0, 255).luminance());
        assert!(PixelColor::new(0, 0, 255).luminance() > PixelColor::new(255, 0, 0).luminance());
    }

    #[test]
    fn write_keeps_alpha() {
        let mut pixel = [1, 2, 3, 77];
        PixelColor::new(10, 20, 30).write_bgra(&mut pixel);
        assert_eq!(pixel, [10, 20, 30, 77]);
        assert_eq!(PixelColor::from_bgra(&pixel), PixelColor::new(10, 20, 30));
    }

    #[test]
    fn display_is_rgb_hex() {
        assert_eq!(PixelColor::new(0x01, 0x02, 0xff).to_string(), "#ff0201");
    }
}
