//! RGB color carried by every shape descriptor
//!
//! Kept as plain `u8` channels so the data model stays free of any
//! graphics crate; the renderer converts to its own color type.

/// A fully opaque RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = Rgb::new(12, 200, 255);
        assert_eq!(c.r, 12);
        assert_eq!(c.g, 200);
        assert_eq!(c.b, 255);
    }
}
