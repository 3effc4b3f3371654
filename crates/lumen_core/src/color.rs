//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Decode a packed `0xRRGGBBAA` value
    pub fn from_rgba_hex(packed: u32) -> Self {
        Self::from_rgba8(
            ((packed >> 24) & 0xFF) as u8,
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Encode back to u8 components, rounding to the nearest step
    pub fn to_rgba8(&self) -> [u8; 4] {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    /// Red, green and blue bytes, ignoring alpha
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let [r, g, b, _] = self.to_rgba8();
        (r, g, b)
    }

    /// Packed `0xRRGGBBAA` representation
    pub fn to_rgba_hex(&self) -> u32 {
        let [r, g, b, a] = self.to_rgba8();
        u32::from_be_bytes([r, g, b, a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
