//! Overlay colors and per-format conversions

/// RGBA color. Pixel surfaces ignore alpha; the GPU path blends with it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Packed luma/chroma triple
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Color {
    /// Create a color with full opacity
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Convert to RGB565
    #[inline]
    pub const fn to_rgb565(&self) -> u16 {
        let r5 = (self.r >> 3) as u16;
        let g6 = (self.g >> 2) as u16;
        let b5 = (self.b >> 3) as u16;
        (r5 << 11) | (g6 << 5) | b5
    }

    /// Create from RGB565
    pub const fn from_rgb565(rgb565: u16) -> Self {
        let r = ((rgb565 >> 11) & 0x1F) as u8;
        let g = ((rgb565 >> 5) & 0x3F) as u8;
        let b = (rgb565 & 0x1F) as u8;
        Self {
            r: (r << 3) | (r >> 2),
            g: (g << 2) | (g >> 4),
            b: (b << 3) | (b >> 2),
            a: 255,
        }
    }

    /// Convert to studio-swing YUV (BT.601 integer approximation)
    pub const fn to_yuv(&self) -> Yuv {
        let r = self.r as i32;
        let g = self.g as i32;
        let b = self.b as i32;
        Yuv {
            y: clamp_u8(((66 * r + 129 * g + 25 * b + 128) >> 8) + 16),
            u: clamp_u8(((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128),
            v: clamp_u8(((112 * r - 94 * g - 18 * b + 128) >> 8) + 128),
        }
    }

    /// Normalized `[r, g, b, a]` for a shader uniform
    pub fn to_rgba_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    // Predefined colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
}

const fn clamp_u8(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}
