//! RGB565 pixel surface
//!
//! Borrowed little-endian 16-bit buffer with an explicit row pitch, as
//! handed over by the software video backend.

use byteorder::{ByteOrder, LittleEndian};

use crate::color::Color;
use crate::surface::{check_layout, OverlaySurface, PixelRect, SurfaceError};

const BYTES_PER_PIXEL: usize = 2;

/// RGB565 surface over a caller-owned buffer
pub struct Rgb565Surface<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
}

impl<'a> Rgb565Surface<'a> {
    /// Wrap `buffer`; `pitch` is the row stride in bytes
    pub fn new(
        buffer: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
    ) -> Result<Self, SurfaceError> {
        check_layout(buffer.len(), width, height, pitch, BYTES_PER_PIXEL)?;
        Ok(Self {
            buffer,
            width,
            height,
            pitch,
        })
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Raw pixel value, bounds-checked
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.pitch + x as usize * BYTES_PER_PIXEL;
        Some(LittleEndian::read_u16(&self.buffer[off..off + BYTES_PER_PIXEL]))
    }

    /// Fill the whole surface
    pub fn clear(&mut self, color: Color) {
        let rect = PixelRect::new(0, 0, self.width, self.height);
        self.fill_rect(rect, color);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.buffer
    }
}

impl OverlaySurface for Rgb565Surface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let Some((x0, y0, x1, y1)) = rect.clip(self.width, self.height) else {
            return;
        };
        let value = color.to_rgb565();
        for row in y0..y1 {
            let start = row * self.pitch + x0 * BYTES_PER_PIXEL;
            let end = row * self.pitch + x1 * BYTES_PER_PIXEL;
            for px in self.buffer[start..end].chunks_exact_mut(BYTES_PER_PIXEL) {
                LittleEndian::write_u16(px, value);
            }
        }
    }

    fn supports_text(&self) -> bool {
        true
    }
}
