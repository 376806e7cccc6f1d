//! Packed 4:2:2 YUV overlay surface
//!
//! Each pair of horizontal pixels shares one U and one V sample. Writing a
//! single pixel stores its luma plus the chroma byte it owns (U for even
//! columns, V for odd), so filled spans come out in the exact color.

use crate::color::Color;
use crate::surface::{check_layout, OverlaySurface, PixelRect, SurfaceError};

const BYTES_PER_PIXEL: usize = 2;

/// Byte order of a packed 4:2:2 macropixel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YuvLayout {
    /// Y0 U Y1 V
    Yuyv,
    /// U Y0 V Y1
    Uyvy,
}

impl YuvLayout {
    const fn luma_offset(self) -> usize {
        match self {
            YuvLayout::Yuyv => 0,
            YuvLayout::Uyvy => 1,
        }
    }

    const fn chroma_offset(self) -> usize {
        1 - self.luma_offset()
    }
}

/// Packed YUV surface over a caller-owned overlay buffer
pub struct PackedYuvSurface<'a> {
    buffer: &'a mut [u8],
    width: u32,
    height: u32,
    pitch: usize,
    layout: YuvLayout,
}

impl<'a> PackedYuvSurface<'a> {
    pub fn new(
        buffer: &'a mut [u8],
        width: u32,
        height: u32,
        pitch: usize,
        layout: YuvLayout,
    ) -> Result<Self, SurfaceError> {
        if width % 2 != 0 {
            return Err(SurfaceError::OddWidth(width));
        }
        check_layout(buffer.len(), width, height, pitch, BYTES_PER_PIXEL)?;
        Ok(Self {
            buffer,
            width,
            height,
            pitch,
            layout,
        })
    }

    pub fn layout(&self) -> YuvLayout {
        self.layout
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// `(luma, chroma)` bytes stored for a pixel
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let off = y as usize * self.pitch + x as usize * BYTES_PER_PIXEL;
        Some((
            self.buffer[off + self.layout.luma_offset()],
            self.buffer[off + self.layout.chroma_offset()],
        ))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.buffer
    }
}

impl OverlaySurface for PackedYuvSurface<'_> {
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
        let yuv = color.to_yuv();
        let luma = self.layout.luma_offset();
        let chroma = self.layout.chroma_offset();
        for row in y0..y1 {
            let base = row * self.pitch;
            for col in x0..x1 {
                let off = base + col * BYTES_PER_PIXEL;
                self.buffer[off + luma] = yuv.y;
                self.buffer[off + chroma] = if col % 2 == 0 { yuv.u } else { yuv.v };
            }
        }
    }

    fn supports_text(&self) -> bool {
        true
    }
}
