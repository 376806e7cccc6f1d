//! Surface sink abstraction
//!
//! The renderer draws through this trait so the same zone outlines and
//! labels land on any of the supported targets: an RGB565 buffer, a packed
//! YUV overlay or a GPU line list.

use thiserror::Error;
use touchpad_input::PercentRect;

use crate::color::Color;
use crate::font;

/// Rectangle in surface pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Scale a percentage rectangle onto a `width x height` surface. Edges
    /// past `i32::MAX` saturate.
    pub fn from_percent(rect: &PercentRect, width: u32, height: u32) -> Self {
        let scale = |p: u8, dim: u32| (p as u64 * dim as u64 / 100).min(i32::MAX as u64) as i32;
        let x1 = scale(rect.x1, width);
        let y1 = scale(rect.y1, height);
        let x2 = scale(rect.x2, width);
        let y2 = scale(rect.y2, height);
        Self::new(x1, y1, (x2 - x1).max(0) as u32, (y2 - y1).max(0) as u32)
    }

    /// Exclusive right edge
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when `self` lies entirely left of, right of, above or below
    /// `other`. Shared edges count as outside.
    pub const fn is_outside(&self, other: &PixelRect) -> bool {
        self.right() <= other.x as i64
            || self.x as i64 >= other.right()
            || self.bottom() <= other.y as i64
            || self.y as i64 >= other.bottom()
    }

    /// Visible part on a `width x height` surface as `(x0, y0, x1, y1)`
    /// with exclusive ends, or `None` when nothing is visible.
    pub fn clip(&self, width: u32, height: u32) -> Option<(usize, usize, usize, usize)> {
        let x0 = (self.x as i64).clamp(0, width as i64);
        let y0 = (self.y as i64).clamp(0, height as i64);
        let x1 = self.right().clamp(0, width as i64);
        let y1 = self.bottom().clamp(0, height as i64);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

/// Errors constructing a surface over a borrowed buffer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("pitch {pitch} is smaller than a {width}-pixel row ({row_bytes} bytes)")]
    PitchTooSmall {
        pitch: usize,
        width: u32,
        row_bytes: usize,
    },

    #[error("buffer holds {actual} bytes, {width}x{height} at pitch {pitch} needs {required}")]
    BufferTooSmall {
        width: u32,
        height: u32,
        pitch: usize,
        required: usize,
        actual: usize,
    },

    #[error("packed 4:2:2 surfaces need an even width, got {0}")]
    OddWidth(u32),

    #[error("{width}x{height} at pitch {pitch} does not fit in the address space")]
    LayoutOverflow { width: u32, height: u32, pitch: usize },
}

/// Check that `len` bytes hold `height` rows of `row_bytes` at `pitch`
pub(crate) fn check_layout(
    len: usize,
    width: u32,
    height: u32,
    pitch: usize,
    bytes_per_pixel: usize,
) -> Result<(), SurfaceError> {
    let overflow = SurfaceError::LayoutOverflow {
        width,
        height,
        pitch,
    };
    let row_bytes = (width as usize)
        .checked_mul(bytes_per_pixel)
        .ok_or(overflow.clone())?;
    if pitch < row_bytes {
        return Err(SurfaceError::PitchTooSmall {
            pitch,
            width,
            row_bytes,
        });
    }
    let required = match height {
        0 => 0,
        h => pitch
            .checked_mul(h as usize - 1)
            .and_then(|rows| rows.checked_add(row_bytes))
            .ok_or(overflow)?,
    };
    if len < required {
        return Err(SurfaceError::BufferTooSmall {
            width,
            height,
            pitch,
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Drawing target for the overlay
pub trait OverlaySurface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// A surface with no area accepts no drawing
    fn is_available(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }

    /// Fill a rectangle, clipped to the surface
    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    /// Outline drawn inside `rect`, `thickness` pixels wide
    fn draw_outline(&mut self, rect: PixelRect, thickness: u32, color: Color) {
        if rect.is_empty() {
            return;
        }
        let t = thickness.min(rect.width).min(rect.height);
        let (w, h) = (rect.width, rect.height);
        // Top, bottom, left, right
        self.fill_rect(PixelRect::new(rect.x, rect.y, w, t), color);
        self.fill_rect(PixelRect::new(rect.x, rect.y + (h - t) as i32, w, t), color);
        self.fill_rect(PixelRect::new(rect.x, rect.y, t, h), color);
        self.fill_rect(PixelRect::new(rect.x + (w - t) as i32, rect.y, t, h), color);
    }

    /// Whether `draw_text` renders anything
    fn supports_text(&self) -> bool {
        false
    }

    /// Draw `text` with the 8x8 font, top-left at `(x, y)`. Returns false
    /// when the surface has no text support.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color) -> bool {
        if !self.supports_text() {
            return false;
        }
        font::render(text, x, y, |px, py| {
            self.fill_rect(PixelRect::new(px, py, 1, 1), color)
        });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records fill calls without owning pixels
    struct Recorder {
        fills: Vec<PixelRect>,
    }

    impl OverlaySurface for Recorder {
        fn width(&self) -> u32 {
            100
        }

        fn height(&self) -> u32 {
            100
        }

        fn fill_rect(&mut self, rect: PixelRect, _color: Color) {
            self.fills.push(rect);
        }
    }

    #[test]
    fn test_from_percent() {
        let rect = PixelRect::from_percent(&PercentRect::new(3, 28, 12, 42), 1024, 768);
        assert_eq!(rect, PixelRect::new(30, 215, 92, 107));
    }

    #[test]
    fn test_is_outside() {
        let video = PixelRect::new(100, 0, 200, 100);
        assert!(PixelRect::new(0, 0, 100, 50).is_outside(&video));
        assert!(PixelRect::new(300, 10, 5, 5).is_outside(&video));
        assert!(PixelRect::new(120, 100, 10, 10).is_outside(&video));
        assert!(!PixelRect::new(90, 0, 11, 50).is_outside(&video));
        assert!(!video.is_outside(&video));
    }

    #[test]
    fn test_clip() {
        assert_eq!(PixelRect::new(-5, -5, 10, 10).clip(8, 8), Some((0, 0, 5, 5)));
        assert_eq!(PixelRect::new(6, 6, 10, 10).clip(8, 8), Some((6, 6, 8, 8)));
        assert_eq!(PixelRect::new(8, 0, 4, 4).clip(8, 8), None);
        assert_eq!(PixelRect::new(0, 0, 0, 4).clip(8, 8), None);
    }

    #[test]
    fn test_layout_checks() {
        assert!(check_layout(16, 4, 2, 8, 2).is_ok());
        assert!(matches!(
            check_layout(16, 4, 2, 6, 2),
            Err(SurfaceError::PitchTooSmall { .. })
        ));
        assert!(matches!(
            check_layout(12, 4, 2, 8, 2),
            Err(SurfaceError::BufferTooSmall { required: 16, .. })
        ));
        // Last row does not need trailing padding.
        assert!(check_layout(18, 4, 2, 10, 2).is_ok());
    }

    #[test]
    fn test_layout_overflow_is_an_error() {
        assert_eq!(
            check_layout(16, 2, 3, usize::MAX / 2, 2),
            Err(SurfaceError::LayoutOverflow {
                width: 2,
                height: 3,
                pitch: usize::MAX / 2
            })
        );
        assert!(matches!(
            check_layout(16, 4, 2, usize::MAX, 2),
            Err(SurfaceError::LayoutOverflow { .. })
        ));
        // A huge pitch with a single row needs only one row of bytes.
        assert!(check_layout(16, 4, 1, usize::MAX, 2).is_ok());
    }

    #[test]
    fn test_from_percent_saturates_on_huge_surfaces() {
        let rect = PercentRect::new(50, 0, 100, 100);
        let px = PixelRect::from_percent(&rect, u32::MAX, 768);
        assert_eq!(px.x, i32::MAX);
        assert_eq!(px.width, 0);
        assert_eq!(px.height, 768);
        assert!(px.x >= 0 && px.right() >= 0);
    }

    #[test]
    fn test_default_outline_is_four_strips() {
        let mut r = Recorder { fills: Vec::new() };
        r.draw_outline(PixelRect::new(10, 20, 30, 40), 2, Color::WHITE);
        assert_eq!(
            r.fills,
            vec![
                PixelRect::new(10, 20, 30, 2),
                PixelRect::new(10, 58, 30, 2),
                PixelRect::new(10, 20, 2, 40),
                PixelRect::new(38, 20, 2, 40),
            ]
        );
        assert!(!r.draw_text(0, 0, "X", Color::WHITE));
    }
}
