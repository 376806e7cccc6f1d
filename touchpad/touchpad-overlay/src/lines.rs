//! GPU line-list sink
//!
//! Records outlines as `GL_LINES` batches in normalized device coordinates.
//! The presentation backend uploads each batch and issues one draw call
//! with the batch's line width and blend color.

use crate::color::Color;
use crate::surface::{OverlaySurface, PixelRect};

/// Vertex in normalized device coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
}

/// Line segments sharing one width and color
#[derive(Clone, Debug, PartialEq)]
pub struct LineBatch {
    /// Segment endpoints, two vertices per line
    pub vertices: Vec<LineVertex>,
    pub line_width: f32,
    pub rgba: [f32; 4],
}

impl LineBatch {
    pub fn segment_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// Line geometry target for the GL presentation path
#[derive(Clone, Debug, Default)]
pub struct LineListSurface {
    width: u32,
    height: u32,
    batches: Vec<LineBatch>,
}

impl LineListSurface {
    /// `width x height` is the viewport the NDC mapping refers to
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            batches: Vec::new(),
        }
    }

    /// Map a surface pixel to NDC, y pointing up
    pub fn to_ndc(&self, x: i32, y: i32) -> LineVertex {
        LineVertex {
            x: 2.0 * x as f32 / self.width as f32 - 1.0,
            y: 1.0 - 2.0 * y as f32 / self.height as f32,
        }
    }

    pub fn batches(&self) -> &[LineBatch] {
        &self.batches
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    /// Drop recorded geometry before the next frame
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    /// Hand the recorded batches to the presenter
    pub fn take_batches(&mut self) -> Vec<LineBatch> {
        std::mem::take(&mut self.batches)
    }
}

impl OverlaySurface for LineListSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    /// Filled area as one horizontal line per pixel row
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let Some((x0, y0, x1, y1)) = rect.clip(self.width, self.height) else {
            return;
        };
        let mut vertices = Vec::with_capacity((y1 - y0) * 2);
        for row in y0..y1 {
            vertices.push(self.to_ndc(x0 as i32, row as i32));
            vertices.push(self.to_ndc(x1 as i32, row as i32));
        }
        self.batches.push(LineBatch {
            vertices,
            line_width: 1.0,
            rgba: color.to_rgba_f32(),
        });
    }

    /// Four segments (top, right, bottom, left) around `rect`
    fn draw_outline(&mut self, rect: PixelRect, thickness: u32, color: Color) {
        if rect.is_empty() {
            return;
        }
        let x2 = rect.right().min(i32::MAX as i64) as i32;
        let y2 = rect.bottom().min(i32::MAX as i64) as i32;
        let tl = self.to_ndc(rect.x, rect.y);
        let tr = self.to_ndc(x2, rect.y);
        let br = self.to_ndc(x2, y2);
        let bl = self.to_ndc(rect.x, y2);
        self.batches.push(LineBatch {
            vertices: vec![tl, tr, tr, br, br, bl, bl, tl],
            line_width: thickness as f32,
            rgba: color.to_rgba_f32(),
        });
    }
}
