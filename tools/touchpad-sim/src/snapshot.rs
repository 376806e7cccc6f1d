//! Render the overlay into the configured surface and export it

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use std::path::Path;

use touchpad_input::{ControlsSnapshot, ZoneTable};
use touchpad_overlay::{
    Color, DrawReport, LineListSurface, OverlayRenderer, PackedYuvSurface, RenderMode,
    Rgb565Surface, YuvLayout,
};

use crate::config::SurfaceKind;

/// Rendered frame
pub enum Frame {
    /// Pixel surfaces, converted to RGB for export
    Pixels(RgbImage),
    /// GPU path: recorded line geometry
    Lines(LineListSurface),
}

/// Draw one frame of `width x height` on a fresh black surface
pub fn render(
    kind: SurfaceKind,
    width: u32,
    height: u32,
    renderer: &mut OverlayRenderer,
    table: &ZoneTable,
    snapshot: &ControlsSnapshot,
    mode: RenderMode,
) -> Result<(Frame, DrawReport)> {
    match kind {
        SurfaceKind::Rgb565 => {
            let pitch = width as usize * 2;
            let mut buffer = vec![0u8; pitch * height as usize];
            let mut surface = Rgb565Surface::new(&mut buffer, width, height, pitch)
                .context("Failed to create RGB565 surface")?;
            let report = renderer.draw(&mut surface, table, snapshot, mode);
            let image = RgbImage::from_fn(width, height, |x, y| {
                let c = surface
                    .get_pixel(x, y)
                    .map(Color::from_rgb565)
                    .unwrap_or(Color::BLACK);
                Rgb([c.r, c.g, c.b])
            });
            Ok((Frame::Pixels(image), report))
        }
        SurfaceKind::Yuyv | SurfaceKind::Uyvy => {
            let layout = if kind == SurfaceKind::Yuyv {
                YuvLayout::Yuyv
            } else {
                YuvLayout::Uyvy
            };
            let pitch = width as usize * 2;
            let mut buffer = black_yuv(layout, pitch * height as usize);
            let mut surface = PackedYuvSurface::new(&mut buffer, width, height, pitch, layout)
                .context("Failed to create YUV surface")?;
            let report = renderer.draw(&mut surface, table, snapshot, mode);
            let image = yuv_to_image(&surface, width, height);
            Ok((Frame::Pixels(image), report))
        }
        SurfaceKind::Lines => {
            let mut surface = LineListSurface::new(width, height);
            let report = renderer.draw(&mut surface, table, snapshot, mode);
            Ok((Frame::Lines(surface), report))
        }
    }
}

/// Buffer of `len` bytes filled with black for `layout`
fn black_yuv(layout: YuvLayout, len: usize) -> Vec<u8> {
    let black = Color::BLACK.to_yuv();
    let pair = match layout {
        YuvLayout::Yuyv => [black.y, black.u, black.y, black.v],
        YuvLayout::Uyvy => [black.u, black.y, black.v, black.y],
    };
    pair.iter().copied().cycle().take(len).collect()
}

fn yuv_to_image(surface: &PackedYuvSurface<'_>, width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        // Chroma pair lives on the even and odd column of the macropixel
        let even = x & !1;
        let (luma, _) = surface.get_pixel(x, y).unwrap_or((16, 128));
        let (_, u) = surface.get_pixel(even, y).unwrap_or((16, 128));
        let (_, v) = surface.get_pixel(even + 1, y).unwrap_or((16, 128));
        Rgb(yuv_to_rgb(luma, u, v))
    })
}

/// Inverse of the BT.601 integer conversion used by the overlay
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let c = y as i32 - 16;
    let d = u as i32 - 128;
    let e = v as i32 - 128;
    let clamp = |value: i32| value.clamp(0, 255) as u8;
    [
        clamp((298 * c + 409 * e + 128) >> 8),
        clamp((298 * c - 100 * d - 208 * e + 128) >> 8),
        clamp((298 * c + 516 * d + 128) >> 8),
    ]
}

/// Write a pixel frame as PNG
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use touchpad_input::{Button, ButtonMask};

    fn draw(kind: SurfaceKind, snapshot: ControlsSnapshot) -> (Frame, DrawReport) {
        let table = ZoneTable::builtin();
        let mut renderer = OverlayRenderer::default();
        render(kind, 256, 192, &mut renderer, &table, &snapshot, RenderMode::Full).unwrap()
    }

    #[test]
    fn test_yuv_round_trip_of_overlay_colors() {
        assert_eq!(yuv_to_rgb(16, 128, 128), [0, 0, 0]);
        let white = Color::WHITE.to_yuv();
        let [r, g, b] = yuv_to_rgb(white.y, white.u, white.v);
        assert!(r >= 250 && g >= 250 && b >= 250);
        let yellow = Color::YELLOW.to_yuv();
        let [r, g, b] = yuv_to_rgb(yellow.y, yellow.u, yellow.v);
        assert!(r >= 240 && g >= 240 && b <= 16);
    }

    #[test]
    fn test_pixel_frames_share_layout() {
        let snapshot = ControlsSnapshot {
            pressed: ButtonMask::from_iter([Button::L1]),
            menu_held: false,
        };
        for kind in [SurfaceKind::Rgb565, SurfaceKind::Yuyv, SurfaceKind::Uyvy] {
            let (frame, report) = draw(kind, snapshot);
            assert_eq!(report.zones_drawn, 15, "{}", kind);
            let Frame::Pixels(image) = frame else {
                panic!("{} produced no pixels", kind);
            };
            // L1 outline corner is yellow, picture centre stays black
            let corner = image.get_pixel(0, 0).0;
            assert!(corner[0] > 200 && corner[1] > 200 && corner[2] < 40, "{}: {:?}", kind, corner);
            assert_eq!(image.get_pixel(128, 96).0, [0, 0, 0], "{}", kind);
        }
    }

    #[test]
    fn test_line_frame_and_png_export() {
        let (frame, report) = draw(SurfaceKind::Lines, ControlsSnapshot::default());
        let Frame::Lines(lines) = frame else {
            panic!("expected line geometry");
        };
        assert_eq!(lines.vertex_count(), report.zones_drawn * 8);
        assert_eq!(report.labels_drawn, 0);

        let (frame, _) = draw(SurfaceKind::Rgb565, ControlsSnapshot::default());
        let Frame::Pixels(image) = frame else {
            panic!("expected pixels");
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.png");
        save_png(&image, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
