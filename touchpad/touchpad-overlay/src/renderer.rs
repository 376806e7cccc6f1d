//! Overlay renderer
//!
//! Draws every zone's outline, and optionally its label, onto whichever
//! surface the active video backend provides. Pressed zones get a thicker
//! yellow outline; idle zones a thin white one.

use log::{debug, info};
use touchpad_input::{ControlsSnapshot, TouchControls, Zone, ZoneTable};

use crate::color::Color;
use crate::font;
use crate::surface::{OverlaySurface, PixelRect};

/// Outline thickness of an idle zone
pub const OUTLINE_THICKNESS: u32 = 2;
/// Outline thickness of a held zone
pub const PRESSED_THICKNESS: u32 = 3;

/// Idle outline; alpha only matters to blending sinks
pub const OUTLINE_COLOR: Color = Color::WHITE.with_alpha(153);
/// Held outline
pub const PRESSED_COLOR: Color = Color::YELLOW.with_alpha(230);

/// Which zones to draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Every zone
    #[default]
    Full,
    /// Only zones lying entirely outside the video rectangle. The rectangle
    /// is in pixels of the surface being drawn, not percent; zones are
    /// scaled to pixels before the comparison. Touching edges count as
    /// outside.
    BordersExcludingVideo(PixelRect),
}

/// Renderer settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayOptions {
    /// Hidden overlays draw nothing
    pub visible: bool,
    /// Draw zone labels on surfaces with text support
    pub labels: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            visible: true,
            labels: true,
        }
    }
}

/// What one `draw` call did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    pub zones_drawn: usize,
    pub zones_skipped: usize,
    pub labels_drawn: usize,
}

/// Overlay renderer state
#[derive(Clone, Debug, Default)]
pub struct OverlayRenderer {
    options: OverlayOptions,
    /// Last surface size announced in the log
    announced: Option<(u32, u32)>,
}

impl OverlayRenderer {
    pub fn new(options: OverlayOptions) -> Self {
        Self {
            options,
            announced: None,
        }
    }

    pub fn options(&self) -> OverlayOptions {
        self.options
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.options.visible = visible;
    }

    pub fn set_labels(&mut self, labels: bool) {
        self.options.labels = labels;
    }

    /// Pixel rectangle of `zone` on a `width x height` surface
    pub fn zone_rect(zone: &Zone, width: u32, height: u32) -> PixelRect {
        PixelRect::from_percent(&zone.rect, width, height)
    }

    /// Draw the zones of `table` highlighted per `snapshot`. An
    /// unavailable surface or a hidden overlay draws nothing.
    pub fn draw<S: OverlaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        table: &ZoneTable,
        snapshot: &ControlsSnapshot,
        mode: RenderMode,
    ) -> DrawReport {
        let mut report = DrawReport::default();
        if !self.options.visible || !surface.is_available() {
            return report;
        }

        let (width, height) = (surface.width(), surface.height());
        if self.announced != Some((width, height)) {
            info!(
                "overlay: drawing {} zones on {}x{} surface",
                table.len(),
                width,
                height
            );
            self.announced = Some((width, height));
        }

        for zone in table.iter() {
            let rect = Self::zone_rect(zone, width, height);
            if let RenderMode::BordersExcludingVideo(video) = mode {
                if !rect.is_outside(&video) {
                    report.zones_skipped += 1;
                    continue;
                }
            }

            let (thickness, color) = if snapshot.is_held(zone) {
                (PRESSED_THICKNESS, PRESSED_COLOR)
            } else {
                (OUTLINE_THICKNESS, OUTLINE_COLOR)
            };
            surface.draw_outline(rect, thickness, color);
            report.zones_drawn += 1;

            if self.options.labels && surface.supports_text() {
                if let Some(label) = zone.label.as_ref() {
                    if draw_label(surface, rect, label.as_str(), color) {
                        report.labels_drawn += 1;
                    }
                }
            }
        }

        if report.zones_skipped > 0 {
            debug!("overlay: {} zones hidden behind video", report.zones_skipped);
        }
        report
    }

    /// Resize the controls' hit testing to this surface, then draw it
    pub fn draw_controls<S: OverlaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        controls: &mut TouchControls,
        mode: RenderMode,
    ) -> DrawReport {
        if surface.is_available() {
            controls.set_screen_geometry(surface.width(), surface.height());
        }
        let snapshot = controls.snapshot();
        self.draw(surface, controls.table(), &snapshot, mode)
    }
}

/// Center `text` in `rect`; labels that do not fit are left out
fn draw_label<S: OverlaySurface + ?Sized>(
    surface: &mut S,
    rect: PixelRect,
    text: &str,
    color: Color,
) -> bool {
    let (tw, th) = font::text_size(text);
    if tw > rect.width || th > rect.height {
        return false;
    }
    let x = rect.x + ((rect.width - tw) / 2) as i32;
    let y = rect.y + ((rect.height - th) / 2) as i32;
    surface.draw_text(x, y, text, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::LineListSurface;
    use crate::rgb565::Rgb565Surface;
    use touchpad_input::{Button, ButtonMask, ZoneTarget};

    const W: u32 = 1024;
    const H: u32 = 768;

    fn surface_buf() -> Vec<u8> {
        vec![0u8; (W * H * 2) as usize]
    }

    fn rect_of(table: &ZoneTable, target: ZoneTarget) -> PixelRect {
        let zone = table.iter().find(|z| z.target == target).unwrap();
        OverlayRenderer::zone_rect(zone, W, H)
    }

    #[test]
    fn test_full_mode_draws_all_zones() {
        let table = ZoneTable::builtin();
        let mut buf = surface_buf();
        let mut surface = Rgb565Surface::new(&mut buf, W, H, (W * 2) as usize).unwrap();
        let mut renderer = OverlayRenderer::default();

        let report = renderer.draw(&mut surface, &table, &ControlsSnapshot::default(), RenderMode::Full);
        assert_eq!(report.zones_drawn, table.len());
        assert_eq!(report.zones_skipped, 0);
        assert_eq!(report.labels_drawn, table.len());

        let up = rect_of(&table, ZoneTarget::Button(Button::Up));
        assert_eq!(surface.get_pixel(up.x as u32, up.y as u32), Some(0xFFFF));
        assert_eq!(surface.get_pixel(up.x as u32 + 2, up.y as u32 + 20), Some(0));
    }

    #[test]
    fn test_pressed_zone_is_thick_and_yellow() {
        let table = ZoneTable::builtin();
        let mut buf = surface_buf();
        let mut surface = Rgb565Surface::new(&mut buf, W, H, (W * 2) as usize).unwrap();
        let snapshot = ControlsSnapshot {
            pressed: ButtonMask::from_iter([Button::Cross]),
            menu_held: true,
        };

        OverlayRenderer::default().draw(&mut surface, &table, &snapshot, RenderMode::Full);

        let cross = rect_of(&table, ZoneTarget::Button(Button::Cross));
        assert_eq!(surface.get_pixel(cross.x as u32 + 2, cross.y as u32 + 20), Some(0xFFE0));
        let menu = rect_of(&table, ZoneTarget::Menu);
        assert_eq!(surface.get_pixel(menu.x as u32, menu.y as u32), Some(0xFFE0));
        let square = rect_of(&table, ZoneTarget::Button(Button::Square));
        assert_eq!(surface.get_pixel(square.x as u32, square.y as u32), Some(0xFFFF));
    }

    #[test]
    fn test_video_rect_covering_zone_skips_it() {
        let table = ZoneTable::builtin();
        let video = rect_of(&table, ZoneTarget::Button(Button::Triangle));
        let mut lines = LineListSurface::new(W, H);
        let mut renderer = OverlayRenderer::default();

        let report = renderer.draw(
            &mut lines,
            &table,
            &ControlsSnapshot::default(),
            RenderMode::BordersExcludingVideo(video),
        );

        let outside: Vec<PixelRect> = table
            .iter()
            .map(|z| OverlayRenderer::zone_rect(z, W, H))
            .filter(|r| r.is_outside(&video))
            .collect();
        assert!(outside.len() >= table.len() - 3);
        assert_eq!(report.zones_drawn, outside.len());
        assert_eq!(report.zones_drawn + report.zones_skipped, table.len());
        assert_eq!(lines.batches().len(), outside.len());

        // Triangle's own outline never shows up
        let skipped = lines.to_ndc(video.x, video.y);
        assert!(lines.batches().iter().all(|b| b.vertices[0] != skipped));
        // Zones well away from it still do
        let l1 = rect_of(&table, ZoneTarget::Button(Button::L1));
        let l1_corner = lines.to_ndc(l1.x, l1.y);
        assert!(lines.batches().iter().any(|b| b.vertices[0] == l1_corner));
    }

    #[test]
    fn test_video_in_center_keeps_side_controls() {
        let table = ZoneTable::builtin();
        let snapshot = ControlsSnapshot::default();
        let mut renderer = OverlayRenderer::default();

        // 4:3 picture pillarboxed between the side pads, full height
        let mut lines = LineListSurface::new(W, H);
        let video = PixelRect::new(160, 0, 704, H);
        let report = renderer.draw(
            &mut lines,
            &table,
            &snapshot,
            RenderMode::BordersExcludingVideo(video),
        );
        // Shoulder buttons, Start, Select and Menu reach over the picture
        assert_eq!(report.zones_skipped, 7);
        assert_eq!(report.zones_drawn, table.len() - 7);
        assert_eq!(report.labels_drawn, 0);

        // Picture shrunk to sit between the shoulder row and Start/Select
        let mut lines = LineListSurface::new(W, H);
        let video = PixelRect::new(160, 184, 704, 491);
        let report = renderer.draw(
            &mut lines,
            &table,
            &snapshot,
            RenderMode::BordersExcludingVideo(video),
        );
        assert_eq!(report.zones_skipped, 0);
        assert_eq!(report.zones_drawn, table.len());
    }

    #[test]
    fn test_hidden_and_unavailable_are_noops() {
        let table = ZoneTable::builtin();
        let mut lines = LineListSurface::new(W, H);
        let mut renderer = OverlayRenderer::new(OverlayOptions {
            visible: false,
            labels: true,
        });
        let report = renderer.draw(&mut lines, &table, &ControlsSnapshot::default(), RenderMode::Full);
        assert_eq!(report, DrawReport::default());
        assert_eq!(lines.vertex_count(), 0);

        renderer.set_visible(true);
        let mut empty = LineListSurface::new(0, 0);
        let report = renderer.draw(&mut empty, &table, &ControlsSnapshot::default(), RenderMode::Full);
        assert_eq!(report, DrawReport::default());
    }

    #[test]
    fn test_draw_controls_updates_geometry() {
        let mut controls = TouchControls::default();
        let mut lines = LineListSurface::new(640, 480);
        let mut renderer = OverlayRenderer::default();

        renderer.draw_controls(&mut lines, &mut controls, RenderMode::Full);
        assert_eq!(controls.geometry().width, 640);
        assert_eq!(controls.geometry().height, 480);
        assert_eq!(lines.vertex_count(), controls.table().len() * 8);
    }
}
