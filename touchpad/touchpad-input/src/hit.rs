//! Hit testing: raw surface pixels to zone index

use crate::zone::ZoneTable;

/// Design resolution of the TouchPad screen
pub const DESIGN_WIDTH: u32 = 1024;
pub const DESIGN_HEIGHT: u32 = 768;

/// Size of the surface touch coordinates are reported in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenGeometry {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self::DESIGN
    }
}

impl ScreenGeometry {
    pub const DESIGN: ScreenGeometry = ScreenGeometry::new(DESIGN_WIDTH, DESIGN_HEIGHT);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// A geometry with a zero axis cannot scale coordinates
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Convert a pixel coordinate to integer percentage space. Rounds
    /// toward negative infinity so pixels left of or above the surface map
    /// below 0.
    #[inline]
    pub fn to_percent(&self, x: i32, y: i32) -> (i32, i32) {
        let px = (x as i64 * 100).div_euclid(self.width.max(1) as i64);
        let py = (y as i64 * 100).div_euclid(self.height.max(1) as i64);
        (clamp_i32(px), clamp_i32(py))
    }

    /// Check whether a pixel coordinate lies on the surface
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Maps raw coordinates to the first zone that contains them
#[derive(Clone, Copy, Debug)]
pub struct HitTester<'a> {
    table: &'a ZoneTable,
    geometry: ScreenGeometry,
}

impl<'a> HitTester<'a> {
    pub fn new(table: &'a ZoneTable, geometry: ScreenGeometry) -> Self {
        Self { table, geometry }
    }

    /// Zone index under `(x, y)`, or `None` for empty space and
    /// coordinates outside the surface
    pub fn resolve(&self, x: i32, y: i32) -> Option<usize> {
        if !self.geometry.contains(x, y) {
            return None;
        }
        let (px, py) = self.geometry.to_percent(x, y);
        self.table.find(px, py)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use crate::zone::ZoneTarget;
    use proptest::prelude::*;

    fn target_at(table: &ZoneTable, geometry: ScreenGeometry, x: i32, y: i32) -> Option<ZoneTarget> {
        HitTester::new(table, geometry)
            .resolve(x, y)
            .and_then(|i| table.get(i))
            .map(|z| z.target)
    }

    #[test]
    fn test_truncating_percent_conversion() {
        let geometry = ScreenGeometry::DESIGN;
        assert_eq!(geometry.to_percent(80, 250), (7, 32));
        assert_eq!(geometry.to_percent(1023, 767), (99, 99));
        assert_eq!(geometry.to_percent(1024, 768), (100, 100));
        assert_eq!(geometry.to_percent(-5, -1), (-1, -1));
        assert_eq!(geometry.to_percent(-1024, 0), (-100, 0));
    }

    #[test]
    fn test_resolve_example_touch() {
        let table = ZoneTable::builtin();
        assert_eq!(
            target_at(&table, ScreenGeometry::DESIGN, 80, 250),
            Some(ZoneTarget::Button(Button::Up))
        );
    }

    #[test]
    fn test_resolve_scales_with_surface() {
        let table = ZoneTable::builtin();
        // Same physical spot on a half-size surface
        let half = ScreenGeometry::new(512, 384);
        assert_eq!(
            target_at(&table, half, 40, 125),
            Some(ZoneTarget::Button(Button::Up))
        );
        // Menu at top center
        assert_eq!(target_at(&table, half, 256, 10), Some(ZoneTarget::Menu));
    }

    #[test]
    fn test_out_of_surface_is_none() {
        let table = ZoneTable::builtin();
        let geometry = ScreenGeometry::DESIGN;
        assert_eq!(target_at(&table, geometry, -5, 300), None);
        // Just left of LEFT and above L1
        assert_eq!(target_at(&table, geometry, -5, 350), None);
        assert_eq!(target_at(&table, geometry, -1, -1), None);
        assert_eq!(target_at(&table, geometry, 10, -1), None);
        assert_eq!(target_at(&table, geometry, 1023, 768), None);
        assert_eq!(target_at(&table, geometry, 1024, 300), None);
        assert_eq!(target_at(&table, geometry, 500, 5000), None);
        assert_eq!(target_at(&table, geometry, i32::MAX, i32::MIN), None);
        // Empty middle of the screen
        assert_eq!(target_at(&table, geometry, 512, 384), None);
    }

    proptest! {
        #[test]
        fn zone_center_resolves_to_zone(width in 200u32..4096, height in 200u32..4096) {
            let table = ZoneTable::builtin();
            let geometry = ScreenGeometry::new(width, height);
            let tester = HitTester::new(&table, geometry);

            for (index, zone) in table.iter().enumerate() {
                let r = zone.rect;
                let cx = ((r.x1 as u64 + r.x2 as u64) * width as u64 / 200) as i32;
                let cy = ((r.y1 as u64 + r.y2 as u64) * height as u64 / 200) as i32;
                prop_assert_eq!(tester.resolve(cx, cy), Some(index));
            }
        }
    }
}
