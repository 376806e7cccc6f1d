//! On-screen controls context
//!
//! `TouchControls` owns the zone table, screen geometry, finger slots and
//! the menu edge cursor. The host creates one, feeds it touch events and
//! polls it from a single control loop; every `on_contact` finishes its
//! recompute before returning, so readers never see a half-updated state.

use log::{debug, info, warn};

use crate::button::ButtonMask;
use crate::edge::{EdgeCursor, EdgeEvent, EdgeStats};
use crate::hit::{HitTester, ScreenGeometry};
use crate::touch::{PointerEvent, TouchEvent};
use crate::tracker::{ButtonState, Contact, TouchTracker, MAX_FINGERS};
use crate::zone::{Zone, ZoneTable, ZoneTarget};

/// Result of feeding one contact update
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Controls are disabled; nothing changed
    Ignored,
    /// State updated
    Handled,
    /// A finger just landed on the menu zone
    MenuRequested,
}

/// Per-frame read-only view for the overlay renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlsSnapshot {
    pub pressed: ButtonMask,
    pub menu_held: bool,
}

impl ControlsSnapshot {
    /// Whether `zone` should be drawn highlighted
    pub fn is_held(&self, zone: &Zone) -> bool {
        match zone.target {
            ZoneTarget::Button(button) => self.pressed.contains(button),
            ZoneTarget::Menu => self.menu_held,
        }
    }
}

/// Virtual controller input state
#[derive(Clone, Debug)]
pub struct TouchControls {
    table: ZoneTable,
    geometry: ScreenGeometry,
    tracker: TouchTracker,
    edges: EdgeCursor,
    enabled: bool,
}

impl Default for TouchControls {
    fn default() -> Self {
        Self::new(ZoneTable::builtin())
    }
}

impl TouchControls {
    /// Create controls with every finger slot released
    pub fn new(table: ZoneTable) -> Self {
        info!("touch controls: {} zones defined", table.len());
        Self {
            table,
            geometry: ScreenGeometry::default(),
            tracker: TouchTracker::new(),
            edges: EdgeCursor::new(),
            enabled: true,
        }
    }

    pub fn table(&self) -> &ZoneTable {
        &self.table
    }

    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    /// Update the surface size raw touch coordinates are reported in.
    /// A zero-sized geometry is ignored.
    pub fn set_screen_geometry(&mut self, width: u32, height: u32) {
        let geometry = ScreenGeometry::new(width, height);
        if !geometry.is_valid() {
            warn!("touch controls: ignoring invalid geometry {}x{}", width, height);
            return;
        }
        if geometry != self.geometry {
            debug!(
                "touch controls: geometry {}x{} -> {}x{}",
                self.geometry.width, self.geometry.height, width, height
            );
            self.geometry = geometry;
        }
    }

    /// Zone index under a raw coordinate
    pub fn resolve(&self, x: i32, y: i32) -> Option<usize> {
        HitTester::new(&self.table, self.geometry).resolve(x, y)
    }

    /// Feed one contact update and recompute the aggregate state
    pub fn on_contact(&mut self, finger_id: i32, x: i32, y: i32, pressed: bool) -> ContactOutcome {
        if !self.enabled {
            return ContactOutcome::Ignored;
        }

        let zone = if pressed { self.resolve(x, y) } else { None };
        let update = self.tracker.update(finger_id, x, y, zone, pressed);

        let before = self.tracker.state().pressed;
        let state = self.tracker.recompute(&self.table);
        self.edges.observe(before, state.pressed);

        let entered_menu = update
            .entered_zone()
            .and_then(|i| self.table.get(i))
            .is_some_and(|z| z.target.is_menu());
        if entered_menu {
            debug!("touch controls: menu requested by slot {}", update.slot);
            ContactOutcome::MenuRequested
        } else {
            ContactOutcome::Handled
        }
    }

    /// Feed a multi-touch event
    pub fn handle_touch(&mut self, event: TouchEvent) -> ContactOutcome {
        match event {
            TouchEvent::Down { finger, point } | TouchEvent::Move { finger, point } => {
                self.on_contact(finger, point.x, point.y, true)
            }
            TouchEvent::Up { finger } => self.on_contact(finger, 0, 0, false),
        }
    }

    /// Feed a mouse event; hover motion is not a contact
    pub fn handle_pointer(&mut self, event: PointerEvent) -> ContactOutcome {
        if !self.enabled {
            return ContactOutcome::Ignored;
        }
        match event.to_touch() {
            Some(touch) => self.handle_touch(touch),
            None => ContactOutcome::Handled,
        }
    }

    /// Snapshot for the gameplay bindings consumer
    pub fn get_state(&self) -> ButtonState {
        self.tracker.state()
    }

    /// Currently held gameplay buttons
    pub fn pressed(&self) -> ButtonMask {
        self.tracker.state().pressed
    }

    /// Next menu edge event; call until it returns `None` every tick
    pub fn poll_next(&mut self) -> Option<EdgeEvent> {
        self.edges.poll_next(self.tracker.state().pressed)
    }

    /// Drain every pending edge event, oldest policy first
    pub fn drain_edges(&mut self) -> Vec<EdgeEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.poll_next() {
            events.push(event);
        }
        events
    }

    /// Buttons the menu consumer has been told are down
    pub fn reported(&self) -> ButtonMask {
        self.edges.reported()
    }

    pub fn edge_stats(&self) -> EdgeStats {
        self.edges.stats()
    }

    /// Read-only view for one rendered frame
    pub fn snapshot(&self) -> ControlsSnapshot {
        ControlsSnapshot {
            pressed: self.tracker.state().pressed,
            menu_held: self.tracker.menu_held(),
        }
    }

    pub fn contacts(&self) -> &[Contact; MAX_FINGERS] {
        self.tracker.contacts()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled controls ignore all intake
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Release every finger and forget reported edges
    pub fn reset(&mut self) {
        self.tracker.clear();
        self.edges.reset();
        info!("touch controls: reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::Button;
    use crate::touch::TouchPoint;
    use proptest::prelude::*;

    /// Pixel at the center of the zone bound to `target`
    fn center_of(controls: &TouchControls, target: ZoneTarget) -> (i32, i32) {
        let g = controls.geometry();
        let zone = controls
            .table()
            .iter()
            .find(|z| z.target == target)
            .unwrap();
        let r = zone.rect;
        (
            ((r.x1 as u32 + r.x2 as u32) * g.width / 200) as i32,
            ((r.y1 as u32 + r.y2 as u32) * g.height / 200) as i32,
        )
    }

    #[test]
    fn test_example_scenario() {
        let mut controls = TouchControls::default();
        controls.set_screen_geometry(1024, 768);

        assert_eq!(controls.on_contact(0, 80, 250, true), ContactOutcome::Handled);
        assert_eq!(controls.pressed(), Button::Up.mask());

        controls.on_contact(0, 80, 250, false);
        assert_eq!(controls.pressed(), ButtonMask::EMPTY);

        assert_eq!(
            controls.drain_edges(),
            vec![EdgeEvent::down(Button::Up), EdgeEvent::up(Button::Up)]
        );
        assert_eq!(controls.poll_next(), None);
    }

    #[test]
    fn test_menu_request_fires_once() {
        let mut controls = TouchControls::default();
        let (x, y) = center_of(&controls, ZoneTarget::Menu);

        assert_eq!(controls.on_contact(1, x, y, true), ContactOutcome::MenuRequested);
        assert_eq!(controls.on_contact(1, x + 1, y, true), ContactOutcome::Handled);
        assert!(controls.pressed().is_empty());
        assert!(controls.snapshot().menu_held);
        assert_eq!(controls.drain_edges(), vec![]);

        controls.on_contact(1, x, y, false);
        assert!(!controls.snapshot().menu_held);
        assert_eq!(controls.on_contact(1, x, y, true), ContactOutcome::MenuRequested);
    }

    #[test]
    fn test_slide_between_zones() {
        let mut controls = TouchControls::default();
        let up = center_of(&controls, ZoneTarget::Button(Button::Up));
        let down = center_of(&controls, ZoneTarget::Button(Button::Down));

        controls.on_contact(0, up.0, up.1, true);
        controls.on_contact(0, down.0, down.1, true);
        let state = controls.get_state();
        assert_eq!(state.pressed, Button::Down.mask());
        assert_eq!(state.just_pressed, Button::Down.mask());
        assert_eq!(state.just_released, Button::Up.mask());

        // Slide into empty space releases the button.
        controls.on_contact(0, 512, 384, true);
        assert!(controls.pressed().is_empty());
    }

    #[test]
    fn test_contact_off_surface_presses_nothing() {
        let mut controls = TouchControls::default();
        assert_eq!(controls.resolve(-5, 350), None);

        // LEFT starts at x=0 and L1 at y=0; just outside must not hit them.
        controls.on_contact(0, -5, 350, true);
        controls.on_contact(1, -1, -1, true);
        controls.on_contact(2, 10, -3, true);
        assert!(!controls.pressed().contains(Button::Left));
        assert!(controls.pressed().is_empty());
        assert_eq!(controls.poll_next(), None);

        // Sliding back onto the surface picks up the zone.
        controls.on_contact(0, 5, 350, true);
        assert_eq!(controls.pressed(), Button::Left.mask());
    }

    #[test]
    fn test_geometry_scaling_and_invalid_geometry() {
        let mut controls = TouchControls::default();
        controls.set_screen_geometry(640, 480);
        controls.set_screen_geometry(0, 480);
        assert_eq!(controls.geometry(), ScreenGeometry::new(640, 480));

        let (x, y) = center_of(&controls, ZoneTarget::Button(Button::R2));
        controls.on_contact(3, x, y, true);
        assert_eq!(controls.pressed(), Button::R2.mask());
    }

    #[test]
    fn test_pointer_acts_as_finger_zero() {
        let mut controls = TouchControls::default();
        let (x, y) = center_of(&controls, ZoneTarget::Button(Button::Cross));
        let point = TouchPoint::new(x, y);

        controls.handle_pointer(PointerEvent::Motion { point, held: false });
        assert!(controls.pressed().is_empty());

        controls.handle_pointer(PointerEvent::ButtonDown(point));
        assert_eq!(controls.pressed(), Button::Cross.mask());
        assert!(controls.contacts()[0].active);

        controls.handle_pointer(PointerEvent::ButtonUp(point));
        assert!(controls.pressed().is_empty());
    }

    #[test]
    fn test_disabled_and_reset() {
        let mut controls = TouchControls::default();
        let (x, y) = center_of(&controls, ZoneTarget::Button(Button::Start));

        controls.set_enabled(false);
        assert_eq!(controls.on_contact(0, x, y, true), ContactOutcome::Ignored);
        assert!(controls.pressed().is_empty());

        controls.set_enabled(true);
        controls.on_contact(0, x, y, true);
        controls.drain_edges();
        assert_eq!(controls.reported(), Button::Start.mask());

        controls.reset();
        assert!(controls.pressed().is_empty());
        assert!(controls.reported().is_empty());
        assert_eq!(controls.poll_next(), None);
    }

    #[test]
    fn test_ten_fingers_on_distinct_zones() {
        let mut controls = TouchControls::default();
        for (finger, button) in Button::ALL.iter().take(MAX_FINGERS).enumerate() {
            let (x, y) = center_of(&controls, ZoneTarget::Button(*button));
            controls.on_contact(finger as i32, x, y, true);
        }
        assert_eq!(controls.pressed().count(), 10);

        for finger in 0..MAX_FINGERS as i32 {
            controls.on_contact(finger, 0, 0, false);
        }
        assert!(controls.pressed().is_empty());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Contact { finger: i32, x: i32, y: i32, pressed: bool },
        Poll,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (-2i32..12, -50i32..1100, -50i32..820, any::<bool>())
                .prop_map(|(finger, x, y, pressed)| Op::Contact { finger, x, y, pressed }),
            1 => Just(Op::Poll),
        ]
    }

    proptest! {
        #[test]
        fn pressed_is_union_of_active_contacts(ops in proptest::collection::vec(op(), 1..80)) {
            let mut controls = TouchControls::default();
            let mut down = ButtonMask::EMPTY;

            for op in ops {
                match op {
                    Op::Contact { finger, x, y, pressed } => {
                        controls.on_contact(finger, x, y, pressed);
                    }
                    Op::Poll => {
                        for event in controls.drain_edges() {
                            prop_assert_eq!(down.contains(event.button), !event.is_down);
                            if event.is_down {
                                down.insert(event.button);
                            } else {
                                down.remove(event.button);
                            }
                        }
                        prop_assert_eq!(controls.reported(), controls.pressed());
                    }
                }

                let expected: ButtonMask = controls
                    .contacts()
                    .iter()
                    .filter(|c| c.active)
                    .filter_map(|c| c.zone)
                    .filter_map(|i| controls.table().get(i))
                    .filter_map(|z| z.target.button())
                    .collect();
                prop_assert_eq!(controls.pressed(), expected);
            }

            for finger in 0..MAX_FINGERS as i32 {
                controls.on_contact(finger, 0, 0, false);
            }
            prop_assert!(controls.pressed().is_empty());
        }
    }
}
