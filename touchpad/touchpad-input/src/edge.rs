//! Edge event queue for menu navigation
//!
//! Turns changes of the aggregate bitmask into a stream of single
//! press/release events. The cursor remembers which buttons have been
//! reported as down; each `poll_next` call emits at most one transition,
//! releases before presses, lowest button id first.
//!
//! Transitions that happen entirely between two polls are latched, so a
//! quick tap still reaches the consumer as a press followed by a release.
//! The queue holds at most one pending press and one pending release per
//! button, so it is bounded by the button count rather than event volume.

use log::{debug, warn};

use crate::button::{Button, ButtonMask};

/// One press or release transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeEvent {
    pub button: Button,
    pub is_down: bool,
}

impl EdgeEvent {
    pub const fn down(button: Button) -> Self {
        Self {
            button,
            is_down: true,
        }
    }

    pub const fn up(button: Button) -> Self {
        Self {
            button,
            is_down: false,
        }
    }
}

/// Counters for a consumer that drains slower than input arrives
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeStats {
    /// Events handed to the consumer
    pub emitted: u64,
    /// Bitmask changes that arrived while earlier transitions were undrained
    pub lagged_updates: u64,
    /// Repeated taps of a button merged into one pending press/release
    pub coalesced_taps: u64,
}

/// Tracks what the menu consumer has already been told
#[derive(Clone, Debug, Default)]
pub struct EdgeCursor {
    /// Buttons reported as down and not yet reported as up
    reported: ButtonMask,
    /// Pressed since the last report, possibly released again already
    latched_press: ButtonMask,
    /// Reported buttons that were released at some point since
    latched_release: ButtonMask,
    stats: EdgeStats,
}

impl EdgeCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one aggregate transition `before -> after`
    pub fn observe(&mut self, before: ButtonMask, after: ButtonMask) {
        let newly_pressed = after.difference(before);
        let newly_released = before.difference(after);
        if newly_pressed.is_empty() && newly_released.is_empty() {
            return;
        }

        if self.has_pending(before) {
            self.stats.lagged_updates += 1;
            if self.stats.lagged_updates.is_power_of_two() {
                warn!(
                    "edge queue: consumer lagging ({} updates arrived before drain)",
                    self.stats.lagged_updates
                );
            }
        }

        for button in newly_pressed.iter() {
            if self.latched_press.contains(button) {
                self.stats.coalesced_taps += 1;
                debug!("edge queue: repeated {} tap coalesced", button);
            }
            self.latched_press.insert(button);
        }

        self.latched_release = self
            .latched_release
            .union(ButtonMask(newly_released.bits() & self.reported.bits()));
    }

    /// Next pending transition given the current aggregate bitmask
    pub fn poll_next(&mut self, pressed: ButtonMask) -> Option<EdgeEvent> {
        let releases = self.pending_releases(pressed);
        if let Some(button) = releases.lowest() {
            self.reported.remove(button);
            self.latched_release.remove(button);
            self.stats.emitted += 1;
            debug!("edge queue: {} up", button);
            return Some(EdgeEvent::up(button));
        }

        let presses = self.pending_presses(pressed);
        if let Some(button) = presses.lowest() {
            self.reported.insert(button);
            self.latched_press.remove(button);
            self.stats.emitted += 1;
            debug!("edge queue: {} down", button);
            return Some(EdgeEvent::down(button));
        }

        None
    }

    fn pending_releases(&self, pressed: ButtonMask) -> ButtonMask {
        ButtonMask(self.reported.bits() & (!pressed.bits() | self.latched_release.bits()))
    }

    fn pending_presses(&self, pressed: ButtonMask) -> ButtonMask {
        pressed.union(self.latched_press).difference(self.reported)
    }

    /// Whether `poll_next` would return an event
    pub fn has_pending(&self, pressed: ButtonMask) -> bool {
        !self.pending_releases(pressed).is_empty() || !self.pending_presses(pressed).is_empty()
    }

    /// Buttons the consumer currently believes are down
    pub fn reported(&self) -> ButtonMask {
        self.reported
    }

    pub fn stats(&self) -> EdgeStats {
        self.stats
    }

    /// Forget all reported and latched state; counters are kept
    pub fn reset(&mut self) {
        self.reported = ButtonMask::EMPTY;
        self.latched_press = ButtonMask::EMPTY;
        self.latched_release = ButtonMask::EMPTY;
    }
}
