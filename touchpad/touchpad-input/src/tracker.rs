//! Per-finger contact tracking and the aggregate button state
//!
//! Each finger slot remembers the zone it last resolved to. After every
//! contact update the aggregate bitmask is rebuilt from scratch, so it is
//! always exactly the union of the buttons under active fingers.

use log::trace;

use crate::button::ButtonMask;
use crate::zone::{ZoneTable, ZoneTarget};

/// Number of tracked finger slots
pub const MAX_FINGERS: usize = 10;

/// Map a backend finger id onto a slot. Ids outside `[0, MAX_FINGERS)`
/// share slot 0 (legacy single-touch backends report arbitrary ids).
#[inline]
pub fn finger_slot(finger_id: i32) -> usize {
    if finger_id >= 0 && (finger_id as usize) < MAX_FINGERS {
        finger_id as usize
    } else {
        0
    }
}

/// One tracked finger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contact {
    /// Last raw X coordinate
    pub x: i32,
    /// Last raw Y coordinate
    pub y: i32,
    /// Finger is on the glass
    pub active: bool,
    /// Zone index the finger resolved to
    pub zone: Option<usize>,
}

/// Snapshot of the aggregate button state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    /// Buttons held by at least one active finger
    pub pressed: ButtonMask,
    /// `pressed` before the most recent recompute
    pub previous: ButtonMask,
    /// `pressed & !previous`
    pub just_pressed: ButtonMask,
    /// `previous & !pressed`
    pub just_released: ButtonMask,
}

/// Slot state before an update, used to detect zone entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotUpdate {
    pub slot: usize,
    pub before: Contact,
    pub after: Contact,
}

impl SlotUpdate {
    /// Finger moved into a zone it was not already held on
    pub fn entered_zone(&self) -> Option<usize> {
        match self.after.zone {
            Some(zone) if !(self.before.active && self.before.zone == Some(zone)) => Some(zone),
            _ => None,
        }
    }
}

/// Finger slots plus the derived aggregate state
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    contacts: [Contact; MAX_FINGERS],
    state: ButtonState,
    menu_held: bool,
}

impl TouchTracker {
    /// Create a tracker with every slot inactive
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contact update for `finger_id`. `zone` is the resolved zone
    /// for a press and ignored for a release.
    ///
    /// Does not touch the aggregate state; call [`Self::recompute`] next.
    pub fn update(
        &mut self,
        finger_id: i32,
        x: i32,
        y: i32,
        zone: Option<usize>,
        pressed: bool,
    ) -> SlotUpdate {
        let slot = finger_slot(finger_id);
        let before = self.contacts[slot];

        let contact = &mut self.contacts[slot];
        if pressed {
            contact.x = x;
            contact.y = y;
            contact.active = true;
            contact.zone = zone;
        } else {
            contact.active = false;
            contact.zone = None;
        }

        trace!(
            "touch: finger {} -> slot {} {} zone {:?}",
            finger_id,
            slot,
            if pressed { "down" } else { "up" },
            contact.zone
        );

        SlotUpdate {
            slot,
            before,
            after: *contact,
        }
    }

    /// Rebuild the aggregate bitmask from all active contacts and derive
    /// the press/release deltas against the previous value.
    pub fn recompute(&mut self, table: &ZoneTable) -> ButtonState {
        let mut pressed = ButtonMask::EMPTY;
        let mut menu_held = false;

        for contact in self.contacts.iter().filter(|c| c.active) {
            match contact.zone.and_then(|i| table.get(i)).map(|z| z.target) {
                Some(ZoneTarget::Button(button)) => pressed.insert(button),
                Some(ZoneTarget::Menu) => menu_held = true,
                None => {}
            }
        }

        let previous = self.state.pressed;
        self.state = ButtonState {
            pressed,
            previous,
            just_pressed: pressed.difference(previous),
            just_released: previous.difference(pressed),
        };
        self.menu_held = menu_held;
        self.state
    }

    /// Current aggregate state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Any active finger is on a menu zone
    pub fn menu_held(&self) -> bool {
        self.menu_held
    }

    pub fn contacts(&self) -> &[Contact; MAX_FINGERS] {
        &self.contacts
    }

    pub fn active_count(&self) -> usize {
        self.contacts.iter().filter(|c| c.active).count()
    }

    /// Drop every contact. The aggregate state is reset as well, so no
    /// stale just-released edge survives a shutdown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
