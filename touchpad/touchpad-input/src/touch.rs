//! Touch input types
//!
//! Event types delivered by the platform input backend. Touch events carry
//! the backend's finger id; pointer (mouse) events always act as finger 0.

/// Touch point in current surface pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchPoint {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl TouchPoint {
    /// Create a new touch point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Multi-touch event from the input backend
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchEvent {
    /// Finger touched the screen
    Down { finger: i32, point: TouchPoint },
    /// Finger moved while touching
    Move { finger: i32, point: TouchPoint },
    /// Finger lifted from screen
    Up { finger: i32 },
}

impl TouchEvent {
    /// Finger id as reported by the backend (not yet clamped to a slot)
    pub fn finger(&self) -> i32 {
        match self {
            TouchEvent::Down { finger, .. }
            | TouchEvent::Move { finger, .. }
            | TouchEvent::Up { finger } => *finger,
        }
    }

    /// Get the touch point if this is a Down or Move event
    pub fn point(&self) -> Option<TouchPoint> {
        match self {
            TouchEvent::Down { point, .. } | TouchEvent::Move { point, .. } => Some(*point),
            TouchEvent::Up { .. } => None,
        }
    }

    /// Down and Move both mean the finger is on the glass
    pub fn is_pressed(&self) -> bool {
        !matches!(self, TouchEvent::Up { .. })
    }
}

/// Mouse/pointer event, treated as a single finger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Primary button pressed
    ButtonDown(TouchPoint),
    /// Primary button released
    ButtonUp(TouchPoint),
    /// Pointer moved; `held` is the primary button state
    Motion { point: TouchPoint, held: bool },
}

impl PointerEvent {
    /// Finger slot used for the pointer
    pub const FINGER: i32 = 0;

    /// Translate into a touch event. Motion without the button held is
    /// hover and produces nothing.
    pub fn to_touch(self) -> Option<TouchEvent> {
        match self {
            PointerEvent::ButtonDown(point) => Some(TouchEvent::Down {
                finger: Self::FINGER,
                point,
            }),
            PointerEvent::ButtonUp(_) => Some(TouchEvent::Up {
                finger: Self::FINGER,
            }),
            PointerEvent::Motion { point, held: true } => Some(TouchEvent::Move {
                finger: Self::FINGER,
                point,
            }),
            PointerEvent::Motion { held: false, .. } => None,
        }
    }
}
