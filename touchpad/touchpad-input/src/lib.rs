//! # TouchPad Virtual Controller Input
//!
//! Turns raw multi-touch contacts on a fixed-resolution screen into
//! controller state for two consumers:
//! - **Gameplay bindings**: a continuous bitmask of held buttons
//! - **Menu navigation**: a one-at-a-time press/release edge stream
//!
//! # Architecture
//!
//! ```text
//! touch / mouse events
//!         │
//!         ▼
//!  ┌─────────────┐     ┌────────────┐
//!  │ Hit Tester  │────▶│ Zone Table │
//!  └──────┬──────┘     └────────────┘
//!         ▼
//!  ┌─────────────┐
//!  │  Tracker    │──▶ get_state()  (gameplay)
//!  └──────┬──────┘
//!         ▼
//!  ┌─────────────┐
//!  │ Edge Cursor │──▶ poll_next()  (menu)
//!  └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use touchpad_input::{Button, ContactOutcome, TouchControls};
//!
//! let mut controls = TouchControls::default();
//! controls.set_screen_geometry(1024, 768);
//!
//! assert_eq!(controls.on_contact(0, 80, 250, true), ContactOutcome::Handled);
//! assert!(controls.pressed().contains(Button::Up));
//!
//! while let Some(edge) = controls.poll_next() {
//!     println!("{} {}", edge.button, if edge.is_down { "down" } else { "up" });
//! }
//! ```

pub mod button;
pub mod controls;
pub mod edge;
pub mod hit;
pub mod menu;
pub mod touch;
pub mod tracker;
pub mod zone;

// Re-export main types
pub use button::{Button, ButtonMask, BUTTON_COUNT};
pub use controls::{ContactOutcome, ControlsSnapshot, TouchControls};
pub use edge::{EdgeCursor, EdgeEvent, EdgeStats};
pub use hit::{HitTester, ScreenGeometry, DESIGN_HEIGHT, DESIGN_WIDTH};
pub use menu::{MenuAction, MENU_BINDINGS};
pub use touch::{PointerEvent, TouchEvent, TouchPoint};
pub use tracker::{ButtonState, Contact, TouchTracker, MAX_FINGERS};
pub use zone::{LayoutError, PercentRect, Zone, ZoneLabel, ZoneTable, ZoneTarget};
