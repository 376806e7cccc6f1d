//! Menu action translation
//!
//! The menu collaborator reads edge events and maps a subset of buttons to
//! abstract navigation actions through this table.

use crate::button::Button;
use crate::edge::EdgeEvent;

/// Abstract menu navigation action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Back,
    Menu,
}

/// Button to action table
pub const MENU_BINDINGS: &[(Button, MenuAction)] = &[
    (Button::Up, MenuAction::Up),
    (Button::Down, MenuAction::Down),
    (Button::Left, MenuAction::Left),
    (Button::Right, MenuAction::Right),
    (Button::Cross, MenuAction::Confirm),
    (Button::Circle, MenuAction::Back),
    (Button::Start, MenuAction::Menu),
];

impl MenuAction {
    /// Action bound to `button`, if any
    pub fn for_button(button: Button) -> Option<Self> {
        MENU_BINDINGS
            .iter()
            .find(|(b, _)| *b == button)
            .map(|(_, action)| *action)
    }

    /// Action for an edge event; the menu reacts to presses only
    pub fn for_event(event: EdgeEvent) -> Option<Self> {
        if event.is_down {
            Self::for_button(event.button)
        } else {
            None
        }
    }
}
