//! Logical controller buttons and the aggregate button bitmask.
//!
//! Button identifiers are small integers; each one owns a single bit in
//! [`ButtonMask`]. The numbering is shared with the gameplay bindings
//! collaborator, which maps bits onto its own per-player binding slots.

use core::fmt;

/// Number of logical gameplay buttons
pub const BUTTON_COUNT: usize = 14;

/// Logical gameplay button (PlayStation-style pad)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Button {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
    Triangle = 4,
    Circle = 5,
    Cross = 6,
    Square = 7,
    L1 = 8,
    R1 = 9,
    L2 = 10,
    R2 = 11,
    Start = 12,
    Select = 13,
}

impl Button {
    /// All buttons in id order
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Triangle,
        Button::Circle,
        Button::Cross,
        Button::Square,
        Button::L1,
        Button::R1,
        Button::L2,
        Button::R2,
        Button::Start,
        Button::Select,
    ];

    /// Bit index of this button in a [`ButtonMask`]
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a button by its bit index
    pub const fn from_id(id: u8) -> Option<Self> {
        if (id as usize) < BUTTON_COUNT {
            Some(Self::ALL[id as usize])
        } else {
            None
        }
    }

    /// Single-bit mask for this button
    #[inline]
    pub const fn mask(self) -> ButtonMask {
        ButtonMask(1 << self.id())
    }

    /// Short display name
    pub const fn name(self) -> &'static str {
        match self {
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::Triangle => "triangle",
            Button::Circle => "circle",
            Button::Cross => "cross",
            Button::Square => "square",
            Button::L1 => "l1",
            Button::R1 => "r1",
            Button::L2 => "l2",
            Button::R2 => "r2",
            Button::Start => "start",
            Button::Select => "select",
        }
    }

    /// Parse a button from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of held buttons, one bit per [`Button::id`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonMask(pub u32);

impl ButtonMask {
    pub const EMPTY: ButtonMask = ButtonMask(0);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, button: Button) -> bool {
        self.0 & (1 << button.id()) != 0
    }

    #[inline]
    pub fn insert(&mut self, button: Button) {
        self.0 |= 1 << button.id();
    }

    #[inline]
    pub fn remove(&mut self, button: Button) {
        self.0 &= !(1 << button.id());
    }

    #[inline]
    pub const fn union(self, other: ButtonMask) -> ButtonMask {
        ButtonMask(self.0 | other.0)
    }

    /// Bits in `self` that are not in `other`
    #[inline]
    pub const fn difference(self, other: ButtonMask) -> ButtonMask {
        ButtonMask(self.0 & !other.0)
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Lowest-numbered button in the set
    pub fn lowest(self) -> Option<Button> {
        if self.0 == 0 {
            return None;
        }
        Button::from_id(self.0.trailing_zeros() as u8)
    }

    /// Iterate held buttons in id order
    pub fn iter(self) -> impl Iterator<Item = Button> {
        Button::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

impl FromIterator<Button> for ButtonMask {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        let mut mask = ButtonMask::EMPTY;
        for button in iter {
            mask.insert(button);
        }
        mask
    }
}

impl fmt::Display for ButtonMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let mut first = true;
        for button in self.iter() {
            if !first {
                f.write_str("+")?;
            }
            first = false;
            write!(f, "{}", button)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_table_order() {
        for (i, button) in Button::ALL.iter().enumerate() {
            assert_eq!(button.id() as usize, i);
            assert_eq!(Button::from_id(i as u8), Some(*button));
        }
        assert_eq!(Button::from_id(BUTTON_COUNT as u8), None);
    }

    #[test]
    fn test_mask_set_operations() {
        let mut mask = ButtonMask::EMPTY;
        mask.insert(Button::Up);
        mask.insert(Button::Start);
        assert!(mask.contains(Button::Up));
        assert!(!mask.contains(Button::Down));
        assert_eq!(mask.count(), 2);
        assert_eq!(mask.lowest(), Some(Button::Up));

        let other = Button::Start.mask();
        assert_eq!(mask.difference(other), Button::Up.mask());

        mask.remove(Button::Up);
        assert_eq!(mask, Button::Start.mask());
    }

    #[test]
    fn test_name_round_trip_and_display() {
        assert_eq!(Button::from_name("TRIANGLE"), Some(Button::Triangle));
        assert_eq!(Button::from_name("menu"), None);

        let mask: ButtonMask = [Button::Cross, Button::L1].into_iter().collect();
        assert_eq!(mask.to_string(), "cross+l1");
        assert_eq!(ButtonMask::EMPTY.to_string(), "-");
    }
}
