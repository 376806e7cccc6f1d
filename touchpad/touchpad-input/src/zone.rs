//! Touch zone table
//!
//! Zones are rectangles in percentage space (0-100 on both axes) so the same
//! layout works on any surface resolution. Each zone maps to one gameplay
//! button or to the menu request.
//!
//! The built-in table is curated so that no two zones overlap. Lookups use
//! first-match order, so table order is the tie-break if a custom layout
//! ever does overlap; [`ZoneTable::new`] rejects overlapping layouts.

use core::fmt;
use std::borrow::Cow;
use thiserror::Error;

use crate::button::Button;

/// Maximum label length in bytes (8x8 font cells)
pub const MAX_LABEL_LEN: usize = 4;

/// Maximum number of zones in a table
pub const MAX_ZONES: usize = 32;

/// Rectangle in percentage space, half-open: `[x1, x2) x [y1, y2)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentRect {
    pub x1: u8,
    pub y1: u8,
    pub x2: u8,
    pub y2: u8,
}

impl PercentRect {
    pub const fn new(x1: u8, y1: u8, x2: u8, y2: u8) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Check `0 <= x1 < x2 <= 100` and `0 <= y1 < y2 <= 100`
    pub const fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.x2 <= 100 && self.y1 < self.y2 && self.y2 <= 100
    }

    /// Half-open containment test for a percentage coordinate
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x1 as i32 && px < self.x2 as i32 && py >= self.y1 as i32 && py < self.y2 as i32
    }

    /// Check whether two rectangles share any area
    pub const fn overlaps(&self, other: &PercentRect) -> bool {
        self.x1 < other.x2 && other.x1 < self.x2 && self.y1 < other.y2 && other.y1 < self.y2
    }

    pub const fn width(&self) -> u8 {
        self.x2 - self.x1
    }

    pub const fn height(&self) -> u8 {
        self.y2 - self.y1
    }
}

impl fmt::Display for PercentRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// What a zone does when touched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZoneTarget {
    /// Held gameplay button, reported through the aggregate bitmask
    Button(Button),
    /// One-shot "open menu" request, never part of the bitmask
    Menu,
}

impl ZoneTarget {
    /// Gameplay button, if this is not the menu zone
    pub const fn button(self) -> Option<Button> {
        match self {
            ZoneTarget::Button(b) => Some(b),
            ZoneTarget::Menu => None,
        }
    }

    pub const fn is_menu(self) -> bool {
        matches!(self, ZoneTarget::Menu)
    }
}

impl fmt::Display for ZoneTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneTarget::Button(b) => write!(f, "{}", b),
            ZoneTarget::Menu => f.write_str("menu"),
        }
    }
}

/// Short ASCII label stored inline
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneLabel {
    bytes: [u8; MAX_LABEL_LEN],
    len: u8,
}

impl ZoneLabel {
    /// Build a label at compile time; input beyond [`MAX_LABEL_LEN`] is cut.
    pub const fn new(text: &str) -> Self {
        let src = text.as_bytes();
        let mut bytes = [0u8; MAX_LABEL_LEN];
        let mut len = 0;
        while len < src.len() && len < MAX_LABEL_LEN {
            bytes[len] = src[len];
            len += 1;
        }
        Self {
            bytes,
            len: len as u8,
        }
    }

    /// Build a label from user data, rejecting long or non-ASCII text
    pub fn try_new(text: &str) -> Result<Self, LayoutError> {
        if !text.is_ascii() {
            return Err(LayoutError::InvalidLabel(text.to_string()));
        }
        if text.len() > MAX_LABEL_LEN {
            return Err(LayoutError::LabelTooLong {
                label: text.to_string(),
                max: MAX_LABEL_LEN,
            });
        }
        Ok(Self::new(text))
    }

    /// Get the label as a string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }

    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rectangular touch zone
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zone {
    pub rect: PercentRect,
    pub target: ZoneTarget,
    pub label: Option<ZoneLabel>,
}

impl Zone {
    pub const fn new(rect: PercentRect, target: ZoneTarget, label: Option<ZoneLabel>) -> Self {
        Self {
            rect,
            target,
            label,
        }
    }

    const fn button(x1: u8, y1: u8, x2: u8, y2: u8, button: Button, label: &str) -> Self {
        Self::new(
            PercentRect::new(x1, y1, x2, y2),
            ZoneTarget::Button(button),
            Some(ZoneLabel::new(label)),
        )
    }
}

/// Errors for user-supplied layouts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("zone {index}: invalid rectangle {rect} (need x1 < x2 <= 100, y1 < y2 <= 100)")]
    InvalidRect { index: usize, rect: PercentRect },

    #[error("label {label:?} is longer than {max} characters")]
    LabelTooLong { label: String, max: usize },

    #[error("label {0:?} must be ASCII")]
    InvalidLabel(String),

    #[error("layout has {count} zones, at most {max} are supported")]
    TooManyZones { count: usize, max: usize },

    #[error("zones {first} and {second} overlap")]
    Overlap { first: usize, second: usize },
}

/// Layout of the 1024x768 TouchPad screen
static BUILTIN_ZONES: [Zone; 15] = [
    // D-pad
    Zone::button(3, 28, 12, 42, Button::Up, "UP"),
    Zone::button(3, 58, 12, 72, Button::Down, "DN"),
    Zone::button(0, 42, 7, 58, Button::Left, "LT"),
    Zone::button(8, 42, 15, 58, Button::Right, "RT"),
    // Face buttons
    Zone::button(88, 28, 97, 42, Button::Triangle, "/\\"),
    Zone::button(93, 42, 100, 58, Button::Circle, "O"),
    Zone::button(88, 58, 97, 72, Button::Cross, "X"),
    Zone::button(85, 42, 92, 58, Button::Square, "[]"),
    // Shoulders
    Zone::button(0, 0, 20, 12, Button::L1, "L1"),
    Zone::button(80, 0, 100, 12, Button::R1, "R1"),
    Zone::button(0, 12, 20, 24, Button::L2, "L2"),
    Zone::button(80, 12, 100, 24, Button::R2, "R2"),
    // Start/Select
    Zone::button(35, 88, 48, 100, Button::Start, "STA"),
    Zone::button(52, 88, 65, 100, Button::Select, "SEL"),
    // Menu, top center
    Zone::new(
        PercentRect::new(45, 0, 55, 7),
        ZoneTarget::Menu,
        Some(ZoneLabel::new("MENU")),
    ),
];

/// Ordered, immutable list of zones
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneTable {
    zones: Cow<'static, [Zone]>,
}

impl Default for ZoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ZoneTable {
    /// The curated TouchPad layout
    pub fn builtin() -> Self {
        Self {
            zones: Cow::Borrowed(&BUILTIN_ZONES),
        }
    }

    /// Validate and wrap a custom layout
    pub fn new(zones: Vec<Zone>) -> Result<Self, LayoutError> {
        if zones.len() > MAX_ZONES {
            return Err(LayoutError::TooManyZones {
                count: zones.len(),
                max: MAX_ZONES,
            });
        }

        for (index, zone) in zones.iter().enumerate() {
            if !zone.rect.is_valid() {
                return Err(LayoutError::InvalidRect {
                    index,
                    rect: zone.rect,
                });
            }
        }

        for (first, a) in zones.iter().enumerate() {
            for (offset, b) in zones[first + 1..].iter().enumerate() {
                if a.rect.overlaps(&b.rect) {
                    return Err(LayoutError::Overlap {
                        first,
                        second: first + 1 + offset,
                    });
                }
            }
        }

        Ok(Self {
            zones: Cow::Owned(zones),
        })
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn get(&self, index: usize) -> Option<&Zone> {
        self.zones.get(index)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    /// Index of the first zone containing the percentage coordinate
    pub fn find(&self, px: i32, py: i32) -> Option<usize> {
        self.zones.iter().position(|z| z.rect.contains(px, py))
    }

    /// Index of the first zone bound to `button`
    pub fn position_of(&self, button: Button) -> Option<usize> {
        self.zones
            .iter()
            .position(|z| z.target == ZoneTarget::Button(button))
    }
}
