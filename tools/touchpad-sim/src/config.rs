//! Simulator configuration (TOML)
//!
//! Every section is optional. A missing file section falls back to the
//! 1024x768 design screen, a visible RGB565 overlay in full mode and the
//! built-in zone table.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use touchpad_input::{Button, LayoutError, PercentRect, Zone, ZoneLabel, ZoneTable, ZoneTarget};
use touchpad_overlay::{OverlayOptions, PixelRect, RenderMode};

/// Errors turning a parsed config into runtime objects
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("screen size {width}x{height} must be non-zero")]
    InvalidScreen { width: u32, height: u32 },

    #[error("zone {index}: {source}")]
    Label {
        index: usize,
        #[source]
        source: LayoutError,
    },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: touchpad_input::DESIGN_WIDTH,
            height: touchpad_input::DESIGN_HEIGHT,
        }
    }
}

/// Surface the overlay is rendered into
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    #[default]
    Rgb565,
    Yuyv,
    Uyvy,
    Lines,
}

impl std::fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SurfaceKind::Rgb565 => "rgb565",
            SurfaceKind::Yuyv => "yuyv",
            SurfaceKind::Uyvy => "uyvy",
            SurfaceKind::Lines => "lines",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    pub visible: bool,
    pub labels: bool,
    pub surface: SurfaceKind,
    /// Video rectangle `[x, y, width, height]` in surface pixels;
    /// enables border-exclusion mode
    pub video: Option<[u32; 4]>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visible: true,
            labels: true,
            surface: SurfaceKind::default(),
            video: None,
        }
    }
}

/// `button = "menu"` or any button name
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TargetName {
    Button(Button),
    Special(SpecialTarget),
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SpecialTarget {
    Menu,
}

impl From<TargetName> for ZoneTarget {
    fn from(name: TargetName) -> Self {
        match name {
            TargetName::Button(button) => ZoneTarget::Button(button),
            TargetName::Special(SpecialTarget::Menu) => ZoneTarget::Menu,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ZoneConfig {
    /// `[x1, y1, x2, y2]` in percent
    pub rect: [u8; 4],
    pub button: TargetName,
    pub label: Option<String>,
}

/// Top-level config file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub screen: ScreenConfig,
    pub overlay: OverlayConfig,
    pub zones: Vec<ZoneConfig>,
}

impl SimConfig {
    /// Load from a file; `None` yields the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        if config.screen.width == 0 || config.screen.height == 0 {
            return Err(ConfigError::InvalidScreen {
                width: config.screen.width,
                height: config.screen.height,
            });
        }
        Ok(config)
    }

    /// Custom layout if any zones are listed, otherwise the built-in table
    pub fn zone_table(&self) -> Result<ZoneTable, ConfigError> {
        if self.zones.is_empty() {
            return Ok(ZoneTable::builtin());
        }
        let zones = self
            .zones
            .iter()
            .enumerate()
            .map(|(index, z)| {
                let label = z
                    .label
                    .as_deref()
                    .map(ZoneLabel::try_new)
                    .transpose()
                    .map_err(|source| ConfigError::Label { index, source })?;
                let [x1, y1, x2, y2] = z.rect;
                Ok(Zone::new(PercentRect::new(x1, y1, x2, y2), z.button.into(), label))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(ZoneTable::new(zones)?)
    }

    pub fn overlay_options(&self) -> OverlayOptions {
        OverlayOptions {
            visible: self.overlay.visible,
            labels: self.overlay.labels,
        }
    }

    pub fn render_mode(&self) -> RenderMode {
        match self.overlay.video {
            Some([x, y, w, h]) => {
                RenderMode::BordersExcludingVideo(PixelRect::new(x as i32, y as i32, w, h))
            }
            None => RenderMode::Full,
        }
    }
}
