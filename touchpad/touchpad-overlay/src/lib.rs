//! # TouchPad Controller Overlay
//!
//! Draws the on-screen controller zones over the emulator picture. The
//! same renderer targets three kinds of surface:
//! - **RGB565**: software video path, pitched 16-bit buffer
//! - **Packed YUV**: hardware overlay, YUYV or UYVY byte pairs
//! - **Line list**: GL path, outlines as NDC line segments
//!
//! # Usage
//!
//! ```
//! use touchpad_input::TouchControls;
//! use touchpad_overlay::{OverlayRenderer, RenderMode, Rgb565Surface};
//!
//! let mut controls = TouchControls::default();
//! let mut pixels = vec![0u8; 320 * 240 * 2];
//! let mut surface = Rgb565Surface::new(&mut pixels, 320, 240, 640).unwrap();
//!
//! let mut renderer = OverlayRenderer::default();
//! let report = renderer.draw_controls(&mut surface, &mut controls, RenderMode::Full);
//! assert_eq!(report.zones_drawn, controls.table().len());
//! ```

pub mod color;
pub mod font;
pub mod lines;
pub mod renderer;
pub mod rgb565;
pub mod surface;
pub mod yuv;

// Re-export main types
pub use color::{Color, Yuv};
pub use lines::{LineBatch, LineListSurface, LineVertex};
pub use renderer::{DrawReport, OverlayOptions, OverlayRenderer, RenderMode};
pub use rgb565::Rgb565Surface;
pub use surface::{OverlaySurface, PixelRect, SurfaceError};
pub use yuv::{PackedYuvSurface, YuvLayout};
