//! Background painting
//!
//! [CSS Backgrounds and Borders Module Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! This module converts resolved background layers into a display list of
//! drawing commands. The display list can then be executed by any renderer
//! (software, GPU, etc.).
//!
//! # Architecture
//!
//! The painting phase is separate from position/tiling math and rendering:
//!
//! ```text
//! Position math → Paint → Render
//!                   ↓
//!             DisplayList
//! ```
//!
//! This separation allows:
//! - Different renderers (software, GPU) to share painting logic
//! - Testing the clip/fill command sequence without a pixel buffer

mod display_list;
mod painter;

pub use display_list::{BorderRadius, DisplayCommand, DisplayList};
pub use painter::{BackgroundLayer, BackgroundPainter};
