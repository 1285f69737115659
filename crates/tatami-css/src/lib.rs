//! CSS background-image positioning and tiling math for the tatami renderer.
//!
//! # Scope
//!
//! This crate implements:
//! - **Anchor Resolution** ([§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#the-background-position))
//!   - Tokenized grammar: keywords, `<length-percentage>` tokens, `inherit`
//!   - Legacy substring grammar, preserved for output parity with older
//!     renderers
//!
//! - **Tile Extent** ([§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat))
//!   - Axis-independent repeat expansion in whole image-size steps
//!   - The minimal anchor-aligned tiling rectangle covering the paint area
//!
//! - **Paint Layer** ([CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html))
//!   - Display-list commands for pattern fills with balanced clip push/pop
//!
//! Every computation is a pure function of its inputs: no internal
//! concurrency, no state across calls, no I/O. Malformed input never aborts
//! rendering; it degrades to a safe default with a deduplicated warning.
//!
//! # Not Implemented
//!
//! - Multi-layer background stacking
//! - `background-size` scaling
//! - `background-attachment` (fixed/scroll)
//! - Gradient backgrounds
//!
//! These belong to the surrounding rendering pipeline, not this core.

/// Background anchor resolution and tiling per [CSS Backgrounds and Borders Level 3](https://www.w3.org/TR/css-backgrounds-3/).
pub mod backgrounds;
/// Geometry value types per [CSS Box Model Level 3](https://www.w3.org/TR/css-box-3/).
pub mod geometry;
/// Display list and background painting per [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html).
pub mod paint;
/// CSS length values and resolution per [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use backgrounds::{PositionParseMode, RepeatMode, resolve_background_position, tile_extent};
pub use geometry::{Point, Rect, Size};
pub use paint::{BackgroundLayer, BackgroundPainter, BorderRadius, DisplayCommand, DisplayList};
pub use values::{
    CssLengthResolver, DEFAULT_FONT_SIZE_PX, LengthResolver, LengthValue, parse_length_token,
};
