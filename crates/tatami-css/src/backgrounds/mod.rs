//! CSS Backgrounds and Borders Level 3 - image positioning and tiling.
//!
//! [CSS Backgrounds and Borders Module Level 3](https://www.w3.org/TR/css-backgrounds-3/)
//!
//! This module computes how a single background image is positioned and
//! tiled inside a paint rectangle:
//!
//! - [`resolve_background_position`] turns a `background-position` value
//!   into the anchor point (top-left corner of the unrepeated image).
//! - [`tile_extent`] expands the anchor into the tiling rectangle a pattern
//!   fill needs to cover the rectangle on the repeated axis or axes.
//!
//! Both are pure functions of their inputs; nothing is retained across
//! calls.

mod position;
mod tiling;

pub use position::{PositionParseMode, resolve_background_position};
pub use tiling::{RepeatMode, tile_extent};
