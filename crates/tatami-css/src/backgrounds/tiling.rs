//! `background-repeat` tile-extent computation.
//!
//! [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
//!
//! "The image may be tiled (repeated) in the horizontal and vertical
//! directions independently."
//!
//! Given the anchor produced by position resolution, [`tile_extent`] expands
//! it into the tiling rectangle: the rectangle whose origin and size define
//! one repeat period for a pattern fill. The tiling rectangle may extend
//! beyond the visible paint rectangle; the caller clips before filling so
//! that partial tiles are cut rather than distorted.

use serde::Serialize;
use tatami_common::warning::warn_once;

use crate::geometry::{Point, Rect, Size};

/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
///
/// "Value: repeat | repeat-x | repeat-y | no-repeat"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RepeatMode {
    /// "The image is not repeated: only one copy of the image is drawn."
    NoRepeat,
    /// "Equivalent to 'repeat no-repeat'": tiled horizontally only.
    RepeatX,
    /// "Equivalent to 'no-repeat repeat'": tiled vertically only.
    RepeatY,
    /// "The image is repeated in both directions." This is the initial value.
    Repeat,
}

impl RepeatMode {
    /// Map a `background-repeat` keyword to a mode.
    ///
    /// [§ 3.4](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
    /// "Initial: repeat" - unrecognized values degrade to full bidirectional
    /// repeat, the property's own initial value, with a deduplicated warning.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("no-repeat") {
            Self::NoRepeat
        } else if trimmed.eq_ignore_ascii_case("repeat-x") {
            Self::RepeatX
        } else if trimmed.eq_ignore_ascii_case("repeat-y") {
            Self::RepeatY
        } else {
            if !trimmed.eq_ignore_ascii_case("repeat") {
                warn_once("CSS", &format!("unrecognized background-repeat '{trimmed}'"));
            }
            Self::Repeat
        }
    }

    /// Whether the image tiles along the horizontal axis.
    #[must_use]
    pub const fn repeats_horizontally(self) -> bool {
        matches!(self, Self::Repeat | Self::RepeatX)
    }

    /// Whether the image tiles along the vertical axis.
    #[must_use]
    pub const fn repeats_vertically(self) -> bool {
        matches!(self, Self::Repeat | Self::RepeatY)
    }
}

/// Expand the anchor into the tiling rectangle for a pattern fill.
///
/// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
///
/// Starting from `Rect(anchor, image_size)`, each axis the repeat mode
/// covers is adjusted in whole image-extent steps:
///
/// STEP 1: if the tile starts after the rectangle's leading edge, shift the
/// start backward by the smallest whole multiple of the image extent that
/// moves it to or before that edge, so tiling leaves no gap at the start.
///
/// STEP 2: if the tiled span ends before the rectangle's trailing edge, grow
/// the extent to the smallest whole multiple of the image extent that
/// reaches or passes that edge.
///
/// Both adjustments keep tile boundaries on exact image-size steps from the
/// original anchor, which is what lets a pattern fill (whose native repeat
/// unit is the image itself) produce seamless, unshifted repetition. The
/// result is the smallest anchor-aligned rectangle covering the rectangle on
/// every repeated axis; a non-repeated axis keeps exactly the single image
/// extent at the anchor.
///
/// A zero image extent on an axis has no finite tiling period; that axis is
/// treated as non-repeating.
#[must_use]
pub fn tile_extent(anchor: Point, image_size: Size, repeat: RepeatMode, rect: &Rect) -> Rect {
    let mut tile = Rect::from_point_size(anchor, image_size);

    if repeat.repeats_horizontally() && image_size.width > 0.0 {
        if tile.x > rect.x {
            tile.x -= image_size.width * ((tile.x - rect.x) / image_size.width).ceil();
        }
        if tile.x + tile.width < rect.right() {
            tile.width = image_size.width * ((rect.right() - tile.x) / image_size.width).ceil();
        }
    }

    if repeat.repeats_vertically() && image_size.height > 0.0 {
        if tile.y > rect.y {
            tile.y -= image_size.height * ((tile.y - rect.y) / image_size.height).ceil();
        }
        if tile.y + tile.height < rect.bottom() {
            tile.height = image_size.height * ((rect.bottom() - tile.y) / image_size.height).ceil();
        }
    }

    tile
}
