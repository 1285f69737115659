//! Background painter - generates display list commands for one layer
//!
//! [§ 3 Backgrounds](https://www.w3.org/TR/css-backgrounds-3/#backgrounds)
//!
//! The painter composes the two pure computations (anchor resolution, tile
//! extent) into the command sequence a renderer executes: push the paint
//! rectangle as a clip, fill it with the repeating pattern, pop the clip.

use crate::backgrounds::{
    PositionParseMode, RepeatMode, resolve_background_position, tile_extent,
};
use crate::geometry::{Rect, Size};
use crate::values::{CssLengthResolver, LengthResolver};

use super::{BorderRadius, DisplayCommand, DisplayList};

/// One background image layer to paint, as resolved by style computation and
/// the image loader.
///
/// [§ 3.1 Layering](https://www.w3.org/TR/css-backgrounds-3/#layering)
///
/// Transient, consumed by one paint call. `image_size` is the size used for
/// all positioning and tiling math: for sprite-clipped sources this is the
/// source sub-rectangle's size, not the intrinsic image size.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayer {
    /// Image source key, used by the renderer to look up pixel data.
    pub src: String,
    /// Image size in device-independent units (sprite-adjusted).
    pub image_size: Size,
    /// The `background-position` value, uninterpreted.
    pub position: String,
    /// The `background-repeat` mode.
    pub repeat: RepeatMode,
    /// Corner radii of the paint region; all zeros for a plain rectangle.
    pub border_radius: BorderRadius,
}

/// Painter that turns background layers into display list commands.
///
/// [CSS 2.1 Appendix E.2](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Holds the position-parsing strategy and the injected length resolver;
/// both are fixed for the painter's lifetime so every layer painted through
/// it is interpreted consistently.
pub struct BackgroundPainter<'a> {
    /// Strategy for interpreting `background-position` strings.
    parse_mode: PositionParseMode,
    /// Length-resolution capability for non-keyword position tokens.
    resolver: &'a dyn LengthResolver,
}

impl BackgroundPainter<'static> {
    /// Create a painter with the tokenized grammar and the production
    /// length resolver.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parse_mode: PositionParseMode::Tokenized,
            resolver: &CssLengthResolver,
        }
    }
}

impl Default for BackgroundPainter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BackgroundPainter<'a> {
    /// Create a painter with an explicit parsing strategy and resolver.
    #[must_use]
    pub fn with_strategy(
        parse_mode: PositionParseMode,
        resolver: &'a dyn LengthResolver,
    ) -> Self {
        Self {
            parse_mode,
            resolver,
        }
    }

    /// Paint one background layer into `target`, appending commands to the
    /// display list.
    ///
    /// [§ 3.7 Background painting area](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
    ///
    /// STEP 1: resolve the anchor from the `background-position` value.
    ///
    /// STEP 2: expand the anchor into the tiling rectangle for the repeat
    /// mode.
    ///
    /// STEP 3: emit `PushClip(target)`, the pattern fill, `PopClip`. The
    /// push/pop pair is balanced on every path out of this function; nothing
    /// between the two commands can be skipped, so the caller's ambient clip
    /// state is never corrupted.
    ///
    /// A zero-area target or image emits no commands at all.
    pub fn paint(&self, layer: &BackgroundLayer, target: Rect, display_list: &mut DisplayList) {
        // Nothing visible to draw; emitting an empty clip pair would only
        // burden the renderer.
        if target.is_empty() || layer.image_size.is_empty() {
            return;
        }

        // STEP 1: anchor resolution.
        let anchor = resolve_background_position(
            &layer.position,
            self.parse_mode,
            &target,
            layer.image_size,
            self.resolver,
        );

        // STEP 2: tiling rectangle.
        let tile = tile_extent(anchor, layer.image_size, layer.repeat, &target);

        // STEP 3: clipped fill. The clip is pushed before the fill so that a
        // no-repeat image larger than the target is cropped, not distorted.
        display_list.push(DisplayCommand::PushClip {
            x: target.x,
            y: target.y,
            width: target.width,
            height: target.height,
        });
        display_list.push(DisplayCommand::FillPattern {
            dest_x: target.x,
            dest_y: target.y,
            dest_width: target.width,
            dest_height: target.height,
            tile_x: tile.x,
            tile_y: tile.y,
            tile_width: tile.width,
            tile_height: tile.height,
            src: layer.src.clone(),
            border_radius: layer.border_radius,
        });
        display_list.push(DisplayCommand::PopClip);
    }
}
