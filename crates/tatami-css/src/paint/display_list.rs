//! Display List - a sequence of drawing commands
//!
//! [CSS 2.1 Appendix E](https://www.w3.org/TR/CSS2/zindex.html)
//!
//! The display list is the output of the painting phase. It contains the
//! drawing commands needed to render background layers, in order. Any
//! renderer (software, GPU, etc.) can execute it.

use serde::Serialize;

/// [§ 5 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
///
/// Corner radii for rounded paint regions. All zeros = sharp corners. Used
/// as the non-rectangular clip shape for background fills; the tiling math
/// itself never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BorderRadius {
    /// Radius of the top-left corner.
    pub top_left: f64,
    /// Radius of the top-right corner.
    pub top_right: f64,
    /// Radius of the bottom-right corner.
    pub bottom_right: f64,
    /// Radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl BorderRadius {
    /// Uniform radius on all four corners.
    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Check whether every corner is sharp.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }
}

/// A single drawing command.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Commands are added to the display list in painting order (back to front).
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCommand {
    /// Fill a destination rectangle with a repeating image pattern.
    ///
    /// [§ 3.4 'background-repeat'](https://www.w3.org/TR/css-backgrounds-3/#the-background-repeat)
    ///
    /// The tile rectangle defines the pattern: its origin is the repeat
    /// origin and the image repeats from there with its own size as the
    /// period. Pixels of the destination outside the tile rectangle are left
    /// untouched, which is how a non-repeated axis shows a single image
    /// band. The `src` string is used as a key to look up the loaded image
    /// data in the renderer's image store.
    FillPattern {
        /// X coordinate of the destination rectangle's top-left corner.
        dest_x: f64,
        /// Y coordinate of the destination rectangle's top-left corner.
        dest_y: f64,
        /// Width of the destination rectangle.
        dest_width: f64,
        /// Height of the destination rectangle.
        dest_height: f64,
        /// X coordinate of the tiling rectangle's origin.
        tile_x: f64,
        /// Y coordinate of the tiling rectangle's origin.
        tile_y: f64,
        /// Width of the tiling rectangle (a whole multiple of the image
        /// width on a horizontally repeated axis).
        tile_width: f64,
        /// Height of the tiling rectangle (a whole multiple of the image
        /// height on a vertically repeated axis).
        tile_height: f64,
        /// The image source key, used as lookup key for image data.
        src: String,
        /// [§ 5 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
        ///
        /// Corner radii for rounded paint regions. Default (all zeros) =
        /// sharp corners.
        border_radius: BorderRadius,
    },

    /// Push a clip rectangle onto the clip stack.
    ///
    /// [§ 3.7 Background painting area](https://www.w3.org/TR/css-backgrounds-3/#background-painting-area)
    ///
    /// All subsequent drawing commands are clipped to the intersection of
    /// all active clip rectangles. Clipping happens before filling so that a
    /// non-repeated image larger than its rectangle is still cropped.
    PushClip {
        /// X coordinate of the clip rectangle.
        x: f64,
        /// Y coordinate of the clip rectangle.
        y: f64,
        /// Width of the clip rectangle.
        width: f64,
        /// Height of the clip rectangle.
        height: f64,
    },

    /// Pop the most recent clip rectangle from the clip stack.
    PopClip,
}

/// A list of drawing commands in painting order.
///
/// [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order)
///
/// Commands are stored in back-to-front order, so the renderer can simply
/// iterate and execute each command.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
