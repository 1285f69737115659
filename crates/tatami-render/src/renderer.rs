//! Software renderer for headless background rendering.
//!
//! Executes a `DisplayList` to a pixel buffer.
//!
//! # Architecture
//!
//! The renderer is the final stage in the pipeline:
//!
//! ```text
//! Position math → Paint → Render
//!                   ↓        ↓
//!             DisplayList → Pixels
//! ```
//!
//! The renderer knows nothing about CSS positioning. It simply executes
//! drawing commands from the display list: it keeps a stack of clip
//! rectangles and fills destination regions with repeating image patterns
//! sampled from the tiling rectangle each command carries.

use anyhow::Result;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::collections::HashMap;
use std::path::Path;

use tatami_common::image::LoadedImage;
use tatami_common::warning::warn_once;
use tatami_css::{BorderRadius, DisplayCommand, DisplayList, Rect};

/// Software renderer that executes a display list to a pixel buffer.
///
/// The clip stack holds running intersections: each `PushClip` intersects
/// the incoming rectangle with the current top, so the top of the stack is
/// always the effective clip. The stack is per-renderer state; independent
/// renderers on independent threads never share it.
pub struct Renderer {
    /// RGBA pixel buffer
    buffer: RgbaImage,
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Active clip rectangles, each already intersected with its parent.
    clip_stack: Vec<Rect>,
    /// Loaded images keyed by src. Used for `FillPattern` commands.
    images: HashMap<String, LoadedImage>,
}

impl Renderer {
    /// Create a new renderer with the given dimensions and image data.
    #[must_use]
    pub fn new(width: u32, height: u32, images: HashMap<String, LoadedImage>) -> Self {
        // Create white background
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([255, 255, 255, 255]));

        Self {
            buffer,
            width,
            height,
            clip_stack: Vec::new(),
            images,
        }
    }

    /// Execute a display list, drawing all commands to the pixel buffer.
    ///
    /// Commands are executed in order (back to front), which is the painting
    /// order established by the painter.
    pub fn render(&mut self, display_list: &DisplayList) {
        for command in display_list.commands() {
            self.execute_command(command);
        }
    }

    /// Execute a single display command.
    fn execute_command(&mut self, command: &DisplayCommand) {
        match command {
            DisplayCommand::PushClip {
                x,
                y,
                width,
                height,
            } => {
                let rect = Rect::new(*x, *y, *width, *height);
                self.clip_stack.push(self.current_clip().intersect(&rect));
            }
            DisplayCommand::PopClip => {
                if self.clip_stack.pop().is_none() {
                    warn_once("Render", "PopClip with empty clip stack");
                }
            }
            DisplayCommand::FillPattern {
                dest_x,
                dest_y,
                dest_width,
                dest_height,
                tile_x,
                tile_y,
                tile_width,
                tile_height,
                src,
                border_radius,
            } => {
                let dest = Rect::new(*dest_x, *dest_y, *dest_width, *dest_height);
                let tile = Rect::new(*tile_x, *tile_y, *tile_width, *tile_height);
                self.fill_pattern(src, &dest, &tile, border_radius);
            }
        }
    }

    /// The effective clip: the top of the clip stack, or the full viewport.
    fn current_clip(&self) -> Rect {
        self.clip_stack
            .last()
            .copied()
            .unwrap_or_else(|| Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height)))
    }

    /// Fill the destination rectangle with a repeating image pattern.
    ///
    /// The pattern's repeat unit is the image itself (or its sprite source
    /// sub-rectangle), originating at the tile rectangle's top-left corner.
    /// Only `dest ∩ tile ∩ clip` is touched: the tile rectangle spans whole
    /// repeat periods on every repeated axis and exactly one period on a
    /// non-repeated axis, so intersecting with it crops single-image bands
    /// and no-repeat fills without any per-axis casework here.
    ///
    /// Sampling is nearest-pixel at intrinsic scale (background-size is not
    /// supported), with euclidean-modular offsets so a tile origin left of
    /// or above the destination still samples in phase.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    fn fill_pattern(&mut self, src: &str, dest: &Rect, tile: &Rect, radius: &BorderRadius) {
        let Some(img) = self.images.get(src) else {
            warn_once("Render", &format!("no image data for '{src}'"));
            return;
        };

        let (period_w, period_h) = img.tile_size();
        if period_w == 0 || period_h == 0 {
            return;
        }
        let (offset_x, offset_y) = img
            .source_rect()
            .map_or((0, 0), |r| (r.x, r.y));
        let intrinsic_w = img.width();

        let region = dest.intersect(tile).intersect(&self.current_clip());
        if region.is_empty() {
            return;
        }

        let x0 = region.x.max(0.0).floor() as u32;
        let y0 = region.y.max(0.0).floor() as u32;
        let x1 = region.right().min(f64::from(self.width)).ceil() as u32;
        let y1 = region.bottom().min(f64::from(self.height)).ceil() as u32;

        let data = img.rgba_data();

        for py in y0..y1 {
            for px in x0..x1 {
                let center_x = f64::from(px) + 0.5;
                let center_y = f64::from(py) + 0.5;
                if !point_in_rect(&region, center_x, center_y) {
                    continue;
                }
                if !radius.is_zero() && !inside_rounded(dest, radius, center_x, center_y) {
                    continue;
                }

                // Nearest-pixel modular sampling from the tile origin.
                let fx = (f64::from(px) - tile.x).rem_euclid(f64::from(period_w));
                let fy = (f64::from(py) - tile.y).rem_euclid(f64::from(period_h));
                let sx = offset_x + (fx as u32).min(period_w - 1);
                let sy = offset_y + (fy as u32).min(period_h - 1);
                let src_idx = ((sy * intrinsic_w + sx) * 4) as usize;

                let sr = data[src_idx];
                let sg = data[src_idx + 1];
                let sb = data[src_idx + 2];
                let sa = data[src_idx + 3];

                if sa == 0 {
                    continue;
                }

                let fg = Rgba([sr, sg, sb, sa]);
                if sa == 255 {
                    self.buffer.put_pixel(px, py, fg);
                } else {
                    let bg = *self.buffer.get_pixel(px, py);
                    let blended = alpha_blend(fg, bg, sa);
                    self.buffer.put_pixel(px, py, blended);
                }
            }
        }
    }

    /// The rendered pixel buffer.
    #[must_use]
    pub const fn buffer(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Save the rendered buffer as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be encoded or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.buffer.save(path)?;
        Ok(())
    }
}

/// Check whether a point lies inside a rectangle (top-left inclusive).
fn point_in_rect(rect: &Rect, x: f64, y: f64) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// [§ 5.3 Corner shaping](https://www.w3.org/TR/css-backgrounds-3/#corner-shaping)
///
/// "The padding edge (innermost border) radius is the outer border radius
/// minus the corresponding border thickness" - here there is no border, so
/// each corner is a plain quarter-circle of its radius.
///
/// Check whether a point lies inside the rounded rectangle.
fn inside_rounded(rect: &Rect, radius: &BorderRadius, x: f64, y: f64) -> bool {
    if !point_in_rect(rect, x, y) {
        return false;
    }

    // Each corner: (is the point in this corner's square region, circle center).
    // Only points inside a corner square are subject to the quarter-circle test.
    let corners = [
        (
            x < rect.x + radius.top_left && y < rect.y + radius.top_left,
            rect.x + radius.top_left,
            rect.y + radius.top_left,
            radius.top_left,
        ),
        (
            x > rect.right() - radius.top_right && y < rect.y + radius.top_right,
            rect.right() - radius.top_right,
            rect.y + radius.top_right,
            radius.top_right,
        ),
        (
            x > rect.right() - radius.bottom_right && y > rect.bottom() - radius.bottom_right,
            rect.right() - radius.bottom_right,
            rect.bottom() - radius.bottom_right,
            radius.bottom_right,
        ),
        (
            x < rect.x + radius.bottom_left && y > rect.bottom() - radius.bottom_left,
            rect.x + radius.bottom_left,
            rect.bottom() - radius.bottom_left,
            radius.bottom_left,
        ),
    ];

    for (in_corner, cx, cy, r) in corners {
        if r <= 0.0 || !in_corner {
            continue;
        }
        let dx = x - cx;
        let dy = y - cy;
        if dx * dx + dy * dy > r * r {
            return false;
        }
    }

    true
}

/// Alpha-blend a foreground pixel onto a background pixel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_blend(fg: Rgba<u8>, bg: Rgba<u8>, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let blend = |f: u8, b: u8| -> u8 { (f32::from(f) * a + f32::from(b) * (1.0 - a)) as u8 };
    Rgba([
        blend(fg[0], bg[0]),
        blend(fg[1], bg[1]),
        blend(fg[2], bg[2]),
        255,
    ])
}
