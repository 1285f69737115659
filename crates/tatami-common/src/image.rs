//! Image data types shared across renderer components.
//!
//! [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)

use thiserror::Error;

/// Errors raised while constructing image data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageDataError {
    /// The RGBA buffer does not match `width * height * 4` bytes.
    #[error("RGBA buffer has {actual} bytes, expected {expected}")]
    BufferSizeMismatch {
        /// Expected buffer length (`width * height * 4`).
        expected: usize,
        /// Actual buffer length supplied.
        actual: usize,
    },

    /// A sprite source rectangle extends past the image bounds.
    #[error("source rect {rect_width}x{rect_height} at ({rect_x},{rect_y}) exceeds image {image_width}x{image_height}")]
    SourceRectOutOfBounds {
        /// Source rect X offset in image pixels.
        rect_x: u32,
        /// Source rect Y offset in image pixels.
        rect_y: u32,
        /// Source rect width in image pixels.
        rect_width: u32,
        /// Source rect height in image pixels.
        rect_height: u32,
        /// Intrinsic image width.
        image_width: u32,
        /// Intrinsic image height.
        image_height: u32,
    },
}

/// A sub-rectangle of an image's pixel buffer, in image pixel coordinates.
///
/// Used for sprite-style clipped source images: the sub-rectangle's width and
/// height substitute for the intrinsic image size in all positioning and
/// tiling calculations, while the image's own pixel buffer remains the fill
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    /// Left edge of the sub-rectangle, in image pixels.
    pub x: u32,
    /// Top edge of the sub-rectangle, in image pixels.
    pub y: u32,
    /// Width of the sub-rectangle, in image pixels.
    pub width: u32,
    /// Height of the sub-rectangle, in image pixels.
    pub height: u32,
}

/// Decoded image data for a loaded background image resource.
///
/// [§ 4.8.3 The img element](https://html.spec.whatwg.org/multipage/embedded-content.html#the-img-element)
///
/// Contains the decoded RGBA pixel data, intrinsic dimensions, and an
/// optional sprite source rectangle.
#[derive(Clone)]
pub struct LoadedImage {
    /// Intrinsic width of the image in pixels.
    width: u32,
    /// Intrinsic height of the image in pixels.
    height: u32,
    /// Raw RGBA pixel data (width * height * 4 bytes).
    rgba_data: Vec<u8>,
    /// Sprite source sub-rectangle, if the image is a sprite sheet.
    source_rect: Option<SourceRect>,
}

impl LoadedImage {
    /// Create a new `LoadedImage` from decoded RGBA pixel data.
    ///
    /// # Arguments
    ///
    /// * `width` - Intrinsic width of the image in pixels
    /// * `height` - Intrinsic height of the image in pixels
    /// * `rgba_data` - Raw RGBA pixel data (must be `width * height * 4` bytes)
    ///
    /// # Errors
    ///
    /// Returns [`ImageDataError::BufferSizeMismatch`] if the buffer length
    /// does not match the dimensions.
    pub fn new(width: u32, height: u32, rgba_data: Vec<u8>) -> Result<Self, ImageDataError> {
        let expected = width as usize * height as usize * 4;
        if rgba_data.len() != expected {
            return Err(ImageDataError::BufferSizeMismatch {
                expected,
                actual: rgba_data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba_data,
            source_rect: None,
        })
    }

    /// Restrict this image to a sprite source sub-rectangle.
    ///
    /// The sub-rectangle's size substitutes for the intrinsic size in all
    /// positioning and tiling math; sampling offsets into the sub-rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`ImageDataError::SourceRectOutOfBounds`] if the rectangle
    /// extends past the image bounds.
    pub fn with_source_rect(mut self, rect: SourceRect) -> Result<Self, ImageDataError> {
        let fits_x = rect.x.checked_add(rect.width).is_some_and(|r| r <= self.width);
        let fits_y = rect.y.checked_add(rect.height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(ImageDataError::SourceRectOutOfBounds {
                rect_x: rect.x,
                rect_y: rect.y,
                rect_width: rect.width,
                rect_height: rect.height,
                image_width: self.width,
                image_height: self.height,
            });
        }
        self.source_rect = Some(rect);
        Ok(self)
    }

    /// Intrinsic width of the image in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Intrinsic height of the image in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Sprite source sub-rectangle, if set.
    #[must_use]
    pub const fn source_rect(&self) -> Option<SourceRect> {
        self.source_rect
    }

    /// Size used for positioning and tiling: the sprite source rectangle's
    /// size when present, the intrinsic size otherwise.
    #[must_use]
    pub fn tile_size(&self) -> (u32, u32) {
        self.source_rect
            .map_or((self.width, self.height), |r| (r.width, r.height))
    }

    /// Raw RGBA pixel data.
    #[must_use]
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}
