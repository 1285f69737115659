//! `background-position` anchor resolution.
//!
//! [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
//!
//! "If only one value is specified, the second value is assumed to be
//! 'center'."
//!
//! Two parsing strategies are exposed, never silently merged:
//!
//! - [`PositionParseMode::Legacy`] reproduces the historical
//!   substring-scanning behavior bit-for-bit, including its independent-axis
//!   keyword detection and its `"0"` centering escape. Keep it only when
//!   exact legacy-output parity is required.
//! - [`PositionParseMode::Tokenized`] is an explicit token match over the
//!   spec grammar and is the recommended strategy.

use serde::Serialize;
use tatami_common::warning::warn_once;

use crate::geometry::{Point, Rect, Size};
use crate::values::LengthResolver;

/// Strategy for interpreting a `background-position` string.
///
/// The two grammars agree on every pure-keyword combination but differ on
/// malformed input and on length-valued positions; see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PositionParseMode {
    /// Unordered case-insensitive substring scan for `left`/`right`/`top`/
    /// `bottom`, with a literal `"0"` anywhere in the string suppressing the
    /// centered default. Order-independent and unable to resolve lengths.
    Legacy,
    /// Whitespace tokenization with ordered horizontal-then-vertical
    /// assignment, `inherit` handling, and `<length-percentage>` resolution
    /// through the injected [`LengthResolver`].
    Tokenized,
}

/// [§ 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
///
/// Resolve a `background-position` value to the anchor: the top-left point
/// at which the unrepeated image would be drawn before tiling expansion.
///
/// The anchor may lie outside `rect` when the image is larger than the
/// rectangle; that is valid and later cut by clipping. Malformed input never
/// fails - it degrades to the rectangle's top-left corner.
#[must_use]
pub fn resolve_background_position(
    position: &str,
    mode: PositionParseMode,
    rect: &Rect,
    image_size: Size,
    resolver: &dyn LengthResolver,
) -> Point {
    match mode {
        PositionParseMode::Legacy => resolve_legacy(position, rect, image_size),
        PositionParseMode::Tokenized => resolve_tokenized(position, rect, image_size, resolver),
    }
}

/// Legacy substring-scan resolution.
///
/// The position string is treated as an unordered bag of keyword substrings.
/// Each axis is resolved independently:
///
/// STEP 1: the start keyword (`left`/`top`) anchors at the rect start.
///
/// STEP 2: otherwise the end keyword (`right`/`bottom`) anchors at
/// `rect end - image extent`.
///
/// STEP 3: otherwise, if no `"0"` character appears anywhere in the string,
/// the axis is centered; with a `"0"` present the axis stays at the rect
/// start. The `"0"` escape exists to avoid centering length-valued positions
/// and is preserved for output parity with the original implementation.
fn resolve_legacy(position: &str, rect: &Rect, image_size: Size) -> Point {
    let lower = position.to_ascii_lowercase();
    let has_zero = lower.contains('0');

    let mut x = rect.left();
    if lower.contains("left") {
        x = rect.left();
    } else if lower.contains("right") {
        x = rect.right() - image_size.width;
    } else if !has_zero {
        x = rect.left() + (rect.width - image_size.width) / 2.0;
    }

    let mut y = rect.top();
    if lower.contains("top") {
        y = rect.top();
    } else if lower.contains("bottom") {
        y = rect.bottom() - image_size.height;
    } else if !has_zero {
        y = rect.top() + (rect.height - image_size.height) / 2.0;
    }

    Point { x, y }
}

/// Tokenized resolution per the modern grammar.
///
/// STEP 1: `inherit` resolves to the rectangle's origin unchanged.
///
/// STEP 2: split on whitespace; more than two tokens is a format error and
/// falls back to the rectangle's origin.
///
/// STEP 3: assign tokens in order to the horizontal then vertical axis. A
/// single token is reused for both axes (symmetric default, matching the
/// single-value CSS shorthand).
fn resolve_tokenized(
    position: &str,
    rect: &Rect,
    image_size: Size,
    resolver: &dyn LengthResolver,
) -> Point {
    let trimmed = position.trim();

    // [CSS 2.1 § 6.2.1](https://www.w3.org/TR/CSS2/cascade.html#value-def-inherit)
    // "Each property may also have a cascaded value of 'inherit'."
    // Inherited positions are resolved by the cascade, not here.
    if trimmed.eq_ignore_ascii_case("inherit") {
        return rect.origin();
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    if tokens.is_empty() {
        return rect.origin();
    }
    if tokens.len() > 2 {
        warn_once(
            "CSS",
            &format!("malformed background-position '{trimmed}' ({} tokens)", tokens.len()),
        );
        return rect.origin();
    }

    let horizontal = tokens[0];
    // "If only one value is specified, the second value is assumed" - we
    // reuse the single token symmetrically.
    let vertical = tokens.get(1).copied().unwrap_or(horizontal);

    Point {
        x: resolve_axis(
            horizontal,
            rect.left(),
            rect.width,
            image_size.width,
            "left",
            "right",
            resolver,
        ),
        y: resolve_axis(
            vertical,
            rect.top(),
            rect.height,
            image_size.height,
            "top",
            "bottom",
            resolver,
        ),
    }
}

/// Resolve one axis of a tokenized position.
///
/// [§ 3.6](https://www.w3.org/TR/css-backgrounds-3/#the-background-position)
///
/// - the start keyword (`left`/`top`) anchors at the rect start
/// - the end keyword (`right`/`bottom`) anchors at `rect end - image extent`
/// - `center` anchors at `rect start + (rect extent - image extent) / 2`
/// - anything else is a `<length-percentage>` resolved against the rect
///   extent and added to the rect start; an unresolvable token degrades to a
///   zero offset
#[allow(clippy::too_many_arguments)]
fn resolve_axis(
    token: &str,
    rect_start: f64,
    rect_extent: f64,
    image_extent: f64,
    start_keyword: &str,
    end_keyword: &str,
    resolver: &dyn LengthResolver,
) -> f64 {
    if token.eq_ignore_ascii_case(start_keyword) {
        return rect_start;
    }
    if token.eq_ignore_ascii_case(end_keyword) {
        return rect_start + rect_extent - image_extent;
    }
    if token.eq_ignore_ascii_case("center") {
        return rect_start + (rect_extent - image_extent) / 2.0;
    }

    match resolver.resolve(token, rect_extent) {
        Some(offset) => rect_start + offset,
        // Local substitution of the safe default: the axis stays at the
        // rect start rather than failing the whole computation.
        None => rect_start,
    }
}
