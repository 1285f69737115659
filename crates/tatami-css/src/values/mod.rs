//! CSS length values and the length-resolution seam.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Background positioning needs to resolve `<length-percentage>` tokens such
//! as `10px` or `50%` against one axis of the paint rectangle. The resolution
//! step is modeled as an injected capability ([`LengthResolver`]) so the
//! positioning math stays testable in isolation with stub resolvers, while
//! [`CssLengthResolver`] provides the production token grammar.

use serde::Serialize;
use tatami_common::warning::warn_once;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LengthValue {
    /// [§ 6.1 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    /// "1px = 1/96th of 1in"
    Px(f64),
    /// [§ 5.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    /// "Equal to the computed value of the font-size property of the element"
    Em(f64),
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "A `<percentage>` value is denoted by `<percentage>`, and consists of a
    /// `<number>` immediately followed by a percent sign '%'."
    Percent(f64),
}

impl LengthValue {
    /// Resolve to device-independent units against one axis of the paint
    /// rectangle.
    ///
    /// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
    /// "Percentages are always relative to another quantity, for example a
    /// length." For background positioning the reference quantity is the
    /// paint rectangle's extent on the resolved axis.
    #[must_use]
    pub fn to_px(&self, axis_extent: f64) -> f64 {
        match self {
            Self::Px(px) => *px,
            Self::Em(em) => *em * DEFAULT_FONT_SIZE_PX,
            Self::Percent(pct) => *pct * axis_extent / 100.0,
        }
    }
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
/// Parse a single `<length-percentage>` token (`10px`, `1.5em`, `50%`, `0`).
///
/// Unsupported units degrade to `None` with a deduplicated warning; a bare
/// `0` is accepted as zero length per
/// [§ 5.1](https://www.w3.org/TR/css-values-4/#lengths) ("a bare 0 is
/// interpreted as 0px").
#[must_use]
pub fn parse_length_token(token: &str) -> Option<LengthValue> {
    let token = token.trim();

    if let Some(number) = token.strip_suffix('%') {
        return number.parse().ok().map(LengthValue::Percent);
    }
    if let Some(number) = token.strip_suffix("px") {
        return number.parse().ok().map(LengthValue::Px);
    }
    if let Some(number) = token.strip_suffix("em") {
        return number.parse().ok().map(LengthValue::Em);
    }

    // [§ 5.1](https://www.w3.org/TR/css-values-4/#lengths)
    // Only zero may appear without a unit.
    if let Ok(number) = token.parse::<f64>() {
        if number == 0.0 {
            return Some(LengthValue::Px(0.0));
        }
        warn_once("CSS", &format!("non-zero unitless length '{token}'"));
        return None;
    }

    // Anything else: a unit we don't support, or not a length at all.
    if token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '.')
    {
        warn_once("CSS", &format!("unsupported length token '{token}'"));
    }
    None
}

/// The injected length-resolution capability for background positioning.
///
/// Resolves a raw position token to an offset from the rectangle's start on
/// one axis. Tests substitute stub resolvers; production code uses
/// [`CssLengthResolver`].
pub trait LengthResolver {
    /// Resolve `token` against `axis_extent` (the paint rectangle's width or
    /// height). Returns `None` when the token is not a resolvable length.
    fn resolve(&self, token: &str, axis_extent: f64) -> Option<f64>;
}

/// Production [`LengthResolver`] backed by [`parse_length_token`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CssLengthResolver;

impl LengthResolver for CssLengthResolver {
    fn resolve(&self, token: &str, axis_extent: f64) -> Option<f64> {
        parse_length_token(token).map(|len| len.to_px(axis_extent))
    }
}
