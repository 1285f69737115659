//! Integration tests for `background-position` anchor resolution.
//!
//! Covers both parsing strategies: the tokenized grammar and the legacy
//! substring grammar kept for output parity with older renderers.

use tatami_css::{
    CssLengthResolver, LengthResolver, Point, PositionParseMode, Rect, Size,
    resolve_background_position,
};

/// Stub resolver that resolves every token to a fixed offset.
struct FixedResolver(f64);

impl LengthResolver for FixedResolver {
    fn resolve(&self, _token: &str, _axis_extent: f64) -> Option<f64> {
        Some(self.0)
    }
}

/// Stub resolver that refuses every token.
struct NoneResolver;

impl LengthResolver for NoneResolver {
    fn resolve(&self, _token: &str, _axis_extent: f64) -> Option<f64> {
        None
    }
}

fn resolve_tokenized(position: &str, rect: &Rect, image: Size) -> Point {
    resolve_background_position(
        position,
        PositionParseMode::Tokenized,
        rect,
        image,
        &CssLengthResolver,
    )
}

fn resolve_legacy(position: &str, rect: &Rect, image: Size) -> Point {
    resolve_background_position(
        position,
        PositionParseMode::Legacy,
        rect,
        image,
        &CssLengthResolver,
    )
}

#[test]
fn test_center_is_exact_on_both_axes() {
    // Scenario A anchor: rect=(0,0,200,100), image=(50,50), "center"
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let anchor = resolve_tokenized("center", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(75.0, 25.0));
}

#[test]
fn test_center_with_offset_rect() {
    let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
    let anchor = resolve_tokenized("center center", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(85.0, 45.0));
}

#[test]
fn test_edge_anchors() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    assert_eq!(
        resolve_tokenized("left top", &rect, image),
        Point::new(0.0, 0.0)
    );
    assert_eq!(
        resolve_tokenized("right bottom", &rect, image),
        Point::new(150.0, 50.0)
    );
}

#[test]
fn test_inherit_returns_rect_origin() {
    let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
    let anchor = resolve_tokenized(" inherit ", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(10.0, 20.0));
}

#[test]
fn test_three_tokens_fall_back_to_origin() {
    // Scenario E: malformed "left right bottom" in tokenized mode
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let anchor = resolve_tokenized("left right bottom", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(0.0, 0.0));
}

#[test]
fn test_empty_string_falls_back_to_origin() {
    let rect = Rect::new(5.0, 6.0, 200.0, 100.0);
    let anchor = resolve_tokenized("   ", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(5.0, 6.0));
}

#[test]
fn test_single_token_reused_for_vertical_axis() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    // "right" resolves the horizontal axis; reused vertically it is neither
    // a vertical keyword nor a length, so the vertical axis degrades to the
    // rect start.
    let anchor = resolve_tokenized("right", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(150.0, 0.0));
}

#[test]
fn test_length_and_percentage_tokens() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    // 25% of the 200-wide axis, 10px down
    assert_eq!(
        resolve_tokenized("25% 10px", &rect, image),
        Point::new(50.0, 10.0)
    );
    // 2em = 32px at the default font size
    assert_eq!(
        resolve_tokenized("2em top", &rect, image),
        Point::new(32.0, 0.0)
    );
    // bare zero is a valid length
    assert_eq!(
        resolve_tokenized("0 0", &rect, image),
        Point::new(0.0, 0.0)
    );
}

#[test]
fn test_keyword_matching_is_case_insensitive() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let anchor = resolve_tokenized("RIGHT Bottom", &rect, Size::new(50.0, 50.0));
    assert_eq!(anchor, Point::new(150.0, 50.0));
}

#[test]
fn test_resolver_is_injected() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let anchor = resolve_background_position(
        "alpha beta",
        PositionParseMode::Tokenized,
        &rect,
        Size::new(50.0, 50.0),
        &FixedResolver(7.0),
    );
    assert_eq!(anchor, Point::new(7.0, 7.0));
}

#[test]
fn test_unresolvable_token_degrades_to_rect_start() {
    let rect = Rect::new(10.0, 20.0, 200.0, 100.0);
    let anchor = resolve_background_position(
        "blorp center",
        PositionParseMode::Tokenized,
        &rect,
        Size::new(50.0, 50.0),
        &NoneResolver,
    );
    assert_eq!(anchor, Point::new(10.0, 45.0));
}

#[test]
fn test_oversized_image_yields_negative_anchor() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let image = Size::new(150.0, 150.0);
    assert_eq!(
        resolve_tokenized("center", &rect, image),
        Point::new(-25.0, -25.0)
    );
    assert_eq!(
        resolve_tokenized("right bottom", &rect, image),
        Point::new(-50.0, -50.0)
    );
}

// ---------------------------------------------------------------------------
// Legacy substring mode
// ---------------------------------------------------------------------------

#[test]
fn test_legacy_agrees_with_tokenized_on_keywords() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    for position in ["left top", "right bottom", "left bottom", "right top", "center"] {
        assert_eq!(
            resolve_legacy(position, &rect, image),
            resolve_tokenized(position, &rect, image),
            "grammars disagree on '{position}'"
        );
    }
}

#[test]
fn test_legacy_axes_are_independent() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    // Only a vertical keyword: the horizontal axis centers by default.
    assert_eq!(
        resolve_legacy("top", &rect, image),
        Point::new(75.0, 0.0)
    );
    // Only a horizontal keyword: the vertical axis centers by default.
    assert_eq!(
        resolve_legacy("right", &rect, image),
        Point::new(150.0, 25.0)
    );
}

#[test]
fn test_legacy_zero_escape_suppresses_centering() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    // A '0' anywhere in the string pins unkeyworded axes to the rect start
    // instead of centering them.
    assert_eq!(resolve_legacy("0 0", &rect, image), Point::new(0.0, 0.0));
    assert_eq!(
        resolve_legacy("10px 5px", &rect, image),
        Point::new(0.0, 0.0)
    );
    // Without a '0', unkeyworded axes center.
    assert_eq!(
        resolve_legacy("5px 5px", &rect, image),
        Point::new(75.0, 25.0)
    );
}

#[test]
fn test_legacy_is_case_insensitive() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    assert_eq!(
        resolve_legacy("RIGHT Bottom", &rect, image),
        Point::new(150.0, 50.0)
    );
}

#[test]
fn test_legacy_order_independence() {
    let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
    let image = Size::new(50.0, 50.0);
    assert_eq!(
        resolve_legacy("bottom right", &rect, image),
        resolve_legacy("right bottom", &rect, image)
    );
}

#[test]
fn test_idempotence() {
    // Pure function: identical inputs, bit-identical outputs.
    let rect = Rect::new(3.5, 7.25, 190.0, 95.0);
    let image = Size::new(33.0, 21.0);
    let first = resolve_tokenized("center 33%", &rect, image);
    let second = resolve_tokenized("center 33%", &rect, image);
    assert_eq!(first, second);
}
