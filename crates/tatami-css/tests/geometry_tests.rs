//! Integration tests for geometry value types.

use tatami_css::{Point, Rect, Size};

#[test]
fn test_rect_edges() {
    let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.top(), 20.0);
    assert_eq!(rect.right(), 110.0);
    assert_eq!(rect.bottom(), 70.0);
    assert_eq!(rect.origin(), Point::new(10.0, 20.0));
    assert_eq!(rect.size(), Size::new(100.0, 50.0));
}

#[test]
fn test_rect_from_point_size() {
    let rect = Rect::from_point_size(Point::new(5.0, 7.0), Size::new(30.0, 40.0));
    assert_eq!(rect, Rect::new(5.0, 7.0, 30.0, 40.0));
}

#[test]
fn test_intersect_overlapping() {
    let a = Rect::new(0.0, 0.0, 100.0, 100.0);
    let b = Rect::new(50.0, 25.0, 100.0, 100.0);
    assert_eq!(a.intersect(&b), Rect::new(50.0, 25.0, 50.0, 75.0));
}

#[test]
fn test_intersect_contained() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(20.0, 30.0, 10.0, 10.0);
    assert_eq!(outer.intersect(&inner), inner);
    assert_eq!(inner.intersect(&outer), inner);
}

#[test]
fn test_intersect_disjoint_clamps_to_zero_size() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(50.0, 50.0, 10.0, 10.0);
    let result = a.intersect(&b);
    assert!(result.is_empty());
    assert_eq!(result.width, 0.0);
    assert_eq!(result.height, 0.0);
}

#[test]
fn test_contains_edges() {
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(rect.contains(Point::new(0.0, 0.0)));
    assert!(rect.contains(Point::new(9.9, 9.9)));
    assert!(!rect.contains(Point::new(10.0, 5.0)));
    assert!(!rect.contains(Point::new(5.0, 10.0)));
    assert!(!rect.contains(Point::new(-0.1, 5.0)));
}

#[test]
fn test_empty_size() {
    assert!(Size::new(0.0, 10.0).is_empty());
    assert!(Size::new(10.0, 0.0).is_empty());
    assert!(!Size::new(1.0, 1.0).is_empty());
}
