use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::{Lerp, Scalar};

use crate::*;

/// A straight segment between two points. Equality is exact endpoint
/// comparison in order.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct LineSegment<T, const N: usize> {
  begin: Point<T, N>,
  end: Point<T, N>,
}

pub type LineSegment3<T = f32> = LineSegment<T, 3>;

impl<T, const N: usize> LineSegment<T, N> {
  #[inline]
  pub fn new(begin: Point<T, N>, end: Point<T, N>) -> Self {
    Self { begin, end }
  }

  #[inline]
  pub fn begin(&self) -> &Point<T, N> {
    &self.begin
  }

  #[inline]
  pub fn end(&self) -> &Point<T, N> {
    &self.end
  }
}

impl<T: Scalar, const N: usize> LineSegment<T, N> {
  /// Whether either endpoint carries invalid data.
  #[inline]
  pub fn is_null(&self) -> bool {
    self.begin.is_null() || self.end.is_null()
  }

  /// The displacement from begin to end.
  #[inline]
  pub fn direction(&self) -> Direction<T, N> {
    self.begin.length_to(&self.end)
  }

  /// The point at parameter `t` on the carrier line; `t = 0` is begin,
  /// `t = 1` is end. `t` is not clamped to the segment.
  #[inline]
  pub fn point_at(&self, t: T) -> Point<T, N> {
    Point(self.begin.0.lerp(self.end.0, t))
  }
}

impl<T, const N: usize> fmt::Display for LineSegment<T, N>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Begin : {}, end : {}", self.begin, self.end)
  }
}

#[test]
fn sampling() {
  let l = LineSegment::new(point3(-1.0f32, 0., 0.), point3(1.0f32, 2., 0.));
  assert_eq!(l.point_at(0.), *l.begin());
  assert_eq!(l.point_at(1.), *l.end());
  assert_eq!(l.point_at(0.5), point3(0., 1., 0.));
  assert_eq!(l.direction(), direction3(2., 2., 0.));
}

#[test]
fn null_detection() {
  let ok = LineSegment::new(point3(0.0f32, 0., 0.), point3(1.0f32, 0., 0.));
  assert!(!ok.is_null());
  let bad = LineSegment::new(point3(f32::NAN, 0., 0.), point3(1.0f32, 0., 0.));
  assert!(bad.is_null());
}

#[test]
fn display() {
  let l = LineSegment::new(point3(0.0f32, 0., 0.), point3(1.0f32, 0., 0.));
  assert_eq!(
    l.to_string(),
    "Begin : (0.0, 0.0, 0.0), end : (1.0, 0.0, 0.0)"
  );
}
