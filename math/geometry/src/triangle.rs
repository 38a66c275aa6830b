use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::Scalar;

use crate::*;

/// Three ordered vertices. Degenerate triangles are representable; `area`
/// reports zero for them.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Triangle<T = f32> {
  p0: Point3<T>,
  p1: Point3<T>,
  p2: Point3<T>,
}

impl<T> Triangle<T> {
  #[inline]
  pub fn new(p0: Point3<T>, p1: Point3<T>, p2: Point3<T>) -> Self {
    Self { p0, p1, p2 }
  }

  #[inline]
  pub fn p0(&self) -> &Point3<T> {
    &self.p0
  }

  #[inline]
  pub fn p1(&self) -> &Point3<T> {
    &self.p1
  }

  #[inline]
  pub fn p2(&self) -> &Point3<T> {
    &self.p2
  }
}

impl<T: Copy> Triangle<T> {
  /// The three edges, in the order they get clipped by the draw loop.
  pub fn edges(&self) -> [LineSegment3<T>; 3] {
    [
      LineSegment::new(self.p0, self.p1),
      LineSegment::new(self.p0, self.p2),
      LineSegment::new(self.p1, self.p2),
    ]
  }
}

impl<T: Scalar> Triangle<T> {
  #[inline]
  pub fn area(&self) -> T {
    (self.p0 - self.p1).cross(&(self.p0 - self.p2)).norm() * T::half()
  }

  /// Whether any vertex carries invalid data.
  #[inline]
  pub fn is_null(&self) -> bool {
    self.p0.is_null() || self.p1.is_null() || self.p2.is_null()
  }
}

impl<T> fmt::Display for Triangle<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "P0 : {} P1 : {} P2 : {}", self.p0, self.p1, self.p2)
  }
}

#[test]
fn area() {
  let t = Triangle::new(
    point3(0.0f32, 0., 0.),
    point3(2.0f32, 0., 0.),
    point3(0.0f32, 2., 0.),
  );
  assert_eq!(t.area(), 2.);

  let degenerate = Triangle::new(
    point3(0.0f32, 0., 0.),
    point3(1.0f32, 1., 1.),
    point3(2.0f32, 2., 2.),
  );
  assert_eq!(degenerate.area(), 0.);
}

#[test]
fn edges() {
  let t = Triangle::new(
    point3(0.0f32, 0., 0.),
    point3(1.0f32, 0., 0.),
    point3(0.0f32, 1., 0.),
  );
  let [a, b, c] = t.edges();
  assert_eq!(a, LineSegment::new(*t.p0(), *t.p1()));
  assert_eq!(b, LineSegment::new(*t.p0(), *t.p2()));
  assert_eq!(c, LineSegment::new(*t.p1(), *t.p2()));
}

#[test]
fn null_detection() {
  let t = Triangle::new(
    point3(0.0f32, 0., 0.),
    point3(1.0f32, 0., 0.),
    point3(0.0f32, f32::NAN, 0.),
  );
  assert!(t.is_null());
}
