use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::{vec4, Scalar, Vec4};

use crate::*;

/// Oriented half-space boundary, defined by an anchor point and a unit
/// normal. The implicit equation `[n.x, n.y, n.z, -n·p]` is derived once at
/// construction; the normal is normalized first if it does not come in at
/// unit length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane<T = f32> {
  point: Point3<T>,
  normal: Direction3<T>,
  equation: Vec4<T>,
}

impl<T: Scalar> Plane<T> {
  pub fn new(point: Point3<T>, normal: Direction3<T>) -> Result<Self, GeometryError> {
    let normal = if normal.is_unit() {
      normal
    } else {
      normal.to_unit()?
    };

    let constant = -normal.0.dot(&point.0);
    let equation = vec4(normal.0[0], normal.0[1], normal.0[2], constant);

    Ok(Self {
      point,
      normal,
      equation,
    })
  }

  #[inline]
  pub fn point(&self) -> &Point3<T> {
    &self.point
  }

  #[inline]
  pub fn normal(&self) -> &Direction3<T> {
    &self.normal
  }

  #[inline]
  pub fn equation(&self) -> &Vec4<T> {
    &self.equation
  }

  /// Signed distance of the point to the plane: negative behind, zero on,
  /// positive in front of the normal side.
  #[inline]
  pub fn position_from(&self, p: &Point3<T>) -> T {
    self.equation[0] * p.0[0]
      + self.equation[1] * p.0[1]
      + self.equation[2] * p.0[2]
      + self.equation[3]
  }

  /// Whether the plane faces the point from ahead, i.e. the point sits on
  /// the side the normal points away from. Note the inversion: this is
  /// `position_from(p) < 0`, "the plane is in front of the point".
  #[inline]
  pub fn is_front_of(&self, p: &Point3<T>) -> bool {
    self.position_from(p) < T::zero()
  }

  /// The interpolation parameter `t` with `begin + t·(end - begin)` on the
  /// plane. Reports where the carrier line crosses, so the value may fall
  /// outside `[0, 1]`. Degenerate segments get fixed sentinels: parallel and
  /// offset yields `0`, lying in the plane yields `1`.
  pub fn intersect_coef(&self, l: &LineSegment3<T>) -> T {
    let begin_side = self.position_from(l.begin());
    let end_side = self.position_from(l.end());
    let denominator = begin_side - end_side;

    if denominator == T::zero() {
      return if begin_side == T::zero() {
        T::one()
      } else {
        T::zero()
      };
    }

    begin_side / denominator
  }

  /// The point where the segment crosses the plane, snapped to the
  /// 2-decimal grid. Fails when the segment is parallel without touching or
  /// the crossing falls outside the segment range.
  pub fn intersec(&self, l: &LineSegment3<T>) -> Result<Point3<T>, GeometryError> {
    let begin_side = self.position_from(l.begin());
    let end_side = self.position_from(l.end());
    if begin_side - end_side == T::zero() && begin_side != T::zero() {
      return Err(GeometryError::NoIntersection);
    }

    let coef = self.intersect_coef(l);
    if coef < T::zero() || coef > T::one() {
      return Err(GeometryError::NoIntersection);
    }

    Ok(l.point_at(coef).rounded())
  }
}

impl<T> fmt::Display for Plane<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "Point : {} direction : {} Equation : {}",
      self.point, self.normal, self.equation
    )
  }
}

#[test]
fn construction_normalizes() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(0., 4., 0.)).unwrap();
  assert_eq!(*plane.normal(), direction3(0., 1., 0.));
  assert_eq!(*plane.equation(), vec4(0., 1., 0., -0.));

  let offset = Plane::new(point3(0.0f32, 2., 0.), direction3(0., 1., 0.)).unwrap();
  assert_eq!(*offset.equation(), vec4(0., 1., 0., -2.));

  assert_eq!(
    Plane::new(point3(0.0f32, 0., 0.), direction3(0., 0., 0.)),
    Err(GeometryError::Algebra(
      wireframe_algebra::AlgebraError::DivideByZero
    ))
  );
}

#[test]
fn signed_position() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(1., 0., 0.)).unwrap();
  assert_eq!(plane.position_from(&point3(1., 0., 0.)), 1.);
  assert_eq!(plane.position_from(&point3(0., 0., 0.)), 0.);
  assert_eq!(plane.position_from(&point3(-1., 0., 0.)), -1.);
}

#[test]
fn front_side_convention() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(1., 0., 0.)).unwrap();
  assert!(!plane.is_front_of(&point3(1., 0., 0.)));
  assert!(plane.is_front_of(&point3(-1., 0., 0.)));
}

#[test]
fn intersection_coefficient() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(-1., 0., 0.)).unwrap();

  let crossing = LineSegment::new(point3(-1.0f32, 0., 0.), point3(1.0f32, 0., 0.));
  assert_eq!(plane.intersect_coef(&crossing), 0.5);

  let offset_parallel = LineSegment::new(point3(1.0f32, 1., 0.), point3(1.0f32, -1., 0.));
  assert_eq!(plane.intersect_coef(&offset_parallel), 0.);

  let in_plane = LineSegment::new(point3(0.0f32, 1., 0.), point3(0.0f32, -1., 0.));
  assert_eq!(plane.intersect_coef(&in_plane), 1.);

  // the carrier line crosses beyond the end point
  let short = LineSegment::new(point3(-3.0f32, 0., 0.), point3(-1.0f32, 0., 0.));
  assert_eq!(plane.intersect_coef(&short), 1.5);
}

#[test]
fn intersection_point() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(-1., 0., 0.)).unwrap();

  let crossing = LineSegment::new(point3(-1.0f32, 0., 0.), point3(1.0f32, 0., 0.));
  assert_eq!(plane.intersec(&crossing), Ok(point3(0., 0., 0.)));

  let offset_parallel = LineSegment::new(point3(1.0f32, 1., 0.), point3(1.0f32, -1., 0.));
  assert_eq!(
    plane.intersec(&offset_parallel),
    Err(GeometryError::NoIntersection)
  );

  let in_plane = LineSegment::new(point3(0.0f32, 1., 0.), point3(0.0f32, -1., 0.));
  assert_eq!(plane.intersec(&in_plane), Ok(point3(0., -1., 0.)));

  let short = LineSegment::new(point3(-3.0f32, 0., 0.), point3(-1.0f32, 0., 0.));
  assert_eq!(plane.intersec(&short), Err(GeometryError::NoIntersection));
}
