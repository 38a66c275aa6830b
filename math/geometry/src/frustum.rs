use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::Scalar;

use crate::*;

/// The camera's visible volume: the convex intersection of six half-spaces,
/// with every plane normal pointing into the volume. Immutable once built;
/// a camera change produces a new frustum value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frustum<T = f32> {
  near: Plane<T>,
  far: Plane<T>,
  left: Plane<T>,
  right: Plane<T>,
  top: Plane<T>,
  bottom: Plane<T>,
}

impl<T: Scalar> Frustum<T> {
  pub fn new(
    near: Plane<T>,
    far: Plane<T>,
    left: Plane<T>,
    right: Plane<T>,
    top: Plane<T>,
    bottom: Plane<T>,
  ) -> Self {
    Self {
      near,
      far,
      left,
      right,
      top,
      bottom,
    }
  }

  /// The planes in clipping priority order. This order decides which plane
  /// wins when a segment grazes an edge or corner shared by two planes.
  fn clip_order(&self) -> [&Plane<T>; 6] {
    [
      &self.near,
      &self.far,
      &self.top,
      &self.bottom,
      &self.left,
      &self.right,
    ]
  }

  /// Whether the point lies outside the visible volume, i.e. in front of
  /// any of the six planes. Inside means behind or on all of them.
  pub fn outside(&self, p: &Point3<T>) -> bool {
    self.near.is_front_of(p)
      || self.far.is_front_of(p)
      || self.left.is_front_of(p)
      || self.right.is_front_of(p)
      || self.top.is_front_of(p)
      || self.bottom.is_front_of(p)
  }

  /// Whether the sphere lies entirely outside the visible volume.
  ///
  /// Only single-plane containment is checked, so a sphere straddling two
  /// planes near a corner can be reported visible when it is not. That is
  /// fine for the coarse reject pass this feeds; callers must not rely on
  /// an exact answer.
  pub fn outside_sphere(&self, s: &Sphere<T>) -> bool {
    s.behind(&self.near)
      || s.behind(&self.far)
      || s.behind(&self.left)
      || s.behind(&self.right)
      || s.behind(&self.top)
      || s.behind(&self.bottom)
  }

  /// The portion of the segment inside the visible volume.
  ///
  /// A segment with both endpoints inside comes back unchanged. Otherwise
  /// the first plane in priority order with a crossing coefficient `>= 0`
  /// (boundary inclusive, and the parallel sentinel `0` counts) supplies
  /// the entry point, evaluated on the carrier line. The exit point is the
  /// inside endpoint when there is one, else the next qualifying plane's
  /// crossing clamped to the segment range. Fails with `NoIntersection`
  /// when no plane qualifies, meaning the segment misses the volume.
  pub fn inter(&self, l: &LineSegment3<T>) -> Result<LineSegment3<T>, GeometryError> {
    if !self.outside(l.begin()) && !self.outside(l.end()) {
      return Ok(*l);
    }

    let order = self.clip_order();

    let (used, entry_coef) = order
      .iter()
      .enumerate()
      .find_map(|(i, plane)| {
        let coef = plane.intersect_coef(l);
        (coef >= T::zero()).then_some((i, coef))
      })
      .ok_or(GeometryError::NoIntersection)?;
    let entry = l.point_at(entry_coef).rounded();

    let exit = if !self.outside(l.begin()) {
      *l.begin()
    } else if !self.outside(l.end()) {
      *l.end()
    } else {
      let coef = order
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != used)
        .find_map(|(_, plane)| {
          let coef = plane.intersect_coef(l);
          (coef >= T::zero()).then_some(coef)
        })
        .ok_or(GeometryError::NoIntersection)?;
      let clamped = coef.min(T::one()).max(T::zero());
      l.point_at(clamped).rounded()
    };

    Ok(LineSegment::new(entry, exit))
  }
}

impl<T> fmt::Display for Frustum<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "Near : {}, far : {}, left : {}, right : {}, top : {}, bottom : {}",
      self.near, self.far, self.left, self.right, self.top, self.bottom
    )
  }
}

#[cfg(test)]
fn box_view() -> Frustum<f32> {
  let near = Plane::new(point3(0., 0., 0.), direction3(0., 0., -1.)).unwrap();
  let far = Plane::new(point3(0., 0., -1.), direction3(0., 0., 1.)).unwrap();
  let left = Plane::new(point3(-1., 0., -0.5), direction3(1., 0., 0.)).unwrap();
  let right = Plane::new(point3(1., 0., -0.5), direction3(-1., 0., 0.)).unwrap();
  let top = Plane::new(point3(0.5, 1., -0.5), direction3(0., -1., 0.)).unwrap();
  let bottom = Plane::new(point3(0.5, -1., -0.5), direction3(0., 1., 0.)).unwrap();

  Frustum::new(near, far, left, right, top, bottom)
}

#[test]
fn point_containment() {
  let f = box_view();
  assert!(!f.outside(&point3(0.5, 0.5, -0.5)));
  assert!(f.outside(&point3(2., 2., 2.)));

  // boundary counts as inside
  assert!(!f.outside(&point3(0., 0., 0.)));
}

#[test]
fn sphere_containment() {
  let f = box_view();

  let inside = Sphere::new(point3(0.5, 0.5, -0.5), 1.).unwrap();
  assert!(!f.outside_sphere(&inside));

  let outside = Sphere::new(point3(2., 2., 2.), 0.5).unwrap();
  assert!(f.outside_sphere(&outside));

  let straddling = Sphere::new(point3(2., 2., 2.), 2.).unwrap();
  assert!(!f.outside_sphere(&straddling));
}

#[test]
fn inside_segment_passes_through() {
  let f = box_view();
  let l = LineSegment::new(point3(-0.5, 0., 0.), point3(0.5, 0., 0.));
  assert_eq!(f.inter(&l), Ok(l));
}

#[test]
fn near_plane_clipping() {
  let f = box_view();
  let l = LineSegment::new(point3(0., 0., 2.), point3(0., 0., 0.5));
  let expected = LineSegment::new(point3(0., 0., 0.), point3(0., 0., 0.5));
  assert_eq!(f.inter(&l), Ok(expected));
}

#[test]
fn crossing_segment_is_clipped_on_both_sides() {
  let f = box_view();
  let l = LineSegment::new(point3(0., 0., 1.), point3(0., 0., -2.));
  let expected = LineSegment::new(point3(0., 0., 0.), point3(0., 0., -1.));
  assert_eq!(f.inter(&l), Ok(expected));
}

#[test]
fn entering_segment_keeps_inside_endpoint() {
  let f = box_view();
  let l = LineSegment::new(point3(0., 0., 1.), point3(0., 0., -0.5));
  let expected = LineSegment::new(point3(0., 0., 0.), point3(0., 0., -0.5));
  assert_eq!(f.inter(&l), Ok(expected));
}

#[test]
fn miss_is_reported() {
  let f = box_view();
  let l = LineSegment::new(point3(2., 2., 2.), point3(3., 3., 3.));
  assert_eq!(f.inter(&l), Err(GeometryError::NoIntersection));
}

#[test]
fn display() {
  let f = box_view();
  assert!(f.to_string().starts_with("Near : Point : (0.0, 0.0, 0.0)"));
}
