use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::Scalar;

use crate::*;

/// Bounding sphere used for coarse visibility rejection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere<T = f32> {
  center: Point3<T>,
  radius: T,
}

impl<T: Scalar> Sphere<T> {
  pub fn new(center: Point3<T>, radius: T) -> Result<Self, GeometryError> {
    if radius < T::zero() {
      return Err(GeometryError::InvalidArgument(
        "sphere radius must be positive",
      ));
    }
    Ok(Self { center, radius })
  }

  #[inline]
  pub fn center(&self) -> &Point3<T> {
    &self.center
  }

  #[inline]
  pub fn radius(&self) -> T {
    self.radius
  }

  /// Whether the sphere carries invalid data.
  #[inline]
  pub fn is_null(&self) -> bool {
    self.center.is_null() || self.radius.is_nan()
  }

  /// Whether the sphere lies entirely on the negative side of the plane.
  #[inline]
  pub fn behind(&self, plane: &Plane<T>) -> bool {
    plane.position_from(&self.center) < -self.radius
  }

  #[must_use]
  pub(crate) fn with_center(&self, center: Point3<T>) -> Self {
    Self {
      center,
      radius: self.radius,
    }
  }
}

impl<T> fmt::Display for Sphere<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Center : {}, radius : {:?}", self.center, self.radius)
  }
}

#[test]
fn radius_validation() {
  assert!(Sphere::new(point3(0.0f32, 0., 0.), 1.).is_ok());
  assert!(Sphere::new(point3(0.0f32, 0., 0.), 0.).is_ok());
  assert_eq!(
    Sphere::new(point3(0.0f32, 0., 0.), -1.),
    Err(GeometryError::InvalidArgument(
      "sphere radius must be positive"
    ))
  );
}

#[test]
fn null_detection() {
  let s = Sphere::new(point3(0.0f32, 0., 0.), 1.).unwrap();
  assert!(!s.is_null());
  let s = Sphere::new(point3(f32::NAN, 0., 0.), 1.).unwrap();
  assert!(s.is_null());
}

#[test]
fn plane_side() {
  let plane = Plane::new(point3(0.0f32, 0., 0.), direction3(1., 0., 0.)).unwrap();

  let clear = Sphere::new(point3(-3.0f32, 0., 0.), 1.).unwrap();
  assert!(clear.behind(&plane));

  let straddling = Sphere::new(point3(-0.5f32, 0., 0.), 1.).unwrap();
  assert!(!straddling.behind(&plane));

  let in_front = Sphere::new(point3(2.0f32, 0., 0.), 1.).unwrap();
  assert!(!in_front.behind(&plane));
}
