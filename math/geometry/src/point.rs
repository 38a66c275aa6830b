use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use wireframe_algebra::{vec3, AlgebraError, Quaternion, Scalar, Vector};

/// A location in space. Distinct from [`Direction`] at the type level:
/// two positions cannot be added, only differenced into a displacement.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Point<T, const N: usize>(pub Vector<T, N>);

/// A displacement, normal or rotation axis. Never a position.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Direction<T, const N: usize>(pub Vector<T, N>);

pub type Point3<T = f32> = Point<T, 3>;
pub type Direction3<T = f32> = Direction<T, 3>;

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Point<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Point<T, N> {}
unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Direction<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Direction<T, N> {}

pub fn point3<T>(x: T, y: T, z: T) -> Point3<T> {
  Point(vec3(x, y, z))
}

pub fn direction3<T>(x: T, y: T, z: T) -> Direction3<T> {
  Direction(vec3(x, y, z))
}

impl<T, const N: usize> Point<T, N> {
  #[inline]
  pub fn new(v: Vector<T, N>) -> Self {
    Self(v)
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Point<T, N> {
  #[inline]
  fn from(v: Vector<T, N>) -> Self {
    Self(v)
  }
}

impl<T: Copy, const N: usize> Point<T, N> {
  #[inline]
  pub fn at(&self, i: usize) -> Result<T, AlgebraError> {
    self.0.at(i)
  }
}

impl<T: Scalar, const N: usize> Point<T, N> {
  /// The displacement from this point to `p`.
  #[inline]
  pub fn length_to(&self, p: &Self) -> Direction<T, N> {
    Direction(p.0 - self.0)
  }

  #[inline]
  pub fn distance_to(&self, p: &Self) -> T {
    self.length_to(p).norm()
  }

  #[inline]
  pub fn is_null(&self) -> bool {
    self.0.is_null()
  }

  #[inline]
  #[must_use]
  pub fn rounded(self) -> Self {
    Self(self.0.rounded())
  }
}

impl<T: Scalar> Point<T, 3> {
  /// The point rotated around the origin by the given quaternion.
  pub fn rotate(&self, q: &Quaternion<T>) -> Result<Self, AlgebraError> {
    Ok(Self(q.rotate(self.0)?))
  }
}

impl<T, const N: usize> Sub for Point<T, N>
where
  T: Sub<Output = T> + Copy,
{
  type Output = Direction<T, N>;
  #[inline]
  fn sub(self, p: Self) -> Direction<T, N> {
    Direction(self.0 - p.0)
  }
}

impl<T, const N: usize> Add<Direction<T, N>> for Point<T, N>
where
  T: Add<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn add(self, d: Direction<T, N>) -> Self {
    Self(self.0 + d.0)
  }
}

impl<T, const N: usize> AddAssign<Direction<T, N>> for Point<T, N>
where
  T: Add<Output = T> + Copy,
{
  #[inline]
  fn add_assign(&mut self, d: Direction<T, N>) {
    self.0 += d.0;
  }
}

impl<T, const N: usize> Sub<Direction<T, N>> for Point<T, N>
where
  T: Sub<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn sub(self, d: Direction<T, N>) -> Self {
    Self(self.0 - d.0)
  }
}

impl<T, const N: usize> SubAssign<Direction<T, N>> for Point<T, N>
where
  T: Sub<Output = T> + Copy,
{
  #[inline]
  fn sub_assign(&mut self, d: Direction<T, N>) {
    self.0 -= d.0;
  }
}

impl<T, const N: usize> fmt::Display for Point<T, N>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl<T, const N: usize> Direction<T, N> {
  #[inline]
  pub fn new(v: Vector<T, N>) -> Self {
    Self(v)
  }
}

impl<T, const N: usize> From<Vector<T, N>> for Direction<T, N> {
  #[inline]
  fn from(v: Vector<T, N>) -> Self {
    Self(v)
  }
}

impl<T: Copy, const N: usize> Direction<T, N> {
  #[inline]
  pub fn at(&self, i: usize) -> Result<T, AlgebraError> {
    self.0.at(i)
  }
}

impl<T: Scalar, const N: usize> Direction<T, N> {
  #[inline]
  pub fn norm(&self) -> T {
    self.0.norm()
  }

  #[inline]
  pub fn to_unit(&self) -> Result<Self, AlgebraError> {
    Ok(Self(self.0.to_unit()?))
  }

  #[inline]
  pub fn is_unit(&self) -> bool {
    self.0.is_unit()
  }

  #[inline]
  pub fn is_null(&self) -> bool {
    self.0.is_null()
  }

  #[inline]
  pub fn dot(&self, d: &Self) -> T {
    self.0.dot(&d.0)
  }
}

impl<T: Scalar> Direction<T, 3> {
  #[inline]
  pub fn cross(&self, d: &Self) -> Self {
    Self(vec3(
      self.0[1] * d.0[2] - self.0[2] * d.0[1],
      self.0[2] * d.0[0] - self.0[0] * d.0[2],
      self.0[0] * d.0[1] - self.0[1] * d.0[0],
    ))
  }

  /// The axis rotated by the given quaternion.
  pub fn rotate(&self, q: &Quaternion<T>) -> Result<Self, AlgebraError> {
    Ok(Self(q.rotate(self.0)?))
  }
}

impl<T, const N: usize> Add for Direction<T, N>
where
  T: Add<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn add(self, d: Self) -> Self {
    Self(self.0 + d.0)
  }
}

impl<T, const N: usize> AddAssign for Direction<T, N>
where
  T: Add<Output = T> + Copy,
{
  #[inline]
  fn add_assign(&mut self, d: Self) {
    self.0 += d.0;
  }
}

impl<T, const N: usize> Sub for Direction<T, N>
where
  T: Sub<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn sub(self, d: Self) -> Self {
    Self(self.0 - d.0)
  }
}

impl<T, const N: usize> SubAssign for Direction<T, N>
where
  T: Sub<Output = T> + Copy,
{
  #[inline]
  fn sub_assign(&mut self, d: Self) {
    self.0 -= d.0;
  }
}

impl<T, const N: usize> Neg for Direction<T, N>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    Self(-self.0)
  }
}

impl<T, const N: usize> Mul<T> for Direction<T, N>
where
  T: Mul<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn mul(self, scalar: T) -> Self {
    Self(self.0 * scalar)
  }
}

impl<T, const N: usize> fmt::Display for Direction<T, N>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

#[cfg(test)]
use wireframe_algebra::Deg;

#[test]
fn point_difference() {
  let a = point3(1.0f32, 2., 3.);
  let b = point3(4.0f32, 6., 3.);
  assert_eq!(a.length_to(&b), direction3(3., 4., 0.));
  assert_eq!(a.distance_to(&b), 5.);
  assert_eq!(b - a, direction3(3., 4., 0.));
  assert_eq!(a + direction3(3., 4., 0.), b);
  assert_eq!(b - direction3(3., 4., 0.), a);
}

#[test]
fn direction_algebra() {
  let x = direction3(1.0f32, 0., 0.);
  let y = direction3(0.0f32, 1., 0.);
  assert_eq!(x.cross(&y), direction3(0., 0., 1.));
  assert_eq!(x.dot(&y), 0.);
  assert!(x.is_unit());
  assert!(!direction3(0.5f32, 0.5, 0.5).is_unit());
  assert_eq!(-x, direction3(-1., 0., 0.));
  assert_eq!(y * 2., direction3(0., 2., 0.));
  assert_eq!(
    direction3(0.0f32, 4., 0.).to_unit(),
    Ok(direction3(0., 1., 0.))
  );
}

#[test]
fn rotation() {
  let quarter = Quaternion::rotation(Deg::by(90.0f32), vec3(0., 0., 1.));
  let p = point3(1.0f32, 0., 0.).rotate(&quarter).unwrap();
  assert_eq!(p.rounded(), point3(0., 1., 0.));

  let axis = direction3(0.0f32, 1., 0.).rotate(&quarter).unwrap();
  assert_eq!(Direction(axis.0.rounded()), direction3(-1., 0., 0.));
}

#[test]
fn null_detection() {
  assert!(point3(f32::NAN, 0., 0.).is_null());
  assert!(!point3(0.0f32, 0., 0.).is_null());
  assert!(direction3(0.0f32, f32::NAN, 0.).is_null());
}
