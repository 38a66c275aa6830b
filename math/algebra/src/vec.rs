use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use num_traits::Zero;

use crate::*;

const MIN_CROSS_DIMENSION: usize = 3;

/// Fixed-size numeric tuple. The workhorse storage behind points,
/// directions, quaternions and matrix rows.
///
/// Equality is exact component-wise comparison; there is no tolerance
/// anywhere in this crate family.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Vector<T, const N: usize>([T; N]);

pub type Vec2<T = f32> = Vector<T, 2>;
pub type Vec3<T = f32> = Vector<T, 3>;
pub type Vec4<T = f32> = Vector<T, 4>;

pub fn vec2<T>(x: T, y: T) -> Vec2<T> {
  Vector([x, y])
}

pub fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
  Vector([x, y, z])
}

pub fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
  Vector([x, y, z, w])
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T, const N: usize> Vector<T, N> {
  #[inline]
  pub fn new(components: [T; N]) -> Self {
    Self(components)
  }

  #[inline]
  pub fn into_inner(self) -> [T; N] {
    self.0
  }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
  #[inline]
  fn from(components: [T; N]) -> Self {
    Self(components)
  }
}

impl<T: Copy, const N: usize> Vector<T, N> {
  #[inline]
  pub fn create<F>(f: F) -> Self
  where
    F: Fn() -> T,
  {
    Self(std::array::from_fn(|_| f()))
  }

  /// Perform the given operation on each component, returning a new vector
  /// constructed from the results.
  #[inline]
  #[must_use]
  pub fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self(self.0.map(f))
  }

  /// Construct a new vector where each component is the result of applying
  /// the given operation to each pair of components of the given vectors.
  #[inline]
  #[must_use]
  pub fn zip<F>(self, v2: Self, f: F) -> Self
  where
    F: Fn(T, T) -> T,
  {
    Self(std::array::from_fn(|i| f(self.0[i], v2.0[i])))
  }

  #[inline]
  #[must_use]
  pub fn splat(v: T) -> Self {
    Self::create(|| v)
  }

  /// Checked component access.
  #[inline]
  pub fn at(&self, i: usize) -> Result<T, AlgebraError> {
    if i >= N {
      return Err(AlgebraError::IndexOutOfRange {
        index: i,
        dimension: N,
      });
    }
    Ok(self.0[i])
  }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
  #[inline]
  #[must_use]
  pub fn zero() -> Self {
    Self::create(T::zero)
  }
}

impl<T: Zero + Copy, const N: usize> Default for Vector<T, N> {
  #[inline]
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const N: usize> Vector<T, N>
where
  T: Mul<Output = T> + Zero + Copy,
{
  #[inline]
  pub fn dot(&self, v: &Self) -> T {
    self
      .0
      .iter()
      .zip(v.0.iter())
      .fold(T::zero(), |sum, (a, b)| sum + *a * *b)
  }

  /// Scale by a scalar. Same as `self * scalar`, kept as a named operation
  /// next to [`Vector::dot`].
  #[inline]
  #[must_use]
  pub fn scaled(&self, scalar: T) -> Self {
    self.map(|c| c * scalar)
  }
}

impl<T, const N: usize> Vector<T, N>
where
  T: Mul<Output = T> + Zero + Copy + PartialEq,
{
  /// Whether the two vectors are perpendicular.
  #[inline]
  pub fn is_ortho(&self, v: &Self) -> bool {
    self.dot(v) == T::zero()
  }
}

impl<T, const N: usize> Vector<T, N>
where
  T: Sub<Output = T> + Mul<Output = T> + Zero + Copy,
{
  /// Cross product over components 0, 1, 2. Higher components of the result
  /// stay zero. Vectors of fewer than three components have no cross
  /// product.
  pub fn cross(&self, v: &Self) -> Result<Self, AlgebraError> {
    if N < MIN_CROSS_DIMENSION {
      return Err(AlgebraError::InvalidDimension {
        required: MIN_CROSS_DIMENSION,
        found: N,
      });
    }

    let mut res = Self::zero();
    res.0[0] = self.0[1] * v.0[2] - self.0[2] * v.0[1];
    res.0[1] = self.0[2] * v.0[0] - self.0[0] * v.0[2];
    res.0[2] = self.0[0] * v.0[1] - self.0[1] * v.0[0];
    Ok(res)
  }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
  /// Euclidean norm.
  #[inline]
  pub fn norm(&self) -> T {
    self.0.iter().fold(T::zero(), |sum, c| sum + *c * *c).sqrt()
  }

  /// A copy scaled to unit length.
  pub fn to_unit(&self) -> Result<Self, AlgebraError> {
    let norm = self.norm();
    if norm == T::zero() {
      return Err(AlgebraError::DivideByZero);
    }
    Ok(self.scaled(T::one() / norm))
  }

  /// Exact unit-length check, `norm() == 1`.
  #[inline]
  pub fn is_unit(&self) -> bool {
    self.norm() == T::one()
  }

  /// Whether any component carries invalid data (NaN).
  #[inline]
  pub fn is_null(&self) -> bool {
    self.0.iter().any(|c| c.is_nan())
  }

  /// Every component snapped to the 2-decimal grid, see [`round_hundredth`].
  #[inline]
  #[must_use]
  pub fn rounded(self) -> Self {
    self.map(round_hundredth)
  }
}

pub fn dot<T, const N: usize>(v1: &Vector<T, N>, v2: &Vector<T, N>) -> T
where
  T: Mul<Output = T> + Zero + Copy,
{
  v1.dot(v2)
}

pub fn cross<T, const N: usize>(v1: &Vector<T, N>, v2: &Vector<T, N>) -> Result<Vector<T, N>, AlgebraError>
where
  T: Sub<Output = T> + Mul<Output = T> + Zero + Copy,
{
  v1.cross(v2)
}

pub trait Lerp<T> {
  #[must_use]
  fn lerp(self, b: Self, t: T) -> Self;
}

impl<T: Scalar, const N: usize> Lerp<T> for Vector<T, N> {
  #[inline(always)]
  fn lerp(self, b: Self, t: T) -> Self {
    self * (T::one() - t) + b * t
  }
}

impl<T, const N: usize> Add for Vector<T, N>
where
  T: Add<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn add(self, v: Self) -> Self {
    self.zip(v, |a, b| a + b)
  }
}

impl<T, const N: usize> AddAssign for Vector<T, N>
where
  T: Add<Output = T> + Copy,
{
  #[inline]
  fn add_assign(&mut self, v: Self) {
    *self = *self + v;
  }
}

impl<T, const N: usize> Sub for Vector<T, N>
where
  T: Sub<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn sub(self, v: Self) -> Self {
    self.zip(v, |a, b| a - b)
  }
}

impl<T, const N: usize> SubAssign for Vector<T, N>
where
  T: Sub<Output = T> + Copy,
{
  #[inline]
  fn sub_assign(&mut self, v: Self) {
    *self = *self - v;
  }
}

impl<T, const N: usize> Neg for Vector<T, N>
where
  T: Neg<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    self.map(|c| -c)
  }
}

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
  T: Mul<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn mul(self, scalar: T) -> Self {
    self.map(|c| c * scalar)
  }
}

impl<const N: usize> Mul<Vector<f32, N>> for f32 {
  type Output = Vector<f32, N>;
  #[inline]
  fn mul(self, v: Vector<f32, N>) -> Self::Output {
    v * self
  }
}

impl<const N: usize> Mul<Vector<f64, N>> for f64 {
  type Output = Vector<f64, N>;
  #[inline]
  fn mul(self, v: Vector<f64, N>) -> Self::Output {
    v * self
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  #[inline]
  fn index(&self, i: usize) -> &T {
    &self.0[i]
  }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
  #[inline]
  fn index_mut(&mut self, i: usize) -> &mut T {
    &mut self.0[i]
  }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "(")?;
    for (i, c) in self.0.iter().enumerate() {
      if i != 0 {
        write!(f, ", ")?;
      }
      write!(f, "{c:?}")?;
    }
    write!(f, ")")
  }
}

#[test]
fn checked_access() {
  let v = vec3(1, 2, 3);
  assert_eq!(v.at(0), Ok(1));
  assert_eq!(v.at(2), Ok(3));
  assert_eq!(
    v.at(3),
    Err(AlgebraError::IndexOutOfRange {
      index: 3,
      dimension: 3
    })
  );

  let mut v = vec2(0.0f32, 1.0);
  v[1] = 7.;
  assert_eq!(v[1], 7.);
}

#[test]
fn null_detection() {
  assert!(!vec3(0.0f32, 0., 0.).is_null());
  assert!(vec3(0.0f32, f32::NAN, 0.).is_null());
  assert!(vec4(0.0f32, 0., f32::NAN, 0.).is_null());
}

#[test]
fn unit_check_is_exact() {
  assert!(vec3(0.0f32, 0., 1.).is_unit());
  assert!(vec3(0.0f32, 1., 0.).is_unit());
  assert!(vec3(1.0f32, 0., 0.).is_unit());

  assert!(!vec3(0.0f32, 0., 0.).is_unit());
  assert!(!vec3(0.1f32, 0., 0.1).is_unit());
  assert!(!vec3(3.0f32, 0., 1.).is_unit());
  assert!(!vec3(0.5f32, 0.5, 0.5).is_unit());
}

#[test]
fn norm() {
  assert_eq!(vec3(0.0f32, 1., 2.).norm(), 5.0f32.sqrt());
  assert_eq!(vec3(1.0f32, 2., 3.).norm(), 14.0f32.sqrt());
  assert_eq!(vec3(9.0f32, 0., 0.).norm(), 9.);
}

#[test]
fn to_unit() {
  let v = vec3(0.0f32, 2., 0.);
  assert_eq!(v.to_unit(), Ok(vec3(0., 1., 0.)));
  assert!(v.to_unit().unwrap().is_unit());

  assert_eq!(
    Vec3::<f32>::zero().to_unit(),
    Err(AlgebraError::DivideByZero)
  );
}

#[test]
fn additive_round_trip() {
  let v = vec4(1, -3, 7, 0);
  let w = vec4(5, 2, -9, 4);
  assert_eq!(v + w - w, v);

  let mut acc = vec3(0.5f32, 0.5, 0.5);
  acc += vec3(0.25, 0.25, 0.25);
  assert_eq!(acc, vec3(0.75, 0.75, 0.75));
  acc -= vec3(0.25, 0.25, 0.25);
  assert_eq!(acc, vec3(0.5, 0.5, 0.5));
}

#[test]
fn negation() {
  assert_eq!(-vec3(1, 2, 3), vec3(-1, -2, -3));
  assert_eq!(-(-vec3(-4, -5, -6)), vec3(-4, -5, -6));
}

#[test]
fn scaling_consistency() {
  let v = vec4(1.0f32, 3.5, 1.25, 4.5);
  assert_eq!(v.scaled(2.), v * 2.);
  assert_eq!(2.0f32 * v, v * 2.);
  assert_eq!(v.scaled(1.), v);
  assert_eq!(v.scaled(-1.), -v);
}

#[test]
fn dot_product() {
  let a = vec4(1, 3, 1, 4);
  let b = vec4(2, 7, 2, 8);
  assert_eq!(a.dot(&b), 57);
  assert_eq!(dot(&a, &b), 57);

  let x = vec3(1.0f32, 0., 0.);
  let y = vec3(0.0f32, 1., 0.);
  assert!(x.is_ortho(&y));
  assert!(!x.is_ortho(&x));
}

#[test]
fn cross_product() {
  let a = vec4(0, 0, 1, 0);
  let b = vec4(0, 1, 0, 0);
  assert_eq!(a.cross(&b), Ok(vec4(-1, 0, 0, 0)));

  // component 3 stays untouched by the 3d formula
  let v0 = vec4(0, 1, 2, 3);
  let v1 = vec4(3, 4, 5, 6);
  assert_eq!(cross(&v0, &v1), Ok(vec4(-3, 6, -3, 0)));

  let v = vec3(2.0f32, -1., 0.5);
  assert_eq!(v.cross(&v), Ok(Vec3::zero()));

  assert_eq!(
    vec2(1, 2).cross(&vec2(3, 4)),
    Err(AlgebraError::InvalidDimension {
      required: 3,
      found: 2
    })
  );
}

#[test]
fn display() {
  assert_eq!(vec3(0.5f32, -0.5, 1.).to_string(), "(0.5, -0.5, 1.0)");
  assert_eq!(vec2(1, 2).to_string(), "(1, 2)");
}
