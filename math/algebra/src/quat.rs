use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use crate::*;

/// Rotation quaternion, stored as `[re, i, j, k]`.
///
/// Built from an angle/axis pair it is unit-norm (given a unit axis) and
/// composes rotations through the Hamilton product.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Quaternion<T = f32> {
  members: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quaternion<T> {}

impl<T> Quaternion<T> {
  #[inline]
  pub fn new(members: Vector<T, 4>) -> Self {
    Self { members }
  }
}

impl<T: Scalar> Quaternion<T> {
  /// The rotation of `angle` around `axis`, by the half-angle formula. The
  /// sine/cosine terms are snapped to the 2-decimal grid (see
  /// [`round_hundredth`]) so rotations by the common axis-aligned angles
  /// stay exactly comparable.
  pub fn rotation(angle: Deg<T>, axis: Vec3<T>) -> Self {
    let half = angle.to_rad() * T::half();
    let (sin, cos) = half.sin_cos();
    let (sin, cos) = (round_hundredth(sin), round_hundredth(cos));

    Self::new(vec4(cos, axis[0] * sin, axis[1] * sin, axis[2] * sin))
  }

  /// The scalar part.
  #[inline]
  pub fn re(&self) -> T {
    self.members[0]
  }

  /// The imaginary 3-vector part.
  #[inline]
  pub fn im(&self) -> Vec3<T> {
    vec3(self.members[1], self.members[2], self.members[3])
  }

  #[inline]
  pub fn members(&self) -> Vector<T, 4> {
    self.members
  }

  /// The quaternion with the imaginary part negated.
  #[must_use]
  pub fn conjugate(&self) -> Self {
    Self::new(vec4(
      self.members[0],
      -self.members[1],
      -self.members[2],
      -self.members[3],
    ))
  }

  #[inline]
  pub fn norm(&self) -> T {
    self.members.norm()
  }

  /// A unit-norm copy.
  pub fn to_norm(&self) -> Result<Self, AlgebraError> {
    Ok(Self::new(self.members.to_unit()?))
  }

  /// The multiplicative inverse, `conjugate / norm²`.
  pub fn inverse(&self) -> Result<Self, AlgebraError> {
    let norm = self.norm();
    if norm == T::zero() {
      return Err(AlgebraError::DivideByZero);
    }
    Ok(self.conjugate() / (norm * norm))
  }

  /// Rotate a 3-vector by the sandwich product `q·[0, v]·q⁻¹`.
  pub fn rotate(&self, v: Vec3<T>) -> Result<Vec3<T>, AlgebraError> {
    let pure = Self::new(vec4(T::zero(), v[0], v[1], v[2]));
    let rotated = *self * pure * self.inverse()?;
    Ok(rotated.im())
  }
}

impl<T: Scalar> Add for Quaternion<T> {
  type Output = Self;
  #[inline]
  fn add(self, q: Self) -> Self {
    Self::new(self.members + q.members)
  }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
  #[inline]
  fn add_assign(&mut self, q: Self) {
    self.members += q.members;
  }
}

impl<T: Scalar> Sub for Quaternion<T> {
  type Output = Self;
  #[inline]
  fn sub(self, q: Self) -> Self {
    Self::new(self.members - q.members)
  }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
  #[inline]
  fn sub_assign(&mut self, q: Self) {
    self.members -= q.members;
  }
}

/// Scalar addition touches the real part only.
impl<T: Scalar> Add<T> for Quaternion<T> {
  type Output = Self;
  fn add(self, scalar: T) -> Self {
    let mut members = self.members;
    members[0] = members[0] + scalar;
    Self::new(members)
  }
}

impl<T: Scalar> AddAssign<T> for Quaternion<T> {
  #[inline]
  fn add_assign(&mut self, scalar: T) {
    *self = *self + scalar;
  }
}

impl<T: Scalar> Sub<T> for Quaternion<T> {
  type Output = Self;
  fn sub(self, scalar: T) -> Self {
    let mut members = self.members;
    members[0] = members[0] - scalar;
    Self::new(members)
  }
}

impl<T: Scalar> SubAssign<T> for Quaternion<T> {
  #[inline]
  fn sub_assign(&mut self, scalar: T) {
    *self = *self - scalar;
  }
}

impl<T: Scalar> Neg for Quaternion<T> {
  type Output = Self;
  #[inline]
  fn neg(self) -> Self {
    Self::new(-self.members)
  }
}

/// Hamilton product; non-commutative, composes successive rotations.
impl<T: Scalar> Mul for Quaternion<T> {
  type Output = Self;
  fn mul(self, q: Self) -> Self {
    let a = self.members;
    let b = q.members;

    Self::new(vec4(
      a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3],
      a[0] * b[1] + a[1] * b[0] + a[2] * b[3] - a[3] * b[2],
      a[0] * b[2] - a[1] * b[3] + a[2] * b[0] + a[3] * b[1],
      a[0] * b[3] + a[1] * b[2] - a[2] * b[1] + a[3] * b[0],
    ))
  }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
  #[inline]
  fn mul_assign(&mut self, q: Self) {
    *self = *self * q;
  }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
  type Output = Self;
  #[inline]
  fn mul(self, scalar: T) -> Self {
    Self::new(self.members * scalar)
  }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
  #[inline]
  fn mul_assign(&mut self, scalar: T) {
    *self = *self * scalar;
  }
}

impl<T: Scalar> Div<T> for Quaternion<T> {
  type Output = Self;
  #[inline]
  fn div(self, scalar: T) -> Self {
    Self::new(self.members * (T::one() / scalar))
  }
}

impl<T> fmt::Display for Quaternion<T>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "Quaternion({:?}, {:?}, {:?}, {:?})",
      self.members[0], self.members[1], self.members[2], self.members[3]
    )
  }
}

#[test]
fn half_angle_construction() {
  let q = Quaternion::rotation(Deg::by(180.0f32), vec3(0., 1., 0.));
  assert_eq!(q.re(), 0.);
  assert_eq!(q.im(), vec3(0., 1., 0.));
  assert_eq!(q.norm(), 1.);

  let q = Quaternion::rotation(Deg::by(90.0f32), vec3(0., 0., 1.));
  assert_eq!(q.members(), vec4(0.71, 0., 0., 0.71));

  let q = Quaternion::rotation(Deg::by(0.0f32), vec3(1., 0., 0.));
  assert_eq!(q.members(), vec4(1., 0., 0., 0.));
}

#[test]
fn conjugate_and_inverse() {
  let q = Quaternion::new(vec4(0.0f32, 1., 0., 0.));
  assert_eq!(q.conjugate().members(), vec4(0., -1., 0., 0.));
  assert_eq!(q.inverse().unwrap(), q.conjugate());

  let zero = Quaternion::new(Vector::<f32, 4>::zero());
  assert_eq!(zero.inverse(), Err(AlgebraError::DivideByZero));
}

#[test]
fn hamilton_product_against_cgmath() {
  let a = Quaternion::new(vec4(1.0f32, 2., 3., 4.));
  let b = Quaternion::new(vec4(5.0f32, 6., 7., 8.));
  let product = a * b;
  assert_eq!(product.members(), vec4(-60., 12., 30., 24.));

  let cg_a = cgmath::Quaternion::new(1.0f32, 2., 3., 4.);
  let cg_b = cgmath::Quaternion::new(5.0f32, 6., 7., 8.);
  let cg = cg_a * cg_b;
  assert_eq!(
    product.members(),
    vec4(cg.s, cg.v.x, cg.v.y, cg.v.z)
  );
}

#[test]
fn scalar_arithmetic() {
  let q = Quaternion::new(vec4(1.0f32, 2., 3., 4.));
  assert_eq!((q + 10.).members(), vec4(11., 2., 3., 4.));
  assert_eq!((q - 1.).members(), vec4(0., 2., 3., 4.));
  assert_eq!((q * 2.).members(), vec4(2., 4., 6., 8.));
  assert_eq!((q / 2.).members(), vec4(0.5, 1., 1.5, 2.));
  assert_eq!((-q).members(), vec4(-1., -2., -3., -4.));
  assert_eq!((q - q).members(), Vector::zero());

  let mut acc = q;
  acc += q;
  assert_eq!(acc.members(), vec4(2., 4., 6., 8.));
  acc -= q;
  assert_eq!(acc.members(), q.members());
}

#[test]
fn sandwich_rotation() {
  let q = Quaternion::rotation(Deg::by(90.0f32), vec3(0., 0., 1.));
  let rotated = q.rotate(vec3(1., 0., 0.)).unwrap();
  assert_eq!(rotated.rounded(), vec3(0., 1., 0.));

  let full_turn = Quaternion::rotation(Deg::by(360.0f32), vec3(0., 1., 0.));
  let v = vec3(0.5f32, 0.25, -0.5);
  assert_eq!(full_turn.rotate(v).unwrap().rounded(), v);
}
