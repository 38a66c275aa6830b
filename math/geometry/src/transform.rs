use std::fmt;
use std::fmt::Debug;

use wireframe_algebra::{vec4, Deg, Mat4, Matrix, Quaternion, Scalar};

use crate::*;

/// Affine transformation as a homogeneous 4×4 matrix, column-vector
/// convention: applying means `matrix · [x, y, z, 1]ᵀ`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transformation<T = f32> {
  matrix: Mat4<T>,
}

impl<T: Scalar> Transformation<T> {
  /// Rotation-only transformation derived from a quaternion. The terms are
  /// scaled by `2 / ‖q‖²` so the matrix agrees with the sandwich product for
  /// non-unit quaternions too; a zero quaternion has no rotation and fails.
  pub fn from_quaternion(q: &Quaternion<T>) -> Result<Self, GeometryError> {
    let members = q.members();
    let norm2 = members.dot(&members);
    if norm2 == T::zero() {
      return Err(wireframe_algebra::AlgebraError::DivideByZero.into());
    }

    let re = q.re();
    let im = q.im();
    let (o, z) = (T::one(), T::zero());
    let s = T::two() / norm2;

    let matrix = Matrix::new([
      [
        o - s * im[1] * im[1] - s * im[2] * im[2],
        s * im[0] * im[1] - s * re * im[2],
        s * im[0] * im[2] + s * re * im[1],
        z,
      ],
      [
        s * im[0] * im[1] + s * re * im[2],
        o - s * im[0] * im[0] - s * im[2] * im[2],
        s * im[1] * im[2] - s * re * im[0],
        z,
      ],
      [
        s * im[0] * im[2] - s * re * im[1],
        s * im[1] * im[2] + s * re * im[0],
        o - s * im[0] * im[0] - s * im[1] * im[1],
        z,
      ],
      [z, z, z, o],
    ]);

    Ok(Self { matrix })
  }

  /// Rotation of `angle` around `axis`; goes through the quaternion so the
  /// matrix agrees numerically with the sandwich product.
  pub fn rotation(angle: Deg<T>, axis: &Direction3<T>) -> Result<Self, GeometryError> {
    Self::from_quaternion(&Quaternion::rotation(angle, axis.0))
  }

  pub fn from_matrix(matrix: Mat4<T>) -> Self {
    Self { matrix }
  }

  #[inline]
  pub fn matrix(&self) -> &Mat4<T> {
    &self.matrix
  }

  /// Pure translation by `(x, y, z)`.
  pub fn translation(x: T, y: T, z: T) -> Self {
    let (o, zero) = (T::one(), T::zero());
    let matrix = Matrix::new([
      [o, zero, zero, x],
      [zero, o, zero, y],
      [zero, zero, o, z],
      [zero, zero, zero, o],
    ]);
    Self { matrix }
  }

  /// Pure scaling by `(x, y, z)`.
  pub fn scaling(x: T, y: T, z: T) -> Self {
    let (o, zero) = (T::one(), T::zero());
    let matrix = Matrix::new([
      [x, zero, zero, zero],
      [zero, y, zero, zero],
      [zero, zero, z, zero],
      [zero, zero, zero, o],
    ]);
    Self { matrix }
  }

  /// Composition: the result applies `self` first, then `t`.
  #[must_use]
  pub fn concat(&self, t: &Self) -> Self {
    Self {
      matrix: t.matrix * self.matrix,
    }
  }

  /// Transform a position; the point is lifted to `[x, y, z, 1]`.
  pub fn transform_point(&self, p: &Point3<T>) -> Point3<T> {
    let v = self.matrix * vec4(p.0[0], p.0[1], p.0[2], T::one());
    point3(v[0], v[1], v[2])
  }

  /// Transform a displacement; lifted with homogeneous `0`, translation
  /// does not apply.
  pub fn transform_direction(&self, d: &Direction3<T>) -> Direction3<T> {
    let v = self.matrix * vec4(d.0[0], d.0[1], d.0[2], T::zero());
    direction3(v[0], v[1], v[2])
  }

  /// Transform a sphere by moving its center. The radius is kept as-is,
  /// which holds for rigid and uniform transforms only.
  pub fn transform_sphere(&self, s: &Sphere<T>) -> Sphere<T> {
    s.with_center(self.transform_point(s.center()))
  }
}

impl<T> fmt::Display for Transformation<T>
where
  T: Debug + Copy,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for i in 0..4 {
      if i != 0 {
        writeln!(f)?;
      }
      let row = self.matrix[i];
      write!(f, "{:?} {:?} {:?} | {:?}", row[0], row[1], row[2], row[3])?;
    }
    Ok(())
  }
}

#[cfg(test)]
use wireframe_algebra::vec3;

#[test]
fn translation_round_trip() {
  let p = point3(1.0f32, -2., 3.);
  let forth = Transformation::translation(5.0f32, 7., -1.);
  let back = Transformation::translation(-5.0f32, -7., 1.);

  assert_eq!(forth.transform_point(&p), point3(6., 5., 2.));
  assert_eq!(forth.concat(&back).transform_point(&p), p);
}

#[test]
fn scaling() {
  let t = Transformation::scaling(2.0f32, 3., 1.);
  assert_eq!(t.transform_point(&point3(1., 1., 1.)), point3(2., 3., 1.));
  assert_eq!(
    t.transform_direction(&direction3(1., 0., 2.)),
    direction3(2., 0., 2.)
  );
}

#[test]
fn directions_ignore_translation() {
  let t = Transformation::translation(10.0f32, 10., 10.);
  let d = direction3(0.0f32, 0., -1.);
  assert_eq!(t.transform_direction(&d), d);
}

#[test]
fn concat_order() {
  let scale = Transformation::scaling(2.0f32, 2., 2.);
  let translate = Transformation::translation(1.0f32, 0., 0.);

  // scale first, then translate
  let combined = scale.concat(&translate);
  assert_eq!(
    combined.transform_point(&point3(1., 1., 1.)),
    point3(3., 2., 2.)
  );

  // translate first, then scale
  let combined = translate.concat(&scale);
  assert_eq!(
    combined.transform_point(&point3(1., 1., 1.)),
    point3(4., 2., 2.)
  );
}

#[test]
fn quaternion_rotation_matrix() {
  let q = Quaternion::rotation(Deg::by(180.0f32), vec3(0., 1., 0.));
  let t = Transformation::from_quaternion(&q).unwrap();

  // half turn around y: x and z flip
  assert_eq!(
    t.transform_point(&point3(1., 2., 3.)),
    point3(-1., 2., -3.)
  );

  // matches the sandwich product
  let p = point3(0.5f32, -1., 0.25);
  assert_eq!(t.transform_point(&p), p.rotate(&q).unwrap());
}

#[test]
fn angle_axis_rotation() {
  let t = Transformation::rotation(Deg::by(90.0f32), &direction3(0., 0., 1.)).unwrap();
  let rotated = t.transform_point(&point3(1., 0., 0.));
  assert_eq!(rotated.rounded(), point3(0., 1., 0.));

  let zero = Quaternion::new(wireframe_algebra::Vector::zero());
  assert_eq!(
    Transformation::<f32>::from_quaternion(&zero),
    Err(GeometryError::Algebra(
      wireframe_algebra::AlgebraError::DivideByZero
    ))
  );
}

#[test]
fn sphere_transform() {
  let s = Sphere::new(point3(0.0f32, 0., 0.), 2.).unwrap();
  let t = Transformation::translation(1.0f32, 2., 3.);
  let moved = t.transform_sphere(&s);
  assert_eq!(*moved.center(), point3(1., 2., 3.));
  assert_eq!(moved.radius(), 2.);
}

#[test]
fn display() {
  let t = Transformation::translation(1.0f32, 2., 3.);
  assert_eq!(
    t.to_string(),
    "1.0 0.0 0.0 | 1.0\n0.0 1.0 0.0 | 2.0\n0.0 0.0 1.0 | 3.0\n0.0 0.0 0.0 | 1.0"
  );
}
