use std::fmt;
use std::fmt::Debug;
use std::ops::*;

use num_traits::{One, Zero};

use crate::*;

/// Fixed-size grid of scalars, row-major. Square-only operations check the
/// shape at runtime and report [`AlgebraError::NotSquare`]; dimension
/// mismatches in multiplication do not type-check at all.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

pub type Mat3<T = f32> = Matrix<T, 3, 3>;
pub type Mat4<T = f32> = Matrix<T, 4, 4>;

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
  for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
  #[inline]
  pub fn new(rows: [[T; C]; R]) -> Self {
    Self(rows)
  }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
  #[inline]
  fn from(rows: [[T; C]; R]) -> Self {
    Self(rows)
  }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
  /// Checked entry access.
  #[inline]
  pub fn at(&self, i: usize, j: usize) -> Result<T, AlgebraError> {
    if i >= R {
      return Err(AlgebraError::IndexOutOfRange {
        index: i,
        dimension: R,
      });
    }
    if j >= C {
      return Err(AlgebraError::IndexOutOfRange {
        index: j,
        dimension: C,
      });
    }
    Ok(self.0[i][j])
  }

  #[inline]
  #[must_use]
  pub fn map<F>(self, f: F) -> Self
  where
    F: Fn(T) -> T,
  {
    Self(self.0.map(|row| row.map(&f)))
  }

  #[must_use]
  pub fn transpose(&self) -> Matrix<T, C, R> {
    Matrix(std::array::from_fn(|i| {
      std::array::from_fn(|j| self.0[j][i])
    }))
  }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
  #[inline]
  #[must_use]
  pub fn zero() -> Self {
    Self([[T::zero(); C]; R])
  }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Default for Matrix<T, R, C> {
  #[inline]
  fn default() -> Self {
    Self::zero()
  }
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C>
where
  T: Zero + One + Copy,
{
  pub fn identity() -> Result<Self, AlgebraError> {
    if R != C {
      return Err(AlgebraError::NotSquare {
        rows: R,
        columns: C,
      });
    }

    let mut id = Self::zero();
    for i in 0..R {
      id.0[i][i] = T::one();
    }
    Ok(id)
  }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
  /// Whether any entry carries invalid data (NaN).
  #[inline]
  pub fn is_null(&self) -> bool {
    self.0.iter().flatten().any(|c| c.is_nan())
  }

  /// Every entry snapped to the 2-decimal grid, see [`round_hundredth`].
  #[inline]
  #[must_use]
  pub fn rounded(self) -> Self {
    self.map(round_hundredth)
  }

  /// Gauss-Jordan elimination with partial pivoting. Row operations run in
  /// lockstep on a working copy and an identity accumulator; the accumulator
  /// is the inverse once the copy is reduced. The result is snapped to the
  /// 2-decimal grid so that round trips stay comparable with `==`.
  pub fn inverse(&self) -> Result<Self, AlgebraError> {
    let mut copy = *self;
    let mut id = Self::identity()?;

    for j in 0..C {
      // pivot row: the largest remaining absolute value in this column
      let mut k = None;
      for i in j..R {
        match k {
          None if copy.0[i][j] != T::zero() => k = Some(i),
          Some(kk) if copy.0[i][j].abs() > copy.0[kk][j].abs() => k = Some(i),
          _ => {}
        }
      }
      let k = k.ok_or(AlgebraError::Singular)?;

      let pivot = copy.0[k][j];
      for l in 0..C {
        copy.0[k][l] = copy.0[k][l] / pivot;
        id.0[k][l] = id.0[k][l] / pivot;
      }

      if k != j {
        copy.0.swap(k, j);
        id.0.swap(k, j);
      }

      for i in 0..R {
        if i == j {
          continue;
        }
        let factor = copy.0[i][j];
        for l in 0..C {
          copy.0[i][l] = copy.0[i][l] - copy.0[j][l] * factor;
          id.0[i][l] = id.0[i][l] - id.0[j][l] * factor;
        }
      }
    }

    Ok(id.rounded())
  }

  /// Whether the matrix is orthogonal, `inverse() == transpose()`.
  pub fn is_ortho(&self) -> Result<bool, AlgebraError> {
    let inverse = self.inverse()?;
    for i in 0..R {
      for j in 0..C {
        if inverse.0[i][j] != self.0[j][i] {
          return Ok(false);
        }
      }
    }
    Ok(true)
  }
}

impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
  T: Add<Output = T> + Copy,
{
  type Output = Self;
  fn add(self, m: Self) -> Self {
    Self(std::array::from_fn(|i| {
      std::array::from_fn(|j| self.0[i][j] + m.0[i][j])
    }))
  }
}

impl<T, const R: usize, const C: usize> AddAssign for Matrix<T, R, C>
where
  T: Add<Output = T> + Copy,
{
  #[inline]
  fn add_assign(&mut self, m: Self) {
    *self = *self + m;
  }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
  T: Mul<Output = T> + Copy,
{
  type Output = Self;
  #[inline]
  fn mul(self, scalar: T) -> Self {
    self.map(|c| c * scalar)
  }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
  T: Mul<Output = T> + Copy,
{
  #[inline]
  fn mul_assign(&mut self, scalar: T) {
    *self = *self * scalar;
  }
}

impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>> for Matrix<T, R, C>
where
  T: Mul<Output = T> + Zero + Copy,
{
  type Output = Matrix<T, R, K>;

  fn mul(self, m: Matrix<T, C, K>) -> Matrix<T, R, K> {
    Matrix(std::array::from_fn(|i| {
      std::array::from_fn(|j| {
        (0..C).fold(T::zero(), |sum, k| sum + self.0[i][k] * m.0[k][j])
      })
    }))
  }
}

impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
  T: Mul<Output = T> + Zero + Copy,
{
  type Output = Vector<T, R>;

  fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
    Vector::new(std::array::from_fn(|i| {
      (0..C).fold(T::zero(), |sum, j| sum + self.0[i][j] * v[j])
    }))
  }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
  type Output = [T; C];
  #[inline]
  fn index(&self, i: usize) -> &[T; C] {
    &self.0[i]
  }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
  #[inline]
  fn index_mut(&mut self, i: usize) -> &mut [T; C] {
    &mut self.0[i]
  }
}

impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
  T: Debug,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    for (i, row) in self.0.iter().enumerate() {
      if i != 0 {
        writeln!(f)?;
      }
      write!(f, "(")?;
      for (j, c) in row.iter().enumerate() {
        if j != 0 {
          write!(f, ", ")?;
        }
        write!(f, "{c:?}")?;
      }
      write!(f, ")")?;
    }
    Ok(())
  }
}

#[test]
fn checked_access() {
  let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
  assert_eq!(m.at(0, 0), Ok(1));
  assert_eq!(m.at(1, 2), Ok(6));
  assert_eq!(m.at(2, 1), Ok(8));
  assert_eq!(
    m.at(3, 0),
    Err(AlgebraError::IndexOutOfRange {
      index: 3,
      dimension: 3
    })
  );
  assert_eq!(
    m.at(0, 3),
    Err(AlgebraError::IndexOutOfRange {
      index: 3,
      dimension: 3
    })
  );

  assert_eq!(m[1][0], 4);
}

#[test]
fn addition() {
  let m = Matrix::new([[1.0f32; 4]; 4]);
  let id = Mat4::identity().unwrap();
  let expected = Matrix::new([
    [2., 1., 1., 1.],
    [1., 2., 1., 1.],
    [1., 1., 2., 1.],
    [1., 1., 1., 2.],
  ]);
  assert_eq!(m + id, expected);

  let mut m = m;
  m += id;
  assert_eq!(m, expected);
}

#[test]
fn scalar_multiplication() {
  let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
  let expected = Matrix::new([[2, 4, 6], [8, 10, 12], [14, 16, 18]]);
  assert_eq!(m * 2, expected);

  let mut m = m;
  m *= 2;
  assert_eq!(m, expected);
}

#[test]
fn transpose() {
  let m = Matrix::new([[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
  let expected = Matrix::new([[0, 0, 1], [1, 0, 0], [0, 1, 0]]);
  assert_eq!(m.transpose(), expected);
  assert_eq!(m.transpose().transpose(), m);

  let rect = Matrix::new([[1, 2, 3], [4, 5, 6]]);
  assert_eq!(rect.transpose(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
}

#[test]
fn vector_multiplication() {
  let m = Matrix::new([[1, 2, 0], [4, 3, -1]]);
  let v = vec3(5, 2, 3);
  assert_eq!(m * v, vec2(9, 23));
}

#[test]
fn matrix_multiplication() {
  let m1 = Matrix::new([[1, 2, 0], [4, 3, -1]]);
  let m2 = Matrix::new([[5, 1], [2, 3], [3, 4]]);
  let expected = Matrix::new([[9, 7], [23, 9]]);
  assert_eq!(m1 * m2, expected);
}

#[test]
fn multiplication_against_cgmath() {
  let a_rows = [
    [1.0f32, 2., 3., 4.],
    [5., 6., 7., 8.],
    [9., 10., 11., 12.],
    [13., 14., 15., 16.],
  ];
  let b_rows = [
    [3.0f32, -1., 0., 2.],
    [1., 4., -2., 5.],
    [0., 2., 7., -3.],
    [6., 0., 1., 1.],
  ];
  let a = Matrix::new(a_rows);
  let b = Matrix::new(b_rows);
  let product = a * b;

  let to_cg = |rows: [[f32; 4]; 4]| {
    cgmath::Matrix4::new(
      rows[0][0], rows[1][0], rows[2][0], rows[3][0],
      rows[0][1], rows[1][1], rows[2][1], rows[3][1],
      rows[0][2], rows[1][2], rows[2][2], rows[3][2],
      rows[0][3], rows[1][3], rows[2][3], rows[3][3],
    )
  };
  let cg_product = to_cg(a_rows) * to_cg(b_rows);

  for i in 0..4 {
    for j in 0..4 {
      assert_eq!(product[i][j], cg_product[j][i]);
    }
  }
}

#[test]
fn square_only_operations() {
  assert_eq!(
    Matrix::<f32, 2, 3>::identity(),
    Err(AlgebraError::NotSquare {
      rows: 2,
      columns: 3
    })
  );
  assert_eq!(
    Matrix::<f32, 2, 3>::zero().inverse(),
    Err(AlgebraError::NotSquare {
      rows: 2,
      columns: 3
    })
  );
}

#[test]
fn inverse() {
  let m = Matrix::new([[1.0f32, 2.], [3., 4.]]);
  let inverse = m.inverse().unwrap();
  assert_eq!(inverse, Matrix::new([[-2., 1.], [1.5, -0.5]]));
  assert_eq!(m * inverse, Matrix::identity().unwrap());

  let singular = Matrix::new([[1.0f32, 2.], [2., 4.]]);
  assert_eq!(singular.inverse(), Err(AlgebraError::Singular));

  let id = Mat4::<f32>::identity().unwrap();
  assert_eq!(id.inverse().unwrap(), id);
}

#[test]
fn orthogonality() {
  let permutation = Matrix::new([[0.0f32, 1., 0.], [0., 0., 1.], [1., 0., 0.]]);
  assert_eq!(permutation.is_ortho(), Ok(true));

  let scaling = Matrix::new([[2.0f32, 0.], [0., 2.]]);
  assert_eq!(scaling.is_ortho(), Ok(false));
}

#[test]
fn null_detection() {
  assert!(!Mat4::<f32>::zero().is_null());
  let mut m = Mat4::<f32>::zero();
  m[2][1] = f32::NAN;
  assert!(m.is_null());
}

#[test]
fn display() {
  let m = Matrix::new([[1, 2], [3, 4]]);
  assert_eq!(m.to_string(), "(1, 2)\n(3, 4)");
}
