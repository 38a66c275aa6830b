use std::fmt::Debug;

use num_traits::{Float, NumAssign};

pub trait Two {
  fn two() -> Self;
  fn half() -> Self;
}

impl Two for f32 {
  #[inline(always)]
  fn two() -> Self {
    2.
  }
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
}

impl Two for f64 {
  #[inline(always)]
  fn two() -> Self {
    2.
  }
  #[inline(always)]
  fn half() -> Self {
    0.5
  }
}

/// The scalar types the real-number layer is defined over. Component
/// arithmetic on vectors and matrices works for any numeric type; norms,
/// inversion and trigonometry require this.
pub trait Scalar: Float + NumAssign + Two + Default + Debug + Send + Sync + 'static {
  fn by_f32(v: f32) -> Self;
}

impl Scalar for f32 {
  #[inline(always)]
  fn by_f32(v: f32) -> Self {
    v
  }
}

impl Scalar for f64 {
  #[inline(always)]
  fn by_f32(v: f32) -> Self {
    v as f64
  }
}

/// Snap a value to the nearest hundredth.
///
/// This is the single rounding boundary of the whole crate family: matrix
/// inversion output, the trigonometric terms of angle/axis rotation
/// constructors, and derived intersection points go through it so that
/// results land back on the 2-decimal grid and stay comparable with `==`.
#[inline]
pub fn round_hundredth<T: Scalar>(v: T) -> T {
  let scale = T::by_f32(100.);
  (v * scale).round() / scale
}

#[test]
fn rounding() {
  assert_eq!(round_hundredth(0.125f32), 0.13);
  assert_eq!(round_hundredth(-0.001f32), -0.0);
  assert_eq!(round_hundredth(2.0f64), 2.0);
  assert_eq!(round_hundredth(0.5f32), 0.5);
}
