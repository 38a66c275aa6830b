//! Fixed-dimension linear algebra for the wireframe renderer core.
//!
//! Everything here is a plain value type: vectors and matrices generic over
//! scalar type and dimension, and quaternions for rotation. Fallible
//! operations report through [`AlgebraError`] instead of panicking, and
//! equality is exact component-wise comparison throughout.

mod angle;
mod error;
mod mat;
mod quat;
mod scalar;
mod vec;

pub use angle::*;
pub use error::*;
pub use mat::*;
pub use quat::*;
pub use scalar::*;
pub use vec::*;
