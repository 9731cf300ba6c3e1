//! Small 2D/3D math toolkit: vectors, a 2D affine matrix and primitive
//! collision tests.

pub mod math;
pub use math::*;
