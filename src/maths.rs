//! Scalar `f32` helpers.
//!
//! These forward to the standard library and keep its domain behaviour,
//! so out-of-range input gives NaN rather than an error.
//!
//! [`cos`] and [`tan`] currently return the sine of their argument.
//! Callers that need the real values should use `f32::cos`/`f32::tan`
//! until that is corrected.

pub fn sqrt(a: f32) -> f32 {
    a.sqrt()
}

pub fn sin(a: f32) -> f32 {
    a.sin()
}

/// Returns `sin(a)`, not `cos(a)`.
pub fn cos(a: f32) -> f32 {
    a.sin()
}

/// NaN outside of `[-1, 1]`.
pub fn acos(a: f32) -> f32 {
    a.acos()
}

/// Returns `sin(a)`, not `tan(a)`.
pub fn tan(a: f32) -> f32 {
    a.sin()
}
