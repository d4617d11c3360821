use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::Float;
use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Float types that can be stored in the math containers
pub trait FloatValueType:
    Float
    + FromPrimitive
    + ToPrimitive
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Debug
    + Display
{
}

// Impl for all matching types
impl<T> FloatValueType for T where
    T: Float
        + FromPrimitive
        + ToPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + Display
{
}

/// Tolerance for approximate tuple equality and for rejecting hits too close to a ray's origin.
pub const EPSILON: f32 = 1e-5;

/// [`EPSILON`] as `T`.
#[inline]
pub fn epsilon<T>() -> T
where
    T: FloatValueType,
{
    T::from_f32(EPSILON).unwrap_or_else(T::epsilon)
}
