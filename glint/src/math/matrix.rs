use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Mul, MulAssign, Sub};

use super::{common::FloatValueType, point::Point4, tuple::Tuple4, vector::Vec4};
use crate::glint_warn;

/// Determinants smaller than this are treated as singular by [`Matrix4x4::inverted`].
pub const SINGULAR_DETERMINANT: f64 = 1e-8;

/// A row-major 4x4 `Matrix4x4`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Raw values in row-major order.
    pub m: [[T; 4]; 4],
}

impl<T> Matrix4x4<T>
where
    T: FloatValueType,
{
    /// Creates a new `Matrix4x4`.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let ret = Self { m };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new identity `Matrix4x4`.
    pub fn identity() -> Self {
        let mut ret = Self::zeros();
        for i in 0..4 {
            ret.m[i][i] = T::one();
        }
        ret
    }

    /// Creates a new `Matrix4x4` filled with zeroes.
    pub fn zeros() -> Self {
        Self {
            m: [[T::zero(); 4]; 4],
        }
    }

    /// Checks if this `Matrix4x4` contains NaNs.
    pub fn has_nans(&self) -> bool {
        self.m.iter().flatten().any(|v| v.is_nan())
    }

    /// Returns the `i`th row of this `Matrix4x4`.
    pub fn row(&self, i: usize) -> [T; 4] {
        self.m[i]
    }

    /// Returns the `i`th column of this `Matrix4x4`.
    pub fn col(&self, i: usize) -> [T; 4] {
        [self.m[0][i], self.m[1][i], self.m[2][i], self.m[3][i]]
    }

    /// Returns the transpose of this `Matrix4x4`.
    pub fn transposed(&self) -> Self {
        let mut ret = Self::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[col][row];
            }
        }
        ret
    }

    /// Calculates the determinant of a 3x3 matrix given in row-major order.
    pub fn det3x3(m: [[T; 3]; 3]) -> T {
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the 3x3 minor left after removing `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> [[T; 3]; 3] {
        let mut ret = [[T::zero(); 3]; 3];
        for (mr, r) in (0..4).filter(|&r| r != row).enumerate() {
            for (mc, c) in (0..4).filter(|&c| c != col).enumerate() {
                ret[mr][mc] = self.m[r][c];
            }
        }
        ret
    }

    /// Calculates the signed cofactor of the element at `row`, `col`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let det = Self::det3x3(self.minor(row, col));
        if (row + col) % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Calculates the determinant of this `Matrix4x4` by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, col| {
            acc + self.m[0][col] * self.cofactor(0, col)
        })
    }

    /// Returns the matrix of cofactors of this `Matrix4x4`.
    ///
    /// Its transpose is the classical adjugate.
    pub fn adjoint(&self) -> Self {
        let mut ret = Self::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.cofactor(row, col);
            }
        }
        ret
    }

    /// Returns the inverse of this `Matrix4x4`.
    ///
    /// A (near) singular matrix doesn't have a meaningful inverse. In that case a
    /// warning is logged and the determinant is taken to be 1, so the result is
    /// finite but not an inverse.
    pub fn inverted(&self) -> Self {
        let mut det = self.determinant();
        if det.abs().to_f64().unwrap_or(0.0) < SINGULAR_DETERMINANT {
            glint_warn!("Inverting a singular matrix (determinant {})", det);
            det = T::one();
        }
        self.adjoint().transposed() * (T::one() / det)
    }
}

impl<T> Default for Matrix4x4<T>
where
    T: FloatValueType,
{
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> From<Vec<T>> for Matrix4x4<T>
where
    T: FloatValueType,
{
    fn from(m: Vec<T>) -> Self {
        assert!(m.len() == 16);
        Self::new([
            [m[0], m[1], m[2], m[3]],
            [m[4], m[5], m[6], m[7]],
            [m[8], m[9], m[10], m[11]],
            [m[12], m[13], m[14], m[15]],
        ])
    }
}

impl<T> Add for Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut ret = self;
        for (row, other_row) in ret.m.iter_mut().zip(other.m.iter()) {
            for (v, o) in row.iter_mut().zip(other_row.iter()) {
                *v += *o;
            }
        }
        ret
    }
}

impl<T> Sub for Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut ret = self;
        for (row, other_row) in ret.m.iter_mut().zip(other.m.iter()) {
            for (v, o) in row.iter_mut().zip(other_row.iter()) {
                *v -= *o;
            }
        }
        ret
    }
}

impl<T> Mul<T> for Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Self;

    fn mul(self, s: T) -> Self {
        let mut ret = self;
        for v in ret.m.iter_mut().flatten() {
            *v *= s;
        }
        ret
    }
}

// By ref is about twice as fast as by value so let's just endure the syntax
impl<'a, 'b, T> Mul<&'b Matrix4x4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Matrix4x4<T>;

    fn mul(self, other: &'b Matrix4x4<T>) -> Matrix4x4<T> {
        let mut ret = Matrix4x4::zeros();
        for row in 0..4 {
            for col in 0..4 {
                ret.m[row][col] = self.m[row][0] * other.m[0][col]
                    + self.m[row][1] * other.m[1][col]
                    + self.m[row][2] * other.m[2][col]
                    + self.m[row][3] * other.m[3][col];
            }
        }
        debug_assert!(!ret.has_nans());
        ret
    }
}

// The product goes through a temporary so `a *= &a.clone()` style use can't
// read values it has already overwritten
impl<'b, T> MulAssign<&'b Matrix4x4<T>> for Matrix4x4<T>
where
    T: FloatValueType,
{
    fn mul_assign(&mut self, other: &'b Matrix4x4<T>) {
        let product = &*self * other;
        *self = product;
    }
}

impl<'a, T> Mul<Tuple4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Tuple4<T>;

    fn mul(self, t: Tuple4<T>) -> Tuple4<T> {
        let m = &self.m;
        Tuple4::new(
            m[0][0] * t.x + m[0][1] * t.y + m[0][2] * t.z + m[0][3] * t.w,
            m[1][0] * t.x + m[1][1] * t.y + m[1][2] * t.z + m[1][3] * t.w,
            m[2][0] * t.x + m[2][1] * t.y + m[2][2] * t.z + m[2][3] * t.w,
            m[3][0] * t.x + m[3][1] * t.y + m[3][2] * t.z + m[3][3] * t.w,
        )
    }
}

// Projective results are homogenized back onto w = 1
impl<'a, T> Mul<Point4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Point4<T>;

    fn mul(self, p: Point4<T>) -> Point4<T> {
        Point4::from(self * Tuple4::from(p))
    }
}

// Translation drops out since w = 0
impl<'a, T> Mul<Vec4<T>> for &'a Matrix4x4<T>
where
    T: FloatValueType,
{
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        Vec4::from(self * Tuple4::from(v))
    }
}

impl<T> AbsDiffEq for Matrix4x4<T>
where
    T: FloatValueType + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        super::common::epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T> RelativeEq for Matrix4x4<T>
where
    T: FloatValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
