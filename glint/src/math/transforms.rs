use super::{common::FloatValueType, matrix::Matrix4x4, point::Point4, vector::Vec4};

/// Creates a new `Matrix4x4` that is a translation by `delta`.
pub fn translation<T>(delta: Vec4<T>) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    m.m[0][3] = delta.x;
    m.m[1][3] = delta.y;
    m.m[2][3] = delta.z;
    m
}

/// Creates a new `Matrix4x4` that is a scaling by `x`, `y` and `z`.
pub fn scaling<T>(x: T, y: T, z: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let mut m = Matrix4x4::identity();
    m.m[0][0] = x;
    m.m[1][1] = y;
    m.m[2][2] = z;
    m
}

/// Creates a new `Matrix4x4` that is a rotation of `degrees` around the x-axis.
pub fn rotation_x<T>(degrees: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
    Matrix4x4::new([
        [T::one(), T::zero(), T::zero(), T::zero()],
        [T::zero(), cos_theta, -sin_theta, T::zero()],
        [T::zero(), sin_theta, cos_theta, T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that is a rotation of `degrees` around the y-axis.
pub fn rotation_y<T>(degrees: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
    Matrix4x4::new([
        [cos_theta, T::zero(), sin_theta, T::zero()],
        [T::zero(), T::one(), T::zero(), T::zero()],
        [-sin_theta, T::zero(), cos_theta, T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that is a rotation of `degrees` around the z-axis.
pub fn rotation_z<T>(degrees: T) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
    Matrix4x4::new([
        [cos_theta, -sin_theta, T::zero(), T::zero()],
        [sin_theta, cos_theta, T::zero(), T::zero()],
        [T::zero(), T::zero(), T::one(), T::zero()],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}

/// Creates a new `Matrix4x4` that maps camera space to world space.
///
/// The camera sits at `eye` looking towards `lookat` down its negative z-axis with
/// `up` roughly along its positive y-axis.
pub fn camera_to_world<T>(eye: Point4<T>, lookat: Point4<T>, up: Vec4<T>) -> Matrix4x4<T>
where
    T: FloatValueType,
{
    let z = (eye - lookat).normalized();
    let x = up.cross(z).normalized();
    let y = z.cross(x);

    Matrix4x4::new([
        [x.x, y.x, z.x, eye.x],
        [x.y, y.y, z.y, eye.y],
        [x.z, y.z, z.z, eye.z],
        [T::zero(), T::zero(), T::zero(), T::one()],
    ])
}
