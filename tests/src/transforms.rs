#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use glint::math::{
        point4,
        transforms::{camera_to_world, rotation_x, rotation_y, rotation_z, scaling, translation},
        vec4, Matrix4x4, Point4,
    };

    #[test]
    fn translation_scaling() {
        let t = translation(vec4(1.0f32, -2.0, 3.0));
        assert_eq!(&t * point4(1.0, 1.0, 1.0), point4(2.0, -1.0, 4.0));
        assert_eq!(&t * vec4(1.0, 1.0, 1.0), vec4(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(&t * &translation(vec4(-1.0, 2.0, -3.0)), Matrix4x4::identity());

        let s = scaling(2.0f32, 3.0, 4.0);
        assert_eq!(&s * point4(1.0, 1.0, 1.0), point4(2.0, 3.0, 4.0));
        assert_eq!(&s * vec4(1.0, -1.0, 0.5), vec4(2.0, -3.0, 2.0));
    }

    #[test]
    fn rotations() {
        // Degrees in, counter clockwise when looking down the axis
        assert_abs_diff_eq!(
            &rotation_x(90.0f32) * vec4(0.0, 1.0, 0.0),
            vec4(0.0, 0.0, 1.0)
        );
        assert_abs_diff_eq!(
            &rotation_y(90.0f32) * vec4(0.0, 0.0, 1.0),
            vec4(1.0, 0.0, 0.0)
        );
        assert_abs_diff_eq!(
            &rotation_z(90.0f32) * vec4(1.0, 0.0, 0.0),
            vec4(0.0, 1.0, 0.0)
        );
        assert_abs_diff_eq!(
            &rotation_z(180.0f32) * point4(1.0, 2.0, 3.0),
            point4(-1.0, -2.0, 3.0)
        );
        // Rotations are orthonormal
        let r = &rotation_x(30.0f32) * &(&rotation_y(-45.0) * &rotation_z(60.0));
        assert_abs_diff_eq!(r.inverted(), r.transposed(), epsilon = 1e-5);
    }

    #[test]
    fn camera_to_world_basis() {
        let eye = point4(0.0f32, 0.0, 5.0);
        let m = camera_to_world(eye, Point4::zeros(), vec4(0.0, 1.0, 0.0));
        // Looking down -z from +z is just a translation
        assert_abs_diff_eq!(m, translation(vec4(0.0, 0.0, 5.0)));

        let eye = point4(3.0f32, 0.0, 0.0);
        let m = camera_to_world(eye, Point4::zeros(), vec4(0.0, 1.0, 0.0));
        assert_eq!(m.col(3), [3.0, 0.0, 0.0, 1.0]);
        // Camera forward maps towards the look-at point
        assert_abs_diff_eq!(&m * vec4(0.0, 0.0, -1.0), vec4(-1.0, 0.0, 0.0));
        assert_abs_diff_eq!(&m * vec4(0.0, 1.0, 0.0), vec4(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(&m * vec4(1.0, 0.0, 0.0), vec4(0.0, 0.0, -1.0));
        assert_abs_diff_eq!(&m * point4(0.0, 0.0, -3.0), Point4::zeros());
    }

    #[test]
    fn camera_to_world_orthonormal() {
        let m = camera_to_world(
            point4(1.0f32, 2.0, 3.0),
            point4(-2.0, 0.5, 1.0),
            vec4(0.1, 1.0, 0.0),
        );
        let x = vec4(m.m[0][0], m.m[1][0], m.m[2][0]);
        let y = vec4(m.m[0][1], m.m[1][1], m.m[2][1]);
        let z = vec4(m.m[0][2], m.m[1][2], m.m[2][2]);
        assert_abs_diff_eq!(x.len(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(y.len(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(z.len(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(x.dot(y), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(y.dot(z), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(x.cross(y), z, epsilon = 1e-5);
    }
}
