#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use glint::{
        camera::{Camera, CameraParameters, ClipWindow},
        math::{point4, vec4, Matrix4x4},
    };

    #[test]
    fn defaults() {
        let clip = ClipWindow::default();
        assert_eq!(
            (clip.left, clip.right, clip.bottom, clip.top, clip.near),
            (-1.0, 1.0, -1.0, 1.0, 2.0)
        );

        let params = CameraParameters::default();
        assert_eq!(params.eye, point4(0.0, 0.0, 5.0));
        assert_eq!(params.lookat, point4(0.0, 0.0, 0.0));
        assert_eq!(params.up, vec4(0.0, 1.0, 0.0));
    }

    #[test]
    fn default_basis() {
        let camera = Camera::new(&CameraParameters::default(), 4, 4);
        let expected = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 5.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_abs_diff_eq!(*camera.camera_to_world(), expected);
        assert_eq!(camera.eye(), point4(0.0, 0.0, 5.0));
    }

    #[test]
    fn center_ray() {
        let camera = Camera::new(&CameraParameters::default(), 3, 3);
        let ray = camera.ray(1, 1);
        assert_eq!(ray.o, point4(0.0, 0.0, 5.0));
        assert_abs_diff_eq!(ray.d, vec4(0.0, 0.0, -1.0));
    }

    #[test]
    fn pixel_centers() {
        let (w, h) = (4, 2);
        let camera = Camera::new(&CameraParameters::default(), w, h);

        // Bottom left pixel hits the window half a pixel in from the corner
        let ray = camera.ray(0, 0);
        let on_window = ray.o + ray.d * (ray.d.z.recip() * -2.0);
        assert_abs_diff_eq!(
            on_window,
            point4(-1.0 + 1.0 / w as f32, -1.0 + 1.0 / h as f32, 3.0)
        );

        // Top right
        let ray = camera.ray(w - 1, h - 1);
        let on_window = ray.o + ray.d * (ray.d.z.recip() * -2.0);
        assert_abs_diff_eq!(
            on_window,
            point4(1.0 - 1.0 / w as f32, 1.0 - 1.0 / h as f32, 3.0)
        );

        // Rays are normalized
        for (x, y) in [(0, 0), (1, 0), (3, 1)] {
            assert_abs_diff_eq!(camera.ray(x, y).d.len(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn looking_down_x() {
        let params = CameraParameters {
            eye: point4(5.0, 0.0, 0.0),
            lookat: point4(0.0, 0.0, 0.0),
            up: vec4(0.0, 1.0, 0.0),
            clip: ClipWindow::default(),
        };
        let camera = Camera::new(&params, 1, 1);
        let ray = camera.ray(0, 0);
        assert_abs_diff_eq!(ray.d, vec4(-1.0, 0.0, 0.0));

        // Right side of the window is towards -z when looking down -x with +y up
        let camera = Camera::new(&params, 2, 1);
        assert!(camera.ray(1, 0).d.z < 0.0);
        assert!(camera.ray(0, 0).d.z > 0.0);
    }

    #[test]
    fn asymmetric_window() {
        let params = CameraParameters {
            clip: ClipWindow {
                left: 0.0,
                right: 2.0,
                bottom: 0.0,
                top: 2.0,
                near: 1.0,
            },
            ..CameraParameters::default()
        };
        let camera = Camera::new(&params, 1, 1);
        // Single pixel centered on the window at (1, 1, -1) in camera space
        assert_abs_diff_eq!(camera.ray(0, 0).d, vec4(1.0, 1.0, -1.0).normalized());
    }
}
