#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::str::FromStr;
    use strum::{IntoEnumIterator, VariantNames};

    use glint::{
        math::point4,
        params::{DynamicSceneParameters, Parameter},
    };

    #[test]
    fn names() {
        assert_eq!(Parameter::EyeX.to_string(), "Eye X");
        assert_eq!(Parameter::AmbientFraction.to_string(), "Ambient Fraction");
        assert_eq!(Parameter::from_str("clip n").unwrap(), Parameter::ClipN);
        assert_eq!(Parameter::from_str("Vup Z").unwrap(), Parameter::VupZ);
        assert!(Parameter::from_str("Eye W").is_err());

        assert_eq!(Parameter::iter().count(), 15);
        assert_eq!(Parameter::VARIANTS.len(), 15);
        assert_eq!(Parameter::VARIANTS[0], "Eye X");
    }

    #[test]
    fn ranges() {
        assert_eq!(Parameter::AmbientFraction.range(), (0.0, 1.0));
        assert_eq!(Parameter::AmbientFraction.step(), 0.1);
        for p in Parameter::iter().filter(|&p| p != Parameter::AmbientFraction) {
            assert_eq!(p.range(), (-10.0, 10.0));
            assert_eq!(p.step(), 0.2);
        }
    }

    #[test]
    fn get_set() {
        let mut params = DynamicSceneParameters::default();
        assert_eq!(params.ambient_fraction, 0.0);
        assert_eq!(params.get(Parameter::EyeZ), 5.0);
        assert_eq!(params.get(Parameter::ClipN), 2.0);
        assert_eq!(params.get(Parameter::VupY), 1.0);

        assert_eq!(params.set(Parameter::EyeX, 1.5), 1.5);
        assert_eq!(params.set(Parameter::RefY, -2.0), -2.0);
        assert_eq!(params.camera.eye, point4(1.5, 0.0, 5.0));
        assert_eq!(params.camera.lookat, point4(0.0, -2.0, 0.0));

        for p in Parameter::iter() {
            let (min, max) = p.range();
            assert_eq!(params.set(p, max + 100.0), max);
            assert_eq!(params.get(p), max);
            assert_eq!(params.set(p, min - 100.0), min);
            assert_eq!(params.get(p), min);
        }
    }

    #[test]
    fn stepping() {
        let mut params = DynamicSceneParameters::default();
        assert_abs_diff_eq!(params.step_up(Parameter::AmbientFraction), 0.1, epsilon = 1e-5);
        assert_abs_diff_eq!(params.step_up(Parameter::AmbientFraction), 0.2, epsilon = 1e-5);
        assert_abs_diff_eq!(params.step_down(Parameter::AmbientFraction), 0.1, epsilon = 1e-5);
        assert_abs_diff_eq!(params.step_down(Parameter::AmbientFraction), 0.0, epsilon = 1e-5);
        // Clamped at the bottom of the range
        assert_eq!(params.step_down(Parameter::AmbientFraction), 0.0);

        assert_abs_diff_eq!(params.step_up(Parameter::EyeZ), 5.2, epsilon = 1e-5);
        assert_abs_diff_eq!(params.step_down(Parameter::ClipL), -1.2, epsilon = 1e-5);

        params.set(Parameter::EyeY, 9.9);
        assert_eq!(params.step_up(Parameter::EyeY), 10.0);
    }
}
