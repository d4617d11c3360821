#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne};

    use glint::math::Spectrum;

    #[test]
    fn new() {
        let s = Spectrum::new(0.1f32, 0.2, 0.3);
        assert_eq!(s.r, 0.1);
        assert_eq!(s.g, 0.2);
        assert_eq!(s.b, 0.3);
        assert_eq!(Spectrum::<f32>::default(), Spectrum::zeros());
        assert!(Spectrum::<f32>::zeros().is_black());
        assert!(!Spectrum::<f32>::ones().is_black());
    }

    #[test]
    fn ops() {
        let a = Spectrum::new(0.5f32, 1.0, 2.0);
        let b = Spectrum::new(2.0f32, 0.5, 0.25);
        assert_eq!(a + b, Spectrum::new(2.5, 1.5, 2.25));
        assert_eq!(a * b, Spectrum::new(1.0, 0.5, 0.5));
        assert_eq!(a * 2.0, Spectrum::new(1.0, 2.0, 4.0));
        assert_eq!(a / 2.0, Spectrum::new(0.25, 0.5, 1.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn clamped() {
        assert_eq!(
            Spectrum::new(-0.5f32, 0.5, 1.5).clamped(0.0, 1.0),
            Spectrum::new(0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn approx_eq() {
        let a = Spectrum::new(0.1f32, 0.2, 0.3);
        assert_abs_diff_eq!(a, Spectrum::new(0.100001, 0.200001, 0.300001));
        assert_abs_diff_ne!(a, Spectrum::new(0.1, 0.2, 0.31));
    }
}
