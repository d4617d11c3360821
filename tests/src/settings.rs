#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use glint::{
        integrators::{IntegratorType, WhittedParams},
        math::Spectrum,
        scene::DEFAULT_BACKGROUND,
        settings::RenderSettings,
    };

    #[test]
    fn defaults() {
        let settings = RenderSettings::default();
        assert_eq!(settings.width, 300);
        assert_eq!(settings.height, 300);
        assert_eq!(
            settings.integrator,
            IntegratorType::Whitted(WhittedParams { max_depth: 4 })
        );
        assert_eq!(settings.background(), DEFAULT_BACKGROUND);
        assert_eq!(settings.ambient_fraction, None);
        assert_eq!(settings.output, None);

        assert_eq!(RenderSettings::from_yaml("{}").unwrap(), settings);
    }

    #[test]
    fn overrides() {
        let settings = RenderSettings::from_yaml(
            "width: 64\n\
             integrator: !Whitted\n  max_depth: 6\n\
             background: [0.0, 0.5, 1.0]\n\
             ambient_fraction: 0.25\n\
             output: out.exr\n",
        )
        .unwrap();
        assert_eq!(settings.width, 64);
        assert_eq!(settings.height, 300);
        assert_eq!(
            settings.integrator,
            IntegratorType::Whitted(WhittedParams { max_depth: 6 })
        );
        assert_eq!(settings.background(), Spectrum::new(0.0, 0.5, 1.0));
        assert_eq!(settings.ambient_fraction, Some(0.25));
        assert_eq!(settings.output, Some(PathBuf::from("out.exr")));
    }

    #[test]
    fn integrator_defaults() {
        let settings = RenderSettings::from_yaml("integrator: !Whitted {}\n").unwrap();
        assert_eq!(settings.integrator, IntegratorType::default());
    }

    #[test]
    fn invalid() {
        assert!(RenderSettings::from_yaml("width: -3\n").is_err());
        assert!(RenderSettings::from_yaml("integrator: !PathTracer {}\n").is_err());
        assert!(RenderSettings::load(&PathBuf::from("/definitely/not/here.yaml")).is_err());
    }
}
