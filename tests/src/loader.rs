#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    use glint::{
        materials::{Glossy, Material, Specular},
        math::{point4, vec4, Spectrum},
        scene::{load, parse, FileLocation, LexerErrorType, LoadError},
        shapes::Geometry,
    };

    const SCENE: &str = "\
#materials 2
material red type phong
    ambient 0.1 0 0 diffuse 0.8 0 0 specular 1 1 1 shininess 32
material glass type Specular
    index 1.5 transmission 0.9 0.9 0.9 reflection 0.1 0.1 0.1 color 0 0 0.05

#lights 2
light key color 1 1 1 position 5 5 5
light fill color 0.2 0.2 0.3 position -5 1 2

camera_eye 0 1 6
camera_lookat 0 0 -1
camera_vup 0 1 0
camera_clip -0.5 0.5 -0.5 0.5 1.5

#objects 3
sphere ball center 0 0 -1 radius 0.75 material glass
sphere mystery center 2 0 -1 radius 0.5 material chrome
triangle floor v0 -10 -1 10 v1 10 -1 10 v2 0 -1 -10 material red
";

    #[test]
    fn full_scene() {
        let (scene, params) = parse("test", SCENE).unwrap();
        assert_eq!(scene.name, "test");

        assert_eq!(scene.lights.len(), 2);
        assert_eq!(scene.lights[0].name, "key");
        assert_eq!(scene.lights[0].p, point4(5.0, 5.0, 5.0));
        assert_eq!(scene.lights[1].color, Spectrum::new(0.2, 0.2, 0.3));

        assert_eq!(params.camera.eye, point4(0.0, 1.0, 6.0));
        assert_eq!(params.camera.lookat, point4(0.0, 0.0, -1.0));
        assert_eq!(params.camera.up, vec4(0.0, 1.0, 0.0));
        let clip = params.camera.clip;
        assert_eq!(
            (clip.left, clip.right, clip.bottom, clip.top, clip.near),
            (-0.5, 0.5, -0.5, 0.5, 1.5)
        );
        assert_eq!(params.ambient_fraction, 0.0);

        assert_eq!(scene.surfaces.len(), 3);

        let ball = &scene.surfaces[0];
        assert_eq!(ball.name, "ball");
        match &ball.geometry {
            Geometry::Sphere(s) => {
                assert_eq!(s.center(), point4(0.0, 0.0, -1.0));
                assert_eq!(s.radius(), 0.75);
            }
            Geometry::Triangle(_) => panic!("Expected a sphere"),
        }
        assert_eq!(
            ball.material,
            Material::Specular(Specular::new(
                1.5,
                Spectrum::new(0.9, 0.9, 0.9),
                Spectrum::new(0.1, 0.1, 0.1),
                Spectrum::new(0.0, 0.0, 0.05),
            ))
        );

        // Unknown material falls back to the default
        assert_eq!(scene.surfaces[1].material, Material::default());

        let floor = &scene.surfaces[2];
        match &floor.geometry {
            Geometry::Triangle(t) => {
                assert_eq!(t.vertices()[2], point4(0.0, -1.0, -10.0));
                assert_abs_diff_eq!(t.normal(), vec4(0.0, 1.0, 0.0));
            }
            Geometry::Sphere(_) => panic!("Expected a triangle"),
        }
        assert_eq!(
            floor.material,
            Material::Glossy(Glossy::new(
                Spectrum::new(0.1, 0.0, 0.0),
                Spectrum::new(0.8, 0.0, 0.0),
                Spectrum::new(1.0, 1.0, 1.0),
                32
            ))
        );
    }

    #[test]
    fn empty_scene() {
        let (scene, params) = parse("empty", "  \n").unwrap();
        assert!(scene.surfaces.is_empty());
        assert!(scene.lights.is_empty());
        assert_eq!(params, Default::default());
    }

    #[test]
    fn case_insensitive_names() {
        let (scene, _) = parse(
            "case",
            "material Shiny type PHONG ambient 0 0 0 diffuse 1 1 1 specular 0 0 0 shininess 1\n\
             sphere s center 0 0 0 radius 1 material SHINY",
        )
        .unwrap();
        assert!(matches!(scene.surfaces[0].material, Material::Glossy(_)));
        assert_ne!(scene.surfaces[0].material, Material::default());
    }

    #[test]
    fn unknown_keyword() {
        match parse("bad", "#lights 0\n  cone c center 0 0 0") {
            Err(LoadError::Content { message, location }) => {
                assert!(message.contains("cone"));
                assert_eq!(location, FileLocation { line: 2, column: 3 });
            }
            _ => panic!("Expected a content error"),
        }
    }

    #[test]
    fn unknown_material_type() {
        match parse("bad", "material m type lambert diffuse 1 1 1") {
            Err(LoadError::Content { message, location }) => {
                assert!(message.contains("lambert"));
                assert_eq!(location, FileLocation { line: 1, column: 17 });
            }
            _ => panic!("Expected a content error"),
        }
    }

    #[test]
    fn invalid_number() {
        match parse("bad", "sphere s center 0 x 0 radius 1 material m") {
            Err(LoadError::Lexer(why)) => {
                assert_eq!(why.error_type, LexerErrorType::InvalidNumber("x".into()));
                assert_eq!(why.location, FileLocation { line: 1, column: 19 });
            }
            _ => panic!("Expected a lexer error"),
        }
    }

    #[test]
    fn light_labels() {
        match parse("bad", "light l colour 1 1 1 position 0 0 0") {
            Err(LoadError::Lexer(why)) => assert_eq!(
                why.error_type,
                LexerErrorType::UnexpectedToken {
                    expected: "color".into(),
                    found: "colour".into()
                }
            ),
            _ => panic!("Expected a lexer error"),
        }
    }

    #[test]
    fn truncated() {
        match parse("bad", "sphere s center 0 0 0 radius") {
            Err(LoadError::Lexer(why)) => {
                assert_eq!(why.error_type, LexerErrorType::EndOfInput)
            }
            _ => panic!("Expected a lexer error"),
        }
    }

    #[test]
    fn load_file() {
        let path = std::env::temp_dir().join(format!("glint_load_{}.ray", std::process::id()));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(SCENE.as_bytes()).unwrap();
        }
        let (scene, _) = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(scene.name, format!("glint_load_{}", std::process::id()));
        assert_eq!(scene.surfaces.len(), 3);

        let missing = std::env::temp_dir().join("glint_definitely_missing.ray");
        assert!(matches!(load(&missing), Err(LoadError::Io(_))));
    }
}
