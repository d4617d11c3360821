#[cfg(test)]
mod tests {
    use std::panic;

    use glint::{
        hit::{Hit, HitList},
        materials::Material,
        math::{point4, vec4, Ray},
        scene::Scene,
        shapes::{Geometry, Sphere, Surface},
    };

    fn ball(name: &str, z: f32) -> Surface {
        Surface::new(
            name,
            Material::default(),
            Geometry::Sphere(Sphere::new(point4(0.0, 0.0, z), 0.5)),
        )
    }

    #[test]
    fn nearest() {
        let surfaces = [ball("a", 0.0), ball("b", 1.0), ball("c", 2.0)];
        let mut hits = HitList::new();
        assert!(hits.is_empty());
        for (surface, dist) in surfaces.iter().zip([7.0, 3.0, 5.0]) {
            hits.add(Hit {
                p: point4(0.0, 0.0, 0.0),
                n: vec4(0.0, 0.0, 1.0),
                dist,
                surface,
            });
        }
        assert_eq!(hits.len(), 3);
        assert_eq!(hits.nearest().dist, 3.0);
        assert_eq!(hits.nearest().surface.name, "b");
        hits.clear();
        assert!(hits.is_empty());
    }

    #[test]
    fn nearest_tie_keeps_first() {
        let surfaces = [ball("first", 0.0), ball("second", 0.0)];
        let mut hits = HitList::with_capacity(2);
        for surface in &surfaces {
            hits.add(Hit {
                p: point4(0.0, 0.0, 0.0),
                n: vec4(0.0, 0.0, 1.0),
                dist: 1.0,
                surface,
            });
        }
        assert_eq!(hits.into_nearest().surface.name, "first");
    }

    #[test]
    fn nearest_empty_panics() {
        let result = panic::catch_unwind(|| {
            let hits = HitList::new();
            hits.nearest().dist
        });
        assert!(result.is_err());
    }

    #[test]
    fn scene_first_hit() {
        // Added out of order to make sure the scan doesn't just take the first one
        let scene = Scene::new(
            "balls",
            vec![ball("far", -4.0), ball("near", 2.0), ball("mid", 0.0)],
            Vec::new(),
        );
        let ray = Ray::new(point4(0.0, 0.0, 5.0), vec4(0.0, 0.0, -1.0));

        assert_eq!(scene.hits(&ray).len(), 3);
        let hit = scene.first_hit(&ray).unwrap();
        assert_eq!(hit.surface.name, "near");
        assert!((hit.dist - 2.5).abs() < 1e-5);

        let ray = Ray::new(point4(0.0, 0.0, 5.0), vec4(0.0, 0.0, 1.0));
        assert!(scene.first_hit(&ray).is_none());
    }
}
