use std::time::Instant;

use glint::{
    integrators::{Whitted, WhittedParams},
    lights::PointLight,
    materials::{Glossy, Material, Specular},
    math::{
        point4,
        transforms::{camera_to_world, rotation_x, rotation_y, scaling, translation},
        vec4, Matrix4x4, Spectrum,
    },
    params::DynamicSceneParameters,
    renderer::render,
    scene::Scene,
    shapes::{Geometry, Sphere, Surface, Triangle},
};

const ITERATIONS: usize = 1000000;

fn report(name: &str, elapsed_ns: u128, iterations: usize, unit: &str) {
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_iter = (elapsed_ns as f64) * 1e-3 / (iterations as f64);
    println!(
        "{:8} took {:6.1} ms total, {:0.4} us per {}",
        name, elapsed_ms, us_per_iter, unit
    );
}

fn bench_invert(name: &str, m: &Matrix4x4<f32>) {
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        m = m.inverted();
        if m.m[0][0].is_nan() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report(name, start.elapsed().as_nanos(), ITERATIONS, "invert");
}

fn bench_mul(name: &str, m: &Matrix4x4<f32>) {
    // Rotations keep the values bounded over the iterations
    let mut m = *m;
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        m = &m * &m;
        if m.m[3][3] == 0.0 {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    report(name, start.elapsed().as_nanos(), ITERATIONS, "mul");
}

fn bench_render(size: u32) {
    let glossy = Material::Glossy(Glossy::new(
        Spectrum::new(0.2, 0.1, 0.1),
        Spectrum::new(0.8, 0.3, 0.3),
        Spectrum::new(1.0, 1.0, 1.0),
        20,
    ));
    let glass = Material::Specular(Specular::new(
        1.5,
        Spectrum::new(0.8, 0.8, 0.8),
        Spectrum::new(0.2, 0.2, 0.2),
        Spectrum::zeros(),
    ));
    let scene = Scene::new(
        "bench",
        vec![
            Surface::new(
                "glass",
                glass,
                Geometry::Sphere(Sphere::new(point4(0.0, 0.0, 0.0), 1.0)),
            ),
            Surface::new(
                "red",
                glossy.clone(),
                Geometry::Sphere(Sphere::new(point4(1.5, 0.5, -2.0), 0.75)),
            ),
            Surface::new(
                "floor",
                glossy,
                Geometry::Triangle(Triangle::new(
                    point4(-10.0, -1.0, 10.0),
                    point4(10.0, -1.0, 10.0),
                    point4(0.0, -1.0, -10.0),
                )),
            ),
        ],
        vec![PointLight::new(
            "key",
            point4(5.0, 5.0, 5.0),
            Spectrum::ones(),
        )],
    );
    let mut params = DynamicSceneParameters::default();
    params.ambient_fraction = 0.2;
    let integrator = Whitted::new(WhittedParams::default());

    let start = Instant::now();
    let bytes = render(&scene, &params, &integrator, size, size);
    if bytes.len() != (size * size * 3) as usize {
        panic!("Unexpected image size");
    }
    report(
        "Render",
        start.elapsed().as_nanos(),
        (size * size) as usize,
        "pixel",
    );
}

fn main() {
    let s = scaling(2.0, 3.0, 4.0);
    let r = &rotation_x(30.0) * &rotation_y(-45.0);
    let t = translation(vec4(2.0, 3.0, 4.0));
    let c = camera_to_world(
        point4(1.0, 2.0, 5.0),
        point4(0.0, 0.0, 0.0),
        vec4(0.0, 1.0, 0.0),
    );

    bench_invert("Identity", &Matrix4x4::identity());
    bench_invert("S", &s);
    bench_invert("SR", &(&r * &s));
    bench_invert("SRT", &(&t * &(&r * &s)));
    bench_invert("Camera", &c);

    bench_mul("Mul", &r);

    bench_render(256);
}
