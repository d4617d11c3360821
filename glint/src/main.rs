mod cli;

use clap::Parser;
use std::{path::PathBuf, str::FromStr};

use cli::Args;
use glint::{
    expect, glint_error, glint_info,
    integrators::IntegratorType,
    output::{default_output_path, write_image},
    params::Parameter,
    renderer::Renderer,
    scene,
    settings::RenderSettings,
};

fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("glint.log")?)
        .apply()?;
    Ok(())
}

/// Splits `"Eye X=1.5"` into the parameter and its value.
fn parse_assignment(assignment: &str) -> Result<(Parameter, f32), String> {
    let (name, value) = assignment
        .split_once('=')
        .ok_or_else(|| format!("Expected NAME=VALUE, got '{}'", assignment))?;
    let param = Parameter::from_str(name.trim())
        .map_err(|_| format!("Unknown parameter '{}'", name.trim()))?;
    let value = value
        .trim()
        .parse::<f32>()
        .map_err(|why| format!("Invalid value for '{}': {}", param, why))?;
    Ok((param, value))
}

fn main() {
    let args = Args::parse();

    if let Err(why) = setup_logger(args.log_level.clone().into()) {
        panic!("{}", why);
    };

    let mut settings = match &args.settings {
        Some(path) => expect!(RenderSettings::load(path), "Loading render settings failed"),
        None => RenderSettings::default(),
    };
    if let Some(width) = args.width {
        settings.width = width;
    }
    if let Some(height) = args.height {
        settings.height = height;
    }
    if let Some(max_depth) = args.max_depth {
        let IntegratorType::Whitted(mut params) = settings.integrator;
        params.max_depth = max_depth;
        settings.integrator = IntegratorType::Whitted(params);
    }
    if args.ambient_fraction.is_some() {
        settings.ambient_fraction = args.ambient_fraction;
    }

    let (scene, mut scene_params) = expect!(scene::load(&args.scene), "Scene loading failed");
    let scene = scene.with_background(settings.background());
    if let Some(ambient_fraction) = settings.ambient_fraction {
        scene_params.set(Parameter::AmbientFraction, ambient_fraction);
    }

    let scene_name = scene.name.clone();
    let mut renderer = Renderer::new(
        scene,
        scene_params,
        settings.integrator,
        settings.width,
        settings.height,
    );

    for assignment in &args.params {
        let (param, value) = expect!(parse_assignment(assignment), "Invalid parameter");
        let stored = renderer.set_parameter(param, value);
        glint_info!("{} set to {}", param, stored);
    }

    if let Some(probe) = &args.probe {
        let (x, y) = (probe[0], probe[1]);
        if x >= settings.width || y >= settings.height {
            glint_error!(
                "Probe ({}, {}) is outside the {}x{} image",
                x,
                y,
                settings.width,
                settings.height
            );
            std::process::exit(1);
        }
        let result = renderer.probe(x, y);
        println!(
            "Pixel ({}, {}): {:?}, {} rays",
            x, y, result.li, result.ray_scene_intersections
        );
        return;
    }

    if let Some(result) = renderer.render_if_stale() {
        println!(
            "Rendered '{}' in {:.2}s with {} rays",
            scene_name, result.secs, result.ray_count
        );
    }

    let output: PathBuf = match args.output.or(settings.output) {
        Some(path) => path,
        None => expect!(
            default_output_path(&scene_name),
            "Failed to pick an output path"
        ),
    };
    if let Err(why) = write_image(renderer.film(), &output) {
        glint_error!("{}", why);
        std::process::exit(1);
    }
}
