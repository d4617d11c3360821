use std::{collections::HashMap, path::Path, str::FromStr, time::Instant};

use super::{
    lexer::{FileLocation, Lexer, LexerError},
    Scene,
};
use crate::{
    lights::PointLight,
    materials::{Glossy, Material, MaterialKind, Specular},
    math::{Point4, Spectrum, Vec4},
    params::DynamicSceneParameters,
    shapes::{Geometry, Sphere, Surface, Triangle},
    glint_debug, glint_info, glint_warn,
};

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Lexer(LexerError),
    Content {
        message: String,
        location: FileLocation,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(why) => write!(f, "IO error: {}", why),
            LoadError::Lexer(why) => write!(f, "{}", why),
            LoadError::Content { message, location } => write!(f, "{}: {}", location, message),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(why) => Some(why),
            LoadError::Lexer(why) => Some(why),
            LoadError::Content { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(why: std::io::Error) -> Self {
        LoadError::Io(why)
    }
}

impl From<LexerError> for LoadError {
    fn from(why: LexerError) -> Self {
        LoadError::Lexer(why)
    }
}

/// Loads the scene at `path`.
///
/// Also returns the camera and ambient settings the scene was authored with.
pub fn load(path: &Path) -> Result<(Scene, DynamicSceneParameters), LoadError> {
    let load_start = Instant::now();

    let input = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map_or_else(|| String::from("scene"), |s| s.to_string_lossy().into_owned());

    let ret = parse(&name, &input)?;

    glint_info!(
        "{}: Loading took {:.2}s",
        path.display(),
        load_start.elapsed().as_secs_f32()
    );

    Ok(ret)
}

/// Parses a scene from `input`. `name` is only used for the returned [`Scene`].
pub fn parse(name: &str, input: &str) -> Result<(Scene, DynamicSceneParameters), LoadError> {
    let mut lexer = Lexer::new(input);

    let mut params = DynamicSceneParameters::default();
    let mut materials: HashMap<String, Material> = HashMap::new();
    let mut surfaces = Vec::new();
    let mut lights = Vec::new();

    macro_rules! get_spectrum {
        () => {{
            let r = lexer.next_number()?;
            let g = lexer.next_number()?;
            let b = lexer.next_number()?;
            Spectrum::new(r, g, b)
        }};
    }

    macro_rules! get_point {
        () => {{
            let x = lexer.next_number()?;
            let y = lexer.next_number()?;
            let z = lexer.next_number()?;
            Point4::new(x, y, z)
        }};
    }

    // Labels in front of values are only there for human readers
    macro_rules! skip_label {
        () => {
            lexer.next_token()?;
        };
    }

    macro_rules! get_count {
        () => {
            lexer.next_number()?.max(0.0) as usize
        };
    }

    macro_rules! find_material {
        ($surface:expr) => {{
            let material_name = lexer.next_string()?;
            match materials.get(&material_name) {
                Some(m) => m.clone(),
                None => {
                    glint_warn!(
                        "{}: Surface '{}' uses unknown material '{}', using the default",
                        lexer.previous_token_location(),
                        $surface,
                        material_name
                    );
                    Material::default()
                }
            }
        }};
    }

    while !lexer.at_end() {
        let keyword = lexer.next_string()?;
        let keyword_location = lexer.previous_token_location();
        match keyword.as_str() {
            "#materials" => {
                // Materials are looked up by name so the count isn't needed
                lexer.next_number()?;
            }
            "#lights" => lights.reserve(get_count!()),
            "#objects" => surfaces.reserve(get_count!()),
            "light" => {
                let light_name = lexer.next_string()?;
                lexer.expect("color")?;
                let color = get_spectrum!();
                lexer.expect("position")?;
                let p = get_point!();
                lights.push(PointLight::new(&light_name, p, color));
            }
            "camera_eye" => params.camera.eye = get_point!(),
            "camera_lookat" => params.camera.lookat = get_point!(),
            "camera_vup" => {
                let p = get_point!();
                params.camera.up = Vec4::new(p.x, p.y, p.z);
            }
            "camera_clip" => {
                let clip = &mut params.camera.clip;
                clip.left = lexer.next_number()?;
                clip.right = lexer.next_number()?;
                clip.bottom = lexer.next_number()?;
                clip.top = lexer.next_number()?;
                clip.near = lexer.next_number()?;
            }
            "material" => {
                let material_name = lexer.next_string()?;
                skip_label!();
                let material_type = lexer.next_string()?;
                let kind = MaterialKind::from_str(&material_type).map_err(|_| {
                    LoadError::Content {
                        message: format!("Unknown material type '{}'", material_type),
                        location: lexer.previous_token_location(),
                    }
                })?;

                let material = match kind {
                    MaterialKind::Glossy => {
                        skip_label!();
                        let ambient = get_spectrum!();
                        skip_label!();
                        let diffuse = get_spectrum!();
                        skip_label!();
                        let specular = get_spectrum!();
                        skip_label!();
                        let shininess = lexer.next_number()?.max(0.0) as u32;
                        Material::Glossy(Glossy::new(ambient, diffuse, specular, shininess))
                    }
                    MaterialKind::Specular => {
                        skip_label!();
                        let refraction_index = lexer.next_number()?;
                        skip_label!();
                        let transmission = get_spectrum!();
                        skip_label!();
                        let reflection = get_spectrum!();
                        skip_label!();
                        let color = get_spectrum!();
                        Material::Specular(Specular::new(
                            refraction_index,
                            transmission,
                            reflection,
                            color,
                        ))
                    }
                };

                glint_debug!("Material '{}': {:?}", material_name, material);
                if materials.insert(material_name.clone(), material).is_some() {
                    glint_warn!(
                        "{}: Material '{}' redefined",
                        keyword_location,
                        material_name
                    );
                }
            }
            "sphere" => {
                let surface_name = lexer.next_string()?;
                skip_label!();
                let center = get_point!();
                skip_label!();
                let radius = lexer.next_number()?;
                skip_label!();
                let material = find_material!(surface_name);
                surfaces.push(Surface::new(
                    &surface_name,
                    material,
                    Geometry::Sphere(Sphere::new(center, radius)),
                ));
            }
            "triangle" => {
                let surface_name = lexer.next_string()?;
                skip_label!();
                let v0 = get_point!();
                skip_label!();
                let v1 = get_point!();
                skip_label!();
                let v2 = get_point!();
                skip_label!();
                let material = find_material!(surface_name);
                surfaces.push(Surface::new(
                    &surface_name,
                    material,
                    Geometry::Triangle(Triangle::new(v0, v1, v2)),
                ));
            }
            _ => {
                return Err(LoadError::Content {
                    message: format!("Unknown keyword '{}'", keyword),
                    location: keyword_location,
                });
            }
        }
    }

    glint_info!(
        "{}: {} surfaces, {} lights, {} materials",
        name,
        surfaces.len(),
        lights.len(),
        materials.len()
    );

    Ok((Scene::new(name, surfaces, lights), params))
}
