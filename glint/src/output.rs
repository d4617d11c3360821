use chrono::{Datelike, Timelike};
use std::path::{Path, PathBuf};

use crate::{film::Film, glint_info};

/// Returns a timestamped PNG path for `scene_name` in the current working directory.
pub fn default_output_path(scene_name: &str) -> Result<PathBuf, String> {
    match std::env::current_dir() {
        Ok(mut path) => {
            let now = chrono::Local::now();
            let timestamp = format!(
                "{:04}{:02}{:02}_{:02}{:02}{:02}",
                now.year(),
                now.month(),
                now.day(),
                now.hour(),
                now.minute(),
                now.second()
            );
            path.push(format!("{}_{}.png", scene_name, timestamp));

            Ok(path)
        }
        Err(why) => Err(format!(
            "Error getting current working directory: {:?}",
            why
        )),
    }
}

/// Writes `film` to `path`. EXR files get linear floats, everything else goes
/// through `image` as clamped 8-bit RGB.
pub fn write_image(film: &Film, path: &Path) -> Result<(), String> {
    let is_exr = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("exr"));
    if is_exr {
        write_exr(film, path)
    } else {
        write_png(film, path)
    }
}

pub fn write_png(film: &Film, path: &Path) -> Result<(), String> {
    glint_info!("Writing out image");
    let image = image::RgbImage::from_raw(film.width(), film.height(), film.to_rgb8())
        .ok_or_else(|| String::from("Film size doesn't match its pixels"))?;
    match image.save(path) {
        Ok(_) => {
            glint_info!("Image written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing image to '{}': {}",
            path.to_string_lossy(),
            why
        )),
    }
}

pub fn write_exr(film: &Film, path: &Path) -> Result<(), String> {
    glint_info!("Writing out EXR");
    let width = film.width() as usize;
    let pixels = film.to_rgb32f();
    match exr::prelude::write_rgb_file(path, width, film.height() as usize, |x, y| {
        pixels[y * width + x]
    }) {
        Ok(_) => {
            glint_info!("EXR written to '{}'", path.to_string_lossy());
            Ok(())
        }
        Err(why) => Err(format!(
            "Error writing EXR to '{}': {:?}",
            path.to_string_lossy(),
            why
        )),
    }
}
