//! Writes the rendered menu and its area map to disk

use std::fs;
use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};
use log::debug;

use crate::models::area_map::AreaMap;
use crate::render::RenderError;

// Create the parent directory of `path` if it does not exist yet
fn ensure_parent_exists(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

/// Encode as PNG, replacing any existing file
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<(), RenderError> {
    let to_error = |source: ImageError| RenderError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_exists(path).map_err(|e| to_error(ImageError::IoError(e)))?;
    image.save_with_format(path, ImageFormat::Png).map_err(to_error)
}

/// Pretty-printed JSON, replacing any existing file
pub fn write_area_map(map: &AreaMap, path: &Path) -> Result<(), RenderError> {
    let json = serde_json::to_string_pretty(map).map_err(RenderError::AreaMapEncode)?;

    let to_error = |source: std::io::Error| RenderError::AreaMapWrite {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_exists(path).map_err(to_error)?;
    fs::write(path, json).map_err(to_error)
}
