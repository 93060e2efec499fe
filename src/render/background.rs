use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{debug, warn};

use crate::config::CanvasSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundSource {
    /// Decoded from the configured picture and resized to the canvas
    Picture,
    /// Solid placeholder, the picture was missing or unreadable
    Fallback,
}

pub struct Background {
    pub image: RgbaImage,
    pub source: BackgroundSource,
}

/// Load the background picture at canvas size, or a solid `fallback` canvas
/// when it cannot be used. Never fails.
pub fn load(path: &Path, canvas: CanvasSize, fallback: Rgba<u8>) -> Background {
    if !path.exists() {
        warn!("Background image not found at {}, using a solid canvas", path.display());
        return solid(canvas, fallback);
    }

    match image::open(path) {
        Ok(picture) => {
            let picture = picture.into_rgba8();
            debug!(
                "Resizing background {}x{} -> {}x{}",
                picture.width(),
                picture.height(),
                canvas.width,
                canvas.height
            );
            // Aspect ratio is not preserved
            Background {
                image: imageops::resize(&picture, canvas.width, canvas.height, FilterType::Lanczos3),
                source: BackgroundSource::Picture,
            }
        }
        Err(e) => {
            warn!("Failed to decode background {}: {}, using a solid canvas", path.display(), e);
            solid(canvas, fallback)
        }
    }
}

fn solid(canvas: CanvasSize, color: Rgba<u8>) -> Background {
    Background {
        image: RgbaImage::from_pixel(canvas.width, canvas.height, color),
        source: BackgroundSource::Fallback,
    }
}
