use image::{Rgba, RgbaImage};

use super::mask::CoverageMask;
use crate::config::CanvasSize;
use crate::layout::InsetRect;

/// Fully transparent drawing surface the size of the canvas
pub fn transparent(canvas: CanvasSize) -> RgbaImage {
    RgbaImage::from_pixel(canvas.width, canvas.height, Rgba([0, 0, 0, 0]))
}

/// Fill an inclusive rectangle, replacing whatever was there
pub fn fill_rect(overlay: &mut RgbaImage, rect: InsetRect, color: Rgba<u8>) {
    if overlay.width() == 0 || overlay.height() == 0 {
        return;
    }

    let right = rect.right.min(overlay.width() - 1);
    let bottom = rect.bottom.min(overlay.height() - 1);
    for y in rect.top..=bottom {
        for x in rect.left..=right {
            overlay.put_pixel(x, y, color);
        }
    }
}

/// Paint `color` through a coverage mask. Ink replaces the existing pixel in
/// proportion to coverage, alpha included: `dest = dest * (1 - m) + ink * m`.
pub fn paint_mask(overlay: &mut RgbaImage, mask: &CoverageMask, color: Rgba<u8>) {
    let (width, height) = (overlay.width() as i32, overlay.height() as i32);

    for (x, y, coverage) in mask.pixels() {
        if x < 0 || y < 0 || x >= width || y >= height {
            continue;
        }

        let dest = overlay.get_pixel_mut(x as u32, y as u32);
        let m = coverage as u32;
        for (out, ink) in dest.0.iter_mut().zip(color.0) {
            *out = ((*out as u32 * (255 - m) + ink as u32 * m + 127) / 255) as u8;
        }
    }
}
