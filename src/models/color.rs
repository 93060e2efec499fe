use image::Rgba;

/// Glyph fill
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Glyph outline, semi-transparent so the background still shows through the edge
pub const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 150]);

/// Cell tint drawn behind each label
pub const OVERLAY_COLOR: Rgba<u8> = Rgba([0, 0, 0, 40]);

/// Placeholder used when no background picture is available
pub const FALLBACK_BACKGROUND: Rgba<u8> = Rgba([50, 50, 50, 255]);

/// The four colors the renderer paints with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub text: Rgba<u8>,
    pub shadow: Rgba<u8>,
    pub tint: Rgba<u8>,
    pub fallback_background: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: TEXT_COLOR,
            shadow: SHADOW_COLOR,
            tint: OVERLAY_COLOR,
            fallback_background: FALLBACK_BACKGROUND,
        }
    }
}
