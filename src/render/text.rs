use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use embedded_graphics::geometry::{Dimensions, Point};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::Drawable;
use image::{Rgba, RgbaImage};

use super::fonts::FontFace;
use super::mask::CoverageMask;
use super::overlay;

/// How one label is drawn: its size, fill and outline
#[derive(Clone, Copy, Debug)]
pub struct LabelPaint {
    pub size: f32,
    pub fill: Rgba<u8>,
    pub stroke: Rgba<u8>,
    pub stroke_width: u32,
}

/// Draw `text` so the middle of its box lands on `anchor`, outline first, fill on top
pub fn draw_label(
    overlay: &mut RgbaImage,
    face: &FontFace,
    text: &str,
    anchor: (i32, i32),
    paint: &LabelPaint,
) {
    let fill = rasterize(face, text, paint.size, anchor, paint.stroke_width);

    if paint.stroke_width > 0 {
        let outline = fill.dilate(paint.stroke_width);
        overlay::paint_mask(overlay, &outline, paint.stroke);
    }
    overlay::paint_mask(overlay, &fill, paint.fill);
}

/// Glyph coverage for `text` anchored middle-middle at `anchor`, padded by `pad`
/// pixels on every side so an outline of that width still fits
pub fn rasterize(face: &FontFace, text: &str, size: f32, anchor: (i32, i32), pad: u32) -> CoverageMask {
    match face {
        FontFace::Outline { font, .. } => rasterize_outline(font, text, size, anchor, pad),
        // Bitmap font has a single size
        FontFace::Builtin(font) => rasterize_builtin(*font, text, anchor, pad),
    }
}

/// Scale at which one em spans `size` pixels
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) => PxScale::from(size * font.height_unscaled() / units_per_em),
        None => PxScale::from(size),
    }
}

fn rasterize_outline(
    font: &FontVec,
    text: &str,
    size: f32,
    anchor: (i32, i32),
    pad: u32,
) -> CoverageMask {
    let scale = em_scale(font, size);
    let scaled = font.as_scaled(scale);

    // Lay out along the advance, with kerning, starting at x = 0
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    let mut positioned = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        positioned.push((id, caret));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    // Horizontal middle of the advance, vertical middle between ascender and descender
    let origin_x = anchor.0 as f32 - caret / 2.0;
    let baseline = anchor.1 as f32 - (scaled.ascent() - scaled.descent()) / 2.0 + scaled.ascent();

    let outlined: Vec<OutlinedGlyph> = positioned
        .into_iter()
        .filter_map(|(id, x)| {
            font.outline_glyph(id.with_scale_and_position(scale, point(origin_x + x, baseline)))
        })
        .collect();

    let bounds = outlined.iter().map(|glyph| glyph.px_bounds()).reduce(|a, b| Rect {
        min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
        max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
    });

    let Some(bounds) = bounds else {
        // Nothing visible (empty text or only spaces)
        return CoverageMask::new(anchor.0, anchor.1, 0, 0);
    };

    let pad = pad as i32;
    let mut mask = CoverageMask::new(
        bounds.min.x as i32 - pad,
        bounds.min.y as i32 - pad,
        (bounds.max.x - bounds.min.x).ceil() as u32 + 2 * pad as u32,
        (bounds.max.y - bounds.min.y).ceil() as u32 + 2 * pad as u32,
    );

    for glyph in &outlined {
        let glyph_bounds = glyph.px_bounds();
        let left = glyph_bounds.min.x as i32;
        let top = glyph_bounds.min.y as i32;
        glyph.draw(|x, y, coverage| {
            let value = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            mask.add(left + x as i32, top + y as i32, value);
        });
    }

    mask
}

fn rasterize_builtin(
    font: &'static MonoFont<'static>,
    text: &str,
    anchor: (i32, i32),
    pad: u32,
) -> CoverageMask {
    let character_style = MonoTextStyle::new(font, BinaryColor::On);
    let text_style = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();

    let label = Text::with_text_style(
        text,
        Point::new(anchor.0, anchor.1),
        character_style,
        text_style,
    );

    let bbox = label.bounding_box();
    let pad_i = pad as i32;
    let mut mask = CoverageMask::new(
        bbox.top_left.x - pad_i,
        bbox.top_left.y - pad_i,
        bbox.size.width + 2 * pad,
        bbox.size.height + 2 * pad,
    );

    if let Err(never) = label.draw(&mut mask) {
        match never {}
    }

    mask
}
