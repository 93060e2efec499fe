use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{Dimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};
use image::{GrayImage, Luma};

/// Per-pixel glyph coverage (0 = empty, 255 = solid) for one label,
/// positioned in canvas coordinates.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    left: i32,
    top: i32,
    coverage: GrayImage,
}

impl CoverageMask {
    pub fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            coverage: GrayImage::new(width, height),
        }
    }

    #[cfg(test)]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[cfg(test)]
    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> u32 {
        self.coverage.width()
    }

    pub fn height(&self) -> u32 {
        self.coverage.height()
    }

    fn local(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let lx = x - self.left;
        let ly = y - self.top;
        if lx < 0 || ly < 0 || lx >= self.width() as i32 || ly >= self.height() as i32 {
            return None;
        }
        Some((lx as u32, ly as u32))
    }

    /// Raise coverage at a canvas position. Overlapping glyphs keep the stronger value.
    pub fn add(&mut self, x: i32, y: i32, value: u8) {
        if let Some((lx, ly)) = self.local(x, y) {
            let pixel = self.coverage.get_pixel_mut(lx, ly);
            pixel.0[0] = pixel.0[0].max(value);
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> u8 {
        self.local(x, y)
            .map(|(lx, ly)| self.coverage.get_pixel(lx, ly).0[0])
            .unwrap_or(0)
    }

    /// Covered pixels as `(x, y, coverage)` in canvas coordinates
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.coverage
            .enumerate_pixels()
            .filter(|(_, _, Luma([value]))| *value > 0)
            .map(move |(x, y, Luma([value]))| (self.left + x as i32, self.top + y as i32, *value))
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of the covered pixels
    #[cfg(test)]
    pub fn ink_bounds(&self) -> Option<(i32, i32, i32, i32)> {
        self.pixels().fold(None, |bounds, (x, y, _)| match bounds {
            None => Some((x, y, x, y)),
            Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
        })
    }

    /// Grow the covered area by a round brush of `radius` pixels. This is the glyph outline.
    ///
    /// Pixels that fall outside the mask are dropped, so callers allocate the
    /// mask with `radius` pixels of padding on every side.
    pub fn dilate(&self, radius: u32) -> CoverageMask {
        if radius == 0 {
            return self.clone();
        }

        let r = radius as i32;
        let brush: Vec<(i32, i32)> = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();

        let mut grown = CoverageMask::new(self.left, self.top, self.width(), self.height());
        for (x, y, value) in self.pixels() {
            for (dx, dy) in &brush {
                grown.add(x + dx, y + dy, value);
            }
        }
        grown
    }
}

impl Dimensions for CoverageMask {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.left, self.top),
            Size::new(self.width(), self.height()),
        )
    }
}

impl DrawTarget for CoverageMask {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels.into_iter() {
            // Only set pixels carry ink; the mono font leaves the rest transparent
            if color.is_on() {
                self.add(point.x, point.y, u8::MAX);
            }
        }
        Ok(())
    }
}
