mod background;
mod composite;
mod fonts;
mod mask;
mod overlay;
mod text;

pub use background::BackgroundSource;
pub use fonts::ResolvedFonts;

use std::path::PathBuf;

use image::RgbaImage;
use log::{debug, info, warn};

use crate::config::MenuConfig;
use crate::layout::{Cell, GridLayout};
use crate::models::area_map::AreaMap;
use crate::models::menu::MenuItem;
use crate::storage;
use text::LabelPaint;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("a {columns}x{rows} grid cannot hold {items} menu items")]
    GridMismatch { columns: u32, rows: u32, items: usize },
    #[error("cells of {width}x{height} leave no room inside a {inset}px inset")]
    CellTooSmall { width: u32, height: u32, inset: u32 },
    #[error("failed to write image {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write area map {}: {source}", .path.display())]
    AreaMapWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode area map: {0}")]
    AreaMapEncode(#[source] serde_json::Error),
}

/// What a finished render produced
#[derive(Debug)]
pub struct RenderSummary {
    pub output_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub background: BackgroundSource,
    pub font: String,
    pub area_map_path: Option<PathBuf>,
}

/// Draws the menu grid for one configuration.
///
/// Fonts are resolved once when the renderer is built and reused for every cell.
pub struct MenuRenderer<'a> {
    config: &'a MenuConfig,
    layout: GridLayout,
    fonts: ResolvedFonts,
}

impl<'a> MenuRenderer<'a> {
    /// Fails when the item list does not fill the grid exactly or the cells
    /// are too small for their tint inset
    pub fn new(config: &'a MenuConfig) -> Result<Self, RenderError> {
        let layout = GridLayout::new(config.canvas, config.grid, config.items.len())?;
        let (width, height) = layout.cell_size();
        let inset = config.label_style.cell_inset;
        if width <= 2 * inset || height <= 2 * inset {
            return Err(RenderError::CellTooSmall { width, height, inset });
        }

        let fonts = fonts::resolve(&config.fonts);
        if fonts.is_builtin() {
            warn!("No font file could be loaded, characters outside Latin-1 will render as '?'");
        }
        Ok(Self {
            config,
            layout,
            fonts,
        })
    }

    /// Tints and labels for every cell on a transparent surface
    pub fn draw_overlay(&self) -> RgbaImage {
        let mut surface = overlay::transparent(self.config.canvas);
        for (cell, item) in self.layout.cells().zip(&self.config.items) {
            self.draw_cell(&mut surface, &cell, item);
        }
        surface
    }

    fn draw_cell(&self, surface: &mut RgbaImage, cell: &Cell, item: &MenuItem) {
        let style = &self.config.label_style;
        let palette = &self.config.palette;

        debug!(
            "Drawing cell {} (row {}, column {}): {} / {}",
            cell.index, cell.row, cell.column, item.primary, item.secondary
        );

        overlay::fill_rect(surface, cell.inset(style.cell_inset), palette.tint);

        let (cx, cy) = cell.center();
        let main = LabelPaint {
            size: self.fonts.main_size,
            fill: palette.text,
            stroke: palette.shadow,
            stroke_width: style.main_stroke,
        };
        text::draw_label(
            surface,
            &self.fonts.face,
            &item.primary,
            (cx, cy + style.main_offset_y),
            &main,
        );

        let sub = LabelPaint {
            size: self.fonts.sub_size,
            stroke_width: style.sub_stroke,
            ..main
        };
        text::draw_label(
            surface,
            &self.fonts.face,
            &item.secondary,
            (cx, cy + style.sub_offset_y),
            &sub,
        );
    }

    /// Run the whole pipeline and write the output file(s)
    pub fn render(&self) -> Result<RenderSummary, RenderError> {
        let config = self.config;

        info!("Loading background {}", config.background_path.display());
        let background = background::load(
            &config.background_path,
            config.canvas,
            config.palette.fallback_background,
        );

        let surface = self.draw_overlay();
        let out = composite::over(&background.image, &surface);

        storage::write_png(&out, &config.output_path)?;
        info!("Saved to {}", config.output_path.display());

        if let Some(path) = &config.area_map_path {
            storage::write_area_map(&AreaMap::from_layout(&self.layout, &config.items), path)?;
            info!("Area map saved to {}", path.display());
        }

        Ok(RenderSummary {
            output_path: config.output_path.clone(),
            width: out.width(),
            height: out.height(),
            background: background.source,
            font: self.fonts.face.to_string(),
            area_map_path: config.area_map_path.clone(),
        })
    }
}

/// Render `config` to disk in one call
pub fn render(config: &MenuConfig) -> Result<RenderSummary, RenderError> {
    MenuRenderer::new(config)?.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CanvasSize, FontSource};
    use super::composite::assert_close;
    use image::Rgba;
    use std::path::Path;

    const GRAY: Rgba<u8> = Rgba([50, 50, 50, 255]);

    /// The fixed menu with no background and no font files available
    fn bare_config(dir: &Path) -> MenuConfig {
        let mut config = MenuConfig::default();
        config.background_path = dir.join("missing-background.png");
        config.output_path = dir.join("public").join("menu.png");
        config.fonts.chain = vec![
            FontSource::File { path: dir.join("missing-mincho.ttc"), index: 0 },
            FontSource::File { path: dir.join("missing-sourcehan.ttc"), index: 0 },
        ];
        config
    }

    fn has_white_near(image: &RgbaImage, (x, y): (i32, i32), reach: i32) -> bool {
        (y - reach..=y + reach).any(|py| {
            (x - 3 * reach..=x + 3 * reach).any(|px| {
                let p = image.get_pixel(px as u32, py as u32);
                p.0[0] > 200 && p.0[1] > 200 && p.0[2] > 200
            })
        })
    }

    #[test]
    fn end_to_end_without_background_or_fonts() {
        let dir = tempfile::tempdir().unwrap();
        let config = bare_config(dir.path());

        let summary = render(&config).unwrap();
        assert_eq!(summary.background, BackgroundSource::Fallback);
        assert_eq!((summary.width, summary.height), (1200, 810));
        assert_eq!(summary.font, "builtin 10x20 bitmap font");

        let out = image::open(&config.output_path).unwrap().into_rgba8();
        assert_eq!(out.dimensions(), (1200, 810));

        // Corners sit outside every tint rectangle
        for (x, y) in [(0, 0), (1199, 0), (0, 809), (1199, 809)] {
            assert_eq!(out.get_pixel(x, y), &GRAY);
        }

        let layout = GridLayout::new(config.canvas, config.grid, config.items.len()).unwrap();
        for cell in layout.cells() {
            let inset = cell.inset(10);

            // Tinted gray inside the rectangle, untouched gray in the margin
            let tinted = out.get_pixel(inset.left + 2, inset.top + 2);
            assert_close(tinted, [42, 42, 42, 255]);
            assert_eq!(out.get_pixel(cell.x + 5, cell.y + 5), &GRAY);
            assert_eq!(out.get_pixel(inset.right + 1, inset.bottom + 1), &GRAY);

            let (cx, cy) = cell.center();
            assert!(has_white_near(&out, (cx, cy - 15), 10), "main label of cell {}", cell.index);
            assert!(has_white_near(&out, (cx, cy + 30), 10), "sub label of cell {}", cell.index);
        }
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());

        render(&config).unwrap();
        let first = std::fs::read(&config.output_path).unwrap();

        config.output_path = dir.path().join("second.png");
        render(&config).unwrap();
        let second = std::fs::read(&config.output_path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn background_picture_is_resized_under_the_menu() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());
        config.background_path = dir.path().join("bg.png");
        image::RgbaImage::from_pixel(640, 480, Rgba([200, 30, 30, 255]))
            .save(&config.background_path)
            .unwrap();

        let summary = render(&config).unwrap();
        assert_eq!(summary.background, BackgroundSource::Picture);

        let out = image::open(&config.output_path).unwrap().into_rgba8();
        assert_eq!(out.dimensions(), (1200, 810));
        let corner = out.get_pixel(0, 0);
        assert!((corner.0[0] as i16 - 200).abs() <= 1, "{:?}", corner);
        assert_eq!(corner.0[3], 255);
    }

    #[test]
    fn area_map_is_written_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());
        config.area_map_path = Some(dir.path().join("areas.json"));

        let summary = render(&config).unwrap();
        assert_eq!(summary.area_map_path, config.area_map_path);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("areas.json")).unwrap())
                .unwrap();
        assert_eq!(json["size"]["width"], 1200);
        assert_eq!(json["areas"].as_array().unwrap().len(), 6);
        assert_eq!(json["areas"][5]["bounds"]["x"], 800);
        assert_eq!(json["areas"][5]["bounds"]["y"], 405);
        assert_eq!(json["areas"][0]["label"], "ご注文・予約");
    }

    #[test]
    fn mismatched_grid_is_rejected_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());
        config.items.truncate(5);

        assert!(matches!(
            render(&config),
            Err(RenderError::GridMismatch { items: 5, .. })
        ));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn cells_smaller_than_the_inset_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());
        config.canvas = CanvasSize { width: 15, height: 40 };

        assert!(matches!(
            render(&config),
            Err(RenderError::CellTooSmall { width: 5, height: 20, inset: 10 })
        ));
        assert!(!config.output_path.exists());
    }

    #[test]
    fn unwritable_output_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = bare_config(dir.path());
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        config.output_path = blocker.join("menu.png");

        assert!(matches!(render(&config), Err(RenderError::OutputWrite { .. })));
    }

    #[test]
    fn overlay_is_transparent_outside_cells_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let config = bare_config(dir.path());
        let renderer = MenuRenderer::new(&config).unwrap();
        assert!(renderer.fonts.is_builtin());

        let surface = renderer.draw_overlay();
        assert_eq!(surface.get_pixel(0, 0).0[3], 0);
        assert_eq!(surface.get_pixel(15, 15), &Rgba([0, 0, 0, 40]));
        assert_eq!(renderer.layout.len(), 6);
    }

    #[test]
    fn outline_over_the_tint_keeps_the_shadow_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let config = bare_config(dir.path());
        let renderer = MenuRenderer::new(&config).unwrap();
        let surface = renderer.draw_overlay();

        let inset = renderer.layout.cell(0).inset(10);
        let inside = |x: u32, y: u32| {
            x >= inset.left && x <= inset.right && y >= inset.top && y <= inset.bottom
        };
        let shadow = surface
            .enumerate_pixels()
            .filter(|(x, y, p)| inside(*x, *y) && p.0 == [0, 0, 0, 150])
            .count();
        assert!(shadow > 0);
        // Stacking the shadow on the tint would give 166
        assert!(surface.pixels().all(|p| p.0[3] != 166));
    }
}
