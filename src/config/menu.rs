//! Menu configuration structure and methods

use std::path::PathBuf;

use log::info;

use super::{CliArgs, EnvVars};
use crate::models::color::Palette;
use crate::models::menu::{items_from_pairs, MenuItem};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 810;
pub const COLS: u32 = 3;
pub const ROWS: u32 = 2;

pub const BG_IMAGE_PATH: &str = "public/rich_menu_bg_atelier_v2.png";
pub const OUTPUT_PATH: &str = "public/rich-menu-final-mincho.png";

pub const MAIN_FONT_SIZE: f32 = 50.0;
pub const SUB_FONT_SIZE: f32 = 24.0;

/// Hiragino Mincho ProN first, Source Han Code JP second
pub const FONT_CHAIN: &[(&str, u32)] = &[
    ("/System/Library/Fonts/ヒラギノ明朝 ProN.ttc", 0),
    ("/Library/Fonts/SourceHanCodeJP.ttc", 0),
];

/// Row-major: first three are the top row
pub const MENU_ITEMS: &[(&str, &str)] = &[
    ("ご注文・予約", "Order / Reserve"),
    ("Instagram", "作例・カタログ"),
    ("24h無人店舗", "利用ガイド"),
    ("よくある質問", "FAQ"),
    ("店舗情報", "Access & Map"),
    ("個別相談", "Chat Support"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
}

impl GridSpec {
    pub fn cell_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }
}

/// One candidate in the font fallback chain
#[derive(Clone, Debug, PartialEq)]
pub enum FontSource {
    /// TrueType/OpenType file, `index` selects the face inside a collection
    File { path: PathBuf, index: u32 },
    /// Bitmap font compiled into the binary; always loads and has a single size
    Builtin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Tried in order, first successful load wins. The default chain ends with
    /// the builtin font, which is also used when a custom chain runs out.
    pub chain: Vec<FontSource>,
    pub main_size: f32,
    pub sub_size: f32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            chain: FONT_CHAIN
                .iter()
                .map(|(path, index)| FontSource::File {
                    path: PathBuf::from(path),
                    index: *index,
                })
                .chain(std::iter::once(FontSource::Builtin))
                .collect(),
            main_size: MAIN_FONT_SIZE,
            sub_size: SUB_FONT_SIZE,
        }
    }
}

/// Placement of the two labels and the tint relative to each cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelStyle {
    /// Margin between the cell edge and the tint rectangle
    pub cell_inset: u32,
    /// Vertical offset of the primary label from the cell center
    pub main_offset_y: i32,
    /// Vertical offset of the secondary label from the cell center
    pub sub_offset_y: i32,
    pub main_stroke: u32,
    pub sub_stroke: u32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            cell_inset: 10,
            main_offset_y: -15,
            sub_offset_y: 30,
            main_stroke: 2,
            sub_stroke: 1,
        }
    }
}

/// Everything one render needs. Built once and handed to the renderer.
#[derive(Clone, Debug)]
pub struct MenuConfig {
    pub canvas: CanvasSize,
    pub grid: GridSpec,
    pub items: Vec<MenuItem>,
    pub palette: Palette,
    pub fonts: FontSpec,
    pub label_style: LabelStyle,
    pub background_path: PathBuf,
    pub output_path: PathBuf,
    pub area_map_path: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize {
                width: WIDTH,
                height: HEIGHT,
            },
            grid: GridSpec {
                columns: COLS,
                rows: ROWS,
            },
            items: items_from_pairs(MENU_ITEMS),
            palette: Palette::default(),
            fonts: FontSpec::default(),
            label_style: LabelStyle::default(),
            background_path: PathBuf::from(BG_IMAGE_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            area_map_path: None,
        }
    }
}

impl MenuConfig {
    /// Create the configuration from the built-in menu, applying location
    /// overrides. Environment variables take precedence over CLI arguments.
    pub fn new(cli_args: CliArgs, env_vars: EnvVars) -> Self {
        let mut config = Self::default();

        if let Some(background) = env_vars.background.or(cli_args.background) {
            config.background_path = PathBuf::from(background);
        }

        if let Some(output) = env_vars.output.or(cli_args.output) {
            config.output_path = PathBuf::from(output);
        }

        config.area_map_path = env_vars.area_map.or(cli_args.area_map).map(PathBuf::from);

        info!(
            "Background: {}, output: {}",
            config.background_path.display(),
            config.output_path.display()
        );

        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.canvas.width == 0 || self.canvas.height == 0 {
            errors.push(format!(
                "Canvas must be larger than 0x0 (got {}x{})",
                self.canvas.width, self.canvas.height
            ));
        }

        if self.grid.columns == 0 {
            errors.push("Grid columns must be greater than 0".to_string());
        }

        if self.grid.rows == 0 {
            errors.push("Grid rows must be greater than 0".to_string());
        }

        if self.grid.cell_count() != self.items.len() {
            errors.push(format!(
                "A {}x{} grid has {} cells but {} menu items were given",
                self.grid.columns,
                self.grid.rows,
                self.grid.cell_count(),
                self.items.len()
            ));
        }

        if self.grid.columns > 0 && self.grid.rows > 0 {
            let cell_width = self.canvas.width / self.grid.columns;
            let cell_height = self.canvas.height / self.grid.rows;
            let min = self.label_style.cell_inset * 2;
            if cell_width <= min || cell_height <= min {
                errors.push(format!(
                    "Cells of {}x{} leave no room inside a {}px inset",
                    cell_width, cell_height, self.label_style.cell_inset
                ));
            }
        }

        if self.fonts.main_size <= 0.0 || self.fonts.sub_size <= 0.0 {
            errors.push("Font sizes must be greater than 0".to_string());
        }

        if self.output_path.as_os_str().is_empty() {
            errors.push("Output path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
