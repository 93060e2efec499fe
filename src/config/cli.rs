//! Command-line argument parsing

/// Command-line arguments for the rich menu generator
#[derive(argh::FromArgs, Debug, Clone, Default)]
/// Rich menu image generator
///
/// Draws the 3x2 bilingual menu grid over a background picture and writes a PNG.
/// Layout, labels, colors and fonts are built in; only file locations can be changed.
pub struct CliArgs {
    #[argh(option, short = 'b')]
    /// background picture to draw the menu over.
    /// Default: public/rich_menu_bg_atelier_v2.png
    pub background: Option<String>,

    #[argh(option, short = 'o')]
    /// where to write the finished PNG (overwritten if present).
    /// Default: public/rich-menu-final-mincho.png
    pub output: Option<String>,

    #[argh(option, short = 'a')]
    /// optional path for a JSON file describing each cell's tap area
    pub area_map: Option<String>,
}

impl CliArgs {
    /// Parse CLI arguments
    pub fn parse() -> Self {
        argh::from_env()
    }
}
