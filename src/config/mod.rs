//! Configuration module that handles all generator settings

mod cli;
mod env;
mod menu;

pub use cli::CliArgs;
pub use env::{load_env_vars, EnvVars};
pub use menu::{CanvasSize, FontSource, FontSpec, GridSpec, MenuConfig};

/// Initialize configuration from all sources (constants, CLI, environment)
pub fn init_config() -> MenuConfig {
    // Parse CLI args first
    let cli_args = CliArgs::parse();

    // Load environment variables
    let env_vars = load_env_vars();

    // Start from the built-in menu and apply the location overrides
    MenuConfig::new(cli_args, env_vars)
}
