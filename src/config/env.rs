//! Environment variable handling

/// Environment overrides for the generator's file locations
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub background: Option<String>,
    pub output: Option<String>,
    pub area_map: Option<String>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    from_lookup(|key| std::env::var(key).ok())
}

fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> EnvVars {
    // Empty values count as unset
    let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    EnvVars {
        background: read("RICH_MENU_BACKGROUND"),
        output: read("RICH_MENU_OUTPUT"),
        area_map: read("RICH_MENU_AREA_MAP"),
    }
}
