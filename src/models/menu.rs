/// One cell of the rich menu: a large primary label and a smaller line beneath it.
///
/// Items carry no identifier of their own. Their position in the item list
/// decides which grid cell they are drawn in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub primary: String,
    pub secondary: String,
}

impl MenuItem {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

impl From<(&str, &str)> for MenuItem {
    fn from((primary, secondary): (&str, &str)) -> Self {
        Self::new(primary, secondary)
    }
}

/// Builds an ordered item list from `(primary, secondary)` pairs
pub fn items_from_pairs(pairs: &[(&str, &str)]) -> Vec<MenuItem> {
    pairs.iter().copied().map(MenuItem::from).collect()
}
