pub mod area_map;
pub mod color;
pub mod menu;
