use serde::{Deserialize, Serialize};

use crate::layout::{Cell, GridLayout};
use crate::models::menu::MenuItem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<&Cell> for Bounds {
    fn from(cell: &Cell) -> Self {
        Self {
            x: cell.x,
            y: cell.y,
            width: cell.width,
            height: cell.height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub bounds: Bounds,
    pub label: String,
    pub sub_label: String,
}

/// Tap regions of the rendered menu, one per cell, in item order.
///
/// Chat platforms that display a rich menu need the image plus the rectangle
/// each action occupies; this is the second half of that pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaMap {
    pub size: Size,
    pub areas: Vec<Area>,
}

impl AreaMap {
    pub fn from_layout(layout: &GridLayout, items: &[MenuItem]) -> Self {
        let areas = layout
            .cells()
            .zip(items)
            .map(|(cell, item)| Area {
                bounds: Bounds::from(&cell),
                label: item.primary.clone(),
                sub_label: item.secondary.clone(),
            })
            .collect();

        Self {
            size: Size {
                width: layout.canvas().width,
                height: layout.canvas().height,
            },
            areas,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CanvasSize, GridSpec};
    use crate::models::menu::items_from_pairs;

    #[test]
    fn areas_follow_cells_and_serialize_as_json() {
        let items = items_from_pairs(&[("A", "a"), ("B", "b"), ("C", "c"), ("D", "d")]);
        let layout = GridLayout::new(
            CanvasSize { width: 200, height: 100 },
            GridSpec { columns: 2, rows: 2 },
            items.len(),
        )
        .unwrap();

        let map = AreaMap::from_layout(&layout, &items);
        assert_eq!(map.size, Size { width: 200, height: 100 });
        assert_eq!(map.areas.len(), 4);
        assert_eq!(map.areas[3].label, "D");
        assert_eq!(
            map.areas[3].bounds,
            Bounds { x: 100, y: 50, width: 100, height: 50 }
        );

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["areas"][1]["bounds"]["x"], 100);
        assert_eq!(json["areas"][1]["sub_label"], "b");
        assert_eq!(json["size"]["height"], 100);
    }
}
