//! Grid geometry for the menu cells

use crate::config::{CanvasSize, GridSpec};
use crate::render::RenderError;

/// One grid cell in canvas pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub index: usize,
    pub row: u32,
    pub column: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Rectangle with inclusive corners, the way the tint is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsetRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Cell {
    /// Center point, rounded down like the cell size itself
    pub fn center(&self) -> (i32, i32) {
        (
            (self.x + self.width / 2) as i32,
            (self.y + self.height / 2) as i32,
        )
    }

    /// Rectangle `margin` pixels in from every edge. A cell narrower than the
    /// margin collapses to an empty rectangle (`right < left`).
    pub fn inset(&self, margin: u32) -> InsetRect {
        InsetRect {
            left: self.x + margin,
            top: self.y + margin,
            right: (self.x + self.width).saturating_sub(margin),
            bottom: (self.y + self.height).saturating_sub(margin),
        }
    }
}

/// Splits the canvas into `columns x rows` equal cells, one per menu item
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    canvas: CanvasSize,
    grid: GridSpec,
    cell_width: u32,
    cell_height: u32,
}

impl GridLayout {
    pub fn new(canvas: CanvasSize, grid: GridSpec, item_count: usize) -> Result<Self, RenderError> {
        if grid.columns == 0 || grid.rows == 0 || grid.cell_count() != item_count {
            return Err(RenderError::GridMismatch {
                columns: grid.columns,
                rows: grid.rows,
                items: item_count,
            });
        }

        Ok(Self {
            canvas,
            grid,
            cell_width: canvas.width / grid.columns,
            cell_height: canvas.height / grid.rows,
        })
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Width and height shared by every cell
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn len(&self) -> usize {
        self.grid.cell_count()
    }

    pub fn cell(&self, index: usize) -> Cell {
        let row = index as u32 / self.grid.columns;
        let column = index as u32 % self.grid.columns;
        Cell {
            index,
            row,
            column,
            x: column * self.cell_width,
            y: row * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |index| self.cell(index))
    }
}
