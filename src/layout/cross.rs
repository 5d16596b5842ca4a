use crate::foundation::core::{Face, FaceSize};
use crate::foundation::error::CubemapResult;

/// Grid cell, in units of one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Column, counted from the left.
    pub col: u32,
    /// Row, counted from the top.
    pub row: u32,
}

impl Cell {
    const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Top-left pixel of this cell when cells are `face_size` large.
    pub fn offset(self, face_size: FaceSize) -> (u32, u32) {
        (self.col * face_size.width, self.row * face_size.height)
    }
}

/// Declarative placement of the six faces on a grid of face-sized cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrossLayout {
    /// Human-readable layout name.
    pub name: &'static str,
    /// Grid width in cells.
    pub columns: u32,
    /// Grid height in cells.
    pub rows: u32,
    /// Cell of every face. Each face appears exactly once.
    pub cells: [(Face, Cell); 6],
}

/// The horizontal-cross convention:
///
/// ```text
///          +--------+
///          |  top   |
/// +--------+--------+--------+--------+
/// |  left  | front  | right  |  back  |
/// +--------+--------+--------+--------+
///          | bottom |
///          +--------+
/// ```
pub const HORIZONTAL_CROSS: CrossLayout = CrossLayout {
    name: "Horizontal Cross",
    columns: 4,
    rows: 3,
    cells: [
        (Face::Top, Cell::new(1, 0)),
        (Face::Left, Cell::new(0, 1)),
        (Face::Front, Cell::new(1, 1)),
        (Face::Right, Cell::new(2, 1)),
        (Face::Back, Cell::new(3, 1)),
        (Face::Bottom, Cell::new(1, 2)),
    ],
};

impl CrossLayout {
    /// Cell assigned to `face`.
    pub fn cell(&self, face: Face) -> Option<Cell> {
        self.cells.iter().find(|(f, _)| *f == face).map(|(_, c)| *c)
    }

    /// Sheet dimensions for faces of size `face`.
    pub fn canvas_size(&self, face: FaceSize) -> CubemapResult<FaceSize> {
        let width = face.width.checked_mul(self.columns);
        let height = face.height.checked_mul(self.rows);
        match (width, height) {
            (Some(w), Some(h)) => Ok(FaceSize::new(w, h)),
            _ => Err(anyhow::anyhow!("canvas dimensions overflow for {face} faces").into()),
        }
    }

    /// Cells no face is placed in, row-major. They stay fully transparent.
    pub fn empty_cells(&self) -> Vec<Cell> {
        let mut out = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.columns {
                let cell = Cell::new(col, row);
                if !self.cells.iter().any(|(_, c)| *c == cell) {
                    out.push(cell);
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cross.rs"]
mod tests;
