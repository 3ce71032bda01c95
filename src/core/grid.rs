use crate::core::models::{Cell, Vec2};
use crate::error::InvariantError;

/// Fixed-size level grid, stored row-major. Bounds never change once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(height: usize, width: usize) -> Self {
        Grid {
            height,
            width,
            cells: vec![Cell::Floor; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < self.height && (pos.j as usize) < self.width
    }

    pub fn get(&self, pos: Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Position of the unique player cell.
    pub fn find_player(&self) -> Result<Vec2, InvariantError> {
        let mut found = None;
        let mut total = 0;
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_player() {
                total += 1;
                found = Some(Vec2 {
                    i: (idx / self.width) as i32,
                    j: (idx % self.width) as i32,
                });
            }
        }
        match (total, found) {
            (1, Some(pos)) => Ok(pos),
            _ => Err(InvariantError::PlayerCount(total)),
        }
    }

    /// Complete when no bare box is left. Uncovered targets do not block completion.
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&Cell::Box)
    }

    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(self.height * (self.width + 1));
        for row in self.rows() {
            result.extend(row.iter().map(|c| c.to_char()));
            result.push('\n');
        }
        result
    }

    fn offset(&self, pos: Vec2) -> usize {
        pos.i as usize * self.width + pos.j as usize
    }
}

impl std::ops::Index<Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: Vec2) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl std::ops::IndexMut<Vec2> for Grid {
    fn index_mut(&mut self, index: Vec2) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}
