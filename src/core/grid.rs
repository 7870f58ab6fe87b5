use crate::core::consts::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::core::{Cell, GameError, Position};

/// Square board, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Grid {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    pub fn get(&self, pos: &Position) -> Cell {
        self[pos]
    }

    pub fn set(&mut self, pos: &Position, value: Cell) {
        self[pos] = value;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    fn offset(&self, pos: &Position) -> usize {
        assert!(
            self.contains(pos),
            "position ({}, {}) is outside the {}x{} grid",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }
}

impl std::ops::Index<&Position> for Grid {
    type Output = Cell;

    fn index(&self, index: &Position) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl std::ops::IndexMut<&Position> for Grid {
    fn index_mut(&mut self, index: &Position) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}
