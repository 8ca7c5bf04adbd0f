use std::collections::HashSet;

use crate::Position;

/// Types of cells in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "grid-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Cell {
    Open,
    Wall,
}

/// Static geometry of a square grid spanning `0..=size` on both axes.
#[derive(Debug, Clone)]
pub struct Layout {
    size: i32,
    walls: HashSet<Position>,
    cells: Vec<Cell>,
}

impl Layout {
    pub fn new(size: i32, walls: &[Position]) -> Self {
        let side = (size + 1) as usize;
        let walls: HashSet<Position> = walls
            .iter()
            .copied()
            .filter(|(x, y)| (0..=size).contains(x) && (0..=size).contains(y))
            .collect();

        let mut cells = vec![Cell::Open; side * side];
        for (x, y) in &walls {
            cells[*x as usize * side + *y as usize] = Cell::Wall;
        }

        Layout { size, walls, cells }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, (x, y): Position) -> bool {
        x >= 0 && x <= self.size && y >= 0 && y <= self.size
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.walls.contains(&position)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Position> {
        self.walls.iter()
    }

    pub(crate) fn index(&self, (x, y): Position) -> Option<usize> {
        if self.contains((x, y)) {
            Some(x as usize * (self.size + 1) as usize + y as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position).map(|index| self.cells[index])
    }

    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..=self.size)
            .flat_map(move |x| (0..=self.size).map(move |y| (x, y)))
            .filter(move |position| !self.is_wall(*position))
    }
}
