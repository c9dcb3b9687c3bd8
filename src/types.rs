//! Board, dot and cell types shared by the builder and the path editor.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Grid coordinate, zero-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
	pub row: u32,
	pub col: u32,
}

impl Cell {
	pub fn new(row: u32, col: u32) -> Self {
		Self { row, col }
	}

	/// Manhattan distance of exactly one.
	pub fn is_adjacent(self, other: Cell) -> bool {
		self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
	}
}

/// A colored cell. Used both for board anchors and for path entries,
/// which share the `{row, col, color}` wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dot {
	pub row: u32,
	pub col: u32,
	pub color: String,
}

impl Dot {
	pub fn new(row: u32, col: u32, color: impl Into<String>) -> Self {
		Self {
			row,
			col,
			color: color.into(),
		}
	}

	pub fn at(cell: Cell, color: impl Into<String>) -> Self {
		Self::new(cell.row, cell.col, color)
	}

	pub fn cell(&self) -> Cell {
		Cell::new(self.row, self.col)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
	pub pk: Option<u32>,
	pub title: Option<String>,
	pub rows: u32,
	pub cols: u32,
	pub dots: Vec<Dot>,
}

impl Board {
	pub fn dot_at(&self, cell: Cell) -> Option<&Dot> {
		self.dots.iter().find(|d| d.cell() == cell)
	}

	pub fn contains(&self, cell: Cell) -> bool {
		cell.row < self.rows && cell.col < self.cols
	}

	pub fn dots_of_color(&self, color: &str) -> usize {
		self.dots.iter().filter(|d| d.color == color).count()
	}

	/// Row-major iteration over every cell of the grid.
	pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
		(0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
	}
}
