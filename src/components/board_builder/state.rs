use crate::error::BoardError;
use crate::page_data::parse_leading_u32;
use crate::types::{Board, Cell, Dot};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Outcome of clicking a cell in the builder grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotToggle {
	Placed,
	Removed,
}

/// Board under construction plus the palette selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoardDraft {
	pub board: Board,
	pub color: Option<String>,
}

impl BoardDraft {
	pub fn load(board: Board) -> Self {
		Self { board, color: None }
	}

	pub fn select_color(&mut self, color: impl Into<String>) {
		self.color = Some(color.into());
	}

	/// Start a fresh grid. Sizes are read by their leading digits and must
	/// be positive; on error the draft is left untouched.
	pub fn generate(&mut self, title: &str, rows: &str, cols: &str) -> Result<(), BoardError> {
		let parse = |s: &str| parse_leading_u32(s).filter(|&n| n > 0);
		let (Some(rows), Some(cols)) = (parse(rows), parse(cols)) else {
			return Err(BoardError::InvalidSize);
		};
		self.board.title = Some(title.to_owned());
		self.board.rows = rows;
		self.board.cols = cols;
		self.board.dots.clear();
		Ok(())
	}

	/// Remove the dot at `cell`, or place one in the selected color.
	pub fn toggle_dot(&mut self, cell: Cell) -> Result<DotToggle, BoardError> {
		if let Some(idx) = self.board.dots.iter().position(|d| d.cell() == cell) {
			self.board.dots.remove(idx);
			return Ok(DotToggle::Removed);
		}
		let color = self.color.as_deref().ok_or(BoardError::NoColorSelected)?;
		if self.board.dots_of_color(color) >= 2 {
			return Err(BoardError::ColorFull);
		}
		self.board.dots.push(Dot::at(cell, color));
		Ok(DotToggle::Placed)
	}
}
