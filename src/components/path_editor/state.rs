use std::collections::HashSet;

use log::{debug, warn};

use crate::types::{Board, Cell, Dot};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Visual side of the editor. The browser implementation lives in
/// `render::DomSurface`; tests record calls instead.
pub trait PathSurface {
	/// Mark `cell` as part of a path of `color`.
	fn add_highlight(&mut self, cell: Cell, color: &str);
	/// Remove every highlight and the polyline drawn for `color`.
	fn clear_color(&mut self, color: &str);
	/// Replace the polyline for `color` with one through `cells`.
	fn draw_polyline(&mut self, color: &str, cells: &[Dot]);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
	#[default]
	Idle,
	/// Pointer is down and the path has not reached its matching dot.
	Drawing { color: String },
	/// The matching dot was reached; the next release commits.
	AwaitingFinalize { color: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
	PointerDown(Cell),
	PointerMove(Cell),
	PointerUp,
	/// A highlight belonging to `color` was clicked.
	HighlightClick { color: String },
}

/// What a single event did to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
	Ignored,
	Started,
	Extended,
	Reached,
	Cancelled,
	Committed,
	Removed,
}

pub struct PathEditor<S: PathSurface> {
	board: Board,
	state: EditorState,
	current: Vec<Dot>,
	paths: Vec<Dot>,
	/// Endpoint cells whose start handler is detached.
	detached: HashSet<Cell>,
	surface: S,
}

impl<S: PathSurface> PathEditor<S> {
	pub fn new(board: Board, surface: S) -> Self {
		Self {
			board,
			state: EditorState::Idle,
			current: Vec::new(),
			paths: Vec::new(),
			detached: HashSet::new(),
			surface,
		}
	}

	/// Re-display previously saved paths. Cells are grouped by color in
	/// order of first appearance; cells outside the grid are dropped.
	pub fn with_saved_paths(mut self, saved: Vec<Dot>) -> Self {
		let mut colors: Vec<String> = Vec::new();
		for dot in &saved {
			if !colors.contains(&dot.color) {
				colors.push(dot.color.clone());
			}
		}

		for color in colors {
			let cells: Vec<Dot> = saved
				.iter()
				.filter(|d| d.color == color)
				.filter(|d| {
					let inside = self.board.contains(d.cell());
					if !inside {
						warn!("Dropping saved path cell outside the grid: {d:?}");
					}
					inside
				})
				.cloned()
				.collect();
			if cells.is_empty() {
				continue;
			}
			for (i, dot) in cells.iter().enumerate() {
				self.surface.add_highlight(dot.cell(), &color);
				self.surface.draw_polyline(&color, &cells[..=i]);
			}
			self.detach_endpoints(&cells);
			self.paths.extend(cells);
		}
		self
	}

	pub fn state(&self) -> &EditorState {
		&self.state
	}

	/// Every committed cell, in commit order.
	pub fn paths(&self) -> &[Dot] {
		&self.paths
	}

	#[cfg(test)]
	pub fn current_path(&self) -> &[Dot] {
		&self.current
	}

	#[cfg(test)]
	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn has_committed(&self, color: &str) -> bool {
		self.paths.iter().any(|p| p.color == color)
	}

	/// Whether pressing `cell` would reach a start handler.
	pub fn can_start_at(&self, cell: Cell) -> bool {
		!self.detached.contains(&cell)
			&& self
				.board
				.dot_at(cell)
				.is_some_and(|dot| !self.has_committed(&dot.color))
	}

	/// Color of the committed path that owns `cell`, if any.
	pub fn committed_color_at(&self, cell: Cell) -> Option<&str> {
		self.paths.iter().find(|p| p.cell() == cell).map(|p| p.color.as_str())
	}

	pub fn pointer_down(&mut self, cell: Cell) -> Transition {
		self.handle(EditorEvent::PointerDown(cell))
	}

	pub fn pointer_move(&mut self, cell: Cell) -> Transition {
		self.handle(EditorEvent::PointerMove(cell))
	}

	pub fn pointer_up(&mut self) -> Transition {
		self.handle(EditorEvent::PointerUp)
	}

	pub fn highlight_click(&mut self, color: &str) -> Transition {
		self.handle(EditorEvent::HighlightClick {
			color: color.to_owned(),
		})
	}

	/// Single transition function for every pointer and click event.
	pub fn handle(&mut self, event: EditorEvent) -> Transition {
		let state = std::mem::take(&mut self.state);
		let (next, transition) = match (state, event) {
			(EditorState::Idle, EditorEvent::PointerDown(cell)) => match self.start(cell) {
				Some(color) => (EditorState::Drawing { color }, Transition::Started),
				None => (EditorState::Idle, Transition::Ignored),
			},
			(EditorState::Drawing { color }, EditorEvent::PointerMove(cell)) => {
				match self.extend(cell, &color) {
					Step::Rejected => (EditorState::Drawing { color }, Transition::Ignored),
					Step::Accepted => (EditorState::Drawing { color }, Transition::Extended),
					Step::ReachedMatch => {
						(EditorState::AwaitingFinalize { color }, Transition::Reached)
					}
				}
			}
			(EditorState::Drawing { color }, EditorEvent::PointerUp) => {
				self.cancel(&color);
				(EditorState::Idle, Transition::Cancelled)
			}
			(EditorState::AwaitingFinalize { color }, EditorEvent::PointerUp) => {
				self.commit(&color);
				(EditorState::Idle, Transition::Committed)
			}
			(EditorState::Idle, EditorEvent::HighlightClick { color }) => {
				if self.remove(&color) {
					(EditorState::Idle, Transition::Removed)
				} else {
					(EditorState::Idle, Transition::Ignored)
				}
			}
			(state, _) => (state, Transition::Ignored),
		};
		if transition != Transition::Ignored {
			debug!("path editor: {transition:?} -> {next:?}");
		}
		self.state = next;
		transition
	}

	fn start(&mut self, cell: Cell) -> Option<String> {
		if !self.can_start_at(cell) {
			return None;
		}
		let color = self.board.dot_at(cell)?.color.clone();
		self.current = vec![Dot::at(cell, color.as_str())];
		self.surface.add_highlight(cell, &color);
		self.surface.draw_polyline(&color, &self.current);
		Some(color)
	}

	fn extend(&mut self, cell: Cell, color: &str) -> Step {
		if self.current.iter().any(|p| p.cell() == cell) {
			return Step::Rejected;
		}
		let Some(last) = self.current.last() else {
			return Step::Rejected;
		};
		if !last.cell().is_adjacent(cell) {
			return Step::Rejected;
		}
		if self.committed_color_at(cell).is_some() {
			return Step::Rejected;
		}

		let reached = match self.board.dot_at(cell) {
			Some(dot) if dot.color != color => return Step::Rejected,
			// The start cell is already in `current`, so any same-color dot here
			// is the matching end.
			Some(_) => true,
			None => false,
		};

		self.current.push(Dot::at(cell, color));
		self.surface.add_highlight(cell, color);
		self.surface.draw_polyline(color, &self.current);

		if reached { Step::ReachedMatch } else { Step::Accepted }
	}

	fn cancel(&mut self, color: &str) {
		self.paths.retain(|p| p.color != color);
		self.surface.clear_color(color);
		self.current.clear();
	}

	fn commit(&mut self, color: &str) {
		let path = std::mem::take(&mut self.current);
		debug_assert!(path.iter().all(|p| p.color == color));
		self.detach_endpoints(&path);
		self.paths.extend(path);
	}

	fn remove(&mut self, color: &str) -> bool {
		let path: Vec<Dot> = self.paths.iter().filter(|p| p.color == color).cloned().collect();
		let (Some(first), Some(last)) = (path.first(), path.last()) else {
			return false;
		};
		self.detached.remove(&first.cell());
		self.detached.remove(&last.cell());
		self.paths.retain(|p| p.color != color);
		self.surface.clear_color(color);
		true
	}

	fn detach_endpoints(&mut self, path: &[Dot]) {
		if let (Some(first), Some(last)) = (path.first(), path.last()) {
			self.detached.insert(first.cell());
			self.detached.insert(last.cell());
		}
	}
}

enum Step {
	Rejected,
	Accepted,
	ReachedMatch,
}
