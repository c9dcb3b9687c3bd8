use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, MouseEvent};

use super::state::PathSurface;
use crate::consts::{CELL_SIZE, PATH_STROKE_WIDTH, SVG_NS};
use crate::types::{Cell, Dot};

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

pub const HIGHLIGHT_CLASS: &str = "path-highlight";

/// Pixel center of a cell inside the grid.
pub fn cell_center(cell: Cell) -> (f64, f64) {
	let half = CELL_SIZE / 2.0;
	(
		cell.col as f64 * CELL_SIZE + half,
		cell.row as f64 * CELL_SIZE + half,
	)
}

/// Cell under a point given relative to the grid's top-left corner.
pub fn cell_at(x: f64, y: f64, rows: u32, cols: u32) -> Option<Cell> {
	if x < 0.0 || y < 0.0 {
		return None;
	}
	let (col, row) = ((x / CELL_SIZE).floor(), (y / CELL_SIZE).floor());
	if row >= rows as f64 || col >= cols as f64 {
		return None;
	}
	Some(Cell::new(row as u32, col as u32))
}

/// SVG `d` attribute through the centers of `cells`, `None` below two points.
pub fn polyline_data(cells: &[Dot]) -> Option<String> {
	if cells.len() < 2 {
		return None;
	}
	let segments: Vec<String> = cells
		.iter()
		.enumerate()
		.map(|(i, dot)| {
			let (x, y) = cell_center(dot.cell());
			let cmd = if i == 0 { 'M' } else { 'L' };
			format!("{cmd} {x} {y}")
		})
		.collect();
	Some(segments.join(" "))
}

/// CSS `grid-template-*` value for `n` tracks.
pub fn grid_template(n: u32) -> String {
	format!("repeat({n}, {CELL_SIZE}px)")
}

fn cell_selector(cell: Cell) -> String {
	format!(
		".grid-cell[data-row=\"{}\"][data-col=\"{}\"]",
		cell.row, cell.col
	)
}

/// `PathSurface` backed by the rendered grid and its SVG overlay.
pub struct DomSurface {
	document: Document,
	grid: Element,
	svg: Element,
}

impl DomSurface {
	pub fn new(document: Document, grid: Element, svg: Element) -> Self {
		Self {
			document,
			grid,
			svg,
		}
	}

	fn remove_polyline(&self, color: &str) {
		if let Ok(Some(existing)) = self
			.svg
			.query_selector(&format!("path[data-color=\"{color}\"]"))
		{
			existing.remove();
		}
	}
}

impl PathSurface for DomSurface {
	fn add_highlight(&mut self, cell: Cell, color: &str) {
		let Ok(Some(cell_el)) = self.grid.query_selector(&cell_selector(cell)) else {
			warn!("No grid cell at {cell:?}");
			return;
		};
		let Ok(highlight) = self.document.create_element("div") else {
			return;
		};
		highlight.set_class_name(HIGHLIGHT_CLASS);
		let _ = highlight.set_attribute("data-color", color);
		let _ = highlight.set_attribute("data-row", &cell.row.to_string());
		let _ = highlight.set_attribute("data-col", &cell.col.to_string());
		let _ = highlight.set_attribute("style", &format!("background: {color};"));
		let _ = cell_el.append_child(&highlight);
	}

	fn clear_color(&mut self, color: &str) {
		let selector = format!(".{HIGHLIGHT_CLASS}[data-color=\"{color}\"]");
		if let Ok(nodes) = self.grid.query_selector_all(&selector) {
			for i in 0..nodes.length() {
				if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
					el.remove();
				}
			}
		}
		self.remove_polyline(color);
	}

	fn draw_polyline(&mut self, color: &str, cells: &[Dot]) {
		self.remove_polyline(color);
		let Some(d) = polyline_data(cells) else {
			return;
		};
		let Ok(path) = self.document.create_element_ns(Some(SVG_NS), "path") else {
			return;
		};
		for (name, value) in [
			("d", d.as_str()),
			("stroke", color),
			("stroke-width", PATH_STROKE_WIDTH),
			("fill", "none"),
			("stroke-linejoin", "round"),
			("stroke-linecap", "round"),
			("data-color", color),
		] {
			let _ = path.set_attribute(name, value);
		}
		let _ = self.svg.append_child(&path);
	}
}

/// Mouse listeners attached to one target, kept alive until removed.
#[derive(Default)]
pub struct ListenerSet {
	listeners: Vec<(&'static str, Closure<dyn FnMut(MouseEvent)>)>,
}

impl ListenerSet {
	pub fn add(&mut self, target: &EventTarget, event: &'static str, cb: Closure<dyn FnMut(MouseEvent)>) {
		if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
			warn!("Could not listen for {event}: {e:?}");
			return;
		}
		self.listeners.push((event, cb));
	}

	pub fn remove_all(&mut self, target: &EventTarget) {
		for (event, cb) in self.listeners.drain(..) {
			let _ = target.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
	}

	pub fn is_empty(&self) -> bool {
		self.listeners.is_empty()
	}
}
