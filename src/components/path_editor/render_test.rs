use super::*;

// =============================================================
// Geometry
// =============================================================

#[test]
fn cell_center_is_offset_by_half_a_cell() {
	assert_eq!(cell_center(Cell::new(0, 0)), (40.0, 40.0));
	assert_eq!(cell_center(Cell::new(2, 1)), (120.0, 200.0));
}

#[test]
fn cell_at_maps_points_to_cells() {
	assert_eq!(cell_at(0.0, 0.0, 3, 3), Some(Cell::new(0, 0)));
	assert_eq!(cell_at(79.9, 80.0, 3, 3), Some(Cell::new(1, 0)));
	assert_eq!(cell_at(239.0, 10.0, 3, 3), Some(Cell::new(0, 2)));
}

#[test]
fn cell_at_rejects_points_outside_the_grid() {
	assert_eq!(cell_at(-1.0, 10.0, 3, 3), None);
	assert_eq!(cell_at(10.0, 240.0, 3, 3), None);
	assert_eq!(cell_at(240.0, 10.0, 3, 3), None);
	assert_eq!(cell_at(10.0, 10.0, 0, 0), None);
}

#[test]
fn grid_template_uses_cell_size() {
	assert_eq!(grid_template(4), "repeat(4, 80px)");
}

// =============================================================
// Polyline data
// =============================================================

#[test]
fn polyline_needs_two_points() {
	assert_eq!(polyline_data(&[]), None);
	assert_eq!(polyline_data(&[Dot::new(0, 0, "red")]), None);
}

#[test]
fn polyline_moves_then_lines_through_centers() {
	let cells = [Dot::new(0, 0, "red"), Dot::new(0, 1, "red"), Dot::new(1, 1, "red")];
	assert_eq!(
		polyline_data(&cells).as_deref(),
		Some("M 40 40 L 120 40 L 120 120")
	);
}

#[test]
fn cell_selector_matches_data_attributes() {
	assert_eq!(
		cell_selector(Cell::new(3, 7)),
		".grid-cell[data-row=\"3\"][data-col=\"7\"]"
	);
}

// =============================================================
// DOM surface (browser only)
// =============================================================

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::rc::Rc;

	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn document() -> Document {
		web_sys::window().unwrap().document().unwrap()
	}

	fn grid(document: &Document, rows: u32, cols: u32) -> Element {
		let grid = document.create_element("div").unwrap();
		for row in 0..rows {
			for col in 0..cols {
				let cell = document.create_element("div").unwrap();
				cell.set_class_name("grid-cell");
				cell.set_attribute("data-row", &row.to_string()).unwrap();
				cell.set_attribute("data-col", &col.to_string()).unwrap();
				grid.append_child(&cell).unwrap();
			}
		}
		grid
	}

	#[wasm_bindgen_test]
	fn polyline_goes_into_the_given_overlay_not_a_page_svg_with_the_same_id() {
		let document = document();
		let body = document.body().unwrap();
		let page_svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
		page_svg.set_id("path-svg");
		body.append_child(&page_svg).unwrap();
		let own_svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
		body.append_child(&own_svg).unwrap();

		let mut surface = DomSurface::new(document.clone(), grid(&document, 2, 2), own_svg.clone());
		surface.draw_polyline("red", &[Dot::new(0, 0, "red"), Dot::new(0, 1, "red")]);

		let drawn = own_svg.query_selector("path[data-color=\"red\"]").unwrap().unwrap();
		assert_eq!(drawn.get_attribute("d").as_deref(), Some("M 40 40 L 120 40"));
		assert_eq!(page_svg.child_element_count(), 0);

		page_svg.remove();
		own_svg.remove();
	}

	#[wasm_bindgen_test]
	fn clear_color_removes_highlights_and_polyline() {
		let document = document();
		let svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
		let grid = grid(&document, 2, 2);
		let mut surface = DomSurface::new(document, grid.clone(), svg.clone());

		let cells = [Dot::new(0, 0, "red"), Dot::new(1, 0, "red")];
		for dot in &cells {
			surface.add_highlight(dot.cell(), "red");
		}
		surface.add_highlight(Cell::new(1, 1), "blue");
		surface.draw_polyline("red", &cells);
		surface.clear_color("red");

		assert!(grid.query_selector(".path-highlight[data-color=\"red\"]").unwrap().is_none());
		assert!(grid.query_selector(".path-highlight[data-color=\"blue\"]").unwrap().is_some());
		assert_eq!(svg.child_element_count(), 0);
	}

	#[wasm_bindgen_test]
	fn removed_listeners_stop_firing() {
		let target: EventTarget = document().create_element("div").unwrap().into();
		let hits = Rc::new(std::cell::Cell::new(0));
		let counter = hits.clone();
		let mut set = ListenerSet::default();
		set.add(
			&target,
			"mousemove",
			Closure::new(move |_: MouseEvent| counter.set(counter.get() + 1)),
		);

		let fire = || target.dispatch_event(&MouseEvent::new("mousemove").unwrap()).unwrap();
		fire();
		assert_eq!(hits.get(), 1);

		set.remove_all(&target);
		assert!(set.is_empty());
		fire();
		assert_eq!(hits.get(), 1);
	}
}
