//! Point picking and point-list highlighting on a route's background image.
//!
//! Both behaviors attach to elements the server page already renders
//! (`#image-container`, the `id_x`/`id_y` form inputs, `#route-svg`,
//! `.point-item` rows). Positions are percentages of the image box.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

use crate::consts::{
	IMAGE_CONTAINER_ID, LAST_POINT_ID, POINT_ITEM_SELECTOR, POINT_MARKER_LINGER_MS,
	POINT_X_INPUT_ID, POINT_Y_INPUT_ID, ROUTE_SVG_ID, SVG_NS,
};

#[cfg(test)]
#[path = "route_map_test.rs"]
mod route_map_test;

type Slot = Rc<RefCell<Option<Element>>>;

/// Offset of `client` inside `[start, start + extent)` as a percentage.
pub fn percent_within(client: f64, start: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 0.0;
	}
	(client - start) / extent * 100.0
}

/// Percentage as written into the point form inputs.
pub fn input_percent(value: f64) -> String {
	(value.round() as i64).to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MarkerStyle {
	size_px: u32,
	color: &'static str,
	z_index: u32,
	/// Let pointer events reach the item list underneath.
	click_through: bool,
}

const PICKED_MARKER: MarkerStyle = MarkerStyle {
	size_px: 10,
	color: "red",
	z_index: 1,
	click_through: false,
};

const HOVER_MARKER: MarkerStyle = MarkerStyle {
	size_px: 15,
	color: "blue",
	z_index: 1000,
	click_through: true,
};

fn marker(document: &Document, style: MarkerStyle, x: f64, y: f64) -> Option<HtmlElement> {
	let el = document.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
	let (size, z_index) = (format!("{}px", style.size_px), style.z_index.to_string());
	let css = el.style();
	for (name, value) in [
		("position", "absolute"),
		("z-index", z_index.as_str()),
		("transform", "translate(-50%, -50%)"),
		("width", size.as_str()),
		("height", size.as_str()),
		("background", style.color),
		("border-radius", "50%"),
	] {
		let _ = css.set_property(name, value);
	}
	if style.click_through {
		let _ = css.set_property("pointer-events", "none");
	}
	move_marker(&el, x, y);
	Some(el)
}

fn move_marker(el: &HtmlElement, x: f64, y: f64) {
	let css = el.style();
	let _ = css.set_property("left", &format!("{x}%"));
	let _ = css.set_property("top", &format!("{y}%"));
}

fn input(document: &Document, id: &str) -> Option<HtmlInputElement> {
	document.get_element_by_id(id)?.dyn_into::<HtmlInputElement>().ok()
}

/// Clicking the image records the point and previews the new segment.
fn attach_point_picker(document: &Document) -> Option<Closure<dyn FnMut(MouseEvent)>> {
	let image = document.get_element_by_id(IMAGE_CONTAINER_ID)?;
	let (input_x, input_y) = (input(document, POINT_X_INPUT_ID)?, input(document, POINT_Y_INPUT_ID)?);
	let svg = document.get_element_by_id(ROUTE_SVG_ID);
	let last_point = document.get_element_by_id(LAST_POINT_ID);

	let marker_slot: Rc<RefCell<Option<HtmlElement>>> = Rc::new(RefCell::new(None));
	let line_slot: Slot = Rc::new(RefCell::new(None));
	let (document, image_cb) = (document.clone(), image.clone());

	let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
		let rect = image_cb.get_bounding_client_rect();
		let x = percent_within(ev.client_x() as f64, rect.left(), rect.width());
		let y = percent_within(ev.client_y() as f64, rect.top(), rect.height());
		input_x.set_value(&input_percent(x));
		input_y.set_value(&input_percent(y));

		let mut marker_el = marker_slot.borrow_mut();
		match marker_el.as_ref() {
			Some(el) => move_marker(el, x, y),
			None => {
				if let Some(el) = marker(&document, PICKED_MARKER, x, y) {
					let _ = image_cb.append_child(&el);
					*marker_el = Some(el);
				}
			}
		}

		// Without a previous point there is no segment to preview.
		let (Some(svg), Some(last)) = (svg.as_ref(), last_point.as_ref()) else {
			return;
		};
		let mut line = line_slot.borrow_mut();
		if line.is_none() {
			let Ok(el) = document.create_element_ns(Some(SVG_NS), "line") else {
				return;
			};
			let _ = el.set_attribute("stroke", "blue");
			let _ = el.set_attribute("stroke-width", "0.5");
			let _ = el.set_attribute("x1", &last.get_attribute("data-x").unwrap_or_default());
			let _ = el.set_attribute("y1", &last.get_attribute("data-y").unwrap_or_default());
			let _ = svg.append_child(&el);
			*line = Some(el);
		}
		if let Some(el) = line.as_ref() {
			let _ = el.set_attribute("x2", &x.to_string());
			let _ = el.set_attribute("y2", &y.to_string());
		}
	});
	let _ = image.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
	Some(on_click)
}

/// Hovering a saved point shows a marker at its position on the image.
fn attach_point_highlights(document: &Document) -> Vec<Closure<dyn FnMut(MouseEvent)>> {
	let mut callbacks = Vec::new();
	let Ok(items) = document.query_selector_all(POINT_ITEM_SELECTOR) else {
		return callbacks;
	};

	for i in 0..items.length() {
		let Some(item) = items.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let coord = |name: &str| {
			item.get_attribute(name)
				.and_then(|v| v.trim().parse::<i32>().ok())
				.unwrap_or(0)
		};
		let (x, y) = (coord("data-x"), coord("data-y"));
		let slot: Slot = Rc::new(RefCell::new(None));

		let (document_enter, slot_enter) = (document.clone(), slot.clone());
		let on_enter = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			debug!("Highlighting point at ({x}, {y})");
			if let Some(old) = slot_enter.borrow_mut().take() {
				old.remove();
			}
			let Some(container) = document_enter.get_element_by_id(IMAGE_CONTAINER_ID) else {
				return;
			};
			if let Some(el) = marker(&document_enter, HOVER_MARKER, x as f64, y as f64) {
				let _ = container.append_child(&el);
				*slot_enter.borrow_mut() = Some(el.into());
			}
		});

		let slot_leave = slot.clone();
		let on_leave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			let slot = slot_leave.clone();
			Timeout::new(POINT_MARKER_LINGER_MS, move || {
				if let Some(el) = slot.borrow_mut().take() {
					el.remove();
				}
			})
			.forget();
		});

		let _ = item.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref());
		let _ = item.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
		callbacks.extend([on_enter, on_leave]);
	}
	callbacks
}

#[component]
pub fn RouteMap() -> impl IntoView {
	let callbacks: Rc<RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		let mut callbacks = callbacks.borrow_mut();
		if !callbacks.is_empty() {
			return;
		}
		if let Some(picker) = attach_point_picker(&document) {
			info!("Point picker attached");
			callbacks.push(picker);
		}
		let highlights = attach_point_highlights(&document);
		info!("Point highlights attached to {} items", highlights.len() / 2);
		callbacks.extend(highlights);
	});
}
