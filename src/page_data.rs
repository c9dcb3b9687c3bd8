//! Board and path data embedded by the server as hidden input values.
//!
//! Malformed JSON never reaches the user: it is logged and read as an
//! empty list.

use log::error;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::consts::BoardFields;
use crate::types::{Board, Dot};

#[cfg(test)]
#[path = "page_data_test.rs"]
mod page_data_test;

pub fn input_value(id: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let input = document
		.get_element_by_id(id)?
		.dyn_into::<HtmlInputElement>()
		.ok()?;
	Some(input.value())
}

fn element_exists(id: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.get_element_by_id(id))
		.is_some()
}

/// Leading integer of `raw` after whitespace and an optional `+`, so
/// `"3.5"` and `"12px"` read as 3 and 12.
pub fn parse_leading_u32(raw: &str) -> Option<u32> {
	let s = raw.trim_start();
	let s = s.strip_prefix('+').unwrap_or(s);
	let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
	s[..end].parse().ok()
}

/// `{row, col, color}` list, empty on malformed input.
pub fn parse_cells(raw: &str, what: &str) -> Vec<Dot> {
	match serde_json::from_str(raw) {
		Ok(cells) => cells,
		Err(e) => {
			error!("Failed to parse hidden {what} JSON: {e}");
			Vec::new()
		}
	}
}

/// Assemble a board from raw field values.
pub fn board_from_fields(pk: &str, title: &str, rows: &str, cols: &str, dots: &str) -> Board {
	Board {
		pk: parse_leading_u32(pk),
		title: Some(title.to_owned()),
		rows: parse_leading_u32(rows).unwrap_or(0),
		cols: parse_leading_u32(cols).unwrap_or(0),
		dots: parse_cells(dots, "dots"),
	}
}

/// Board embedded in the page, `None` when the page carries no board form.
pub fn read_board(fields: &BoardFields) -> Option<Board> {
	if !element_exists(fields.form) {
		return None;
	}
	let value = |id: &str| input_value(id).unwrap_or_default();
	Some(board_from_fields(
		&value(fields.pk),
		&value(fields.title),
		&value(fields.rows),
		&value(fields.cols),
		&value(fields.dots),
	))
}
