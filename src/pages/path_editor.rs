use leptos::prelude::*;
use leptos_meta::Title;
use log::warn;

use crate::components::path_editor::PathEditorBoard;
use crate::consts::{PATH_BOARD_FIELDS, PATH_ENTRY_PK_ID, SAVED_PATH_CELLS_ID};
use crate::page_data;

/// Draw paths on a board. Board, saved cells and the save target all come
/// from hidden inputs on the server page.
#[component]
pub fn PathEditorPage() -> impl IntoView {
	let Some(board) = page_data::read_board(&PATH_BOARD_FIELDS) else {
		warn!("Path page without an embedded board");
		return view! { <p class="error-message">"This board could not be loaded."</p> }
			.into_any();
	};
	let saved = page_data::input_value(SAVED_PATH_CELLS_ID)
		.map(|raw| page_data::parse_cells(&raw, "path"))
		.unwrap_or_default();
	let save_target = page_data::input_value(PATH_ENTRY_PK_ID);

	view! {
		<Title text={board.title.clone().unwrap_or_else(|| "Paths".to_owned())} />
		<PathEditorBoard board=board saved=saved save_target=save_target />
	}
	.into_any()
}
