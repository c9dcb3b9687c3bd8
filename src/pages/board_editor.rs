use leptos::prelude::*;
use leptos_meta::Title;
use log::info;

use crate::components::board_builder::BoardBuilder;
use crate::consts::BUILDER_BOARD_FIELDS;
use crate::page_data;

/// Create a new board, or edit the one the server embedded in the page.
#[component]
pub fn BoardEditorPage() -> impl IntoView {
	let initial = page_data::read_board(&BUILDER_BOARD_FIELDS);
	if let Some(board) = &initial {
		info!(
			"Loaded board with pk: {:?}, title: {:?}, rows: {}, cols: {}",
			board.pk, board.title, board.rows, board.cols
		);
	}

	view! {
		<Title text="Board editor" />
		<BoardBuilder initial=initial />
	}
}
