use leptos::prelude::*;
use log::{debug, error, info};
use web_sys::MouseEvent;

use super::state::BoardDraft;
use crate::components::path_editor::grid_template;
use crate::consts::{BOARDS_PAGE_URL, PALETTE};
use crate::net::api;
use crate::types::{Board, Cell};

#[component]
pub fn BoardBuilder(#[prop(default = None)] initial: Option<Board>) -> impl IntoView {
	let loaded = initial.is_some();
	let draft = RwSignal::new(BoardDraft::load(initial.unwrap_or_default()));
	let error_message = RwSignal::new(String::new());

	let board = draft.get_untracked().board;
	let title = RwSignal::new(board.title.unwrap_or_default());
	let (rows, cols) = if loaded {
		(
			RwSignal::new(board.rows.to_string()),
			RwSignal::new(board.cols.to_string()),
		)
	} else {
		(RwSignal::new(String::new()), RwSignal::new(String::new()))
	};

	let on_generate = move |_: MouseEvent| {
		let mut next = draft.get_untracked();
		match next.generate(&title.get_untracked(), &rows.get_untracked(), &cols.get_untracked()) {
			Ok(()) => {
				info!(
					"Generating grid with {} rows and {} columns",
					next.board.rows, next.board.cols
				);
				draft.set(next);
				error_message.set(String::new());
			}
			Err(e) => error_message.set(e.to_string()),
		}
	};

	let toggle = move |cell: Cell| {
		let mut next = draft.get_untracked();
		match next.toggle_dot(cell) {
			Ok(outcome) => {
				debug!("{outcome:?} dot at {cell:?}");
				draft.set(next);
				error_message.set(String::new());
			}
			Err(e) => error_message.set(e.to_string()),
		}
	};

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let mut board = draft.get_untracked().board;
		board.title = Some(title.get_untracked());
		wasm_bindgen_futures::spawn_local(async move {
			match api::save_board(&board).await {
				Ok(()) => {
					info!("Board saved successfully, redirecting...");
					api::navigate(BOARDS_PAGE_URL);
				}
				Err(e) => {
					error!("Saving board failed: {e}");
					api::alert("Failed to save board. Please try again.");
				}
			}
		});
	};

	let palette = PALETTE
		.iter()
		.map(|&color| {
			view! {
				<button
					type="button"
					class="color-button"
					class:selected=move || draft.with(|d| d.color.as_deref() == Some(color))
					data-color=color
					style:background-color=color
					on:click=move |_| {
						draft.update(|d| d.select_color(color));
						debug!("Selected color: {color}");
					}
				/>
			}
		})
		.collect_view();

	let grid = move || {
		let board = draft.with(|d| d.board.clone());
		let cells = board
			.cells()
			.map(|cell| {
				let dot = board.dot_at(cell).map(|d| {
					view! {
						<div
							class="dot"
							style:background={d.color.clone()}
							style:grid-row-start={(d.row + 1).to_string()}
							style:grid-column-start={(d.col + 1).to_string()}
						/>
					}
				});
				view! {
					<div
						class="grid-cell"
						data-row={cell.row.to_string()}
						data-col={cell.col.to_string()}
						on:click=move |_| toggle(cell)
					>
						{dot}
					</div>
				}
			})
			.collect_view();
		view! {
			<div
				id="grid-container"
				class="grid-container"
				style:display="grid"
				style:grid-template-columns={grid_template(board.cols)}
				style:grid-template-rows={grid_template(board.rows)}
			>
				{cells}
			</div>
		}
	};

	view! {
		<form id="board-form" class="board-builder" on:submit=on_submit>
			<div class="board-settings">
				<input
					id="title"
					type="text"
					placeholder="Title"
					prop:value=move || title.get()
					on:input=move |ev| title.set(event_target_value(&ev))
				/>
				<input
					id="rows"
					type="number"
					min="1"
					placeholder="Rows"
					prop:value=move || rows.get()
					on:input=move |ev| rows.set(event_target_value(&ev))
				/>
				<input
					id="cols"
					type="number"
					min="1"
					placeholder="Columns"
					prop:value=move || cols.get()
					on:input=move |ev| cols.set(event_target_value(&ev))
				/>
				<button id="generate" type="button" on:click=on_generate>
					"Generate"
				</button>
			</div>
			<div class="palette">{palette}</div>
			<div id="error-message" class="error-message">
				{move || error_message.get()}
			</div>
			{grid}
			<button type="submit" class="btn">"Save board"</button>
		</form>
	}
}
