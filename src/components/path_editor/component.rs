use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use super::render::{self, DomSurface, HIGHLIGHT_CLASS, ListenerSet};
use super::state::{EditorState, PathEditor};
use crate::consts::{CELL_SIZE, PATHS_PAGE_URL};
use crate::net::api;
use crate::types::{Board, Cell, Dot};

type Editor = Rc<RefCell<Option<PathEditor<DomSurface>>>>;

fn grid_cell(grid: &Element, ev: &MouseEvent, rows: u32, cols: u32) -> Option<Cell> {
	let rect = grid.get_bounding_client_rect();
	render::cell_at(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
		rows,
		cols,
	)
}

#[component]
pub fn PathEditorBoard(
	board: Board,
	#[prop(default = Vec::new())] saved: Vec<Dot>,
	/// Path entry the committed cells are saved to.
	#[prop(into)]
	save_target: Option<String>,
) -> impl IntoView {
	let grid_ref = NodeRef::<leptos::html::Div>::new();
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let editor: Editor = Rc::new(RefCell::new(None));
	let listeners = StoredValue::new_local(ListenerSet::default());
	let drawing = RwSignal::new(false);
	let (rows, cols) = (board.rows, board.cols);

	let (editor_init, board_init) = (editor.clone(), board.clone());
	Effect::new(move |_| {
		let (Some(grid), Some(svg)) = (grid_ref.get(), svg_ref.get()) else {
			return;
		};
		if editor_init.borrow().is_some() {
			return;
		}
		let grid: Element = grid.into();
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("No document to attach the path editor to");
			return;
		};

		let surface = DomSurface::new(document.clone(), grid.clone(), svg.into());
		*editor_init.borrow_mut() =
			Some(PathEditor::new(board_init.clone(), surface).with_saved_paths(saved.clone()));
		info!("Path editor ready for a {rows}x{cols} board");

		let (editor_mm, grid_mm) = (editor_init.clone(), grid.clone());
		let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let Some(cell) = grid_cell(&grid_mm, &ev, rows, cols) else {
				return;
			};
			if let Some(ref mut ed) = *editor_mm.borrow_mut() {
				ed.pointer_move(cell);
			}
		});

		let editor_mu = editor_init.clone();
		let on_up = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			if let Some(ref mut ed) = *editor_mu.borrow_mut() {
				ed.pointer_up();
				drawing.set(*ed.state() != EditorState::Idle);
			}
		});

		// Native drag of dot elements would swallow the move events.
		let on_drag = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			ev.prevent_default();
		});

		listeners.update_value(|set| {
			set.add(&document, "mousemove", on_move);
			set.add(&document, "mouseup", on_up);
			set.add(&document, "dragstart", on_drag);
		});
	});

	on_cleanup(move || {
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			return;
		};
		listeners.try_update_value(|set| set.remove_all(&document));
	});

	let editor_md = editor.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(grid) = grid_ref.get() else {
			return;
		};
		let Some(cell) = grid_cell(&grid.into(), &ev, rows, cols) else {
			return;
		};
		if let Some(ref mut ed) = *editor_md.borrow_mut() {
			ed.pointer_down(cell);
			drawing.set(*ed.state() != EditorState::Idle);
		}
	};

	let editor_click = editor.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
			return;
		};
		if !target.class_list().contains(HIGHLIGHT_CLASS) {
			return;
		}
		let Some(color) = target.get_attribute("data-color") else {
			return;
		};
		if let Some(ref mut ed) = *editor_click.borrow_mut() {
			ed.highlight_click(&color);
		}
	};

	let editor_save = editor.clone();
	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let Some(pk) = save_target.clone() else {
			error!("No path entry to save to");
			return;
		};
		let paths = editor_save
			.borrow()
			.as_ref()
			.map(|ed| ed.paths().to_vec())
			.unwrap_or_default();
		wasm_bindgen_futures::spawn_local(async move {
			match api::save_paths(&pk, &paths).await {
				Ok(()) => {
					info!("Path saved successfully, redirecting...");
					api::navigate(PATHS_PAGE_URL);
				}
				Err(e) => {
					error!("Saving path failed: {e}");
					api::alert("Failed to save path. Please try again.");
				}
			}
		});
	};

	let cells = board
		.cells()
		.map(|cell| {
			let dot = board.dot_at(cell).map(|d| {
				view! {
					<div
						class="dot"
						style:background-color={d.color.clone()}
						style:grid-row-start={(d.row + 1).to_string()}
						style:grid-column-start={(d.col + 1).to_string()}
					/>
				}
			});
			view! {
				<div class="grid-cell" data-row={cell.row.to_string()} data-col={cell.col.to_string()}>
					{dot}
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="path-board" style="position: relative; display: inline-block;">
			<div
				node_ref=grid_ref
				id="grid-container"
				class="grid-container"
				class:drawing=move || drawing.get()
				style:display="grid"
				style:grid-template-columns={render::grid_template(cols)}
				style:grid-template-rows={render::grid_template(rows)}
				on:mousedown=on_mousedown
				on:click=on_click
			>
				{cells}
			</div>
			<svg
				node_ref=svg_ref
				class="path-svg"
				width={(cols as f64 * CELL_SIZE).to_string()}
				height={(rows as f64 * CELL_SIZE).to_string()}
				style="position: absolute; top: 0; left: 0; pointer-events: none;"
			></svg>
		</div>
		<form id="path-form" on:submit=on_submit>
			<button type="submit" class="btn">"Save paths"</button>
		</form>
	}
}
