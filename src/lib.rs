//! Leptos client-side app for the game-board editor: board building,
//! path drawing, route point picking and live notifications.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use wasm_bindgen::prelude::wasm_bindgen;
#[cfg(test)]
use wasm_bindgen_test as _;

// Modules
mod components;
mod consts;
mod error;
mod net;
mod page_data;
mod pages;
mod types;

// Top-Level pages
use crate::components::notifications::NotificationToasts;
use crate::pages::board_editor::BoardEditorPage;
use crate::pages::path_editor::PathEditorPage;
use crate::pages::route_detail::RouteDetailPage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// WASM entry point: logging, then the app appended to `<body>` after the
/// server-rendered page.
#[wasm_bindgen(start)]
pub fn start() {
	init_logging();
	leptos::mount::mount_to_body(App);
}

/// Mounts the editor matching the current server page, plus the
/// notification toasts shown on every page.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Router>
			<Routes fallback=|| ()>
				<Route path=path!("/routes/gameboard") view=BoardEditorPage />
				<Route path=path!("/routes/gameboard/:pk") view=BoardEditorPage />
				<Route path=path!("/routes/path/:pk") view=PathEditorPage />
				<Route path=path!("/routes/route/:pk") view=RouteDetailPage />
				<Route path=path!("/routes/new-route") view=RouteDetailPage />
			</Routes>
		</Router>
		<NotificationToasts />
	}
}
