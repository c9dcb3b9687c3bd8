//! JSON POST helpers for the board and path save endpoints.
//!
//! Callers get a `Result` and decide how to surface failures; the pages
//! fall back to an alert dialog and stay put.

use gloo_net::http::Request;
use serde::Serialize;

use crate::consts::{BOARD_SAVE_URL, CSRF_SELECTOR, path_save_url};
use crate::error::ApiError;
use crate::types::{Board, Dot};

/// Value of the hidden `csrfmiddlewaretoken` field rendered by the server.
pub fn csrf_token() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let input = document.query_selector(CSRF_SELECTOR).ok()??;
	input.get_attribute("value")
}

async fn post_json<T: Serialize + ?Sized>(url: &str, body: &T) -> Result<(), ApiError> {
	let token = csrf_token().ok_or(ApiError::MissingCsrfToken)?;
	let resp = Request::post(url)
		.header("X-CSRFToken", &token)
		.json(body)?
		.send()
		.await?;
	if !resp.ok() {
		let body = resp.text().await.unwrap_or_default();
		return Err(ApiError::Status {
			status: resp.status(),
			body,
		});
	}
	Ok(())
}

/// Create or update a board via `POST /routes/gameboard_save/`.
pub async fn save_board(board: &Board) -> Result<(), ApiError> {
	post_json(BOARD_SAVE_URL, board).await
}

/// Replace the stored paths of path entry `pk` with `paths`.
pub async fn save_paths(pk: &str, paths: &[Dot]) -> Result<(), ApiError> {
	post_json(&path_save_url(pk), paths).await
}

pub fn navigate(url: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.location().set_href(url);
	}
}

pub fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}
