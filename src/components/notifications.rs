//! Toasts for server-sent notifications.
//!
//! The server pushes named `newBoard` / `newPath` events on
//! `/routes/sse/notifications/`; each becomes a transient toast. A stream
//! error produces its own toast. Toasts dismiss themselves after a delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::{error, info, warn};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventSource, MessageEvent};

use crate::consts::{NOTIFICATIONS_URL, TOAST_DURATION_MS};
use crate::error::NotificationError;

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

const NOTIFICATION_EVENTS: [&str; 2] = ["newBoard", "newPath"];
const CONNECTION_LOST: &str = "⚠️ Connection to the SSE server lost.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
	NewBoard,
	NewPath,
	Error,
}

impl ToastKind {
	/// CSS modifier class next to `toast`.
	pub fn class(self) -> &'static str {
		match self {
			Self::NewBoard => "new-board",
			Self::NewPath => "new-path",
			Self::Error => "error",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
	pub id: u64,
	pub kind: ToastKind,
	pub message: String,
}

#[derive(Deserialize)]
struct NewBoard {
	creator_username: String,
	board_name: String,
}

#[derive(Deserialize)]
struct NewPath {
	user_username: String,
	board_name: String,
}

/// Toast text for a named server event carrying a JSON payload.
pub fn notification_message(
	event: &str,
	data: &str,
) -> Result<(ToastKind, String), NotificationError> {
	match event {
		"newBoard" => {
			let p: NewBoard = serde_json::from_str(data)?;
			Ok((
				ToastKind::NewBoard,
				format!(
					"🆕 {} has created a new board: {}.",
					p.creator_username, p.board_name
				),
			))
		}
		"newPath" => {
			let p: NewPath = serde_json::from_str(data)?;
			Ok((
				ToastKind::NewPath,
				format!(
					"📍 {} has entered: {} for the first time.",
					p.user_username, p.board_name
				),
			))
		}
		other => Err(NotificationError::UnknownEvent(other.to_owned())),
	}
}

fn subscribe(url: &str, push: impl Fn(ToastKind, String) + Copy + 'static) {
	let source = match EventSource::new(url) {
		Ok(source) => source,
		Err(e) => {
			error!("Could not open notification stream {url}: {e:?}");
			return;
		}
	};

	let on_open = Closure::<dyn FnMut(Event)>::new(|_: Event| {
		info!("SSE connection established");
	});
	let on_open_fn: &js_sys::Function = on_open.as_ref().unchecked_ref();
	source.set_onopen(Some(on_open_fn));
	on_open.forget();

	for event in NOTIFICATION_EVENTS {
		let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |ev: MessageEvent| {
			let data = ev.data().as_string().unwrap_or_default();
			match notification_message(event, &data) {
				Ok((kind, message)) => push(kind, message),
				Err(e) => warn!("Ignoring notification: {e}"),
			}
		});
		let _ = source.add_event_listener_with_callback(event, on_message.as_ref().unchecked_ref());
		on_message.forget();
	}

	let on_error = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
		error!("SSE connection error");
		push(ToastKind::Error, CONNECTION_LOST.to_owned());
	});
	source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
	on_error.forget();
}

#[component]
pub fn NotificationToasts(
	#[prop(default = NOTIFICATIONS_URL)] url: &'static str,
	#[prop(default = TOAST_DURATION_MS)] duration_ms: u32,
) -> impl IntoView {
	let toasts = RwSignal::new(Vec::<Toast>::new());
	let next_id = StoredValue::new(0_u64);

	let push = move |kind: ToastKind, message: String| {
		let id = next_id.get_value();
		next_id.set_value(id + 1);
		toasts.update(|t| t.push(Toast { id, kind, message }));
		Timeout::new(duration_ms, move || {
			toasts.update(|t| t.retain(|toast| toast.id != id));
		})
		.forget();
	};

	Effect::new(move |_| subscribe(url, push));

	view! {
		<div class="toast-host">
			<For
				each=move || toasts.get()
				key=|toast| toast.id
				children=move |toast: Toast| {
					view! { <div class={format!("toast {}", toast.kind.class())}>{toast.message}</div> }
				}
			/>
		</div>
	}
}
