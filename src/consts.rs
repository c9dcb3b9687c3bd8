//! Endpoints, element ids and sizing shared across pages.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Endpoints ───────────────────────────────────────────────────

pub const BOARD_SAVE_URL: &str = "/routes/gameboard_save/";
pub const BOARDS_PAGE_URL: &str = "/routes/my_gameboards/";
pub const PATHS_PAGE_URL: &str = "/routes/my_paths/";
pub const NOTIFICATIONS_URL: &str = "/routes/sse/notifications/";

/// Save target for the committed paths of one board entry.
pub fn path_save_url(pk: &str) -> String {
	format!("/routes/path_save/{pk}/")
}

// ── Grid geometry ───────────────────────────────────────────────

/// Edge length of one grid cell in CSS pixels.
pub const CELL_SIZE: f64 = 80.0;
pub const PATH_STROKE_WIDTH: &str = "20";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";


pub const PALETTE: &[&str] = &[
	"red", "blue", "green", "yellow", "orange", "purple", "pink", "cyan", "brown", "lime",
];

// ── Timings ─────────────────────────────────────────────────────

pub const TOAST_DURATION_MS: u32 = 5000;
pub const POINT_MARKER_LINGER_MS: u32 = 500;

// ── Page-embedded data ──────────────────────────────────────────

/// Ids of the hidden inputs a server page uses to embed a board.
#[derive(Clone, Copy, Debug)]
pub struct BoardFields {
	pub form: &'static str,
	pub pk: &'static str,
	pub title: &'static str,
	pub rows: &'static str,
	pub cols: &'static str,
	pub dots: &'static str,
}

pub const BUILDER_BOARD_FIELDS: BoardFields = BoardFields {
	form: "hidden-form",
	pk: "hidden-pk",
	title: "hidden-title",
	rows: "hidden-rows",
	cols: "hidden-cols",
	dots: "hidden-dots",
};

pub const PATH_BOARD_FIELDS: BoardFields = BoardFields {
	form: "hidden-board-form",
	pk: "hidden-board-pk",
	title: "hidden-board-title",
	rows: "hidden-board-rows",
	cols: "hidden-board-cols",
	dots: "hidden-board-dots",
};

pub const SAVED_PATH_CELLS_ID: &str = "hidden-path-cells";
pub const PATH_ENTRY_PK_ID: &str = "hidden-path-pk";
pub const CSRF_SELECTOR: &str = "[name=csrfmiddlewaretoken]";

// ── Route map ───────────────────────────────────────────────────

pub const IMAGE_CONTAINER_ID: &str = "image-container";
pub const ROUTE_SVG_ID: &str = "route-svg";
pub const LAST_POINT_ID: &str = "last-point";
pub const POINT_X_INPUT_ID: &str = "id_x";
pub const POINT_Y_INPUT_ID: &str = "id_y";
pub const POINT_ITEM_SELECTOR: &str = ".point-item";
