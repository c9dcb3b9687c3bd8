use super::*;

#[test]
fn path_save_url_targets_the_entry() {
	assert_eq!(path_save_url("7"), "/routes/path_save/7/");
	assert_eq!(path_save_url("120"), "/routes/path_save/120/");
}

#[test]
fn save_and_redirect_endpoints() {
	assert_eq!(BOARD_SAVE_URL, "/routes/gameboard_save/");
	assert_eq!(BOARDS_PAGE_URL, "/routes/my_gameboards/");
	assert_eq!(PATHS_PAGE_URL, "/routes/my_paths/");
}

#[test]
fn cells_are_eighty_pixels() {
	assert_eq!(CELL_SIZE, 80.0);
	assert_eq!(PATH_STROKE_WIDTH, "20");
}
