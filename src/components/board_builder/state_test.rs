use super::*;

fn draft() -> BoardDraft {
	let mut d = BoardDraft::default();
	d.generate("Board", "3", "4").unwrap();
	d
}

// =============================================================
// Generation
// =============================================================

#[test]
fn generate_sets_size_and_title() {
	let d = draft();
	assert_eq!(d.board.title.as_deref(), Some("Board"));
	assert_eq!((d.board.rows, d.board.cols), (3, 4));
	assert_eq!(d.board.cells().count(), 12);
}

#[test]
fn generate_rejects_zero_and_non_numeric_sizes() {
	let mut d = draft();
	assert_eq!(d.generate("x", "0", "4"), Err(BoardError::InvalidSize));
	assert_eq!(d.generate("x", "3", "abc"), Err(BoardError::InvalidSize));
	assert_eq!(d.generate("x", "", ""), Err(BoardError::InvalidSize));
	assert_eq!(d.generate("x", "-2", "3"), Err(BoardError::InvalidSize));
	assert_eq!((d.board.rows, d.board.cols), (3, 4));
}

#[test]
fn generate_reads_leading_digits_of_sizes() {
	let mut d = draft();
	d.generate("x", "3.5", "2cols").unwrap();
	assert_eq!((d.board.rows, d.board.cols), (3, 2));
	assert_eq!(d.generate("x", "0.9", "2"), Err(BoardError::InvalidSize));
}

#[test]
fn generate_clears_existing_dots() {
	let mut d = draft();
	d.select_color("red");
	d.toggle_dot(Cell::new(0, 0)).unwrap();
	d.generate("again", "2", "2").unwrap();
	assert!(d.board.dots.is_empty());
}

#[test]
fn invalid_size_message_is_user_facing() {
	assert_eq!(
		BoardError::InvalidSize.to_string(),
		"Invalid board size. Please enter valid numbers for rows and columns."
	);
}

// =============================================================
// Dot placement
// =============================================================

#[test]
fn placing_requires_a_color() {
	let mut d = draft();
	assert_eq!(d.toggle_dot(Cell::new(0, 0)), Err(BoardError::NoColorSelected));
	assert!(d.board.dots.is_empty());
}

#[test]
fn at_most_two_dots_per_color() {
	let mut d = draft();
	d.select_color("red");
	assert_eq!(d.toggle_dot(Cell::new(0, 0)), Ok(DotToggle::Placed));
	assert_eq!(d.toggle_dot(Cell::new(1, 1)), Ok(DotToggle::Placed));
	assert_eq!(d.toggle_dot(Cell::new(2, 2)), Err(BoardError::ColorFull));
	assert_eq!(d.board.dots_of_color("red"), 2);

	d.select_color("blue");
	assert_eq!(d.toggle_dot(Cell::new(2, 2)), Ok(DotToggle::Placed));
}

#[test]
fn clicking_a_dot_removes_it_without_a_color() {
	let mut board = draft().board;
	board.dots.push(Dot::new(1, 2, "green"));
	let mut d = BoardDraft::load(board);
	assert_eq!(d.toggle_dot(Cell::new(1, 2)), Ok(DotToggle::Removed));
	assert!(d.board.dots.is_empty());
}

#[test]
fn removal_frees_a_slot_for_the_color() {
	let mut d = draft();
	d.select_color("red");
	d.toggle_dot(Cell::new(0, 0)).unwrap();
	d.toggle_dot(Cell::new(0, 1)).unwrap();
	d.toggle_dot(Cell::new(0, 0)).unwrap();
	assert_eq!(d.toggle_dot(Cell::new(2, 3)), Ok(DotToggle::Placed));
}
