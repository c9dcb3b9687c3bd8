use super::*;

// =============================================================
// Cell adjacency
// =============================================================

#[test]
fn orthogonal_neighbours_are_adjacent() {
	let c = Cell::new(2, 2);
	assert!(c.is_adjacent(Cell::new(1, 2)));
	assert!(c.is_adjacent(Cell::new(3, 2)));
	assert!(c.is_adjacent(Cell::new(2, 1)));
	assert!(c.is_adjacent(Cell::new(2, 3)));
}

#[test]
fn diagonal_and_same_cell_are_not_adjacent() {
	let c = Cell::new(2, 2);
	assert!(!c.is_adjacent(Cell::new(3, 3)));
	assert!(!c.is_adjacent(Cell::new(1, 1)));
	assert!(!c.is_adjacent(c));
	assert!(!c.is_adjacent(Cell::new(2, 4)));
}

#[test]
fn adjacency_at_zero_edge_does_not_underflow() {
	assert!(Cell::new(0, 0).is_adjacent(Cell::new(0, 1)));
	assert!(!Cell::new(0, 0).is_adjacent(Cell::new(0, 2)));
}

// =============================================================
// Board
// =============================================================

fn board() -> Board {
	Board {
		pk: Some(3),
		title: Some("demo".into()),
		rows: 2,
		cols: 3,
		dots: vec![Dot::new(0, 0, "red"), Dot::new(1, 2, "red"), Dot::new(0, 2, "blue")],
	}
}

#[test]
fn dot_at_finds_by_coordinates() {
	let b = board();
	assert_eq!(b.dot_at(Cell::new(1, 2)).map(|d| d.color.as_str()), Some("red"));
	assert!(b.dot_at(Cell::new(1, 1)).is_none());
}

#[test]
fn contains_respects_extents() {
	let b = board();
	assert!(b.contains(Cell::new(1, 2)));
	assert!(!b.contains(Cell::new(2, 0)));
	assert!(!b.contains(Cell::new(0, 3)));
}

#[test]
fn cells_are_row_major() {
	let cells: Vec<Cell> = board().cells().collect();
	assert_eq!(cells.len(), 6);
	assert_eq!(cells[0], Cell::new(0, 0));
	assert_eq!(cells[3], Cell::new(1, 0));
}

#[test]
fn board_json_uses_wire_field_names() {
	let json = serde_json::to_value(board()).unwrap();
	assert_eq!(json["pk"], 3);
	assert_eq!(json["rows"], 2);
	assert_eq!(json["dots"][1]["col"], 2);
	assert_eq!(json["dots"][2]["color"], "blue");
}

#[test]
fn new_board_serializes_null_pk() {
	let json = serde_json::to_value(Board::default()).unwrap();
	assert!(json["pk"].is_null());
	assert!(json["title"].is_null());
}
