use super::*;

#[test]
fn parses_dot_list() {
	let dots = parse_cells(r##"[{"row":1,"col":2,"color":"#ff0000"}]"##, "dots");
	assert_eq!(dots, vec![Dot::new(1, 2, "#ff0000")]);
}

#[test]
fn malformed_json_reads_as_empty() {
	assert!(parse_cells("not json", "dots").is_empty());
	assert!(parse_cells("", "path").is_empty());
	assert!(parse_cells(r#"{"row":1}"#, "path").is_empty());
}

#[test]
fn board_fields_parse_leniently() {
	let board = board_from_fields("12", "Cross", " 4 ", "5", "[]");
	assert_eq!(board.pk, Some(12));
	assert_eq!(board.title.as_deref(), Some("Cross"));
	assert_eq!((board.rows, board.cols), (4, 5));
	assert!(board.dots.is_empty());
}

#[test]
fn missing_pk_and_bad_sizes_fall_back() {
	let board = board_from_fields("", "", "x", "", "garbage");
	assert_eq!(board.pk, None);
	assert_eq!((board.rows, board.cols), (0, 0));
	assert!(board.dots.is_empty());
}

#[test]
fn leading_integer_ignores_trailing_text() {
	assert_eq!(parse_leading_u32("3.5"), Some(3));
	assert_eq!(parse_leading_u32(" +7 rows"), Some(7));
	assert_eq!(parse_leading_u32("12px"), Some(12));
	assert_eq!(parse_leading_u32("-2"), None);
	assert_eq!(parse_leading_u32(".5"), None);
	assert_eq!(parse_leading_u32(""), None);
}
