use super::*;

#[test]
fn percent_within_box() {
	assert_eq!(percent_within(150.0, 100.0, 200.0), 25.0);
	assert_eq!(percent_within(100.0, 100.0, 200.0), 0.0);
	assert_eq!(percent_within(300.0, 100.0, 200.0), 100.0);
}

#[test]
fn percent_of_empty_box_is_zero() {
	assert_eq!(percent_within(50.0, 0.0, 0.0), 0.0);
}

#[test]
fn input_values_are_rounded() {
	assert_eq!(input_percent(33.333), "33");
	assert_eq!(input_percent(66.5), "67");
	assert_eq!(input_percent(0.2), "0");
}

#[test]
fn hover_marker_lets_clicks_through() {
	assert!(HOVER_MARKER.click_through);
	assert!(!PICKED_MARKER.click_through);
	assert!(HOVER_MARKER.size_px > PICKED_MARKER.size_px);
}
