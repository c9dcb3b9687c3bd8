pub mod board_editor;
pub mod path_editor;
pub mod route_detail;
