pub mod board_builder;
pub mod notifications;
pub mod path_editor;
pub mod route_map;
