mod component;
mod render;
mod state;

pub use component::PathEditorBoard;
pub use render::grid_template;
