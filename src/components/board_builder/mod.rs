mod component;
mod state;

pub use component::BoardBuilder;
