pub mod component;
pub mod render;
pub mod state;
