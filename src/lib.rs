pub mod engine;
pub mod file;
pub mod overlay;
pub mod states;
