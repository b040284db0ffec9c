pub mod app;
pub mod assistant;
pub mod atom;
pub mod chemistry;
pub mod config;
pub mod constants;
pub mod platform;
pub mod renderer;
pub mod table;
pub mod ui;
