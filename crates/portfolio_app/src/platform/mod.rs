mod app;
mod config;
mod document;
mod effects;
mod logging;
mod page;
mod presenter;

pub use app::run_app;
