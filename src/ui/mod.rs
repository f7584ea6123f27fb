pub mod app;
pub mod render;

pub use app::{App, Field, run_app};
