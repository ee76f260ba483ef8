mod app;
mod effects;
mod input;
pub mod logging;
mod render;
mod speech;

pub use app::run;
