pub mod config;
pub mod dashboard;
pub mod render;
pub mod routing;
pub mod util;
