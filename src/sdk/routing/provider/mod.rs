pub mod live;
pub mod synthetic;
pub mod types;

pub use live::GoogleDirectionsProvider;
pub use synthetic::SyntheticProvider;
