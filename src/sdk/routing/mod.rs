pub mod congestion;
pub mod error;
pub mod provider;
pub mod ranking;
pub mod route;
pub mod service;

pub use congestion::classify;
pub use error::{DashboardError, ProviderError};
// provider/mod.rs re-exports both strategies
pub use provider::{GoogleDirectionsProvider, SyntheticProvider};
pub use ranking::{parse_duration_minutes, pick_best};
pub use route::{CongestionLabel, Coord, Route, TravelMode};
pub use service::RoutingProvider;
