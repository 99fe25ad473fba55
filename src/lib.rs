pub mod sdk;

pub use sdk::config::ProviderConfig;
pub use sdk::dashboard::{handle_request, RouteQuery, RouteReport};
pub use sdk::routing::{
    classify, pick_best, CongestionLabel, DashboardError, GoogleDirectionsProvider, ProviderError,
    Route, RoutingProvider, SyntheticProvider, TravelMode,
};
