use super::error::ProviderError;
use super::route::{Coord, Route, TravelMode};

pub trait RoutingProvider: Send + Sync {
    /// Returns the candidate routes between two free-text locations.
    fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError>;

    /// True when the routes are fabricated rather than fetched.
    fn is_synthetic(&self) -> bool {
        false
    }

    /// A map center this provider imposes regardless of the routes it returns.
    fn map_center(&self) -> Option<Coord> {
        None
    }
}
