// Request handling: one submitted query in, one complete report out.
use chrono::{DateTime, Local};
use serde::Serialize;

use super::routing::{
    error::DashboardError,
    ranking::pick_best,
    route::{Coord, Route, TravelMode},
    service::RoutingProvider,
};

/// Center of India, used when no route carries any geometry.
pub const DEFAULT_MAP_CENTER: Coord = (20.5937, 78.9629);

/// A validated user submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteQuery {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
}

impl RouteQuery {
    /// Rejects blank (or whitespace-only) origin and destination.
    pub fn new(origin: &str, destination: &str, mode: TravelMode) -> Result<Self, DashboardError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() {
            return Err(DashboardError::MissingInput("start location"));
        }
        if destination.is_empty() {
            return Err(DashboardError::MissingInput("destination"));
        }
        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            mode,
        })
    }
}

/// Everything needed to render one request's table, map and recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub query: RouteQuery,
    pub routes: Vec<Route>,
    /// Index into `routes` of the recommended route.
    pub best_index: usize,
    pub map_center: Coord,
    pub synthetic: bool,
    pub requested_at: DateTime<Local>,
}

impl RouteReport {
    /// The recommended route, or `None` if `best_index` is out of range.
    pub fn best_route(&self) -> Option<&Route> {
        self.routes.get(self.best_index)
    }
}

/// Runs the whole pipeline for one query. Either every step succeeds and a
/// report comes back, or the first error does.
pub fn handle_request(
    provider: &dyn RoutingProvider,
    query: &RouteQuery,
) -> Result<RouteReport, DashboardError> {
    let requested_at = Local::now();
    log::info!(
        "Fetching {} routes from \"{}\" to \"{}\"",
        query.mode,
        query.origin,
        query.destination
    );

    let routes = provider.fetch_routes(&query.origin, &query.destination, query.mode)?;
    let (best_index, _) = pick_best(&routes)?;
    let map_center = provider
        .map_center()
        .unwrap_or_else(|| center_of(&routes));

    log::info!(
        "Found {} route(s); recommending route {}",
        routes.len(),
        best_index + 1
    );

    Ok(RouteReport {
        query: query.clone(),
        routes,
        best_index,
        map_center,
        synthetic: provider.is_synthetic(),
        requested_at,
    })
}

/// Middle point of the first route that has a path.
pub fn center_of(routes: &[Route]) -> Coord {
    routes
        .iter()
        .find(|r| r.has_path())
        .map(|r| r.path[r.path.len() / 2])
        .unwrap_or(DEFAULT_MAP_CENTER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::{
        error::ProviderError,
        provider::SyntheticProvider,
        route::{color_for, CongestionLabel},
    };

    struct StubProvider {
        routes: Vec<Route>,
    }

    impl RoutingProvider for StubProvider {
        fn fetch_routes(
            &self,
            _origin: &str,
            _destination: &str,
            _mode: TravelMode,
        ) -> Result<Vec<Route>, ProviderError> {
            Ok(self.routes.clone())
        }
    }

    struct FailingProvider;

    impl RoutingProvider for FailingProvider {
        fn fetch_routes(
            &self,
            _origin: &str,
            _destination: &str,
            _mode: TravelMode,
        ) -> Result<Vec<Route>, ProviderError> {
            Err(ProviderError::Status {
                status: "NOT_FOUND".to_string(),
                message: "API Error: NOT_FOUND".to_string(),
            })
        }
    }

    fn route(index: usize, label: CongestionLabel, duration: &str, path: Vec<Coord>) -> Route {
        Route {
            distance_text: "8 km".to_string(),
            duration_text: duration.to_string(),
            duration_seconds: 900,
            duration_in_traffic_text: "N/A".to_string(),
            duration_in_traffic_seconds: None,
            congestion_label: label,
            path,
            display_color: color_for(index),
        }
    }

    fn query() -> RouteQuery {
        RouteQuery::new("MG Road, Bangalore", "Majestic, Bangalore", TravelMode::Driving)
            .expect("valid query")
    }

    #[test]
    fn test_blank_inputs_are_rejected() {
        assert!(matches!(
            RouteQuery::new("", "Majestic", TravelMode::Driving),
            Err(DashboardError::MissingInput(_))
        ));
        assert!(matches!(
            RouteQuery::new("MG Road", "   ", TravelMode::Walking),
            Err(DashboardError::MissingInput(_))
        ));
    }

    #[test]
    fn test_query_is_trimmed() {
        let q = RouteQuery::new("  MG Road ", "Majestic\n", TravelMode::Transit).expect("valid");
        assert_eq!(q.origin, "MG Road");
        assert_eq!(q.destination, "Majestic");
    }

    #[test]
    fn test_empty_provider_result_is_empty_input() {
        let provider = StubProvider { routes: vec![] };
        assert!(matches!(
            handle_request(&provider, &query()),
            Err(DashboardError::EmptyInput)
        ));
    }

    #[test]
    fn test_provider_failure_yields_no_report() {
        let err = handle_request(&FailingProvider, &query()).unwrap_err();
        assert!(matches!(err, DashboardError::Provider(_)));
        assert!(err.to_string().contains("NOT_FOUND"));
    }

    #[test]
    fn test_report_picks_best_and_centers_on_first_path() {
        let provider = StubProvider {
            routes: vec![
                route(0, CongestionLabel::Moderate, "20 mins", vec![]),
                route(
                    1,
                    CongestionLabel::Low,
                    "25 mins",
                    vec![(12.0, 77.0), (12.5, 77.5), (13.0, 78.0)],
                ),
            ],
        };
        let report = handle_request(&provider, &query()).expect("report");
        assert_eq!(report.best_index, 1);
        assert_eq!(
            report.best_route().map(|r| r.duration_text.as_str()),
            Some("25 mins")
        );
        assert_eq!(report.map_center, (12.5, 77.5));
        assert!(!report.synthetic);
    }

    #[test]
    fn test_no_geometry_falls_back_to_default_center() {
        let routes = vec![route(0, CongestionLabel::Low, "5 mins", vec![])];
        assert_eq!(center_of(&routes), DEFAULT_MAP_CENTER);
    }

    #[test]
    fn test_synthetic_report_uses_demo_center() {
        let provider = SyntheticProvider::seeded(3);
        let report = handle_request(&provider, &query()).expect("report");
        assert!(report.synthetic);
        assert_eq!(report.map_center, provider.map_center().expect("demo center"));
        assert!(report.best_index < report.routes.len());
    }
}
