use super::types::{DirectionsResponse, TextValue};
use crate::sdk::routing::congestion::classify;
use crate::sdk::routing::error::ProviderError;
use crate::sdk::routing::route::{
    color_for, Coord, Route, TravelMode, UNAVAILABLE_TEXT, UNKNOWN_TEXT,
};
use crate::sdk::routing::service::RoutingProvider;
use reqwest::blocking::Client;
use std::time::Duration;

pub const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// Country bias sent with every request.
pub const REGION: &str = "in";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Precision of the encoded overview polyline (1e-5 degrees).
const POLYLINE_PRECISION: u32 = 5;

/// Live-traffic directions from the Google Directions API.
pub struct GoogleDirectionsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDirectionsProvider {
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
            base_url: DIRECTIONS_URL.to_string(),
        })
    }

    /// Points the provider at another endpoint serving the same JSON shape.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl RoutingProvider for GoogleDirectionsProvider {
    fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError> {
        log::debug!(
            "[PROVIDER] Calling directions for \"{}\" -> \"{}\" ({})",
            origin,
            destination,
            mode
        );

        let response = match self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", origin),
                ("destination", destination),
                ("mode", mode.as_str()),
                ("key", self.api_key.as_str()),
                ("region", REGION),
                ("alternatives", "true"),
                ("departure_time", "now"),
            ])
            .send()
        {
            Ok(resp) => resp,
            Err(e) => {
                // the request URL carries the API key
                let e = e.without_url();
                log::error!(
                    "Failed to send GET request. URL: {}\nError: {}",
                    self.base_url,
                    e
                );
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text()?;

        let directions: DirectionsResponse = match serde_json::from_str(&text) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                log::error!(
                    "API returned non-success status: {}. Unparseable Body: {}",
                    status,
                    text
                );
                return Err(ProviderError::RawApiError {
                    status: status.as_u16(),
                    body: text,
                });
            }
            Err(e) => {
                log::error!(
                    "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                    self.base_url,
                    e,
                    text
                );
                return Err(e.into());
            }
        };

        routes_from_response(directions)
    }
}

/// Turns a parsed directions response into routes, classifying each one.
///
/// Only the first leg of every route is read.
pub fn routes_from_response(response: DirectionsResponse) -> Result<Vec<Route>, ProviderError> {
    let status = response.status.unwrap_or_default();
    if status != "OK" {
        let message = response
            .error_message
            .unwrap_or_else(|| format!("API Error: {}", status));
        return Err(ProviderError::Status { status, message });
    }

    let mut routes = Vec::with_capacity(response.routes.len());
    for (index, route) in response.routes.into_iter().enumerate() {
        let leg = route
            .legs
            .into_iter()
            .next()
            .ok_or(ProviderError::MalformedRoute { index })?;

        let distance = leg.distance.unwrap_or_default();
        let duration = leg.duration.unwrap_or_default();
        let in_traffic = leg.duration_in_traffic.unwrap_or_default();

        let duration_seconds = duration.value.unwrap_or(0);
        let duration_in_traffic_seconds = in_traffic.value;

        let encoded = route
            .overview_polyline
            .and_then(|p| p.points)
            .unwrap_or_default();

        routes.push(Route {
            distance_text: text_or(distance, UNKNOWN_TEXT),
            duration_text: text_or(duration, UNKNOWN_TEXT),
            duration_seconds,
            duration_in_traffic_text: text_or(in_traffic, UNAVAILABLE_TEXT),
            duration_in_traffic_seconds,
            congestion_label: classify(duration_seconds, duration_in_traffic_seconds),
            path: decode_path(&encoded)?,
            display_color: color_for(index),
        });
    }

    log::debug!("[PROVIDER] Directions returned {} route(s)", routes.len());
    Ok(routes)
}

fn text_or(pair: TextValue, fallback: &str) -> String {
    pair.text.unwrap_or_else(|| fallback.to_string())
}

/// Decodes an encoded polyline into (latitude, longitude) points. An empty
/// string means the route has no geometry.
pub fn decode_path(encoded: &str) -> Result<Vec<Coord>, ProviderError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    let line = polyline::decode_polyline(encoded, POLYLINE_PRECISION)
        .map_err(|e| ProviderError::Polyline(e.to_string()))?;
    // geo types store x = longitude, y = latitude
    Ok(line.0.into_iter().map(|c| (c.y, c.x)).collect())
}
