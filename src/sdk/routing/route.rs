use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// A geographic point as (latitude, longitude).
pub type Coord = (f64, f64);

/// Shown in place of a traffic-adjusted duration the provider did not return.
pub const UNAVAILABLE_TEXT: &str = "N/A";

/// Shown in place of a distance or duration the provider did not return.
pub const UNKNOWN_TEXT: &str = "unknown";

/// Colours assigned to routes by position. Purely cosmetic.
pub const ROUTE_PALETTE: [&str; 6] = ["blue", "green", "purple", "orange", "red", "cadetblue"];

pub fn color_for(index: usize) -> &'static str {
    ROUTE_PALETTE[index % ROUTE_PALETTE.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    /// The value sent as the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Walking => "walking",
            TravelMode::Bicycling => "bicycling",
            TravelMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CongestionLabel {
    Low,
    Moderate,
    High,
    Unavailable,
}

impl CongestionLabel {
    /// Ordering used when ranking routes. A route with no traffic data is
    /// treated as badly as a heavily congested one.
    pub fn severity_rank(&self) -> u8 {
        match self {
            CongestionLabel::Low => 0,
            CongestionLabel::Moderate => 1,
            CongestionLabel::High | CongestionLabel::Unavailable => 2,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CongestionLabel::Low => "🟢",
            CongestionLabel::Moderate => "🟡",
            CongestionLabel::High | CongestionLabel::Unavailable => "🔴",
        }
    }
}

impl fmt::Display for CongestionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CongestionLabel::Low => "Low",
            CongestionLabel::Moderate => "Moderate",
            CongestionLabel::High => "High",
            CongestionLabel::Unavailable => UNAVAILABLE_TEXT,
        };
        f.write_str(text)
    }
}

/// One candidate path between origin and destination, built fresh for each
/// request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub distance_text: String,
    pub duration_text: String,
    pub duration_seconds: u64,
    pub duration_in_traffic_text: String,
    pub duration_in_traffic_seconds: Option<u64>,
    pub congestion_label: CongestionLabel,
    /// Empty when the provider returned no geometry.
    pub path: Vec<Coord>,
    pub display_color: &'static str,
}

impl Route {
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}
