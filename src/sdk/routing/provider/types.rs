use serde::Deserialize;

// --- Directions API response schema. Every nested field may be absent. ---

#[derive(Deserialize, Debug, Default)]
pub struct DirectionsResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize, Debug, Default)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<Leg>,
    pub overview_polyline: Option<OverviewPolyline>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Leg {
    pub distance: Option<TextValue>,
    pub duration: Option<TextValue>,
    pub duration_in_traffic: Option<TextValue>,
}

/// The `{ "text": ..., "value": ... }` pairs used for distances and durations.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct TextValue {
    pub text: Option<String>,
    pub value: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OverviewPolyline {
    pub points: Option<String>,
}
