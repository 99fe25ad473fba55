// Text, CSV and GeoJSON views of a route report.
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;

use super::dashboard::RouteReport;
use super::routing::{
    error::DashboardError,
    route::{Coord, Route},
};

const TABLE_HEADERS: [&str; 5] = [
    "Route",
    "Distance",
    "Duration",
    "Traffic Duration",
    "Congestion",
];

const ROUTE_LINE_WIDTH: u32 = 6;
const START_MARKER_COLOR: &str = "green";
const END_MARKER_COLOR: &str = "red";

/// One row of the route table.
#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(rename = "Route")]
    route: usize,
    #[serde(rename = "Distance")]
    distance: String,
    #[serde(rename = "Duration")]
    duration: String,
    #[serde(rename = "Traffic Duration")]
    traffic_duration: String,
    #[serde(rename = "Congestion")]
    congestion: String,
}

impl TableRow {
    fn cells(&self) -> [String; 5] {
        [
            self.route.to_string(),
            self.distance.clone(),
            self.duration.clone(),
            self.traffic_duration.clone(),
            self.congestion.clone(),
        ]
    }
}

fn table_rows(routes: &[Route]) -> Vec<TableRow> {
    routes
        .iter()
        .enumerate()
        .map(|(i, r)| TableRow {
            route: i + 1,
            distance: r.distance_text.clone(),
            duration: r.duration_text.clone(),
            traffic_duration: r.duration_in_traffic_text.clone(),
            congestion: format!("{} {}", r.congestion_label.icon(), r.congestion_label),
        })
        .collect()
}

/// Renders every route, with or without geometry, as an aligned text table.
pub fn render_table(routes: &[Route]) -> String {
    let rows: Vec<[String; 5]> = table_rows(routes).iter().map(TableRow::cells).collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_line(&header[..]), separator];
    lines.extend(rows.iter().map(|row| format_line(&row[..])));
    lines.join("\n")
}

/// The "best route" block. Shows the traffic-adjusted time even though the
/// ranking breaks ties on nominal duration.
pub fn render_recommendation(report: &RouteReport) -> Result<String, DashboardError> {
    let best = report.best_route().ok_or(DashboardError::EmptyInput)?;
    Ok(format!(
        "⭐ Best Route: Route {}\n- Distance: {}\n- Time: {}\n- Congestion: {}",
        report.best_index + 1,
        best.distance_text,
        best.duration_in_traffic_text,
        best.congestion_label
    ))
}

/// Writes the route table as CSV.
pub fn write_table_csv<W: Write>(routes: &[Route], writer: W) -> Result<(), DashboardError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in table_rows(routes) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn lng_lat((lat, lng): Coord) -> Value {
    json!([lng, lat])
}

fn marker(coord: Coord, tooltip: &str, color: &str) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": lng_lat(coord) },
        "properties": { "tooltip": tooltip, "marker-color": color },
    })
}

/// Builds the map view as a GeoJSON FeatureCollection: one coloured line per
/// route that has geometry, plus start and end markers on the first route.
pub fn map_geojson(report: &RouteReport) -> Value {
    let mut features = Vec::new();

    for (idx, route) in report.routes.iter().enumerate() {
        if !route.has_path() {
            continue;
        }
        let coordinates: Vec<Value> = route.path.iter().copied().map(lng_lat).collect();
        features.push(json!({
            "type": "Feature",
            "geometry": { "type": "LineString", "coordinates": coordinates },
            "properties": {
                "route": idx + 1,
                "stroke": route.display_color,
                "stroke-width": ROUTE_LINE_WIDTH,
                "popup": format!(
                    "Route {}: {} | {} | {}",
                    idx + 1,
                    route.distance_text,
                    route.duration_text,
                    route.congestion_label
                ),
            },
        }));

        if idx == 0 {
            if let (Some(&start), Some(&end)) = (route.path.first(), route.path.last()) {
                features.push(marker(start, "Start", START_MARKER_COLOR));
                features.push(marker(end, "End", END_MARKER_COLOR));
            }
        }
    }

    json!({
        "type": "FeatureCollection",
        "center": lng_lat(report.map_center),
        "requested_at": report.requested_at.to_rfc3339(),
        "features": features,
    })
}
