use super::error::DashboardError;
use super::route::Route;

/// Reads the leading number of a duration such as "45 mins".
///
/// Only the first token is looked at, so "1 hour 5 mins" reads as 1.
/// Anything unparsable sorts last.
pub fn parse_duration_minutes(text: &str) -> f64 {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse::<f64>().ok())
        .unwrap_or(f64::INFINITY)
}

/// Picks the recommended route: lowest severity first, then the shortest
/// nominal duration. Ties go to the earlier route.
pub fn pick_best(routes: &[Route]) -> Result<(usize, &Route), DashboardError> {
    routes
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.congestion_label
                .severity_rank()
                .cmp(&b.congestion_label.severity_rank())
                .then_with(|| {
                    parse_duration_minutes(&a.duration_text)
                        .total_cmp(&parse_duration_minutes(&b.duration_text))
                })
        })
        .ok_or(DashboardError::EmptyInput)
}
