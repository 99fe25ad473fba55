use crate::sdk::routing::error::ProviderError;
use crate::sdk::routing::route::{color_for, CongestionLabel, Coord, Route, TravelMode};
use crate::sdk::routing::service::RoutingProvider;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

/// Bangalore. Every synthetic route starts here and the map centers on it.
pub const DEMO_START: Coord = (12.9716, 77.5946);
/// Chennai.
pub const DEMO_END: Coord = (13.0827, 80.2707);

pub const POINTS_PER_ROUTE: usize = 20;
pub const MAX_JITTER_DEG: f64 = 0.05;

const LABELS: [CongestionLabel; 3] = [
    CongestionLabel::Low,
    CongestionLabel::Moderate,
    CongestionLabel::High,
];

/// Fabricates plausible routes when no API key is configured.
///
/// The requested origin and destination are not geocoded; all routes run
/// between [`DEMO_START`] and [`DEMO_END`]. Congestion labels are drawn at
/// random rather than derived from the generated durations.
pub struct SyntheticProvider<R = ChaCha8Rng> {
    rng: Mutex<R>,
}

impl SyntheticProvider<ChaCha8Rng> {
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// A provider whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SyntheticProvider<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SyntheticProvider<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> RoutingProvider for SyntheticProvider<R> {
    fn fetch_routes(
        &self,
        origin: &str,
        destination: &str,
        mode: TravelMode,
    ) -> Result<Vec<Route>, ProviderError> {
        log::debug!(
            "[SYNTHETIC] Generating demo routes for \"{}\" -> \"{}\" ({})",
            origin,
            destination,
            mode
        );
        // a poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let count = rng.gen_range(1..=3);
        Ok((0..count).map(|i| synthetic_route(&mut *rng, i)).collect())
    }

    fn is_synthetic(&self) -> bool {
        true
    }

    fn map_center(&self) -> Option<Coord> {
        Some(DEMO_START)
    }
}

fn synthetic_route<R: Rng + ?Sized>(rng: &mut R, index: usize) -> Route {
    let path = (0..POINTS_PER_ROUTE)
        .map(|j| {
            let frac = j as f64 / (POINTS_PER_ROUTE - 1) as f64;
            let lat = DEMO_START.0
                + (DEMO_END.0 - DEMO_START.0) * frac
                + rng.gen_range(-MAX_JITTER_DEG..=MAX_JITTER_DEG);
            let lng = DEMO_START.1
                + (DEMO_END.1 - DEMO_START.1) * frac
                + rng.gen_range(-MAX_JITTER_DEG..=MAX_JITTER_DEG);
            (lat, lng)
        })
        .collect();

    let base_seconds: u64 = rng.gen_range(1200..=7200);
    let multiplier: f64 = rng.gen_range(1.1..=2.5);
    let traffic_seconds = base_seconds as f64 * multiplier;
    let distance_km: u32 = rng.gen_range(50..=350);
    let congestion_label = *LABELS.choose(rng).unwrap_or(&CongestionLabel::Low);

    Route {
        distance_text: format!("{} km", distance_km),
        duration_text: format!("{} mins", base_seconds / 60),
        duration_seconds: base_seconds,
        duration_in_traffic_text: format!("{} mins", (traffic_seconds / 60.0) as u64),
        duration_in_traffic_seconds: Some(traffic_seconds as u64),
        congestion_label,
        path,
        display_color: color_for(index),
    }
}
