use super::route::CongestionLabel;

/// Delay, as a percentage of the nominal duration, at which a route stops
/// being `Low`.
pub const MODERATE_THRESHOLD_PCT: f64 = 10.0;
/// Delay percentage at which a route becomes `High`.
pub const HIGH_THRESHOLD_PCT: f64 = 40.0;

/// Labels a route by how much longer it takes in traffic than nominally.
///
/// Below 10% delay is `Low`, from 10% up to (not including) 40% is
/// `Moderate`, and 40% or more is `High`. Returns `Unavailable` when either
/// duration is missing or zero. Traffic faster than nominal gives a negative
/// delay and still counts as `Low`.
pub fn classify(nominal_seconds: u64, traffic_seconds: Option<u64>) -> CongestionLabel {
    let traffic_seconds = match traffic_seconds {
        Some(t) if t > 0 && nominal_seconds > 0 => t,
        _ => return CongestionLabel::Unavailable,
    };

    let nominal = nominal_seconds.max(1) as f64;
    let pct = 100.0 * (traffic_seconds as f64 - nominal_seconds as f64) / nominal;

    if pct < MODERATE_THRESHOLD_PCT {
        CongestionLabel::Low
    } else if pct < HIGH_THRESHOLD_PCT {
        CongestionLabel::Moderate
    } else {
        CongestionLabel::High
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_zero_is_unavailable() {
        assert_eq!(classify(100, None), CongestionLabel::Unavailable);
        assert_eq!(classify(0, Some(50)), CongestionLabel::Unavailable);
        assert_eq!(classify(100, Some(0)), CongestionLabel::Unavailable);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(classify(100, Some(109)), CongestionLabel::Low);
        assert_eq!(classify(100, Some(110)), CongestionLabel::Moderate);
        assert_eq!(classify(100, Some(139)), CongestionLabel::Moderate);
        assert_eq!(classify(100, Some(140)), CongestionLabel::High);
        assert_eq!(classify(100, Some(141)), CongestionLabel::High);
    }

    #[test]
    fn test_exactly_forty_percent_is_high() {
        assert_eq!(classify(10, Some(14)), CongestionLabel::High);
        assert_eq!(classify(1000, Some(1400)), CongestionLabel::High);
        assert_eq!(classify(5, Some(7)), CongestionLabel::High);
    }

    #[test]
    fn test_faster_than_nominal_is_low() {
        assert_eq!(classify(600, Some(300)), CongestionLabel::Low);
    }

    #[test]
    fn test_monotonic_in_traffic() {
        for nominal in [1_u64, 7, 60, 100, 1234, 7200] {
            let mut previous = 0;
            for traffic in 1..=(nominal * 3) {
                let rank = classify(nominal, Some(traffic)).severity_rank();
                assert!(
                    rank >= previous,
                    "severity dropped at nominal={} traffic={}",
                    nominal,
                    traffic
                );
                previous = rank;
            }
        }
    }
}
