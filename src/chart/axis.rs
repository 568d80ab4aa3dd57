pub const DEFAULT_TICK_COUNT: usize = 6;

/// Min/max of `values`. A flat series is widened by its magnitude (or 1 at zero)
/// on both sides so the axis never collapses. No values yields [0, 1].
pub fn fit_domain<I>(values: I) -> [f64; 2]
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    if min == max {
        let delta = if min == 0.0 { 1.0 } else { min.abs() };
        return [min - delta, max + delta];
    }

    [min, max]
}

/// `count` evenly spaced ticks from min to max inclusive.
pub fn ticks(domain: [f64; 2], count: usize) -> Vec<f64> {
    let [min, max] = domain;
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            (0..count).map(|i| min + i as f64 * step).collect()
        }
    }
}

/// Axis label text, with precision chosen by magnitude.
pub fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude == 0.0 {
        "0".to_string()
    } else if magnitude >= 1000.0 {
        format!("{:.0}", n)
    } else if magnitude >= 100.0 {
        format!("{:.1}", n)
    } else if magnitude >= 1.0 {
        format!("{:.2}", n)
    } else {
        format!("{:.1e}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_domain_min_max() {
        assert_eq!(fit_domain([3.0, -2.0, 7.5]), [-2.0, 7.5]);
    }

    #[test]
    fn test_fit_domain_widens_flat_series() {
        assert_eq!(fit_domain([4.0, 4.0]), [0.0, 8.0]);
        assert_eq!(fit_domain([-2.0]), [-4.0, 0.0]);
        assert_eq!(fit_domain([0.0, 0.0]), [-1.0, 1.0]);
    }

    #[test]
    fn test_fit_domain_empty() {
        assert_eq!(fit_domain(std::iter::empty()), [0.0, 1.0]);
    }

    #[test]
    fn test_six_ticks_cover_domain() {
        assert_eq!(
            ticks([0.0, 360.0], DEFAULT_TICK_COUNT),
            vec![0.0, 72.0, 144.0, 216.0, 288.0, 360.0]
        );
        assert!(ticks([0.0, 1.0], 0).is_empty());
        assert_eq!(ticks([2.0, 9.0], 1), vec![2.0]);
    }

    #[test]
    fn test_format_number_by_magnitude() {
        assert_eq!(format_number(1234.4), "1234");
        assert_eq!(format_number(-250.26), "-250.3");
        assert_eq!(format_number(9.857), "9.86");
        assert_eq!(format_number(-1.0), "-1.00");
        assert_eq!(format_number(0.05), "5.0e-2");
        assert_eq!(format_number(0.0), "0");
    }
}
