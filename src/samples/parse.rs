use serde_json::Value;

use super::Sample;

/// Keeps entries shaped `{ "angle": number, "acceleration": number }` and drops the rest.
/// A payload that is not an array yields no samples. The result is sorted by angle.
pub fn parse_samples(payload: &Value) -> Vec<Sample> {
    let Some(entries) = payload.as_array() else {
        return Vec::new();
    };

    let mut samples: Vec<Sample> = entries
        .iter()
        .filter_map(|entry| {
            let object = entry.as_object()?;
            let angle = object.get("angle")?.as_f64()?;
            let acceleration = object.get("acceleration")?.as_f64()?;
            Some(Sample::new(angle, acceleration))
        })
        .collect();

    samples.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_drops_malformed_entries() {
        let payload = json!([
            { "angle": 10, "acceleration": 1.5 },
            { "angle": "20", "acceleration": 2.0 },
            { "angle": 30 },
            null,
            42,
            { "angle": 40, "acceleration": null },
            { "angle": 50.5, "acceleration": -3, "extra": true },
        ]);

        assert_eq!(
            parse_samples(&payload),
            vec![Sample::new(10.0, 1.5), Sample::new(50.5, -3.0)]
        );
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(parse_samples(&json!({ "angle": 1, "acceleration": 2 })).is_empty());
        assert!(parse_samples(&json!(null)).is_empty());
        assert!(parse_samples(&json!("data")).is_empty());
    }

    #[test]
    fn test_sorted_by_angle() {
        let payload = json!([
            { "angle": 90, "acceleration": 10 },
            { "angle": -10, "acceleration": -1 },
            { "angle": 45, "acceleration": 7 },
        ]);
        let angles: Vec<f64> = parse_samples(&payload).iter().map(|s| s.angle).collect();
        assert_eq!(angles, vec![-10.0, 45.0, 90.0]);
    }
}
