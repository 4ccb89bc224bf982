use activity_metrics_scenario_processor::aggregation::TARGET_RANGE_WIDTH;
use activity_metrics_utils::numbers::round_to;

/// Used for target buckets that have no sampled colour.
pub const FALLBACK_COLOR: &str = "#636efa";

/// Bucket lower bounds, deduplicated and ascending.
pub fn target_buckets(target_mins: &[u32]) -> Vec<u32> {
    let mut buckets = target_mins.to_vec();
    buckets.sort_unstable();
    buckets.dedup();
    buckets
}

pub fn bucket_label(target_min: u32) -> String {
    format!("{}-{}", target_min, target_min + TARGET_RANGE_WIDTH as u32)
}

/// Linearly interpolated colour of an evenly spaced scale at `point` in [0, 1].
pub fn sample_color(scale: &[[f64; 3]], point: f64) -> Option<String> {
    let (first, last) = (scale.first()?, scale.last()?);
    let point = point.clamp(0.0, 1.0);
    let rgb = if scale.len() == 1 || point == 0.0 {
        *first
    } else if point == 1.0 {
        *last
    } else {
        let position = point * (scale.len() - 1) as f64;
        let index = position.floor() as usize;
        let fraction = position - index as f64;
        let (low, high) = (scale[index], scale[(index + 1).min(scale.len() - 1)]);
        [0, 1, 2].map(|channel| low[channel] + fraction * (high[channel] - low[channel]))
    };
    Some(format!(
        "rgb({}, {}, {})",
        round_to(rgb[0], 2),
        round_to(rgb[1], 2),
        round_to(rgb[2], 2)
    ))
}

/// `(bucket label, colour)` pairs, in bucket order. Buckets beyond the
/// number of sample points get [`FALLBACK_COLOR`].
pub fn target_color_map(target_mins: &[u32], scale: &[[f64; 3]], sample_points: &[f64]) -> Vec<(String, String)> {
    target_buckets(target_mins)
        .into_iter()
        .enumerate()
        .map(|(index, target_min)| {
            let color = sample_points
                .get(index)
                .and_then(|point| sample_color(scale, *point))
                .unwrap_or_else(|| FALLBACK_COLOR.to_owned());
            (bucket_label(target_min), color)
        })
        .collect()
}
