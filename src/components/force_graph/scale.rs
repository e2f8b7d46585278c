//! Node sizing and easing helpers.

/// Linear map of `value` from `[lo, hi]` onto `[min_r, max_r]`.
/// A flat range (or no value) gets the minimum radius.
pub fn scale_radius(value: Option<f64>, lo: f64, hi: f64, min_r: f64, max_r: f64) -> f64 {
	match value {
		Some(v) if hi > lo => min_r + (v.clamp(lo, hi) - lo) / (hi - lo) * (max_r - min_r),
		_ => min_r,
	}
}

/// Min/max over the present values, if any.
pub fn value_range(values: impl IntoIterator<Item = Option<f64>>) -> Option<(f64, f64)> {
	values.into_iter().flatten().fold(None, |acc, v| match acc {
		None => Some((v, v)),
		Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
	})
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn radius_spans_configured_range() {
		assert_eq!(scale_radius(Some(1.0), 1.0, 11.0, 7.0, 50.0), 7.0);
		assert_eq!(scale_radius(Some(11.0), 1.0, 11.0, 7.0, 50.0), 50.0);
		assert_eq!(scale_radius(Some(6.0), 1.0, 11.0, 10.0, 20.0), 15.0);
	}

	#[test]
	fn missing_or_flat_values_use_minimum() {
		assert_eq!(scale_radius(None, 1.0, 11.0, 7.0, 50.0), 7.0);
		assert_eq!(scale_radius(Some(3.0), 3.0, 3.0, 7.0, 50.0), 7.0);
	}

	#[test]
	fn range_skips_missing_values() {
		assert_eq!(value_range([Some(3.0), None, Some(-1.0), Some(8.0)]), Some((-1.0, 8.0)));
		assert_eq!(value_range([None, None]), None);
	}

	#[test]
	fn easing_endpoints() {
		assert_eq!(ease_out_cubic(0.0), 0.0);
		assert_eq!(ease_out_cubic(1.0), 1.0);
		assert!(ease_out_cubic(0.5) > 0.5);
	}
}
