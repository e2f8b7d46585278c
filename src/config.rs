//! Static configuration for the API client, the graph variants and the widgets.

use std::time::Duration;

/// Where the backend lives. Empty base means same-origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
	pub base_url: String,
}

/// Visual parameters for the canvas graph view.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStyle {
	pub radius_min: f64,
	pub radius_max: f64,
	pub edge_color: String,
	pub highlight_color: String,
	pub background: String,
	pub node_color: String,
	pub selected_color: String,
	pub font: String,
	pub font_size: f64,
}

/// Layout engine parameters. Physics only runs during a stabilization pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub stabilization_iterations: u32,
	pub iterations_per_frame: u32,
}

/// One graph explorer variant.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub title: String,
	pub dataset_url: String,
	pub panel_title: String,
	pub style: GraphStyle,
	pub physics: PhysicsConfig,
	/// Above this many visible nodes the redraw button refuses to run.
	pub stabilize_node_limit: usize,
	pub fit_delay: Duration,
	pub excluded_categories: Vec<String>,
	pub notice_duration: Duration,
}

impl GraphConfig {
	/// Co-authorship network of the curated author set.
	pub fn network() -> Self {
		Self {
			title: "Authors Network".into(),
			dataset_url: "static/authors.json".into(),
			panel_title: "Papers by".into(),
			style: GraphStyle {
				radius_min: 7.0,
				radius_max: 50.0,
				edge_color: "rgba(50, 133, 236, 0.3)".into(),
				highlight_color: "#c107fb".into(),
				background: "#ffffff".into(),
				node_color: "#97c2fc".into(),
				selected_color: "#c107fb".into(),
				font: "Helvetica Neue, Helvetica, Arial".into(),
				font_size: 14.0,
			},
			physics: PhysicsConfig {
				force_charge: 250.0,
				force_spring: 0.05,
				force_max: 100.0,
				node_speed: 3000.0,
				damping_factor: 0.9,
				stabilization_iterations: 50,
				iterations_per_frame: 5,
			},
			stabilize_node_limit: 200,
			fit_delay: Duration::from_millis(10),
			excluded_categories: vec!["cs.CV".into(), "cs.CL".into()],
			notice_duration: Duration::from_millis(2000),
		}
	}

	/// Larger network with every author that has at least one co-author.
	pub fn full_network() -> Self {
		let base = Self::network();
		Self {
			title: "Full Authors Network".into(),
			dataset_url: "static/authors_full.json".into(),
			panel_title: "Author papers".into(),
			style: GraphStyle {
				radius_min: 5.0,
				radius_max: 30.0,
				edge_color: "rgba(120, 120, 120, 0.2)".into(),
				font_size: 12.0,
				..base.style
			},
			physics: PhysicsConfig {
				force_charge: 400.0,
				force_spring: 0.03,
				..base.physics
			},
			..base
		}
	}
}

/// Graph explorer search box behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
	pub request_delay: Duration,
	pub max_suggestions: usize,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			request_delay: Duration::from_millis(100),
			max_suggestions: 10,
		}
	}
}

/// Voting widget behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct VotingConfig {
	pub min_query_len: usize,
	pub validation_notice: Duration,
	pub receipt_notice: Duration,
}

impl Default for VotingConfig {
	fn default() -> Self {
		Self {
			min_query_len: 2,
			validation_notice: Duration::from_millis(2000),
			receipt_notice: Duration::from_millis(3000),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_network_overrides_only_variant_constants() {
		let (base, full) = (GraphConfig::network(), GraphConfig::full_network());
		assert_ne!(base.dataset_url, full.dataset_url);
		assert_ne!(base.style.radius_max, full.style.radius_max);
		assert_ne!(base.style.edge_color, full.style.edge_color);
		assert_ne!(base.physics.force_charge, full.physics.force_charge);
		assert_eq!(base.stabilize_node_limit, full.stabilize_node_limit);
		assert_eq!(base.excluded_categories, full.excluded_categories);
		assert_eq!(base.style.highlight_color, full.style.highlight_color);
	}
}
