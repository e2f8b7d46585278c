use std::collections::{HashMap, HashSet};

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ease_out_cubic, scale_radius, value_range};
use super::types::GraphData;
use crate::config::{GraphStyle, PhysicsConfig};

/// Extra world-space radius accepted around a node when hit testing.
pub const HIT_SLOP: f64 = 3.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
/// Pointer travel (screen px) below which a press counts as a click.
const CLICK_SLOP: f64 = 3.0;
const FOCUS_SCALE: f64 = 1.0;
const FOCUS_SECONDS: f64 = 0.5;
const FIT_PADDING: f64 = 0.9;
const STEP_DT: f32 = 0.016;
/// pi * (3 - sqrt 5)
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	fn centered(width: f64, height: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			k: 1.0,
		}
	}

	fn lerp(&self, to: &Self, t: f64) -> Self {
		Self {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

#[derive(Clone, Debug)]
struct CameraAnimation {
	from: ViewTransform,
	to: ViewTransform,
	t: f64,
}

/// What a released pointer amounted to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerRelease {
	/// Press and release without travel; `None` means the background.
	Click(Option<DefaultNodeIdx>),
	Moved,
	Idle,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub style: GraphStyle,
	physics: PhysicsConfig,
	ids: HashMap<String, DefaultNodeIdx>,
	names: HashMap<DefaultNodeIdx, String>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	selected: Vec<DefaultNodeIdx>,
	camera: Option<CameraAnimation>,
	stabilizing: Option<u32>,
	pointer_moved: bool,
}

/// Start position of the `i`th node that has no stored position. Seeds
/// follow a sunflower spiral, so the disc grows with the node count and
/// neighbouring seeds stay about `spacing` apart.
pub fn seed_position(i: usize, spacing: f64) -> (f64, f64) {
	let r = spacing * (i as f64 + 0.5).sqrt();
	let angle = i as f64 * GOLDEN_ANGLE;
	(r * angle.cos(), r * angle.sin())
}

fn simulation(physics: &PhysicsConfig) -> SimulationParameters {
	SimulationParameters {
		force_charge: physics.force_charge,
		force_spring: physics.force_spring,
		force_max: physics.force_max,
		node_speed: physics.node_speed,
		damping_factor: physics.damping_factor,
	}
}

impl ForceGraphState {
	pub fn new(
		data: &GraphData,
		style: GraphStyle,
		physics: PhysicsConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(simulation(&physics)),
			transform: ViewTransform::centered(width, height),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			style,
			physics,
			ids: HashMap::new(),
			names: HashMap::new(),
			edges: Vec::new(),
			selected: Vec::new(),
			camera: None,
			stabilizing: None,
			pointer_moved: false,
		};
		state.set_data(data);
		state
	}

	/// Swap in a new node/edge set. Known nodes keep their positions and
	/// selection; links with an endpoint outside the node set are skipped.
	pub fn set_data(&mut self, data: &GraphData) {
		let mut previous = HashMap::new();
		self.graph.visit_nodes(|node| {
			previous.insert(
				node.data.user_data.id.clone(),
				(node.x(), node.y(), node.data.is_anchor),
			);
		});
		let selected = self.selected_ids();

		let range = value_range(data.nodes.iter().map(|n| n.value));
		let mut graph = ForceGraph::new(simulation(&self.physics));
		let (mut ids, mut names, mut edges) = (HashMap::new(), HashMap::new(), Vec::new());

		let spacing = 2.0 * self.style.radius_max;
		let mut seeded = 0;
		for node in &data.nodes {
			let (x, y, is_anchor) = previous.get(&node.id).copied().unwrap_or_else(|| {
				match (node.x, node.y) {
					(Some(x), Some(y)) => (x as f32, y as f32, false),
					_ => {
						let (x, y) = seed_position(seeded, spacing);
						seeded += 1;
						(x as f32, y as f32, false)
					}
				}
			});
			let radius = range.map_or(self.style.radius_min, |(lo, hi)| {
				scale_radius(node.value, lo, hi, self.style.radius_min, self.style.radius_max)
			});

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					radius,
				},
			});
			ids.insert(node.id.clone(), idx);
			names.insert(idx, node.id.clone());
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (ids.get(&link.source), ids.get(&link.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		self.graph = graph;
		self.selected = selected.iter().filter_map(|id| ids.get(id).copied()).collect();
		self.ids = ids;
		self.names = names;
		self.edges = edges;
		self.hover = HoverState::default();
		self.drag = DragState::default();
	}

	pub fn node_count(&self) -> usize {
		self.ids.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.ids.get(id).copied()
	}

	pub fn id_of(&self, idx: DefaultNodeIdx) -> Option<&str> {
		self.names.get(&idx).map(String::as_str)
	}

	pub fn position_of(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < node.data.user_data.radius + HIT_SLOP {
				found = Some(node.index());
			}
		});
		found
	}

	// Selection

	pub fn selected_ids(&self) -> Vec<String> {
		self.selected
			.iter()
			.filter_map(|&idx| self.id_of(idx).map(str::to_owned))
			.collect()
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selected.contains(&idx)
	}

	/// Replace the selection with the known ids. Returns how many matched.
	pub fn select(&mut self, ids: &[String]) -> usize {
		self.selected = ids.iter().filter_map(|id| self.index_of(id)).collect();
		self.selected.len()
	}

	/// Apply a user click. Returns the new selection when a node was hit.
	pub fn click(&mut self, target: Option<DefaultNodeIdx>, additive: bool) -> Option<Vec<String>> {
		let Some(idx) = target else {
			self.selected.clear();
			return None;
		};
		if !additive {
			self.selected.clear();
		}
		if let Some(pos) = self.selected.iter().position(|&s| s == idx) {
			self.selected.remove(pos);
		} else {
			self.selected.push(idx);
		}
		Some(self.selected_ids())
	}

	// Camera

	/// Animate the camera to center `id` at scale 1. False if unknown.
	pub fn focus(&mut self, id: &str) -> bool {
		let Some((nx, ny)) = self.index_of(id).and_then(|idx| self.position_of(idx)) else {
			return false;
		};
		let to = ViewTransform {
			x: self.width / 2.0 - nx * FOCUS_SCALE,
			y: self.height / 2.0 - ny * FOCUS_SCALE,
			k: FOCUS_SCALE,
		};
		self.camera = Some(CameraAnimation {
			from: self.transform.clone(),
			to,
			t: 0.0,
		});
		true
	}

	/// Zoom and center so every node is in view.
	pub fn fit(&mut self) {
		self.camera = None;
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (x, y, r) = (node.x() as f64, node.y() as f64, node.data.user_data.radius);
			bounds = Some(match bounds {
				None => (x - r, y - r, x + r, y + r),
				Some((x0, y0, x1, y1)) => (x0.min(x - r), y0.min(y - r), x1.max(x + r), y1.max(y + r)),
			});
		});
		let Some((x0, y0, x1, y1)) = bounds else {
			self.transform = ViewTransform::centered(self.width, self.height);
			return;
		};
		let (bw, bh) = ((x1 - x0).max(1.0), (y1 - y0).max(1.0));
		let k = ((self.width / bw).min(self.height / bh) * FIT_PADDING).clamp(MIN_ZOOM, MAX_ZOOM);
		let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	/// Wheel zoom around the pointer.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, delta_y: f64) {
		if delta_y == 0.0 {
			return;
		}
		self.camera = None;
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	// Pointer

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		self.pointer_moved = false;
		if let Some(idx) = self.node_at_position(sx, sy) {
			let (nx, ny) = self.position_of(idx).unwrap_or_default();
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: sx,
				start_y: sy,
				node_start_x: nx as f32,
				node_start_y: ny as f32,
			};
		} else {
			self.camera = None;
			self.pan = PanState {
				active: true,
				start_x: sx,
				start_y: sy,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		if !self.drag.active {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
		}

		let (ox, oy) = if self.drag.active {
			(self.drag.start_x, self.drag.start_y)
		} else {
			(self.pan.start_x, self.pan.start_y)
		};
		if (self.drag.active || self.pan.active)
			&& ((sx - ox).powi(2) + (sy - oy).powi(2)).sqrt() > CLICK_SLOP
		{
			self.pointer_moved = true;
		}
		if !self.pointer_moved {
			return;
		}

		if let (true, Some(idx)) = (self.drag.active, self.drag.node_idx) {
			let k = self.transform.k;
			let (nx, ny) = (
				self.drag.node_start_x + ((sx - self.drag.start_x) / k) as f32,
				self.drag.node_start_y + ((sy - self.drag.start_y) / k) as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		}
	}

	pub fn pointer_up(&mut self) -> PointerRelease {
		let release = match (self.drag.active, self.pan.active, self.pointer_moved) {
			(false, false, _) => PointerRelease::Idle,
			(_, _, true) => PointerRelease::Moved,
			(true, _, false) => PointerRelease::Click(self.drag.node_idx),
			(false, true, false) => PointerRelease::Click(None),
		};
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.pointer_moved = false;
		release
	}

	pub fn pointer_leave(&mut self) {
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.pointer_moved = false;
		self.set_hover(None);
	}

	// Hover

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}

	// Layout

	pub fn start_stabilization(&mut self) {
		self.stabilizing = Some(self.physics.stabilization_iterations);
	}

	pub fn is_stabilizing(&self) -> bool {
		self.stabilizing.is_some()
	}

	/// Advance a running stabilization pass and the camera by `dt` seconds.
	/// Physics only moves during a pass. Returns true on the frame the pass
	/// completes.
	pub fn tick(&mut self, dt: f64) -> bool {
		let mut settled = false;
		if let Some(remaining) = self.stabilizing {
			let steps = remaining.min(self.physics.iterations_per_frame.max(1));
			for _ in 0..steps {
				self.graph.update(STEP_DT);
			}
			if remaining == steps {
				self.stabilizing = None;
				settled = true;
			} else {
				self.stabilizing = Some(remaining - steps);
			}
		}

		if let Some(camera) = self.camera.as_mut() {
			camera.t = (camera.t + dt / FOCUS_SECONDS).min(1.0);
			self.transform = camera.from.lerp(&camera.to, ease_out_cubic(camera.t));
			if camera.t >= 1.0 {
				self.camera = None;
			}
		}
		settled
	}

	/// Follow a canvas resize, keeping the same graph point at the center.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::{GraphLink, GraphNode};
	use crate::config::GraphConfig;

	fn node(id: &str, x: f64, y: f64, value: f64) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: Some(id.into()),
			value: Some(value),
			x: Some(x),
			y: Some(y),
		}
	}

	fn link(a: &str, b: &str) -> GraphLink {
		GraphLink {
			source: a.into(),
			target: b.into(),
		}
	}

	fn data() -> GraphData {
		GraphData {
			nodes: vec![
				node("a", 0.0, 0.0, 1.0),
				node("b", 200.0, 0.0, 5.0),
				node("c", 0.0, 200.0, 3.0),
			],
			links: vec![link("a", "b"), link("b", "c"), link("c", "ghost")],
		}
	}

	fn state() -> ForceGraphState {
		let config = GraphConfig::network();
		ForceGraphState::new(&data(), config.style, config.physics, 800.0, 600.0)
	}

	#[test]
	fn builds_nodes_and_drawable_edges() {
		let s = state();
		assert_eq!(s.node_count(), 3);
		assert_eq!(s.edge_count(), 2);
		let b = s.index_of("b").unwrap();
		assert_eq!(s.position_of(b), Some((200.0, 0.0)));
		assert_eq!(s.id_of(b), Some("b"));
	}

	#[test]
	fn radius_scales_with_value() {
		let s = state();
		let mut radii = HashMap::new();
		s.graph.visit_nodes(|n| {
			radii.insert(n.data.user_data.id.clone(), n.data.user_data.radius);
		});
		assert_eq!(radii["a"], 7.0);
		assert_eq!(radii["b"], 50.0);
		assert!(radii["c"] > 7.0 && radii["c"] < 50.0);
	}

	#[test]
	fn hit_test_uses_transform() {
		let s = state();
		assert_eq!(s.node_at_position(400.0, 300.0), s.index_of("a"));
		assert_eq!(s.node_at_position(600.0, 300.0), s.index_of("b"));
		assert_eq!(s.node_at_position(500.0, 450.0), None);
	}

	#[test]
	fn set_data_keeps_positions_and_selection() {
		let mut s = state();
		assert_eq!(s.select(&["b".into(), "c".into(), "zzz".into()]), 2);

		let mut moved = data();
		moved.nodes[1].x = Some(-500.0);
		moved.nodes.remove(2);
		s.set_data(&moved);

		assert_eq!(s.node_count(), 2);
		assert_eq!(s.edge_count(), 1);
		assert_eq!(s.position_of(s.index_of("b").unwrap()), Some((200.0, 0.0)));
		assert_eq!(s.selected_ids(), vec!["b".to_string()]);
	}

	fn unplaced(id: String) -> GraphNode {
		GraphNode {
			id,
			label: None,
			value: None,
			x: None,
			y: None,
		}
	}

	#[test]
	fn nodes_without_position_are_seeded_apart() {
		let config = GraphConfig::network();
		let min_gap = 2.0 * config.style.radius_min;
		let data = GraphData {
			nodes: (0..300).map(|i| unplaced(format!("n{i}"))).collect(),
			links: vec![],
		};
		let s = ForceGraphState::new(&data, config.style, config.physics, 800.0, 600.0);
		let seeds: Vec<(f64, f64)> = (0..300)
			.map(|i| s.position_of(s.index_of(&format!("n{i}")).unwrap()).unwrap())
			.collect();
		for (i, a) in seeds.iter().enumerate() {
			for b in &seeds[i + 1..] {
				let d = ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt();
				assert!(d >= min_gap, "seeds {a:?} and {b:?} are {d} apart");
			}
		}
	}

	#[test]
	fn seeded_disc_grows_with_node_count() {
		let spread = |n: usize| {
			(0..n)
				.map(|i| {
					let (x, y) = seed_position(i, 20.0);
					(x * x + y * y).sqrt()
				})
				.fold(0.0, f64::max)
		};
		assert!(spread(300) > 3.0 * spread(30));
	}

	#[test]
	fn placed_nodes_do_not_consume_seed_slots() {
		let config = GraphConfig::network();
		let data = GraphData {
			nodes: vec![node("a", 0.0, 0.0, 1.0), unplaced("solo".into())],
			links: vec![],
		};
		let s = ForceGraphState::new(&data, config.style.clone(), config.physics, 800.0, 600.0);
		let (x, y) = seed_position(0, 2.0 * config.style.radius_max);
		assert_eq!(
			s.position_of(s.index_of("solo").unwrap()),
			Some((x as f32 as f64, y as f32 as f64))
		);
	}

	#[test]
	fn click_selects_and_ctrl_click_extends() {
		let mut s = state();
		let (a, b) = (s.index_of("a"), s.index_of("b"));
		assert_eq!(s.click(a, false), Some(vec!["a".to_string()]));
		assert_eq!(s.click(b, true), Some(vec!["a".to_string(), "b".to_string()]));
		assert_eq!(s.click(b, false), Some(vec!["b".to_string()]));
		assert_eq!(s.click(None, false), None);
		assert!(s.selected_ids().is_empty());
	}

	#[test]
	fn ctrl_click_off_last_node_reports_empty_selection() {
		let mut s = state();
		let a = s.index_of("a");
		s.click(a, false);
		assert_eq!(s.click(a, true), Some(Vec::new()));
	}

	#[test]
	fn press_without_travel_is_click() {
		let mut s = state();
		s.pointer_down(600.0, 300.0);
		s.pointer_move(601.0, 301.0);
		assert_eq!(s.pointer_up(), PointerRelease::Click(s.index_of("b")));

		s.pointer_down(500.0, 450.0);
		assert_eq!(s.pointer_up(), PointerRelease::Click(None));

		assert_eq!(s.pointer_up(), PointerRelease::Idle);
	}

	#[test]
	fn dragging_moves_node_and_is_not_click() {
		let mut s = state();
		s.pointer_down(600.0, 300.0);
		s.pointer_move(620.0, 310.0);
		assert_eq!(s.pointer_up(), PointerRelease::Moved);
		let b = s.index_of("b").unwrap();
		assert_eq!(s.position_of(b), Some((220.0, 10.0)));
	}

	#[test]
	fn panning_moves_transform() {
		let mut s = state();
		s.pointer_down(500.0, 450.0);
		s.pointer_move(520.0, 460.0);
		assert_eq!(s.pointer_up(), PointerRelease::Moved);
		assert_eq!((s.transform.x, s.transform.y), (420.0, 310.0));
	}

	#[test]
	fn focus_animates_to_node() {
		let mut s = state();
		assert!(!s.focus("nobody"));
		assert!(s.focus("b"));
		assert!(s.camera.is_some());
		for _ in 0..40 {
			s.tick(0.016);
		}
		assert!(s.camera.is_none());
		assert_eq!(
			s.transform,
			ViewTransform {
				x: 200.0,
				y: 300.0,
				k: 1.0
			}
		);
	}

	#[test]
	fn fit_contains_every_node() {
		let mut s = state();
		s.fit();
		for id in ["a", "b", "c"] {
			let (x, y) = s.position_of(s.index_of(id).unwrap()).unwrap();
			let (sx, sy) = (x * s.transform.k + s.transform.x, y * s.transform.k + s.transform.y);
			assert!((0.0..=800.0).contains(&sx), "{id} x={sx}");
			assert!((0.0..=600.0).contains(&sy), "{id} y={sy}");
		}
	}

	#[test]
	fn fit_on_empty_graph_recenters() {
		let config = GraphConfig::network();
		let mut s =
			ForceGraphState::new(&GraphData::default(), config.style, config.physics, 800.0, 600.0);
		s.transform.k = 4.0;
		s.fit();
		assert_eq!(s.transform, ViewTransform::centered(800.0, 600.0));
	}

	#[test]
	fn zoom_is_clamped() {
		let mut s = state();
		for _ in 0..100 {
			s.zoom_at(400.0, 300.0, 1.0);
		}
		assert_eq!(s.transform.k, MIN_ZOOM);
		for _ in 0..100 {
			s.zoom_at(400.0, 300.0, -1.0);
		}
		assert_eq!(s.transform.k, MAX_ZOOM);
	}

	#[test]
	fn horizontal_scroll_does_not_zoom() {
		let mut s = state();
		let before = s.transform.clone();
		s.zoom_at(400.0, 300.0, 0.0);
		assert_eq!(s.transform, before);
	}

	#[test]
	fn focus_fails_for_filtered_out_node() {
		let mut s = state();
		let mut filtered = data();
		filtered.nodes.remove(2);
		s.set_data(&filtered);
		assert!(!s.focus("c"));
		assert_eq!(s.select(&["c".into()]), 0);
	}

	#[test]
	fn physics_is_idle_outside_stabilization() {
		let mut s = state();
		let b = s.index_of("b").unwrap();
		for _ in 0..20 {
			s.tick(0.016);
		}
		assert_eq!(s.position_of(b), Some((200.0, 0.0)));
	}

	#[test]
	fn stabilization_finishes_after_configured_iterations() {
		let mut s = state();
		s.start_stabilization();
		let mut frames = 0;
		while !s.tick(0.016) {
			frames += 1;
			assert!(frames < 100);
		}
		// 50 iterations at 5 per frame
		assert_eq!(frames + 1, 10);
		assert!(!s.is_stabilizing());
		assert!(!s.tick(0.016));
	}

	#[test]
	fn resize_keeps_center() {
		let mut s = state();
		let center = s.screen_to_graph(400.0, 300.0);
		s.resize(1000.0, 500.0);
		assert_eq!(s.screen_to_graph(500.0, 250.0), center);
		assert_eq!((s.width, s.height), (1000.0, 500.0));
	}

	#[test]
	fn hover_highlights_neighbors() {
		let mut s = state();
		let (a, b, c) = (
			s.index_of("a").unwrap(),
			s.index_of("b").unwrap(),
			s.index_of("c").unwrap(),
		);
		s.set_hover(Some(a));
		assert!(s.is_highlighted(a) && s.is_highlighted(b));
		assert!(!s.is_highlighted(c));
		s.pointer_leave();
		assert!(!s.has_active_highlight());
	}
}
