use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	/// Weight used for the node radius.
	pub value: Option<f64>,
	pub x: Option<f64>,
	pub y: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// Imperative requests to the canvas, applied in order on the next effect run.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphCommand {
	Focus(String),
	Select(Vec<String>),
	Fit,
	Stabilize,
}

/// Cheap, copyable handle to queue commands for a `ForceGraphCanvas`.
#[derive(Clone, Copy, Debug)]
pub struct GraphHandle {
	queue: RwSignal<Vec<GraphCommand>>,
}

impl GraphHandle {
	pub fn new() -> Self {
		Self {
			queue: RwSignal::new(Vec::new()),
		}
	}

	fn push(&self, command: GraphCommand) {
		self.queue.update(|q| q.push(command));
	}

	pub fn focus(&self, id: impl Into<String>) {
		self.push(GraphCommand::Focus(id.into()));
	}

	pub fn select(&self, ids: Vec<String>) {
		self.push(GraphCommand::Select(ids));
	}

	pub fn fit(&self) {
		self.push(GraphCommand::Fit);
	}

	pub fn stabilize(&self) {
		self.push(GraphCommand::Stabilize);
	}

	/// Subscribe to the queue and drain it.
	pub(super) fn drain(&self) -> Vec<GraphCommand> {
		self.queue.track();
		self.queue
			.try_update_untracked(std::mem::take)
			.unwrap_or_default()
	}
}

impl Default for GraphHandle {
	fn default() -> Self {
		Self::new()
	}
}
