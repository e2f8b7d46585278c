use std::collections::HashSet;

use log::debug;

use super::filter::{CategoryFilter, selectable_categories};
use super::focus::{FocusOutcome, resolve_focus};
use super::model::{Category, Dataset};
use crate::components::force_graph::GraphData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabilizeRefusal {
	TooManyNodes { limit: usize },
}

impl StabilizeRefusal {
	pub fn message(&self) -> String {
		match self {
			Self::TooManyNodes { limit } => {
				format!("This feature is too slow for over {limit} nodes")
			}
		}
	}
}

/// Everything the graph explorer page knows about its data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
	dataset: Dataset,
	authors: HashSet<String>,
	filter: CategoryFilter,
	filter_caption: Option<String>,
	categories: Vec<Category>,
	visible_count: usize,
	loaded: bool,
}

impl ExplorerState {
	pub fn load(&mut self, dataset: Dataset) {
		self.authors = dataset.nodes.iter().map(|n| n.id.clone()).collect();
		self.visible_count = dataset.nodes.len();
		self.dataset = dataset;
		self.filter = CategoryFilter::All;
		self.filter_caption = None;
		self.loaded = true;
	}

	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	pub fn set_categories(&mut self, fetched: Vec<Category>, excluded: &[String]) {
		self.categories = selectable_categories(fetched, excluded);
	}

	pub fn categories(&self) -> &[Category] {
		&self.categories
	}

	/// Switch the visible node set. Returns the new visible count.
	pub fn apply_filter(&mut self, filter: CategoryFilter, caption: String) -> usize {
		self.visible_count = filter.apply(&self.dataset.nodes).len();
		debug!("filter {} -> {} nodes", filter.key(), self.visible_count);
		self.filter = filter;
		self.filter_caption = Some(caption);
		self.visible_count
	}

	pub fn filter_caption(&self) -> Option<&str> {
		self.filter_caption.as_deref()
	}

	pub fn visible_count(&self) -> usize {
		self.visible_count
	}

	/// Data handed to the graph view: filtered nodes, all edges.
	pub fn graph_data(&self) -> GraphData {
		self.dataset.view_of(&self.filter.apply(&self.dataset.nodes))
	}

	pub fn resolve_focus<S: AsRef<str>>(&self, candidates: &[S]) -> FocusOutcome {
		resolve_focus(&self.authors, candidates)
	}

	pub fn check_stabilize(&self, limit: usize) -> Result<(), StabilizeRefusal> {
		if self.visible_count > limit {
			Err(StabilizeRefusal::TooManyNodes { limit })
		} else {
			Ok(())
		}
	}
}
