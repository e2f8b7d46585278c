use serde::Deserialize;

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};

/// An author vertex as shipped in the static dataset.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthorNode {
	pub id: String,
	#[serde(default)]
	pub fields: Vec<String>,
	#[serde(default)]
	pub value: Option<f64>,
	#[serde(default)]
	pub label: Option<String>,
	#[serde(default)]
	pub x: Option<f64>,
	#[serde(default)]
	pub y: Option<f64>,
}

impl AuthorNode {
	pub fn has_field(&self, key: &str) -> bool {
		self.fields.iter().any(|f| f == key)
	}

	pub fn to_graph_node(&self) -> GraphNode {
		GraphNode {
			id: self.id.clone(),
			label: Some(self.label.clone().unwrap_or_else(|| self.id.clone())),
			value: self.value,
			x: self.x,
			y: self.y,
		}
	}
}

/// A co-authorship between two author ids.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CoauthorEdge {
	pub from: String,
	pub to: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Dataset {
	#[serde(default)]
	pub nodes: Vec<AuthorNode>,
	#[serde(default)]
	pub edges: Vec<CoauthorEdge>,
}

impl Dataset {
	/// Build the view data for a node subset. Edges are passed through whole.
	pub fn view_of(&self, nodes: &[&AuthorNode]) -> GraphData {
		GraphData {
			nodes: nodes.iter().map(|n| n.to_graph_node()).collect(),
			links: self
				.edges
				.iter()
				.map(|e| GraphLink {
					source: e.from.clone(),
					target: e.to.clone(),
				})
				.collect(),
		}
	}
}

/// Category entry from `/categories`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Category {
	pub key: String,
	pub value: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PaperLink {
	pub title: String,
	pub url: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AuthorRef {
	pub name: String,
}

/// One `/autocomplete` entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
	Author {
		name: String,
	},
	Paper {
		#[serde(alias = "title")]
		name: String,
		#[serde(default)]
		url: Option<String>,
		#[serde(default)]
		authors: Vec<AuthorRef>,
	},
}

impl SearchResult {
	pub fn name(&self) -> &str {
		match self {
			Self::Author { name } | Self::Paper { name, .. } => name,
		}
	}

	pub fn is_paper(&self) -> bool {
		matches!(self, Self::Paper { .. })
	}

	/// Author names to look up in the graph for this entry.
	pub fn candidate_authors(&self) -> Vec<String> {
		match self {
			Self::Author { name } => vec![name.clone()],
			Self::Paper { authors, .. } => authors.iter().map(|a| a.name.clone()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dataset_ignores_extra_node_keys() {
		let raw = r#"{
			"nodes": [
				{"id": "A. Smith", "fields": ["cs.AI"], "value": 12, "title": "x", "x": 1.5, "y": -2},
				{"id": "B. Lee"}
			],
			"edges": [{"from": "A. Smith", "to": "B. Lee", "width": 3}]
		}"#;
		let data: Dataset = serde_json::from_str(raw).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.nodes[0].value, Some(12.0));
		assert_eq!(data.nodes[0].x, Some(1.5));
		assert!(data.nodes[1].fields.is_empty());
		assert_eq!(data.edges[0].to, "B. Lee");
	}

	#[test]
	fn search_results_decode_by_type_tag() {
		let raw = r#"[
			{"type": "author", "name": "Yann LeCun"},
			{"type": "paper", "name": "Deep Learning", "authors": [{"name": "Yann LeCun", "affiliation": "NYU"}, {"name": "Yoshua Bengio"}]}
		]"#;
		let results: Vec<SearchResult> = serde_json::from_str(raw).unwrap();
		assert_eq!(results[0].candidate_authors(), vec!["Yann LeCun"]);
		assert!(results[1].is_paper());
		assert_eq!(results[1].name(), "Deep Learning");
		assert_eq!(
			results[1].candidate_authors(),
			vec!["Yann LeCun", "Yoshua Bengio"]
		);
	}

	#[test]
	fn view_keeps_every_edge() {
		let data: Dataset = serde_json::from_str(
			r#"{"nodes":[{"id":"a"},{"id":"b"}],"edges":[{"from":"a","to":"b"},{"from":"b","to":"c"}]}"#,
		)
		.unwrap();
		let only_a: Vec<&AuthorNode> = data.nodes.iter().take(1).collect();
		let view = data.view_of(&only_a);
		assert_eq!(view.nodes.len(), 1);
		assert_eq!(view.nodes[0].label.as_deref(), Some("a"));
		assert_eq!(view.links.len(), 2);
	}
}
