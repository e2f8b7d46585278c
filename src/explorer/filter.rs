use super::model::{AuthorNode, Category};

pub const ALL_KEY: &str = "All";

/// Which nodes of the dataset are visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	#[default]
	All,
	Field(String),
}

impl CategoryFilter {
	pub fn from_key(key: &str) -> Self {
		if key == ALL_KEY {
			Self::All
		} else {
			Self::Field(key.to_owned())
		}
	}

	pub fn key(&self) -> &str {
		match self {
			Self::All => ALL_KEY,
			Self::Field(key) => key,
		}
	}

	pub fn matches(&self, node: &AuthorNode) -> bool {
		match self {
			Self::All => true,
			Self::Field(key) => node.has_field(key),
		}
	}

	/// Nodes passing the filter, in dataset order. May be empty.
	pub fn apply<'a>(&self, nodes: &'a [AuthorNode]) -> Vec<&'a AuthorNode> {
		nodes.iter().filter(|n| self.matches(n)).collect()
	}
}

/// Dropdown entries: the fetched categories minus the excluded keys.
pub fn selectable_categories(fetched: Vec<Category>, excluded: &[String]) -> Vec<Category> {
	fetched
		.into_iter()
		.filter(|c| !excluded.iter().any(|e| e == &c.key))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: &str, fields: &[&str]) -> AuthorNode {
		AuthorNode {
			id: id.into(),
			fields: fields.iter().map(|f| f.to_string()).collect(),
			value: None,
			label: None,
			x: None,
			y: None,
		}
	}

	fn sample() -> Vec<AuthorNode> {
		vec![
			node("A. Smith", &["cs.AI"]),
			node("B. Lee", &["cs.LG"]),
			node("C. Jones", &["cs.AI", "cs.LG"]),
		]
	}

	fn ids(nodes: &[&AuthorNode]) -> Vec<String> {
		nodes.iter().map(|n| n.id.clone()).collect()
	}

	#[test]
	fn field_filter_keeps_only_labelled_nodes() {
		let nodes = sample();
		assert_eq!(
			ids(&CategoryFilter::from_key("cs.AI").apply(&nodes)),
			vec!["A. Smith", "C. Jones"]
		);
		assert_eq!(
			ids(&CategoryFilter::from_key("cs.LG").apply(&nodes)),
			vec!["B. Lee", "C. Jones"]
		);
	}

	#[test]
	fn all_returns_every_node() {
		let nodes = sample();
		assert_eq!(CategoryFilter::from_key("All"), CategoryFilter::All);
		assert_eq!(CategoryFilter::All.apply(&nodes).len(), nodes.len());
	}

	#[test]
	fn unknown_field_is_empty_not_error() {
		let nodes = sample();
		assert!(CategoryFilter::from_key("math.CO").apply(&nodes).is_empty());
	}

	#[test]
	fn two_node_example() {
		let nodes = vec![node("A. Smith", &["cs.AI"]), node("B. Lee", &["cs.LG"])];
		assert_eq!(ids(&CategoryFilter::from_key("cs.AI").apply(&nodes)), vec!["A. Smith"]);
	}

	#[test]
	fn excluded_categories_are_dropped() {
		let fetched = vec![
			Category { key: "cs.AI".into(), value: "Artificial Intelligence".into() },
			Category { key: "cs.CV".into(), value: "Computer Vision".into() },
			Category { key: "cs.CL".into(), value: "Computation and Language".into() },
			Category { key: "stat.ML".into(), value: "Machine Learning".into() },
		];
		let excluded = vec!["cs.CV".to_string(), "cs.CL".to_string()];
		let keys: Vec<String> = selectable_categories(fetched, &excluded)
			.into_iter()
			.map(|c| c.key)
			.collect();
		assert_eq!(keys, vec!["cs.AI", "stat.ML"]);
	}
}
