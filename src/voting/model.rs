use serde::{Deserialize, Serialize};

/// A paper row in the voting list.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VoteCandidate {
	pub id: String,
	pub name: String,
	pub url: String,
	/// Share of all recent votes, 0..=100.
	#[serde(default)]
	pub prct: u32,
	/// Raw vote count.
	#[serde(default)]
	pub value: u32,
	#[serde(default)]
	pub date: String,
}

/// Payload of `/wayr/current_votes` and `/wayr/autocomplete`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct VoteBoard {
	#[serde(default)]
	pub data: Vec<VoteCandidate>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct VoteRequest {
	pub ids: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct VoteReceipt {
	pub message: String,
}
