use std::collections::BTreeSet;

/// What a click on the vote button should do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
	/// Nothing checked; show a validation notice.
	Empty,
	/// A submission is already in flight.
	Busy,
	Submit(Vec<String>),
}

/// Checked papers plus the in-flight flag of the vote button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoteForm {
	checked: BTreeSet<String>,
	submitting: bool,
}

impl VoteForm {
	pub fn set_checked(&mut self, id: &str, checked: bool) {
		if checked {
			self.checked.insert(id.to_owned());
		} else {
			self.checked.remove(id);
		}
	}

	pub fn is_checked(&self, id: &str) -> bool {
		self.checked.contains(id)
	}

	pub fn is_submitting(&self) -> bool {
		self.submitting
	}

	/// The candidate list was re-rendered; its checkboxes start empty.
	pub fn replace_options(&mut self) {
		self.checked.clear();
	}

	/// Disables the button when there is something to send.
	pub fn begin_submit(&mut self) -> SubmitDecision {
		if self.submitting {
			return SubmitDecision::Busy;
		}
		if self.checked.is_empty() {
			return SubmitDecision::Empty;
		}
		self.submitting = true;
		SubmitDecision::Submit(self.checked.iter().cloned().collect())
	}

	/// Re-enable the button, whatever the outcome was.
	pub fn finish_submit(&mut self) {
		self.submitting = false;
	}
}

/// The query to send, or `None` when it is too short.
pub fn search_query(input: &str, min_len: usize) -> Option<&str> {
	(input.chars().count() >= min_len).then_some(input)
}
