use std::collections::HashSet;

/// Result of mapping search candidates onto graph nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusOutcome {
	Found {
		/// First known candidate, in input order.
		focus: String,
		selected: Vec<String>,
	},
	NotFound,
}

/// Keep the candidates present in `known` (exact, case-sensitive) and pick
/// the first as camera target.
pub fn resolve_focus<S: AsRef<str>>(known: &HashSet<String>, candidates: &[S]) -> FocusOutcome {
	let selected: Vec<String> = candidates
		.iter()
		.map(AsRef::<str>::as_ref)
		.filter(|name| known.contains(*name))
		.map(str::to_owned)
		.collect();
	match selected.first() {
		Some(first) => FocusOutcome::Found {
			focus: first.clone(),
			selected,
		},
		None => FocusOutcome::NotFound,
	}
}

/// Best-effort normalization for typed names: "yann lecun" -> "Yann Lecun".
/// Names with inner capitals ("LeCun") will not survive this.
pub fn title_case(input: &str) -> String {
	input
		.to_lowercase()
		.split(' ')
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect::<Vec<String>>()
		.join(" ")
}
