use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, warn};
use web_sys::{Event, KeyboardEvent};

use crate::api::ApiClient;
use crate::config::SearchConfig;
use crate::explorer::{SearchResult, matching_suggestions, suggestion_icon};
use crate::requests::RequestSeq;

/// Author/paper search input with a suggestion list.
///
/// Typing schedules an `/autocomplete` query after `config.request_delay`;
/// only the newest query's results are shown. Enter hands the raw text to
/// `on_submit`, clicking a suggestion hands the entry to `on_pick`.
#[component]
pub fn SearchBox(
	api: ApiClient,
	config: SearchConfig,
	#[prop(into)] on_pick: Callback<SearchResult>,
	#[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
	let api = StoredValue::new(api);
	let (delay, max) = (config.request_delay, config.max_suggestions);
	let suggestions = RwSignal::new(Vec::<SearchResult>::new());
	let seq = RwSignal::new(RequestSeq::default());
	let input_ref = NodeRef::<leptos::html::Input>::new();

	let on_input = move |ev: Event| {
		let phrase = event_target_value(&ev);
		let Some(ticket) = seq.try_update(RequestSeq::issue) else {
			return;
		};
		if phrase.trim().is_empty() {
			suggestions.set(Vec::new());
			return;
		}
		set_timeout(
			move || {
				if !seq.with_untracked(|s| s.is_latest(ticket)) {
					return;
				}
				let api = api.get_value();
				spawn_local(async move {
					match api.autocomplete(&phrase).await {
						Ok(results) => {
							if seq.with_untracked(|s| s.is_latest(ticket)) {
								suggestions.set(matching_suggestions(results, &phrase, max));
							}
						}
						Err(e) => warn!("autocomplete for {phrase:?} failed: {e}"),
					}
				});
			},
			delay,
		);
	};

	let close = move || {
		seq.update(RequestSeq::cancel);
		suggestions.set(Vec::new());
	};

	let on_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			ev.prevent_default();
			close();
			on_submit.run(event_target_value(&ev));
		}
	};

	let pick = move |result: SearchResult| {
		debug!("picked {:?}", result);
		if let Some(input) = input_ref.get() {
			input.set_value(result.name());
		}
		close();
		on_pick.run(result);
	};

	view! {
		<div class="search-box">
			<input
				node_ref=input_ref
				id="searchInput"
				type="text"
				autocomplete="off"
				placeholder="Search author or paper"
				on:input=on_input
				on:keydown=on_keydown
			/>
			<ul class="suggestions">
				{move || {
					suggestions
						.get()
						.into_iter()
						.map(|result| {
							let (icon, name) = (suggestion_icon(&result), result.name().to_owned());
							view! {
								<li class="suggestion" on:click=move |_| pick(result.clone())>
									<i class=icon></i>
									" "
									{name}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>
		</div>
	}
}
