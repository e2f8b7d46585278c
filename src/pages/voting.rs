use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use web_sys::Event;

use crate::api::ApiClient;
use crate::components::notice::{Notice, NoticeView};
use crate::config::{ApiConfig, VotingConfig};
use crate::requests::{RequestSeq, Ticket};
use crate::voting::{SubmitDecision, VoteBoard, VoteCandidate, VoteForm, search_query};

/// "What Are You Reading" page: candidate list, vote button and search.
#[component]
pub fn VotingWidget() -> impl IntoView {
	let config = VotingConfig::default();
	let api = StoredValue::new(ApiClient::new(&ApiConfig::default()));
	let board = RwSignal::new(Vec::<VoteCandidate>::new());
	let form = RwSignal::new(VoteForm::default());
	let list_seq = RwSignal::new(RequestSeq::default());
	let notice = Notice::new();

	// Candidate list replacement shared by the initial load and searches.
	let replace_board = move |ticket: Ticket, next: VoteBoard| {
		if !list_seq.with_untracked(|s| s.is_latest(ticket)) || next.data.is_empty() {
			return;
		}
		board.set(next.data);
		form.update(VoteForm::replace_options);
	};

	if let Some(ticket) = list_seq.try_update(RequestSeq::issue) {
		let api = api.get_value();
		spawn_local(async move {
			match api.current_votes().await {
				Ok(current) => {
					info!("{} papers with votes", current.data.len());
					replace_board(ticket, current);
				}
				Err(e) => warn!("failed to load current votes: {e}"),
			}
		});
	}

	let (validation_for, receipt_for, min_len) = (
		config.validation_notice,
		config.receipt_notice,
		config.min_query_len,
	);

	let on_vote = move |_| match form.try_update(VoteForm::begin_submit) {
		Some(SubmitDecision::Submit(ids)) => {
			let api = api.get_value();
			spawn_local(async move {
				match api.vote(ids).await {
					Ok(receipt) => notice.show(receipt.message, receipt_for),
					Err(e) => warn!("vote failed: {e}"),
				}
				form.update(VoteForm::finish_submit);
			});
		}
		Some(SubmitDecision::Empty) => notice.show("Please select papers first", validation_for),
		Some(SubmitDecision::Busy) | None => {}
	};

	let on_search = move |ev: Event| {
		let value = event_target_value(&ev);
		let Some(query) = search_query(&value, min_len).map(str::to_owned) else {
			return;
		};
		let Some(ticket) = list_seq.try_update(RequestSeq::issue) else {
			return;
		};
		let api = api.get_value();
		spawn_local(async move {
			match api.search_votes(&query).await {
				Ok(found) => replace_board(ticket, found),
				Err(e) => warn!("paper search for {query:?} failed: {e}"),
			}
		});
	};

	view! {
		<div class="wayr-page">
			<h1>"What Are You Reading"</h1>
			<input id="searchInput" type="text" placeholder="Search or add a paper" on:input=on_search />
			<NoticeView notice=notice />
			<button
				id="vote"
				class="btn"
				style="position: sticky; top: 10px;"
				disabled=move || form.with(VoteForm::is_submitting)
				on:click=on_vote
			>
				"Vote"
			</button>
			<div id="papers_score">
				{move || {
					board
						.get()
						.into_iter()
						.map(|paper| {
							let (checked_id, change_id) = (paper.id.clone(), paper.id.clone());
							view! {
								<div class="paper-row">
									<input
										type="checkbox"
										class="paper-option"
										id=paper.id.clone()
										prop:checked=move || form.with(|f| f.is_checked(&checked_id))
										on:change=move |ev: Event| {
											let checked = event_target_checked(&ev);
											form.update(|f| f.set_checked(&change_id, checked));
										}
									/>
									<label for=paper.id>
										<a href=paper.url target="_blank">
											{paper.name}
										</a>
									</label>
									<div class="progress">
										<div class="progress-bar" style:width=format!("{}%", paper.prct)></div>
									</div>
									<span class="votes">{paper.value}" votes"</span>
									<span class="date">{paper.date}</span>
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}
