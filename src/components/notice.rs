use std::time::Duration;

use leptos::prelude::*;

use crate::requests::RequestSeq;

/// A single transient message line. Showing a new message restarts the timer.
#[derive(Clone, Copy, Debug)]
pub struct Notice {
	message: RwSignal<Option<String>>,
	timers: RwSignal<RequestSeq>,
}

impl Notice {
	pub fn new() -> Self {
		Self {
			message: RwSignal::new(None),
			timers: RwSignal::new(RequestSeq::default()),
		}
	}

	pub fn show(&self, text: impl Into<String>, hide_after: Duration) {
		let Some(ticket) = self.timers.try_update(RequestSeq::issue) else {
			return;
		};
		self.message.set(Some(text.into()));
		let (message, timers) = (self.message, self.timers);
		set_timeout(
			move || {
				if timers.with_untracked(|t| t.is_latest(ticket)) {
					message.set(None);
				}
			},
			hide_after,
		);
	}

	pub fn dismiss(&self) {
		self.timers.update(RequestSeq::cancel);
		self.message.set(None);
	}
}

impl Default for Notice {
	fn default() -> Self {
		Self::new()
	}
}

#[component]
pub fn NoticeView(notice: Notice) -> impl IntoView {
	view! {
		<div
			class="notice"
			role="status"
			style:display=move || if notice.message.with(Option::is_some) { "block" } else { "none" }
			on:click=move |_| notice.dismiss()
		>
			{move || notice.message.get()}
		</div>
	}
}
