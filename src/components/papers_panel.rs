use leptos::prelude::*;

use crate::explorer::PaperLink;

/// Papers loaded for a node selection, headed by the first selected author.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthorPapers {
	pub author: String,
	pub papers: Vec<PaperLink>,
}

#[component]
pub fn PapersPanel(title: String, #[prop(into)] papers: Signal<Option<AuthorPapers>>) -> impl IntoView {
	let expanded = RwSignal::new(true);

	view! {
		<div
			id="papers_list"
			class="papers-panel"
			style:display=move || if papers.with(Option::is_some) { "block" } else { "none" }
		>
			<div class="panel-header">
				<span>{title}" "</span>
				<span class="author_name">
					{move || papers.with(|p| p.as_ref().map(|p| p.author.clone()).unwrap_or_default())}
				</span>
				<button class="collapse-expand" on:click=move |_| expanded.update(|e| *e = !*e)>
					<i class=move || if expanded.get() { "fas fa-minus" } else { "fas fa-plus" }></i>
				</button>
			</div>
			<div class="content" style:display=move || if expanded.get() { "block" } else { "none" }>
				{move || {
					papers
						.get()
						.map(|p| {
							p.papers
								.into_iter()
								.map(|paper| {
									view! {
										<div class="papers-list-item">
											<a href=paper.url target="_blank">
												{paper.title}
											</a>
										</div>
									}
								})
								.collect_view()
						})
				}}
			</div>
		</div>
	}
}
