use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};
use web_sys::MouseEvent;

use crate::api::ApiClient;
use crate::components::force_graph::{ForceGraphCanvas, GraphHandle};
use crate::components::notice::{Notice, NoticeView};
use crate::components::papers_panel::{AuthorPapers, PapersPanel};
use crate::components::search_box::SearchBox;
use crate::config::{ApiConfig, GraphConfig, SearchConfig};
use crate::explorer::{
	ALL_KEY, CategoryFilter, ExplorerState, FocusOutcome, SearchResult, title_case,
};
use crate::requests::RequestSeq;

/// Co-authorship graph page: category filter, search, redraw and the papers
/// panel around one `ForceGraphCanvas`.
#[component]
pub fn GraphExplorer(config: GraphConfig) -> impl IntoView {
	let api = ApiClient::new(&ApiConfig::default());
	let api_store = StoredValue::new(api.clone());

	let state = RwSignal::new(ExplorerState::default());
	let papers = RwSignal::new(None::<AuthorPapers>);
	let papers_seq = RwSignal::new(RequestSeq::default());
	let busy = RwSignal::new(false);
	let menu_open = RwSignal::new(false);
	let notice = Notice::new();
	let graph = GraphHandle::new();
	let graph_data = Memo::new(move |_| state.with(ExplorerState::graph_data));

	let (limit, fit_delay, notice_for) = (
		config.stabilize_node_limit,
		config.fit_delay,
		config.notice_duration,
	);

	{
		let (api, url) = (api.clone(), config.dataset_url.clone());
		spawn_local(async move {
			match api.dataset(&url).await {
				Ok(dataset) => {
					info!(
						"network graph downloaded: {} nodes, {} edges",
						dataset.nodes.len(),
						dataset.edges.len()
					);
					state.update(|s| s.load(dataset));
				}
				Err(e) => warn!("failed to load {url}: {e}"),
			}
		});
	}
	{
		let excluded = config.excluded_categories.clone();
		spawn_local(async move {
			match api.categories().await {
				Ok(list) => {
					info!("{} categories", list.len());
					state.update(|s| s.set_categories(list, &excluded));
				}
				Err(e) => warn!("failed to load categories: {e}"),
			}
		});
	}

	let on_select = Callback::new(move |ids: Vec<String>| {
		let Some(author) = ids.first().cloned() else {
			papers_seq.update(RequestSeq::cancel);
			papers.set(None);
			return;
		};
		let Some(ticket) = papers_seq.try_update(RequestSeq::issue) else {
			return;
		};
		let api = api_store.get_value();
		spawn_local(async move {
			match api.author_papers(&ids).await {
				Ok(list) if papers_seq.with_untracked(|s| s.is_latest(ticket)) => {
					papers.set(Some(AuthorPapers {
						author,
						papers: list,
					}));
				}
				Ok(_) => debug!("dropping stale papers for {author}"),
				Err(e) => warn!("failed to load papers for {ids:?}: {e}"),
			}
		});
	});

	let focus_on = move |candidates: Vec<String>| match state
		.with_untracked(|s| s.resolve_focus(&candidates))
	{
		FocusOutcome::Found { focus, selected } => {
			debug!("focus {focus}, select {selected:?}");
			graph.focus(focus);
			graph.select(selected);
		}
		FocusOutcome::NotFound => notice.show("Author/s not found", notice_for),
	};
	let on_focus_missed = Callback::new(move |id: String| {
		debug!("{id} is filtered out of the view");
		notice.show("Author/s not found", notice_for);
	});
	let on_pick = Callback::new(move |result: SearchResult| focus_on(result.candidate_authors()));
	let on_submit = Callback::new(move |text: String| focus_on(vec![title_case(&text)]));

	let on_stabilized = Callback::new(move |_: ()| {
		busy.set(false);
		set_timeout(move || graph.fit(), fit_delay);
	});

	let on_redraw = move |_: MouseEvent| match state.with_untracked(|s| s.check_stabilize(limit)) {
		Ok(()) => {
			busy.set(true);
			graph.stabilize();
		}
		Err(refusal) => notice.show(refusal.message(), notice_for),
	};

	let choose = move |key: String, caption: String| {
		menu_open.set(false);
		state.update(|s| {
			s.apply_filter(CategoryFilter::from_key(&key), caption);
		});
	};

	view! {
		<div class="graph-page" class:dark=move || busy.get()>
			<nav class="toolbar">
				<h1>{config.title.clone()}</h1>
				<div class="dropdown">
					<button
						id="categories_button"
						class="btn dropdown-toggle"
						on:click=move |_| menu_open.update(|open| *open = !*open)
					>
						{move || state.with(|s| s.filter_caption().unwrap_or(ALL_KEY).to_owned())}
					</button>
					<div
						id="categories_dropdown"
						class="dropdown-menu"
						style:display=move || if menu_open.get() { "block" } else { "none" }
					>
						<a
							class="dropdown-item"
							href="#"
							on:click=move |ev: MouseEvent| {
								ev.prevent_default();
								choose(ALL_KEY.to_owned(), ALL_KEY.to_owned());
							}
						>
							{ALL_KEY}
						</a>
						{move || {
							state
								.with(|s| s.categories().to_vec())
								.into_iter()
								.map(|category| {
									let (key, caption) = (category.key, category.value);
									let label = caption.clone();
									view! {
										<a
											class="dropdown-item"
											href="#"
											on:click=move |ev: MouseEvent| {
												ev.prevent_default();
												choose(key.clone(), caption.clone());
											}
										>
											{label}
										</a>
									}
								})
								.collect_view()
						}}
					</div>
				</div>
				<SearchBox
					api=api_store.get_value()
					config=SearchConfig::default()
					on_pick=on_pick
					on_submit=on_submit
				/>
				<button id="redraw" class="btn" on:click=on_redraw>
					"Redraw"
				</button>
				<button id="reset_zoom" class="btn" on:click=move |_| graph.fit()>
					"Reset zoom"
				</button>
				<span class="node-count">{move || format!("{} authors", state.with(|s| s.visible_count()))}</span>
			</nav>
			<NoticeView notice=notice />
			<div class="spinner" style:display=move || if busy.get() { "block" } else { "none" }>
				"Stabilizing..."
			</div>
			<div class="loading" style:display=move || if state.with(ExplorerState::is_loaded) { "none" } else { "block" }>
				"Loading network..."
			</div>
			<div id="mynetwork" class="graph-container">
				<ForceGraphCanvas
					data=graph_data
					style=config.style.clone()
					physics=config.physics.clone()
					handle=graph
					on_select=on_select
					on_stabilized=on_stabilized
					on_focus_missed=on_focus_missed
				/>
			</div>
			<PapersPanel title=config.panel_title.clone() papers=papers />
		</div>
	}
}
