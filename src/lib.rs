//! Leptos client-side app: arXiv co-authorship explorer and the WAYR voting page.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod api;
mod components;
mod config;
mod explorer;
mod pages;
mod requests;
mod voting;

// Top-Level pages
use crate::config::GraphConfig;
use crate::pages::explorer::GraphExplorer;
use crate::pages::not_found::NotFound;
use crate::pages::voting::VotingWidget;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router for the network graphs and the voting page, with a 404 fallback.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="arXiv Authors Network" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=|| view! { <GraphExplorer config=GraphConfig::network() /> } />
				<Route
					path=path!("/full")
					view=|| view! { <GraphExplorer config=GraphConfig::full_network() /> }
				/>
				<Route path=path!("/wayr") view=VotingWidget />
			</Routes>
		</Router>
	}
}
