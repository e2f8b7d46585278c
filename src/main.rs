//! Browser entry point; everything else lives in the library crate.
#![allow(unused_crate_dependencies)]

use arxiv_network_graph::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
