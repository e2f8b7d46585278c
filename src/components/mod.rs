pub mod force_graph;
pub mod notice;
pub mod papers_panel;
pub mod search_box;
