//! Graph explorer logic, kept free of DOM access.

mod filter;
mod focus;
mod model;
mod search;
mod state;

pub use filter::{ALL_KEY, CategoryFilter};
pub use focus::{FocusOutcome, title_case};
pub use model::{Category, Dataset, PaperLink, SearchResult};
pub use search::{matching_suggestions, suggestion_icon};
pub use state::ExplorerState;
