//! "What Are You Reading" voting logic.

mod form;
mod model;

pub use form::{SubmitDecision, VoteForm, search_query};
pub use model::{VoteBoard, VoteCandidate, VoteReceipt, VoteRequest};
