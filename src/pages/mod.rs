pub mod explorer;
pub mod not_found;
pub mod voting;
