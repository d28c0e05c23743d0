pub mod activity;
pub mod api_models;

pub use activity::ActivityRow;
pub use api_models::{ErrorDetail, MessageResponse};
