//! UI Components
//!
//! Leptos components for campaign cards and result tables.

mod campaign_card;
mod result_table;
mod validation_action;

pub use campaign_card::{CampaignCard, CampaignProgress};
pub use result_table::ResultTableView;
pub use validation_action::ValidationAction;
