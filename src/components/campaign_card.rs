//! Campaign Card Component
//!
//! Campaign name, validation counts and progress bar.

use leptos::prelude::*;

use crate::progress::{format_count, ProgressBar};

/// All campaign cards of the index page
#[component]
pub fn CampaignProgress(bars: Vec<ProgressBar>) -> impl IntoView {
    view! {
        <div id="campaign-progress">
            {bars.into_iter().map(|bar| view! { <CampaignCard bar=bar /> }).collect_view()}
        </div>
    }
}

/// A single campaign card
///
/// The bar starts empty and grows to its fraction on the next frame so the
/// CSS width transition runs.
#[component]
pub fn CampaignCard(bar: ProgressBar) -> impl IntoView {
    let (filled, set_filled) = signal(false);
    request_animation_frame(move || set_filled.set(true));

    let empty_style = bar.fill_style_at(0.0);
    let fill_style = bar.fill_style();

    view! {
        <div class="campaign-card" id=bar.panel_id()>
            <div class="campaign-info flex column">
                <p class="campaign-name">{bar.campaign_name.clone()}</p>
            </div>

            <div class="val-count" style="width: 100%;">
                "Validations: "
                <span id=bar.count_id()>{format_count(bar.goal.current)}</span>
                "/"
                <span id=bar.goal_id()>{format_count(bar.goal.goal)}</span>
            </div>

            <div id=bar.line_container_id() class="camp-progress-bar" style=bar.trail_style()>
                <div
                    class="camp-progress-fill"
                    style=move || if filled.get() { fill_style.clone() } else { empty_style.clone() }
                ></div>
            </div>

            <div class="flex space-around val-button">
                <a class="generic-submit-button" href=bar.validate_href() title=bar.validate_title()>
                    "Validate"
                </a>
            </div>
        </div>
    }
}
