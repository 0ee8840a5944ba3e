//! Canvass Frontend App
//!
//! Root component: campaign cards and whichever result tables the page carries.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CampaignProgress, ResultTableView};
use crate::context::AppContext;
use crate::controller::PageSetup;
use crate::mutation::MutationClient;
use crate::store::ResultsState;

#[component]
pub fn App(setup: PageSetup, client: MutationClient) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(client));
    provide_context(Store::new(ResultsState::from_setup(&setup)));

    let PageSetup { campaigns, voters, users, teams } = setup;

    view! {
        <main class="canvass-app">
            {(!campaigns.is_empty()).then(|| view! { <CampaignProgress bars=campaigns /> })}
            {voters.map(|table| view! { <ResultTableView table=table /> })}
            {users.map(|table| view! { <ResultTableView table=table /> })}
            {teams.map(|table| view! { <ResultTableView table=table /> })}
        </main>
    }
}
