//! Validation Action Component
//!
//! Inline validate/invalidate link with a confirmation step.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::action::{handle_click, ActionCell};
use crate::context::use_app_context;
use crate::mutation::MutationOutcome;
use crate::store::{store_set_validated, use_results_store};

/// Action cell of a voter row
///
/// Shows "Validate"/"Invalidate". When clicked, shows "Confirm?"; a second
/// click sends the request and the cell shows its progress and result.
///
/// # Arguments
/// * `voter_id` - Voter the request is for
/// * `validated` - Validated flag at page load
#[component]
pub fn ValidationAction(
    #[prop(into)] voter_id: String,
    validated: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_results_store();
    let (cell, set_cell) = signal(ActionCell::new(validated));

    let cell_class = if validated { "invalidation-action" } else { "validation-action" };

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();

        let mut next = cell.get_untracked();
        let request = handle_click(&mut next, &ctx.client, &voter_id);
        set_cell.set(next);
        let Some(request) = request else {
            return;
        };

        let voter_id = voter_id.clone();
        spawn_local(async move {
            let result = request.await;
            if let Ok(MutationOutcome::Success { validated }) = &result {
                store_set_validated(&store, &voter_id, *validated);
            }
            set_cell.update(|cell| cell.settle(&result));
        });
    };

    view! {
        <td class=cell_class>
            {move || {
                let state = cell.get();
                if state.is_clickable() {
                    view! {
                        <a
                            href="javascript:void(null);"
                            class=state.link_class()
                            on:click=on_click.clone()
                        >
                            {state.text()}
                        </a>
                    }
                        .into_any()
                } else {
                    view! { <span class="action-status">{state.text()}</span> }.into_any()
                }
            }}
        </td>
    }
}
