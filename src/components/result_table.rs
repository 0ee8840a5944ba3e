//! Result Table Component
//!
//! Renders a [`ResultTable`] followed by its page nav.

use leptos::prelude::*;
use leptos_pagination::{row_class, Pagination, PaginationNav};

use crate::components::ValidationAction;
use crate::results::{validated_text, ResultRow, ResultTable, RowAction, RowBody};
use crate::store::{store_is_validated, use_results_store};

#[component]
pub fn ResultTableView(table: ResultTable) -> impl IntoView {
    let pagination = RwSignal::new(table.pagination().copied());
    let headers = table.kind().headers();
    let container_id = table.container_id().to_string();
    let nav_id = table.nav_id().to_string();
    let rows = table.rows().to_vec();

    view! {
        <table id=container_id class="result-table">
            {(!headers.is_empty())
                .then(|| {
                    view! {
                        <thead>
                            <tr>
                                {headers
                                    .iter()
                                    .map(|(class, label)| view! { <th class=*class>{*label}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                    }
                })}
            <tbody>
                {rows
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| view! { <ResultRowView row=row index=index pagination=pagination /> })
                    .collect_view()}
            </tbody>
        </table>
        <PaginationNav pagination=pagination nav_id=nav_id />
    }
}

/// One table row; hidden while outside the current page
#[component]
fn ResultRowView(
    row: ResultRow,
    index: usize,
    pagination: RwSignal<Option<Pagination>>,
) -> impl IntoView {
    let page_class = move || pagination.with(|p| row_class(p.as_ref(), index));
    let ResultRow { key, body, action } = row;

    match body {
        RowBody::Voter { name, address, misc, .. } => {
            let voter_id = key.clone();
            view! {
                <tr id=key class=page_class>
                    <ValidatedCell voter_id=voter_id />
                    <td class="voter-text">
                        <div class="voter-name">{name}</div>
                        <div class="voter-address">{address}</div>
                        <div class="voter-misc">
                            {misc.into_iter().map(|line| view! { <span>{line}</span><br /> }).collect_view()}
                        </div>
                    </td>
                    {action_cell(action)}
                </tr>
            }
            .into_any()
        }
        RowBody::Person { avatar_url, href, name, stats, description } => view! {
            <tr id=key class=move || format!("flex {}", page_class())>
                <td class="search-avatar">
                    <img src=avatar_url />
                </td>
                <td class="search-result-text">
                    <div class="search-name">
                        <a href=href>{name}</a>
                    </div>
                    <div class="result-stats">{stats}</div>
                    <div class="search-description">{description}</div>
                </td>
                {action_cell(action)}
            </tr>
        }
        .into_any(),
    }
}

/// "Yes"/"No" column; follows confirmed mutations through the store
#[component]
fn ValidatedCell(voter_id: String) -> impl IntoView {
    let store = use_results_store();
    view! {
        <td class="validated-result">{move || validated_text(store_is_validated(&store, &voter_id))}</td>
    }
}

fn action_cell(action: RowAction) -> AnyView {
    match action {
        RowAction::Toggle { voter_id, validated } => {
            view! { <ValidationAction voter_id=voter_id validated=validated /> }.into_any()
        }
        RowAction::Link { href, label } => view! {
            <td class="action">
                <a href=href>{label}</a>
            </td>
        }
        .into_any(),
    }
}
