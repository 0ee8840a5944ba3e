//! Results State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::PageSetup;
use crate::results::RowAction;

/// Validated flag of one voter row
#[derive(Clone, Debug, PartialEq)]
pub struct VoterStatus {
    pub voter_id: String,
    pub validated: bool,
}

/// Mutable part of the rendered results. Rows themselves are fixed per page load.
#[derive(Clone, Debug, Default, Store)]
pub struct ResultsState {
    /// One entry per voter row, patched after a confirmed mutation
    pub voters: Vec<VoterStatus>,
}

impl ResultsState {
    pub fn from_setup(setup: &PageSetup) -> Self {
        let voters = setup
            .voters
            .iter()
            .flat_map(|table| table.rows())
            .filter_map(|row| match &row.action {
                RowAction::Toggle { voter_id, validated } => Some(VoterStatus {
                    voter_id: voter_id.clone(),
                    validated: *validated,
                }),
                RowAction::Link { .. } => None,
            })
            .collect();
        Self { voters }
    }
}

/// Type alias for the store
pub type ResultsStore = Store<ResultsState>;

/// Get the results store from context
pub fn use_results_store() -> ResultsStore {
    expect_context::<ResultsStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record a confirmed validated flag for a voter
pub fn store_set_validated(store: &ResultsStore, voter_id: &str, validated: bool) {
    if let Some(status) = store.voters().write().iter_mut().find(|status| status.voter_id == voter_id) {
        status.validated = validated;
    }
}

/// Current validated flag of a voter (tracked)
pub fn store_is_validated(store: &ResultsStore, voter_id: &str) -> bool {
    store
        .voters()
        .read()
        .iter()
        .find(|status| status.voter_id == voter_id)
        .is_some_and(|status| status.validated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, VoterResult};
    use crate::results::{ResultTable, TableKind};

    fn setup() -> PageSetup {
        let records: Vec<Record> = [("1", false), ("2", true)]
            .into_iter()
            .map(|(id, validated)| {
                Record::Voter(VoterResult {
                    id: id.to_string(),
                    is_validated: validated,
                    name: String::new(),
                    address: String::new(),
                    party: String::new(),
                    gender: String::new(),
                    curr_reg_date: String::new(),
                })
            })
            .collect();
        let mut table = ResultTable::new(TableKind::Voters, "t", "n", 10);
        table.render(&records);
        PageSetup {
            voters: Some(table),
            ..PageSetup::default()
        }
    }

    #[test]
    fn test_state_from_setup() {
        let state = ResultsState::from_setup(&setup());
        assert_eq!(
            state.voters,
            vec![
                VoterStatus { voter_id: "1".to_string(), validated: false },
                VoterStatus { voter_id: "2".to_string(), validated: true },
            ]
        );
    }

    #[test]
    fn test_patch_only_affected_row() {
        let store = Store::new(ResultsState::from_setup(&setup()));
        store_set_validated(&store, "1", true);
        assert!(store_is_validated(&store, "1"));
        assert!(store_is_validated(&store, "2"));

        store_set_validated(&store, "2", false);
        assert!(!store_is_validated(&store, "2"));
        assert_eq!(store.voters().read().len(), 2);

        // Unknown ids are ignored
        store_set_validated(&store, "99", true);
        assert!(!store_is_validated(&store, "99"));
    }
}
