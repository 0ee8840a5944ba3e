//! Validation Action Cell
//!
//! State of the action cell in a voter row. The first click only asks for
//! confirmation; the second one starts the request. While the request is
//! pending the cell accepts no clicks.

use std::future::Future;

use crate::mutation::{MutationClient, MutationError, MutationOutcome};

pub const CONFIRM_TEXT: &str = "Confirm?";
pub const FAILURE_TEXT: &str = "Error; see logs";
pub const UNREACHABLE_TEXT: &str = "Network error; see logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCell {
    /// Offers the inverse of `validated`
    Ready { validated: bool },
    Confirming { validated: bool },
    Pending { desired: bool },
    Settled { validated: bool },
    /// Server answered with a failure
    Failed,
    /// No usable answer (network error, timeout, malformed body)
    Unreachable,
}

impl ActionCell {
    pub fn new(validated: bool) -> Self {
        ActionCell::Ready { validated }
    }

    /// Handle a click. Returns the state to request when a mutation must be sent.
    pub fn click(&mut self) -> Option<bool> {
        match *self {
            ActionCell::Ready { validated } => {
                *self = ActionCell::Confirming { validated };
                None
            }
            ActionCell::Confirming { validated } => {
                let desired = !validated;
                *self = ActionCell::Pending { desired };
                Some(desired)
            }
            _ => None,
        }
    }

    /// Apply the result of the request started by [`ActionCell::click`].
    ///
    /// Ignored unless a request is pending. A rejected duplicate submit sends
    /// nothing, so the cell goes back to offering its action.
    pub fn settle(&mut self, result: &Result<MutationOutcome, MutationError>) {
        let ActionCell::Pending { desired } = *self else {
            return;
        };
        *self = match result {
            Ok(MutationOutcome::Success { validated }) => ActionCell::Settled { validated: *validated },
            Ok(MutationOutcome::Failure { .. }) => ActionCell::Failed,
            Err(MutationError::InFlight(_)) => ActionCell::Ready { validated: !desired },
            // Nothing was sent; the page itself is misconfigured
            Err(MutationError::MissingCampaign) => ActionCell::Failed,
            Err(_) => ActionCell::Unreachable,
        };
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self, ActionCell::Ready { .. } | ActionCell::Confirming { .. })
    }

    pub fn text(&self) -> &'static str {
        match self {
            ActionCell::Ready { validated: false } => "Validate",
            ActionCell::Ready { validated: true } => "Invalidate",
            ActionCell::Confirming { .. } => CONFIRM_TEXT,
            ActionCell::Pending { desired: true } => "Validating...",
            ActionCell::Pending { desired: false } => "Invalidating...",
            ActionCell::Settled { validated: true } => "Validated!",
            ActionCell::Settled { validated: false } => "Invalidated!",
            ActionCell::Failed => FAILURE_TEXT,
            ActionCell::Unreachable => UNREACHABLE_TEXT,
        }
    }

    /// Class of the clickable link
    pub fn link_class(&self) -> &'static str {
        match self {
            ActionCell::Confirming { .. } => "confirm",
            _ => "",
        }
    }
}

/// Apply a click to `cell` for `voter_id`.
///
/// On the confirming click, returns the request to run; it sends nothing
/// until awaited. The caller feeds its result to [`ActionCell::settle`].
pub fn handle_click(
    cell: &mut ActionCell,
    client: &MutationClient,
    voter_id: &str,
) -> Option<impl Future<Output = Result<MutationOutcome, MutationError>> + 'static> {
    let desired = cell.click()?;
    let client = client.clone();
    let voter_id = voter_id.to_string();
    Some(async move { client.submit(&voter_id, desired).await })
}
