//! Result Tables
//!
//! Turns ranked records into row models, one row per record in input order.
//! Rendering replaces the whole table; pagination is attached afterwards.

use leptos_pagination::Pagination;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Record, TeamResult, UserResult, VoterResult};

/// Which layout a table uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Voters,
    Users,
    Teams,
}

impl TableKind {
    /// Column headers; search tables have none
    pub fn headers(self) -> &'static [(&'static str, &'static str)] {
        match self {
            TableKind::Voters => &[
                ("validated-result", "Validated?"),
                ("voter-text", "Voter"),
                ("action", "Action"),
            ],
            TableKind::Users | TableKind::Teams => &[],
        }
    }
}

/// Variant-specific row content
#[derive(Debug, Clone, PartialEq)]
pub enum RowBody {
    Voter {
        validated: bool,
        name: String,
        address: String,
        misc: Vec<String>,
    },
    Person {
        avatar_url: String,
        href: String,
        name: String,
        stats: String,
        description: String,
    },
}

/// What the action cell offers
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// Two-step validate/invalidate toggle
    Toggle { voter_id: String, validated: bool },
    Link { href: String, label: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub key: String,
    pub body: RowBody,
    pub action: RowAction,
}

pub fn validated_text(validated: bool) -> &'static str {
    if validated {
        "Yes"
    } else {
        "No"
    }
}

fn voter_misc(voter: &VoterResult) -> Vec<String> {
    let mut misc = vec![format!("Party: {}", voter.party)];
    if !voter.gender.is_empty() {
        misc.push(format!("Gender: {}", voter.gender));
    }
    misc.push(format!("Latest registration date: {}", voter.curr_reg_date));
    misc
}

fn member_label(count: u64) -> &'static str {
    if count > 1 {
        "members"
    } else {
        "member"
    }
}

fn voter_row(voter: &VoterResult) -> (RowBody, RowAction) {
    (
        RowBody::Voter {
            validated: voter.is_validated,
            name: voter.name.clone(),
            address: voter.address.clone(),
            misc: voter_misc(voter),
        },
        RowAction::Toggle {
            voter_id: voter.id.clone(),
            validated: voter.is_validated,
        },
    )
}

fn user_row(user: &UserResult) -> (RowBody, RowAction) {
    let href = format!("/u/{}/", utf8_percent_encode(&user.name, NON_ALPHANUMERIC));
    (
        RowBody::Person {
            avatar_url: user.avatar_url.clone(),
            href: href.clone(),
            name: user.name.clone(),
            stats: format!("{} calls · {}", user.calls_made, user.rank),
            description: user.description.clone(),
        },
        RowAction::Link { href, label: "View profile" },
    )
}

fn team_row(team: &TeamResult) -> (RowBody, RowAction) {
    let href = format!("/t/{}/", team.id);
    (
        RowBody::Person {
            avatar_url: team.avatar_url.clone(),
            href: href.clone(),
            name: team.name.clone(),
            stats: format!(
                "{} calls · {} {}",
                team.total_calls_made,
                team.member_count,
                member_label(team.member_count)
            ),
            description: team.description.clone(),
        },
        RowAction::Link { href, label: "View team" },
    )
}

/// Row model for a single record
pub fn render_row(record: &Record) -> ResultRow {
    let (body, action) = match record {
        Record::Voter(voter) => voter_row(voter),
        Record::User(user) => user_row(user),
        Record::Team(team) => team_row(team),
    };
    ResultRow {
        key: record.key(),
        body,
        action,
    }
}

/// A rendered table and its (optional) pagination
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    kind: TableKind,
    container_id: String,
    nav_id: String,
    page_size: usize,
    rows: Vec<ResultRow>,
    pagination: Option<Pagination>,
}

impl ResultTable {
    pub fn new(kind: TableKind, container_id: impl Into<String>, nav_id: impl Into<String>, page_size: usize) -> Self {
        Self {
            kind,
            container_id: container_id.into(),
            nav_id: nav_id.into(),
            page_size,
            rows: Vec::new(),
            pagination: None,
        }
    }

    /// Replace every row with rows for `records`.
    ///
    /// Any attached pagination is dropped; call [`ResultTable::attach_pagination`] again.
    pub fn render(&mut self, records: &[Record]) {
        self.rows = records.iter().map(render_row).collect();
        self.pagination = None;
    }

    /// Paginate the current rows. `None` when they fit on one page.
    pub fn attach_pagination(&mut self) -> Option<&Pagination> {
        self.pagination = Pagination::attach(self.rows.len(), self.page_size);
        self.pagination.as_ref()
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn nav_id(&self) -> &str {
        &self.nav_id
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
