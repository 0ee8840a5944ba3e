//! Page Controller
//!
//! Composition root. Receives config, page data and the mutation transport
//! up front and performs the one-time page setup: progress bars, then each
//! result table rendered and paginated in that order.

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};

use crate::commands::MutationTransport;
use crate::config::ClientConfig;
use crate::models::Record;
use crate::mutation::MutationClient;
use crate::page_data::PageData;
use crate::progress::ProgressBar;
use crate::results::{ResultTable, TableKind};

pub const VOTER_TABLE_ID: &str = "voter-search-table";
pub const USER_TABLE_ID: &str = "user-search-table";
pub const TEAM_TABLE_ID: &str = "team-search-table";
pub const VOTER_NAV_ID: &str = "pagination-voter";
pub const USER_NAV_ID: &str = "pagination-user";
pub const TEAM_NAV_ID: &str = "pagination-team";

/// Everything the page renders, produced once by [`PageController::setup`]
#[derive(Debug, Clone, Default)]
pub struct PageSetup {
    pub campaigns: Vec<ProgressBar>,
    pub voters: Option<ResultTable>,
    pub users: Option<ResultTable>,
    pub teams: Option<ResultTable>,
}

pub struct PageController {
    config: ClientConfig,
    data: PageData,
    client: MutationClient,
    /// Campaign id -> its progress bar
    progress_bars: HashMap<u32, ProgressBar>,
}

impl PageController {
    pub fn new(config: ClientConfig, data: PageData, transport: Arc<dyn MutationTransport>) -> Self {
        let client = MutationClient::new(transport, data.campaign_id);
        Self {
            config,
            data,
            client,
            progress_bars: HashMap::new(),
        }
    }

    /// Client bound to this page's campaign
    pub fn client(&self) -> MutationClient {
        self.client.clone()
    }

    pub fn progress_bar(&self, campaign_id: u32) -> Option<&ProgressBar> {
        self.progress_bars.get(&campaign_id)
    }

    pub fn setup(&mut self) -> PageSetup {
        let campaigns = self.setup_progress_bars();

        let voter_records = self.data.voter_records();
        if !voter_records.is_empty() && self.data.campaign_id.is_none() {
            warn!("[Controller] Voter results without a campaign id; validation requests will fail");
        }

        let voters = build_table(
            TableKind::Voters,
            VOTER_TABLE_ID,
            VOTER_NAV_ID,
            self.config.voter_rows_per_page,
            &voter_records,
        );
        let users = build_table(
            TableKind::Users,
            USER_TABLE_ID,
            USER_NAV_ID,
            self.config.user_rows_per_page,
            self.data.user_results.as_deref().unwrap_or_default(),
        );
        let teams = build_table(
            TableKind::Teams,
            TEAM_TABLE_ID,
            TEAM_NAV_ID,
            self.config.team_rows_per_page,
            self.data.team_results.as_deref().unwrap_or_default(),
        );

        PageSetup {
            campaigns,
            voters,
            users,
            teams,
        }
    }

    fn setup_progress_bars(&mut self) -> Vec<ProgressBar> {
        self.progress_bars.clear();
        let bars: Vec<ProgressBar> = self.data.campaigns.iter().map(ProgressBar::for_campaign).collect();
        for bar in &bars {
            self.progress_bars.insert(bar.campaign_id, bar.clone());
        }
        if !bars.is_empty() {
            info!("[Controller] Built {} campaign progress bars", bars.len());
        }
        bars
    }
}

/// Render `records` into a table, then paginate it. Empty lists produce no table.
fn build_table(
    kind: TableKind,
    container_id: &str,
    nav_id: &str,
    page_size: usize,
    records: &[Record],
) -> Option<ResultTable> {
    if records.is_empty() {
        return None;
    }
    let mut table = ResultTable::new(kind, container_id, nav_id, page_size);
    table.render(records);
    let pages = table.attach_pagination().map_or(1, |p| p.total_pages());
    info!("[Controller] Rendered {} rows into #{container_id} ({pages} pages)", records.len());
    Some(table)
}
