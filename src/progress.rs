//! Campaign Progress
//!
//! Goal fraction, palette selection and display strings for campaign cards.

use crate::models::Campaign;

/// Bar color while the goal is unmet
pub const START_COLOR: &str = "#3498DB";
/// Bar color once the goal is met
pub const END_COLOR: &str = "#2BE8CE";
pub const TRAIL_COLOR: &str = "#EEE";
pub const STROKE_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CampaignGoal {
    pub current: u64,
    pub goal: u64,
}

impl CampaignGoal {
    pub fn new(current: u64, goal: u64) -> Self {
        Self { current, goal }
    }

    /// `min(current / goal, 1.0)`. A zero goal counts as met.
    pub fn fraction(&self) -> f64 {
        if self.goal == 0 {
            return 1.0;
        }
        (self.current as f64 / self.goal as f64).min(1.0)
    }

    pub fn is_met(&self) -> bool {
        self.current >= self.goal
    }
}

/// Rendering parameters of a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    InProgress,
    Achieved,
}

impl Palette {
    pub fn for_goal(goal: &CampaignGoal) -> Self {
        if goal.is_met() {
            Palette::Achieved
        } else {
            Palette::InProgress
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Palette::InProgress => START_COLOR,
            Palette::Achieved => END_COLOR,
        }
    }

    pub fn trail_color(self) -> &'static str {
        TRAIL_COLOR
    }

    pub fn stroke_width(self) -> u32 {
        STROKE_WIDTH
    }
}

/// Progress bar of one campaign card. The palette is fixed when the bar is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    pub campaign_id: u32,
    pub campaign_name: String,
    pub goal: CampaignGoal,
    pub palette: Palette,
}

impl ProgressBar {
    pub fn for_campaign(campaign: &Campaign) -> Self {
        let goal = CampaignGoal::new(campaign.validation_count, campaign.validation_goal);
        Self {
            campaign_id: campaign.id,
            campaign_name: campaign.name.clone(),
            goal,
            palette: Palette::for_goal(&goal),
        }
    }

    pub fn fraction(&self) -> f64 {
        self.goal.fraction()
    }

    pub fn panel_id(&self) -> String {
        format!("camp-{}-panel", self.campaign_id)
    }

    pub fn line_container_id(&self) -> String {
        format!("camp-{}-line-container", self.campaign_id)
    }

    pub fn count_id(&self) -> String {
        format!("camp-{}-val-count", self.campaign_id)
    }

    pub fn goal_id(&self) -> String {
        format!("camp-{}-val-goal", self.campaign_id)
    }

    pub fn validate_href(&self) -> String {
        format!("/validate/{}/", self.campaign_id)
    }

    pub fn validate_title(&self) -> String {
        format!("Click here to validate for {}!", self.campaign_name)
    }

    /// Inline style of the filled part of the bar
    pub fn fill_style(&self) -> String {
        self.fill_style_at(self.fraction())
    }

    /// Fill style at an arbitrary fraction (the bar animates up from 0)
    pub fn fill_style_at(&self, fraction: f64) -> String {
        format!(
            "width: {:.1}%; height: {}px; background-color: {};",
            fraction.clamp(0.0, 1.0) * 100.0,
            self.palette.stroke_width(),
            self.palette.color()
        )
    }

    pub fn trail_style(&self) -> String {
        format!(
            "width: 100%; height: {}px; background-color: {};",
            self.palette.stroke_width(),
            self.palette.trail_color()
        )
    }
}

/// English digit grouping, e.g. `1234567` -> `"1,234,567"`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
