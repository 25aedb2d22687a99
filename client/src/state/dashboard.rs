//! Dashboard tab selection and mock statistics.
//!
//! There is no stats backend; each tab renders a fixed set of counters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Tabs available on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Overview,
    Matches,
    Activity,
}

impl DashboardTab {
    pub const ALL: [Self; 3] = [Self::Overview, Self::Matches, Self::Activity];

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Matches => "Matches",
            Self::Activity => "Activity",
        }
    }
}

/// A single dashboard counter with its change since last week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub delta: i32,
}

impl Stat {
    const fn new(label: &'static str, value: u32, delta: i32) -> Self {
        Self { label, value, delta }
    }
}

/// Mock counters shown for `tab`.
pub fn stats_for(tab: DashboardTab) -> Vec<Stat> {
    match tab {
        DashboardTab::Overview => vec![
            Stat::new("Vibe score", 87, 4),
            Stat::new("Profile views", 342, 28),
            Stat::new("New matches", 12, 3),
            Stat::new("Messages", 56, -2),
        ],
        DashboardTab::Matches => vec![
            Stat::new("Mutual vibes", 9, 2),
            Stat::new("Pending likes", 21, 5),
            Stat::new("Passed", 14, 0),
        ],
        DashboardTab::Activity => vec![
            Stat::new("Events joined", 4, 1),
            Stat::new("Communities", 7, 0),
            Stat::new("Quizzes taken", 3, -1),
        ],
    }
}

/// Signed week-over-week change, e.g. `+3`, `-1`, `0`.
pub fn format_delta(delta: i32) -> String {
    if delta > 0 { format!("+{delta}") } else { delta.to_string() }
}

/// CSS modifier for a delta badge.
pub fn delta_class(delta: i32) -> &'static str {
    match delta.signum() {
        1 => "stat-card__delta stat-card__delta--up",
        -1 => "stat-card__delta stat-card__delta--down",
        _ => "stat-card__delta",
    }
}
