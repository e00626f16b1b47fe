pub mod commands;
pub mod output;
pub mod render;

use clap::{Parser, ValueEnum};

use crate::core::models::message::Action;

/// Pretty-print change-log messages from a MongoDB audit collection.
#[derive(Parser, Debug)]
#[command(name = "mongaudit", version, about, long_about = None)]
pub struct Cli {
    /// Number of entries to fetch, has less priority than --range
    #[arg(long, default_value_t = 100)]
    pub last: u64,

    /// Range of dates in YYYY-MM-DD_YYYY-MM-DD format (default: today through tomorrow)
    #[arg(long)]
    pub range: Option<String>,

    /// Entry action to show
    #[arg(long, value_enum, default_value = "all")]
    pub action: ActionFilter,

    /// Print the resolved query target before running
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which change types make it into the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ActionFilter {
    All,
    Add,
    Update,
    Delete,
}

impl ActionFilter {
    pub fn matches(self, action: Action) -> bool {
        match self {
            ActionFilter::All => true,
            ActionFilter::Add => action == Action::Add,
            ActionFilter::Update => action == Action::Update,
            ActionFilter::Delete => action == Action::Delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_action() {
        assert!(ActionFilter::All.matches(Action::Add));
        assert!(ActionFilter::All.matches(Action::Update));
        assert!(ActionFilter::All.matches(Action::Delete));
    }

    #[test]
    fn specific_filters_match_only_their_action() {
        assert!(ActionFilter::Add.matches(Action::Add));
        assert!(!ActionFilter::Add.matches(Action::Update));
        assert!(!ActionFilter::Delete.matches(Action::Add));
    }
}
