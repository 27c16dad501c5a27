use crate::model::{Snapshot, Stage};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Run,
    Boats,
    Market,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Run, Tab::Boats, Tab::Market];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Run => "run",
            Tab::Boats => "boats",
            Tab::Market => "market",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tab::Run => "Run",
            Tab::Boats => "Boats",
            Tab::Market => "Market",
        }
    }

    pub fn from_key(key: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Tab the panel jumps to after a sync when the player has not pinned one.
pub fn auto_select(snapshot: &Snapshot) -> Tab {
    match snapshot.stage {
        Stage::ReturnSell => Tab::Market,
        Stage::GoHarbor if !snapshot.active_run => Tab::Boats,
        _ => Tab::Run,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(stage: Stage, active_run: bool) -> Snapshot {
        Snapshot { stage, active_run, ..Default::default() }
    }

    #[test]
    fn harbor_without_run_opens_boats() {
        assert_eq!(auto_select(&snap(Stage::GoHarbor, false)), Tab::Boats);
        assert_eq!(auto_select(&snap(Stage::GoHarbor, true)), Tab::Run);
    }

    #[test]
    fn selling_opens_market() {
        assert_eq!(auto_select(&snap(Stage::ReturnSell, false)), Tab::Market);
        assert_eq!(auto_select(&snap(Stage::ReturnSell, true)), Tab::Market);
    }

    #[test]
    fn everything_else_opens_run() {
        for stage in [
            Stage::JobOff,
            Stage::DeployLine,
            Stage::ReelLine,
            Stage::DailyComplete,
            Stage::Unknown("x".into()),
        ] {
            assert_eq!(auto_select(&snap(stage, false)), Tab::Run);
        }
    }

    #[test]
    fn keys_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(Tab::from_key("garage"), None);
    }
}
