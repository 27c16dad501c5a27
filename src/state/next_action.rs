use crate::host::HostAction;
use crate::model::{Snapshot, Stage};

/// The single primary call to action derived from the run stage.
#[derive(Clone, Debug, PartialEq)]
pub struct NextAction {
    pub label: &'static str,
    pub hint: String,
    /// `None` renders the button disabled.
    pub command: Option<HostAction>,
}

impl NextAction {
    pub fn for_stage(stage: &Stage, objective_text: Option<&str>) -> Self {
        let (label, hint, command) = match stage {
            Stage::GoHarbor => ("Start Sea Run", "Go to Harbor and start your run.", HostAction::StartRun),
            Stage::DeployLine => ("Deploy Line", "Go to the line marker and deploy.", HostAction::DeployLine),
            Stage::ReelLine => ("Reel Line", "Reel when timer is ready.", HostAction::ReelLine),
            Stage::ReturnSell => ("Sell Catch", "Go to market and sell.", HostAction::SellCatch),
            Stage::JobOff | Stage::DailyComplete | Stage::Unknown(_) => {
                return NextAction {
                    label: "Continue",
                    hint: objective_text.unwrap_or("Follow objective.").to_string(),
                    command: None,
                };
            }
        };
        NextAction { label, hint: hint.to_string(), command: Some(command) }
    }

    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        Self::for_stage(&snapshot.stage, snapshot.objective.text.as_deref())
    }

    pub fn enabled(&self) -> bool {
        self.command.is_some()
    }
}
