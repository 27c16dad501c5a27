//! Everything the components print, derived from `PanelState` alone.

use super::next_action::NextAction;
use super::panel::{PanelState, ToastEntry};
use super::tabs::Tab;
use crate::host::HostAction;
use crate::model::{Receipt, Snapshot, Stage};
use crate::util::{format_cash, format_grams, format_price, pct_width, plain};

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionView {
    pub level_text: String,
    pub xp_text: String,
    pub xp_width: String,
    pub bonus_text: String,
    pub daily_text: String,
    pub reset_text: String,
    pub wallet_text: String,
    pub level_pop: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestStepView {
    pub label: String,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunTabView {
    pub objective_text: String,
    pub stage_text: String,
    pub route_text: String,
    pub quest_steps: Vec<QuestStepView>,
    pub deploy_enabled: bool,
    pub reel_enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoatRowView {
    /// List key; levels alone may repeat.
    pub key: String,
    pub level: u32,
    pub title: String,
    pub meta: String,
    pub button_label: &'static str,
    /// `None` when the boat is already selected or still locked.
    pub select: Option<HostAction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoatsTabView {
    pub selected_text: String,
    pub spawn_enabled: bool,
    pub start_run_enabled: bool,
    pub waypoint_text: String,
    pub waypoint_toggle: HostAction,
    pub rows: Vec<BoatRowView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FishRowView {
    pub title: String,
    pub meta: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarketTabView {
    pub hold_text: String,
    pub hold_width: String,
    pub fish_rows: Vec<FishRowView>,
    pub runs_text: String,
    pub earned_text: String,
    pub sell_enabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReceiptView {
    pub lines: Vec<String>,
    pub total_text: String,
}

impl ReceiptView {
    pub fn from_receipt(r: &Receipt) -> Self {
        Self {
            lines: vec![
                format!("Fish sold: {}", format_grams(r.sold_grams)),
                format!("Subtotal: {}", format_cash(r.subtotal)),
                format!("Boat bonus: +{}%", plain(r.boat_bonus_pct)),
                format!("Level bonus: +{}%", plain(r.level_bonus_pct)),
                format!("XP gained: +{}", plain(r.xp_gained)),
                format!("Huge rare catches: {}", plain(r.huge_rare_count)),
            ],
            total_text: format!("Total payout: {}", format_cash(r.total_payout)),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressView {
    pub label: String,
    pub width: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub visible: bool,
    pub title: String,
    pub active_tab: Tab,
    pub progression: ProgressionView,
    pub run: RunTabView,
    pub boats: BoatsTabView,
    pub market: MarketTabView,
    pub next_action: NextAction,
    pub receipt: Option<ReceiptView>,
    pub progress: Option<ProgressView>,
    pub toasts: Vec<ToastEntry>,
}

fn or_dash(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("-")
}

fn progression(s: &Snapshot, level_pop: bool) -> ProgressionView {
    ProgressionView {
        level_text: format!("Level {}", s.level.max(1)),
        xp_text: format!("{} XP", s.xp),
        xp_width: pct_width(s.level_progress_pct),
        bonus_text: format!("Level bonus: +{}%", plain(s.level_bonus_pct)),
        daily_text: format!("{} / {}", s.daily.runs, s.daily.max_runs),
        reset_text: format!("Reset date: {}", or_dash(&s.daily.last_reset_date)),
        wallet_text: format_cash(s.wallet),
        level_pop,
    }
}

fn run_tab(s: &Snapshot) -> RunTabView {
    let route = s.route_target.as_ref().or(s.objective.zone.as_ref());
    RunTabView {
        objective_text: s
            .objective
            .text
            .clone()
            .unwrap_or_else(|| "Follow your objective.".to_string()),
        stage_text: format!("Stage: {}", s.stage),
        route_text: format!("Route: {}", route.map_or("-", |r| r.as_str())),
        quest_steps: s
            .quest_steps
            .iter()
            .map(|step| QuestStepView {
                label: step.label.clone().or_else(|| step.key.clone()).unwrap_or_default(),
                done: step.done,
            })
            .collect(),
        deploy_enabled: s.stage == Stage::DeployLine,
        reel_enabled: s.stage == Stage::ReelLine,
    }
}

fn boats_tab(s: &Snapshot) -> BoatsTabView {
    let selected = s.selected_boat_summary();
    let selected_text = match &selected {
        Some((label, model)) => format!("Selected boat: {} ({})", or_dash(label), or_dash(model)),
        None => "Selected boat: - (-)".to_string(),
    };
    let rows = s
        .unlocked_boats
        .iter()
        .enumerate()
        .map(|(i, boat)| {
            let is_selected = s.is_selected(boat);
            let status = if boat.unlocked {
                "UNLOCKED".to_string()
            } else {
                format!("LOCKED L{}", boat.level)
            };
            BoatRowView {
                key: format!("{}-{}", i, boat.level),
                level: boat.level,
                title: format!("L{} {}", boat.level, or_dash(&boat.label)),
                meta: format!(
                    "{} | Hold {} | +{}% | {}",
                    or_dash(&boat.model),
                    format_grams(boat.hold_capacity_grams),
                    plain(boat.payout_bonus_pct),
                    status
                ),
                button_label: if is_selected { "Selected" } else { "Select" },
                select: (!is_selected && boat.unlocked).then(|| HostAction::SelectBoat {
                    level: boat.level,
                    model: boat.model.clone().unwrap_or_default(),
                }),
            }
        })
        .collect();
    BoatsTabView {
        selected_text,
        spawn_enabled: selected.is_some(),
        start_run_enabled: s.stage == Stage::GoHarbor,
        waypoint_text: format!(
            "Waypoint: {}",
            if s.preferences.waypoint { "ON" } else { "OFF" }
        ),
        waypoint_toggle: HostAction::SetWaypoint { enabled: !s.preferences.waypoint },
        rows,
    }
}

fn market_tab(s: &Snapshot) -> MarketTabView {
    MarketTabView {
        hold_text: format!(
            "{} / {}",
            format_grams(s.hold_used_grams),
            format_grams(s.hold_capacity_grams)
        ),
        hold_width: pct_width(s.hold_pct),
        fish_rows: s
            .fish_hold
            .iter()
            .map(|fish| FishRowView {
                title: format!(
                    "{}{}",
                    or_dash(&fish.label),
                    if fish.rare { " (Rare)" } else { "" }
                ),
                meta: format!(
                    "{} @ ${}/g",
                    format_grams(fish.grams),
                    format_price(fish.price_per_gram)
                ),
                value: format_cash(fish.est_value),
            })
            .collect(),
        runs_text: format!("Runs complete: {}", s.stats.runs_completed),
        earned_text: format!("Total earned: {}", format_cash(s.stats.total_earned)),
        sell_enabled: s.stage == Stage::ReturnSell,
    }
}

impl PanelView {
    /// Pure: equal states give equal views.
    pub fn build(state: &PanelState) -> Self {
        let empty = Snapshot::default();
        let s = state.snapshot.as_ref().unwrap_or(&empty);
        Self {
            visible: state.visible,
            title: state.title.clone(),
            active_tab: state.active_tab,
            progression: progression(s, state.level_pop),
            run: run_tab(s),
            boats: boats_tab(s),
            market: market_tab(s),
            next_action: NextAction::for_snapshot(s),
            receipt: state.receipt.as_ref().map(ReceiptView::from_receipt),
            progress: state.progress.as_ref().map(|p| ProgressView {
                label: p.label.clone(),
                width: pct_width(p.percent),
            }),
            toasts: state.toasts.clone(),
        }
    }
}
