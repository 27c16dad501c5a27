//! Panel view-model and its reducer.
//! Host messages are first turned into a `Reaction` (an action plus any timers
//! it needs), which keeps the reducer itself free of browser calls.

use super::tabs::{Tab, auto_select};
use crate::config::PanelConfig;
use crate::model::{InboundMessage, Receipt, Snapshot};
use crate::util::clamp_pct;
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    /// Missing tags read as success, unknown ones as info.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            None | Some("success") => ToastKind::Success,
            Some("error") => ToastKind::Error,
            Some("warning") | Some("warn") => ToastKind::Warning,
            Some(_) => ToastKind::Info,
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            ToastKind::Success => "#3fb950",
            ToastKind::Info => "#58a6ff",
            ToastKind::Warning => "#d29922",
            ToastKind::Error => "#f85149",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressState {
    pub label: String,
    /// Always within [0, 100].
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub visible: bool,
    pub title: String,
    pub active_tab: Tab,
    /// Set when the player picks a tab; cleared on the next open.
    pub manual_tab: bool,
    pub snapshot: Option<Snapshot>,
    pub toasts: Vec<ToastEntry>,
    pub receipt: Option<Receipt>,
    pub progress: Option<ProgressState>,
    pub level_pop: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            visible: false,
            title: crate::config::DEFAULT_TITLE.to_string(),
            active_tab: Tab::default(),
            manual_tab: false,
            snapshot: None,
            toasts: Vec::new(),
            receipt: None,
            progress: None,
            level_pop: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelAction {
    Open { title: String, tab: Option<Tab> },
    Close,
    Sync(Option<Snapshot>),
    PushToast(ToastEntry),
    DismissToast(u64),
    ShowReceipt(Receipt),
    CloseReceipt,
    LevelUp(ToastEntry),
    EndLevelPop,
    Progress { show: bool, label: String, percent: f64 },
    SelectTab { tab: Tab, by_user: bool },
}

/// Action to apply after a delay.
#[derive(Clone, Debug, PartialEq)]
pub struct Deferred {
    pub after_ms: i32,
    pub action: PanelAction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Reaction {
    pub action: PanelAction,
    pub deferred: Vec<Deferred>,
}

impl Reaction {
    fn now(action: PanelAction) -> Self {
        Self { action, deferred: Vec::new() }
    }
}

/// Translate a host message into panel actions. `next_id` hands out toast ids.
pub fn react(msg: InboundMessage, config: &PanelConfig, next_id: &mut u64) -> Reaction {
    let mut toast = |kind: ToastKind, text: String| {
        *next_id += 1;
        ToastEntry { id: *next_id, kind, text }
    };
    match msg {
        InboundMessage::Open { title, tab } => Reaction::now(PanelAction::Open {
            title: title.unwrap_or_else(|| config.default_title.clone()),
            tab: tab.as_deref().and_then(Tab::from_key),
        }),
        InboundMessage::Close => Reaction::now(PanelAction::Close),
        InboundMessage::Sync { state } => Reaction::now(PanelAction::Sync(state)),
        InboundMessage::Toast { toast: payload } => {
            let entry = toast(
                ToastKind::from_tag(payload.kind.as_deref()),
                payload.text.unwrap_or_else(|| "Sea update".to_string()),
            );
            let id = entry.id;
            Reaction {
                action: PanelAction::PushToast(entry),
                deferred: vec![Deferred {
                    after_ms: config.toast_lifetime_ms,
                    action: PanelAction::DismissToast(id),
                }],
            }
        }
        InboundMessage::Receipt { receipt } => Reaction::now(PanelAction::ShowReceipt(receipt)),
        InboundMessage::LevelUp { data } => {
            let level = data
                .level
                .filter(|l| *l > 0)
                .map_or_else(|| "?".to_string(), |l| l.to_string());
            let entry = toast(
                ToastKind::Success,
                format!("Level up! You are now level {}.", level),
            );
            let id = entry.id;
            Reaction {
                action: PanelAction::LevelUp(entry),
                deferred: vec![
                    Deferred { after_ms: config.level_pop_ms, action: PanelAction::EndLevelPop },
                    Deferred {
                        after_ms: config.toast_lifetime_ms,
                        action: PanelAction::DismissToast(id),
                    },
                ],
            }
        }
        InboundMessage::Progress { show, label, percent } => Reaction::now(PanelAction::Progress {
            show,
            label: label.unwrap_or_else(|| "Working...".to_string()),
            percent,
        }),
    }
}

impl Reducible for PanelState {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            PanelAction::Open { title, tab } => {
                new.visible = true;
                new.manual_tab = false;
                new.title = title;
                if let Some(tab) = tab {
                    new.active_tab = tab;
                }
            }
            PanelAction::Close => {
                new.visible = false;
                new.progress = None;
            }
            PanelAction::Sync(snapshot) => {
                if let Some(s) = &snapshot {
                    if !new.manual_tab {
                        new.active_tab = auto_select(s);
                    }
                }
                new.snapshot = snapshot;
            }
            PanelAction::PushToast(entry) => new.toasts.push(entry),
            PanelAction::DismissToast(id) => {
                if !new.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                new.toasts.retain(|t| t.id != id);
            }
            PanelAction::ShowReceipt(receipt) => new.receipt = Some(receipt),
            PanelAction::CloseReceipt => new.receipt = None,
            PanelAction::LevelUp(entry) => {
                new.level_pop = true;
                new.toasts.push(entry);
            }
            PanelAction::EndLevelPop => new.level_pop = false,
            PanelAction::Progress { show, label, percent } => {
                new.progress = show.then(|| ProgressState { label, percent: clamp_pct(percent) });
            }
            PanelAction::SelectTab { tab, by_user } => {
                new.active_tab = tab;
                if by_user {
                    new.manual_tab = true;
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Stage, ToastPayload};

    fn apply(state: Rc<PanelState>, actions: impl IntoIterator<Item = PanelAction>) -> Rc<PanelState> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn sync(stage: Stage) -> PanelAction {
        PanelAction::Sync(Some(Snapshot { stage, ..Default::default() }))
    }

    fn open() -> PanelAction {
        PanelAction::Open { title: "Tablet".into(), tab: None }
    }

    #[test]
    fn harbor_sync_selects_boats() {
        let s = apply(Rc::new(PanelState::default()), [open(), sync(Stage::GoHarbor)]);
        assert_eq!(s.active_tab, Tab::Boats);
    }

    #[test]
    fn manual_tab_survives_syncs_until_reopen() {
        let s = apply(
            Rc::new(PanelState::default()),
            [
                open(),
                PanelAction::SelectTab { tab: Tab::Run, by_user: true },
                sync(Stage::ReturnSell),
                sync(Stage::GoHarbor),
            ],
        );
        assert_eq!(s.active_tab, Tab::Run);
        assert!(s.manual_tab);

        let s = apply(s, [open(), sync(Stage::ReturnSell)]);
        assert!(!s.manual_tab);
        assert_eq!(s.active_tab, Tab::Market);
    }

    #[test]
    fn open_keeps_last_tab_unless_given() {
        let s = apply(
            Rc::new(PanelState::default()),
            [open(), sync(Stage::ReturnSell), PanelAction::Close, open()],
        );
        assert_eq!(s.active_tab, Tab::Market);
        let s = s.reduce(PanelAction::Open { title: "Tablet".into(), tab: Some(Tab::Boats) });
        assert_eq!(s.active_tab, Tab::Boats);
    }

    #[test]
    fn null_sync_clears_snapshot_without_moving_tab() {
        let s = apply(
            Rc::new(PanelState::default()),
            [open(), sync(Stage::ReturnSell), PanelAction::Sync(None)],
        );
        assert!(s.snapshot.is_none());
        assert_eq!(s.active_tab, Tab::Market);
    }

    #[test]
    fn close_hides_progress() {
        let s = apply(
            Rc::new(PanelState::default()),
            [
                open(),
                PanelAction::Progress { show: true, label: "Reeling".into(), percent: 140.0 },
            ],
        );
        assert_eq!(s.progress.as_ref().map(|p| p.percent), Some(100.0));
        let s = s.reduce(PanelAction::Close);
        assert!(!s.visible);
        assert!(s.progress.is_none());
    }

    #[test]
    fn toast_is_pushed_then_dismissed_after_lifetime() {
        let config = PanelConfig::default();
        let mut next_id = 0;
        let reaction = react(
            InboundMessage::Toast {
                toast: ToastPayload { kind: Some("success".into()), text: Some("Sea update".into()) },
            },
            &config,
            &mut next_id,
        );
        assert_eq!(reaction.deferred.len(), 1);
        assert_eq!(reaction.deferred[0].after_ms, 3200);

        let s = Rc::new(PanelState::default()).reduce(reaction.action);
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].text, "Sea update");
        assert_eq!(s.toasts[0].kind, ToastKind::Success);

        let s = s.reduce(reaction.deferred[0].action.clone());
        assert!(s.toasts.is_empty());
    }

    #[test]
    fn toast_defaults() {
        let config = PanelConfig::default();
        let mut next_id = 0;
        let reaction = react(
            InboundMessage::Toast { toast: ToastPayload::default() },
            &config,
            &mut next_id,
        );
        let PanelAction::PushToast(entry) = reaction.action else { panic!("expected toast") };
        assert_eq!(entry.text, "Sea update");
        assert_eq!(entry.kind, ToastKind::Success);
        assert_eq!(ToastKind::from_tag(Some("shiny")), ToastKind::Info);
    }

    #[test]
    fn level_up_pops_and_toasts() {
        let config = PanelConfig::default();
        let mut next_id = 4;
        let reaction = react(
            InboundMessage::LevelUp { data: crate::model::LevelUpData { level: Some(6) } },
            &config,
            &mut next_id,
        );
        let s = Rc::new(PanelState::default()).reduce(reaction.action);
        assert!(s.level_pop);
        assert_eq!(s.toasts[0].id, 5);
        assert_eq!(s.toasts[0].text, "Level up! You are now level 6.");
        assert!(reaction.deferred.iter().any(|d| d.after_ms == 700 && d.action == PanelAction::EndLevelPop));

        let s = s.reduce(PanelAction::EndLevelPop);
        assert!(!s.level_pop);

        let reaction = react(
            InboundMessage::LevelUp { data: Default::default() },
            &config,
            &mut next_id,
        );
        let PanelAction::LevelUp(entry) = reaction.action else { panic!("expected level up") };
        assert_eq!(entry.text, "Level up! You are now level ?.");

        let reaction = react(
            InboundMessage::LevelUp { data: crate::model::LevelUpData { level: Some(0) } },
            &config,
            &mut next_id,
        );
        let PanelAction::LevelUp(entry) = reaction.action else { panic!("expected level up") };
        assert_eq!(entry.text, "Level up! You are now level ?.");
    }

    #[test]
    fn unknown_tab_key_keeps_current() {
        let config = PanelConfig::default();
        let mut next_id = 0;
        let reaction = react(
            InboundMessage::Open { title: None, tab: Some("garage".into()) },
            &config,
            &mut next_id,
        );
        assert_eq!(
            reaction.action,
            PanelAction::Open { title: "Sea Explorer Tablet".into(), tab: None }
        );
    }

    #[test]
    fn receipt_opens_and_closes() {
        let s = Rc::new(PanelState::default())
            .reduce(PanelAction::ShowReceipt(Receipt { total_payout: 115.0, ..Default::default() }));
        assert!(s.receipt.is_some());
        assert!(s.reduce(PanelAction::CloseReceipt).receipt.is_none());
    }
}
