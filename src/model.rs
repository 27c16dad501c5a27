//! Wire types exchanged with the game host.
//! Everything here is decoded leniently: a bad field falls back to its default
//! instead of rejecting the whole message.

use serde::Deserialize;
use std::fmt;

/// Phase of a fishing run as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    JobOff,
    GoHarbor,
    DeployLine,
    ReelLine,
    ReturnSell,
    DailyComplete,
    /// Anything the host sends that we do not recognise (including nothing).
    Unknown(String),
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Unknown(String::new())
    }
}

impl From<&str> for Stage {
    fn from(raw: &str) -> Self {
        match raw {
            "job_off" => Stage::JobOff,
            "go_harbor" => Stage::GoHarbor,
            "deploy_line" => Stage::DeployLine,
            "reel_line" => Stage::ReelLine,
            "return_sell" => Stage::ReturnSell,
            "daily_complete" => Stage::DailyComplete,
            other => Stage::Unknown(other.to_string()),
        }
    }
}

impl Stage {
    pub fn label(&self) -> &str {
        match self {
            Stage::JobOff => "Job Off",
            Stage::GoHarbor => "Go Harbor",
            Stage::DeployLine => "Deploy",
            Stage::ReelLine => "Reel",
            Stage::ReturnSell => "Sell",
            Stage::DailyComplete => "Daily Limit",
            Stage::Unknown(raw) if raw.is_empty() => "-",
            Stage::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(lenient::string(d)?
            .map(|s| Stage::from(s.as_str()))
            .unwrap_or_default())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyLimit {
    #[serde(deserialize_with = "lenient::u32")]
    pub runs: u32,
    #[serde(deserialize_with = "lenient::u32")]
    pub max_runs: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub last_reset_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Objective {
    #[serde(deserialize_with = "lenient::string")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub zone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FishRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub grams: f64,
    #[serde(deserialize_with = "lenient::truthy")]
    pub rare: bool,
    #[serde(deserialize_with = "lenient::f64")]
    pub price_per_gram: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub est_value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Boat {
    #[serde(deserialize_with = "lenient::u32")]
    pub level: u32,
    #[serde(deserialize_with = "lenient::string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub model: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub hold_capacity_grams: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub payout_bonus_pct: f64,
    #[serde(deserialize_with = "lenient::truthy")]
    pub unlocked: bool,
}

/// The host's own record of the active boat.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SelectedBoat {
    #[serde(deserialize_with = "lenient::string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuestStep {
    #[serde(deserialize_with = "lenient::string")]
    pub key: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub label: Option<String>,
    #[serde(deserialize_with = "lenient::truthy")]
    pub done: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(deserialize_with = "lenient::truthy")]
    pub waypoint: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifetimeStats {
    #[serde(deserialize_with = "lenient::u64")]
    pub runs_completed: u64,
    #[serde(deserialize_with = "lenient::f64")]
    pub total_earned: f64,
}

/// Complete player session state, replaced wholesale on every sync.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    #[serde(deserialize_with = "lenient::u32")]
    pub level: u32,
    #[serde(deserialize_with = "lenient::u64")]
    pub xp: u64,
    #[serde(deserialize_with = "lenient::f64")]
    pub level_progress_pct: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub level_bonus_pct: f64,
    #[serde(deserialize_with = "lenient::object")]
    pub daily: DailyLimit,
    #[serde(deserialize_with = "lenient::f64")]
    pub wallet: f64,
    pub stage: Stage,
    #[serde(deserialize_with = "lenient::object")]
    pub objective: Objective,
    #[serde(deserialize_with = "lenient::string")]
    pub route_target: Option<String>,
    #[serde(deserialize_with = "lenient::f64")]
    pub hold_used_grams: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub hold_capacity_grams: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub hold_pct: f64,
    #[serde(deserialize_with = "lenient::list")]
    pub fish_hold: Vec<FishRecord>,
    #[serde(deserialize_with = "lenient::list")]
    pub unlocked_boats: Vec<Boat>,
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub selected_boat_level: Option<u32>,
    #[serde(deserialize_with = "lenient::optional")]
    pub selected_boat: Option<SelectedBoat>,
    #[serde(deserialize_with = "lenient::list")]
    pub quest_steps: Vec<QuestStep>,
    #[serde(deserialize_with = "lenient::object")]
    pub preferences: Preferences,
    #[serde(deserialize_with = "lenient::object")]
    pub stats: LifetimeStats,
    /// Only whether the host reports a run in progress matters here.
    #[serde(deserialize_with = "lenient::present")]
    pub active_run: bool,
}

impl Snapshot {
    /// Roster entry matching the recorded selection level.
    pub fn selected_roster_boat(&self) -> Option<&Boat> {
        let level = self.selected_boat_level?;
        self.unlocked_boats.iter().find(|b| b.level == level)
    }

    pub fn is_selected(&self, boat: &Boat) -> bool {
        self.selected_boat_level == Some(boat.level)
    }

    /// Label and model of the active boat, if any is known.
    pub fn selected_boat_summary(&self) -> Option<(Option<String>, Option<String>)> {
        if let Some(boat) = self.selected_roster_boat() {
            return Some((boat.label.clone(), boat.model.clone()));
        }
        self.selected_boat
            .as_ref()
            .map(|b| (b.label.clone(), b.model.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastPayload {
    #[serde(rename = "type", deserialize_with = "lenient::string")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub text: Option<String>,
}

/// Sale summary pushed after the catch is sold.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    #[serde(deserialize_with = "lenient::f64")]
    pub sold_grams: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub subtotal: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub boat_bonus_pct: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub level_bonus_pct: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub xp_gained: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub huge_rare_count: f64,
    #[serde(deserialize_with = "lenient::f64")]
    pub total_payout: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LevelUpData {
    #[serde(deserialize_with = "lenient::optional_u32")]
    pub level: Option<u32>,
}

/// Messages the host posts into the page, discriminated by `action`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum InboundMessage {
    Open {
        #[serde(default, deserialize_with = "lenient::string")]
        title: Option<String>,
        #[serde(default, deserialize_with = "lenient::string")]
        tab: Option<String>,
    },
    Close,
    Sync {
        #[serde(default, deserialize_with = "lenient::optional")]
        state: Option<Snapshot>,
    },
    Toast {
        #[serde(default, deserialize_with = "lenient::object")]
        toast: ToastPayload,
    },
    Receipt {
        #[serde(default, deserialize_with = "lenient::object")]
        receipt: Receipt,
    },
    LevelUp {
        #[serde(default, deserialize_with = "lenient::object")]
        data: LevelUpData,
    },
    Progress {
        #[serde(default, deserialize_with = "lenient::truthy")]
        show: bool,
        #[serde(default, deserialize_with = "lenient::string")]
        label: Option<String>,
        #[serde(default, deserialize_with = "lenient::f64")]
        percent: f64,
    },
}

impl InboundMessage {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Field decoders mirroring loose host typing: numeric strings count as numbers,
/// null and garbage fall back to defaults.
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number(v: &Value) -> Option<f64> {
        match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    fn whole(n: f64) -> u64 {
        if n.is_finite() && n > 0.0 { n.floor() as u64 } else { 0 }
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(number(&v).filter(|n| !n.is_nan()).unwrap_or(0.0))
    }

    pub fn u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(number(&v).map(whole).unwrap_or(0))
    }

    pub fn u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(number(&v)
            .map(|n| whole(n).min(u32::MAX as u64) as u32)
            .unwrap_or(0))
    }

    pub fn optional_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(number(&v)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| whole(n).min(u32::MAX as u64) as u32))
    }

    /// Empty strings count as absent.
    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(match v {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(match v {
            Value::Null => false,
            Value::Bool(b) => b,
            Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        })
    }

    pub fn present<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let v = Value::deserialize(d)?;
        Ok(!v.is_null())
    }

    pub fn object<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let v = Value::deserialize(d)?;
        Ok(serde_json::from_value(v).unwrap_or_default())
    }

    pub fn optional<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let v = Value::deserialize(d)?;
        if v.is_null() {
            return Ok(None);
        }
        Ok(serde_json::from_value(v).ok())
    }

    /// Entries that cannot be decoded are skipped.
    pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let v = Value::deserialize(d)?;
        Ok(match v {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_sync() {
        let raw = r#"{
            "action": "sync",
            "state": {
                "level": 4, "xp": 1250, "levelProgressPct": 37.5, "levelBonusPct": 6,
                "daily": { "runs": 2, "maxRuns": 5, "lastResetDate": "2026-10-18" },
                "wallet": 15320,
                "stage": "deploy_line",
                "objective": { "text": "Head to the reef", "zone": "North Reef" },
                "holdUsedGrams": 4200, "holdCapacityGrams": 10000, "holdPct": 42,
                "fishHold": [{ "label": "Tuna", "grams": 4200, "rare": true, "pricePerGram": 0.35, "estValue": 1470 }],
                "unlockedBoats": [
                    { "level": 1, "label": "Skiff", "model": "dinghy", "holdCapacityGrams": 10000, "payoutBonusPct": 0, "unlocked": true },
                    { "level": 2, "label": "Trawler", "model": "tug", "holdCapacityGrams": 40000, "payoutBonusPct": 10, "unlocked": false }
                ],
                "selectedBoatLevel": 1,
                "selectedBoat": { "label": "Skiff", "model": "dinghy" },
                "questSteps": [{ "key": "harbor", "label": "Reach harbor", "done": true }],
                "preferences": { "waypoint": true },
                "stats": { "runsCompleted": 9, "totalEarned": 99000 },
                "activeRun": { "id": 3 }
            }
        }"#;
        let InboundMessage::Sync { state: Some(s) } = InboundMessage::from_json(raw).unwrap() else {
            panic!("expected sync with state");
        };
        assert_eq!(s.level, 4);
        assert_eq!(s.stage, Stage::DeployLine);
        assert_eq!(s.daily.max_runs, 5);
        assert_eq!(s.fish_hold.len(), 1);
        assert!(s.fish_hold[0].rare);
        assert_eq!(s.unlocked_boats.len(), 2);
        assert!(s.active_run);
        assert!(s.preferences.waypoint);
        assert_eq!(s.selected_roster_boat().map(|b| b.level), Some(1));
    }

    #[test]
    fn numbers_as_strings_and_garbage_fall_back() {
        let raw = r#"{ "action": "sync", "state": {
            "level": "3", "xp": "oops", "wallet": null, "daily": 7,
            "fishHold": [null, { "label": "Cod", "grams": "120" }],
            "activeRun": null, "selectedBoatLevel": "2"
        } }"#;
        let InboundMessage::Sync { state: Some(s) } = InboundMessage::from_json(raw).unwrap() else {
            panic!("expected sync with state");
        };
        assert_eq!(s.level, 3);
        assert_eq!(s.xp, 0);
        assert_eq!(s.wallet, 0.0);
        assert_eq!(s.daily, DailyLimit::default());
        assert_eq!(s.fish_hold.len(), 1);
        assert_eq!(s.fish_hold[0].grams, 120.0);
        assert!(!s.active_run);
        assert_eq!(s.selected_boat_level, Some(2));
    }

    #[test]
    fn unknown_stage_keeps_raw_text() {
        assert_eq!(Stage::from("storm_warning"), Stage::Unknown("storm_warning".into()));
        assert_eq!(Stage::from("storm_warning").label(), "storm_warning");
        assert_eq!(Stage::default().label(), "-");
        assert_eq!(Stage::ReturnSell.to_string(), "Sell");
    }

    #[test]
    fn sync_with_null_state() {
        let msg = InboundMessage::from_json(r#"{ "action": "sync", "state": null }"#).unwrap();
        assert_eq!(msg, InboundMessage::Sync { state: None });
        let msg = InboundMessage::from_json(r#"{ "action": "sync" }"#).unwrap();
        assert_eq!(msg, InboundMessage::Sync { state: None });
    }

    #[test]
    fn decodes_one_shot_messages() {
        let msg = InboundMessage::from_json(
            r#"{ "action": "receipt", "receipt": { "soldGrams": 500, "subtotal": 100, "boatBonusPct": 10,
                "levelBonusPct": 5, "xpGained": 20, "hugeRareCount": 1, "totalPayout": 115 } }"#,
        )
        .unwrap();
        let InboundMessage::Receipt { receipt } = msg else { panic!("expected receipt") };
        assert_eq!(receipt.total_payout, 115.0);
        assert_eq!(receipt.huge_rare_count, 1.0);

        let msg = InboundMessage::from_json(r#"{ "action": "levelUp", "data": { "level": 7 } }"#).unwrap();
        assert_eq!(msg, InboundMessage::LevelUp { data: LevelUpData { level: Some(7) } });

        let msg = InboundMessage::from_json(r#"{ "action": "close", "extra": 1 }"#).unwrap();
        assert_eq!(msg, InboundMessage::Close);

        let msg = InboundMessage::from_json(
            r#"{ "action": "toast", "toast": { "type": "error", "text": "Hold is full" } }"#,
        )
        .unwrap();
        let InboundMessage::Toast { toast } = msg else { panic!("expected toast") };
        assert_eq!(toast.kind.as_deref(), Some("error"));
        assert_eq!(toast.text.as_deref(), Some("Hold is full"));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert!(InboundMessage::from_json(r#"{ "action": "teleport" }"#).is_err());
        assert!(InboundMessage::from_json(r#"{ "nope": true }"#).is_err());
    }

    #[test]
    fn selected_boat_falls_back_to_host_record() {
        let mut s = Snapshot {
            selected_boat_level: Some(5),
            selected_boat: Some(SelectedBoat {
                label: Some("Yacht".into()),
                model: Some("marquis".into()),
            }),
            ..Default::default()
        };
        assert_eq!(
            s.selected_boat_summary(),
            Some((Some("Yacht".into()), Some("marquis".into())))
        );
        s.selected_boat = None;
        assert_eq!(s.selected_boat_summary(), None);
    }
}
