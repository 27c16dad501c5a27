//! Boundary with the game host: outbound action requests and inbound message decoding.

use crate::config::PanelConfig;
use crate::model::InboundMessage;
use serde_json::{Value, json};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, MessageEvent, RequestInit};

/// Requests the panel sends to the host. Fire and forget.
#[derive(Clone, Debug, PartialEq)]
pub enum HostAction {
    Close,
    RequestSync,
    StartRun,
    DeployLine,
    ReelLine,
    SellCatch,
    SpawnBoat,
    SelectBoat { level: u32, model: String },
    SetWaypoint { enabled: bool },
}

impl HostAction {
    pub fn endpoint(&self) -> &'static str {
        match self {
            HostAction::Close => "close",
            HostAction::RequestSync => "requestSync",
            HostAction::StartRun => "startRun",
            HostAction::DeployLine => "deployLine",
            HostAction::ReelLine => "reelLine",
            HostAction::SellCatch => "sellCatch",
            HostAction::SpawnBoat => "spawnBoat",
            HostAction::SelectBoat { .. } => "selectBoat",
            HostAction::SetWaypoint { .. } => "setWaypoint",
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            HostAction::SelectBoat { level, model } => json!({ "level": level, "model": model }),
            HostAction::SetWaypoint { enabled } => json!({ "enabled": enabled }),
            _ => json!({}),
        }
    }

    pub fn url(&self, resource_name: &str) -> String {
        format!("https://{}/{}", resource_name, self.endpoint())
    }
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no browser window")]
    NoWindow,
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Request(String),
}

fn js_err(e: JsValue) -> HostError {
    HostError::Request(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

async fn post(url: &str, payload: &Value) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let body = serde_json::to_string(payload)?;
    let headers = Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json; charset=UTF-8")
        .map_err(js_err)?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));
    // The host answers with nothing useful; only delivery matters.
    JsFuture::from(window.fetch_with_str_and_init(url, &opts))
        .await
        .map_err(js_err)?;
    Ok(())
}

/// Spawn the request and forget about it. Failures are logged and dropped.
pub fn send(config: &PanelConfig, action: HostAction) {
    let url = action.url(&config.resource_name);
    wasm_bindgen_futures::spawn_local(async move {
        let payload = action.payload();
        match post(&url, &payload).await {
            Ok(()) => log::trace!("{} delivered", action.endpoint()),
            Err(e) => log::debug!("{} dropped: {}", action.endpoint(), e),
        }
    });
}

/// Decode a `message` event posted by the host. Unknown shapes yield `None`.
pub fn decode_message(event: &MessageEvent) -> Option<InboundMessage> {
    let data = event.data();
    if data.is_undefined() || data.is_null() {
        return None;
    }
    let raw: String = js_sys::JSON::stringify(&data).ok()?.into();
    match InboundMessage::from_json(&raw) {
        Ok(msg) => Some(msg),
        Err(e) => {
            log::debug!("ignoring host message: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_host_names() {
        let names: Vec<&str> = [
            HostAction::Close,
            HostAction::RequestSync,
            HostAction::StartRun,
            HostAction::DeployLine,
            HostAction::ReelLine,
            HostAction::SellCatch,
            HostAction::SpawnBoat,
            HostAction::SelectBoat { level: 1, model: "dinghy".into() },
            HostAction::SetWaypoint { enabled: true },
        ]
        .iter()
        .map(HostAction::endpoint)
        .collect();
        assert_eq!(
            names,
            [
                "close",
                "requestSync",
                "startRun",
                "deployLine",
                "reelLine",
                "sellCatch",
                "spawnBoat",
                "selectBoat",
                "setWaypoint"
            ]
        );
    }

    #[test]
    fn payloads() {
        assert_eq!(HostAction::StartRun.payload(), json!({}));
        assert_eq!(
            HostAction::SelectBoat { level: 3, model: "tug".into() }.payload(),
            json!({ "level": 3, "model": "tug" })
        );
        assert_eq!(
            HostAction::SetWaypoint { enabled: false }.payload(),
            json!({ "enabled": false })
        );
    }

    #[test]
    fn url_is_scoped_to_resource() {
        assert_eq!(
            HostAction::SellCatch.url("fishing_job"),
            "https://fishing_job/sellCatch"
        );
    }
}
