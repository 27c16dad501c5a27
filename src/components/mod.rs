pub mod app;
pub mod boats_tab;
pub mod fill_bar;
pub mod header;
pub mod market_tab;
pub mod next_action_bar;
pub mod progress_overlay;
pub mod progression_panel;
pub mod receipt_modal;
pub mod run_tab;
pub mod tab_bar;
pub mod toast_stack;

use crate::host::HostAction;
use yew::prelude::*;

pub use app::App;

// Shared card styling for the three tabs.
pub(crate) const CARD_STYLE: &str = "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px;";
pub(crate) const ROW_STYLE: &str = "display:flex; align-items:center; justify-content:space-between; gap:8px; padding:6px 8px; background:#1c2128; border:1px solid #30363d; border-radius:6px;";
pub(crate) const META_STYLE: &str = "font-size:11px; color:#8b949e;";

/// Lets any component post host actions without prop drilling.
#[derive(Clone, PartialEq)]
pub struct HostContext {
    pub send: Callback<HostAction>,
}

#[hook]
pub fn use_host() -> Callback<HostAction> {
    use_context::<HostContext>()
        .map(|ctx| ctx.send)
        .unwrap_or_else(|| {
            Callback::from(|action: HostAction| {
                log::warn!("no host context, dropping {}", action.endpoint())
            })
        })
}

/// Click handler that posts a fixed action.
pub fn post_on_click(send: &Callback<HostAction>, action: HostAction) -> Callback<MouseEvent> {
    send.reform(move |_: MouseEvent| action.clone())
}
