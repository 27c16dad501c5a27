use super::{CARD_STYLE, META_STYLE, ROW_STYLE, post_on_click, use_host};
use crate::host::HostAction;
use crate::state::view::BoatsTabView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoatsTabProps {
    pub view: BoatsTabView,
}

#[function_component(BoatsTab)]
pub fn boats_tab(props: &BoatsTabProps) -> Html {
    let send = use_host();
    let v = &props.view;
    html! {<div style={CARD_STYLE}>
        <div style="font-weight:600;">{ v.selected_text.clone() }</div>
        <div style="display:flex; gap:8px;">
            <button disabled={!v.start_run_enabled} onclick={post_on_click(&send, HostAction::StartRun)} style="flex:1;">{"Start Sea Run"}</button>
            <button disabled={!v.spawn_enabled} onclick={post_on_click(&send, HostAction::SpawnBoat)} style="flex:1;">{"Spawn Boat"}</button>
            <button onclick={post_on_click(&send, v.waypoint_toggle.clone())} style="flex:0 0 auto;">{ v.waypoint_text.clone() }</button>
        </div>
        { for v.rows.iter().map(|row| {
            // Locked and already selected boats render a disabled button.
            let onclick = row.select.clone().map(|action| post_on_click(&send, action));
            html! { <div key={row.key.clone()} style={ROW_STYLE}>
                <div>
                    <strong>{ row.title.clone() }</strong>
                    <div style={META_STYLE}>{ row.meta.clone() }</div>
                </div>
                <button disabled={row.select.is_none()} {onclick}>{ row.button_label }</button>
            </div> }
        }) }
    </div>}
}
