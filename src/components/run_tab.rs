use super::{CARD_STYLE, post_on_click, use_host};
use crate::host::HostAction;
use crate::state::view::RunTabView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RunTabProps {
    pub view: RunTabView,
}

#[function_component(RunTab)]
pub fn run_tab(props: &RunTabProps) -> Html {
    let send = use_host();
    let v = &props.view;
    let pill = "padding:2px 8px; border:1px solid #30363d; border-radius:10px; font-size:12px; background:#161b22;";
    html! {<div style={CARD_STYLE}>
        <div style="font-weight:600;">{ v.objective_text.clone() }</div>
        <div style="display:flex; gap:6px; flex-wrap:wrap;">
            <span style={pill}>{ v.stage_text.clone() }</span>
            <span style={pill}>{ v.route_text.clone() }</span>
        </div>
        <ul style="margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:4px;">
            { for v.quest_steps.iter().enumerate().map(|(i, step)| {
                let dot = if step.done { "#3fb950" } else { "#30363d" };
                let text = if step.done { "opacity:0.6; text-decoration:line-through;" } else { "" };
                html! { <li key={i} style="display:flex; align-items:center; gap:8px;">
                    <span style={format!("display:inline-block; width:10px; height:10px; border-radius:50%; background:{};", dot)}></span>
                    <span style={text}>{ step.label.clone() }</span>
                </li> }
            }) }
        </ul>
        <div style="display:flex; gap:8px;">
            <button disabled={!v.deploy_enabled} onclick={post_on_click(&send, HostAction::DeployLine)} style="flex:1;">{"Deploy Line"}</button>
            <button disabled={!v.reel_enabled} onclick={post_on_click(&send, HostAction::ReelLine)} style="flex:1;">{"Reel Line"}</button>
        </div>
    </div>}
}
