use super::use_host;
use crate::state::NextAction;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NextActionBarProps {
    pub next: NextAction,
}

#[function_component(NextActionBar)]
pub fn next_action_bar(props: &NextActionBarProps) -> Html {
    let send = use_host();
    let onclick = {
        let command = props.next.command.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(action) = command.clone() {
                send.emit(action);
            }
        })
    };
    html! {<div style="display:flex; align-items:center; gap:10px; padding:8px; border-top:1px solid #30363d;">
        <button disabled={!props.next.enabled()} {onclick} style="padding:6px 14px; background:#238636; border:1px solid #2ea043; color:#fff; font-weight:600;">{ props.next.label }</button>
        <span style="font-size:12px; opacity:0.8;">{ props.next.hint.clone() }</span>
    </div>}
}
