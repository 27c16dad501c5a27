use crate::state::panel::ToastEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastEntry>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {<div style="position:fixed; top:16px; right:16px; display:flex; flex-direction:column; gap:6px; z-index:60; pointer-events:none;">
        { for props.toasts.iter().map(|t| html! {
            <div key={t.id} style={format!("background:rgba(13,17,23,0.95); border:1px solid #30363d; border-left:4px solid {}; border-radius:6px; padding:8px 12px; min-width:220px; font-size:13px;", t.kind.accent())}>
                { t.text.clone() }
            </div>
        }) }
    </div>}
}
