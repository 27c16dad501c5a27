use super::fill_bar::FillBar;
use crate::state::view::ProgressView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressOverlayProps {
    pub view: Option<ProgressView>,
}

#[function_component]
pub fn ProgressOverlay(props: &ProgressOverlayProps) -> Html {
    let Some(view) = &props.view else {
        return html! {};
    };
    html! {
        <div style="position:fixed; bottom:48px; left:50%; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:1px solid #30363d; padding:10px 16px; border-radius:10px; min-width:280px; display:flex; flex-direction:column; gap:6px; z-index:40;">
            <div style="font-size:13px; font-weight:600;">{ view.label.clone() }</div>
            <FillBar width={view.width.clone()} color="#58a6ff" />
        </div>
    }
}
