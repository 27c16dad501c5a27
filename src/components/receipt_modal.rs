use crate::state::view::ReceiptView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ReceiptModalProps {
    pub view: Option<ReceiptView>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ReceiptModal(props: &ReceiptModalProps) -> Html {
    let Some(view) = &props.view else {
        return html! {};
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:12px;">
            <h3 style="margin:0; font-size:18px;">{"Sale Receipt"}</h3>
            <ul style="margin:0 0 0 18px; padding:0; display:flex; flex-direction:column; gap:4px;">
                { for view.lines.iter().map(|line| html! { <li>{ line.clone() }</li> }) }
            </ul>
            <div style="font-size:16px; font-weight:700; color:#3fb950;">{ view.total_text.clone() }</div>
            <button onclick={close_cb}>{"Done"}</button>
        </div>
    </div>}
}
