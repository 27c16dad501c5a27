use super::{post_on_click, use_host};
use crate::host::HostAction;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub title: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let send = use_host();
    let close_cb = post_on_click(&send, HostAction::Close);
    html! {<div style="display:flex; justify-content:space-between; align-items:center;">
        <h2 style="margin:0; font-size:20px; color:#58a6ff;">{ props.title.clone() }</h2>
        <button onclick={close_cb} style="padding:4px 10px;">{"Close"}</button>
    </div>}
}
