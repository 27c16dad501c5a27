use crate::state::Tab;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TabBarProps {
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {<div style="display:flex; gap:6px;">
        { for Tab::ALL.into_iter().enumerate().map(|(i, tab)| {
            let on_select = props.on_select.clone();
            let onclick = Callback::from(move |_| on_select.emit(tab));
            let style = if tab == props.active {
                "flex:1; padding:6px; background:#1f6feb; border:1px solid #388bfd; color:#fff;"
            } else {
                "flex:1; padding:6px; background:#21262d; border:1px solid #30363d; color:#c9d1d9;"
            };
            html! { <button key={tab.key()} {onclick} {style}>{ format!("{} {}", i + 1, tab.title()) }</button> }
        }) }
    </div>}
}
