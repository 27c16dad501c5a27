use super::fill_bar::FillBar;
use super::{CARD_STYLE, META_STYLE, ROW_STYLE, post_on_click, use_host};
use crate::host::HostAction;
use crate::state::view::MarketTabView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MarketTabProps {
    pub view: MarketTabView,
}

#[function_component(MarketTab)]
pub fn market_tab(props: &MarketTabProps) -> Html {
    let send = use_host();
    let v = &props.view;
    let fish = if v.fish_rows.is_empty() {
        html! { <div style={ROW_STYLE}><span>{"No fish in hold"}</span></div> }
    } else {
        html! { for v.fish_rows.iter().enumerate().map(|(i, row)| html! {
            <div key={i} style={ROW_STYLE}>
                <div>
                    <strong>{ row.title.clone() }</strong>
                    <div style={META_STYLE}>{ row.meta.clone() }</div>
                </div>
                <strong>{ row.value.clone() }</strong>
            </div>
        }) }
    };
    html! {<div style={CARD_STYLE}>
        <div style="display:flex; justify-content:space-between;">
            <span style="font-weight:500;">{"Hold"}</span>
            <span style="font-variant-numeric:tabular-nums;">{ v.hold_text.clone() }</span>
        </div>
        <FillBar width={v.hold_width.clone()} color="#d29922" />
        { fish }
        <button disabled={!v.sell_enabled} onclick={post_on_click(&send, HostAction::SellCatch)}>{"Sell Catch"}</button>
        <div style={META_STYLE}>{ v.runs_text.clone() }</div>
        <div style={META_STYLE}>{ v.earned_text.clone() }</div>
    </div>}
}
