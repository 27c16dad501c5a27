use super::META_STYLE;
use super::fill_bar::FillBar;
use crate::state::view::ProgressionView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressionPanelProps {
    pub view: ProgressionView,
}

#[function_component]
pub fn ProgressionPanel(props: &ProgressionPanelProps) -> Html {
    let v = &props.view;
    let row_style = "display:flex; align-items:center; gap:8px;"; // label | value
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let level_style = if v.level_pop {
        "font-size:18px; font-weight:700; color:#d4af37; transform:scale(1.25); transition:transform 0.15s;"
    } else {
        "font-size:18px; font-weight:700; color:#d4af37; transform:scale(1); transition:transform 0.15s;"
    };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style="display:flex; align-items:baseline; justify-content:space-between;">
                <span style={level_style}>{ v.level_text.clone() }</span>
                <span style="color:#58a6ff;">{ v.xp_text.clone() }</span>
            </div>
            <FillBar width={v.xp_width.clone()} color="#58a6ff" />
            <div style={META_STYLE}>{ v.bonus_text.clone() }</div>
            <div style={row_style}>
                <span style={label_style}>{"Daily runs"}</span>
                <span style={value_style}>{ v.daily_text.clone() }</span>
            </div>
            <div style={META_STYLE}>{ v.reset_text.clone() }</div>
            <div style={row_style}>
                <span style={format!("{} color:#3fb950;", label_style)}>{"Wallet"}</span>
                <span style={format!("{} color:#3fb950;", value_style)}>{ v.wallet_text.clone() }</span>
            </div>
        </div>
    }
}

