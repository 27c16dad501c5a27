use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FillBarProps {
    /// CSS width, already clamped.
    pub width: String,
    pub color: &'static str,
}

#[function_component(FillBar)]
pub fn fill_bar(props: &FillBarProps) -> Html {
    html! { <div style="height:8px; background:#0d1117; border:1px solid #30363d; border-radius:4px; overflow:hidden;"> <div style={format!("height:100%; width:{}; background:{}; transition:width 0.2s;", props.width, props.color)}></div> </div> }
}
