mod components;
mod config;
mod host;
mod logging;
mod model;
mod state;
mod util;

use components::App;
use components::app::AppProps;
use config::PanelConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(PanelConfig::default().log_level);
    let config = PanelConfig::from_host();
    logging::init(config.log_level);
    log::info!("sea tablet ready, host resource '{}'", config.resource_name);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
