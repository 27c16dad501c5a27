pub mod keymap;
pub mod next_action;
pub mod panel;
pub mod tabs;
pub mod view;

pub use keymap::KeyCommand;
pub use next_action::NextAction;
pub use panel::{PanelAction, PanelState, react};
pub use tabs::Tab;
pub use view::PanelView;
