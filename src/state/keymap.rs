use super::tabs::Tab;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    Close,
    SelectTab(Tab),
    RunNextAction,
}

pub fn is_text_entry(tag_name: &str) -> bool {
    matches!(tag_name.to_ascii_lowercase().as_str(), "input" | "textarea" | "select")
}

/// Escape works while typing; other shortcuts do not.
pub fn resolve(key: &str, visible: bool, typing: bool) -> Option<KeyCommand> {
    if !visible {
        return None;
    }
    if key == "Escape" {
        return Some(KeyCommand::Close);
    }
    if typing {
        return None;
    }
    match key {
        "1" => Some(KeyCommand::SelectTab(Tab::Run)),
        "2" => Some(KeyCommand::SelectTab(Tab::Boats)),
        "3" => Some(KeyCommand::SelectTab(Tab::Market)),
        "Enter" => Some(KeyCommand::RunNextAction),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_panel_ignores_keys() {
        assert_eq!(resolve("Escape", false, false), None);
        assert_eq!(resolve("1", false, false), None);
    }

    #[test]
    fn digits_pick_tabs() {
        assert_eq!(resolve("1", true, false), Some(KeyCommand::SelectTab(Tab::Run)));
        assert_eq!(resolve("2", true, false), Some(KeyCommand::SelectTab(Tab::Boats)));
        assert_eq!(resolve("3", true, false), Some(KeyCommand::SelectTab(Tab::Market)));
        assert_eq!(resolve("4", true, false), None);
    }

    #[test]
    fn typing_suppresses_all_but_escape() {
        assert_eq!(resolve("Escape", true, true), Some(KeyCommand::Close));
        assert_eq!(resolve("2", true, true), None);
        assert_eq!(resolve("Enter", true, true), None);
        assert_eq!(resolve("Enter", true, false), Some(KeyCommand::RunNextAction));
    }

    #[test]
    fn text_entry_tags() {
        assert!(is_text_entry("INPUT"));
        assert!(is_text_entry("textarea"));
        assert!(is_text_entry("Select"));
        assert!(!is_text_entry("BUTTON"));
    }
}
