// 아이콘 이름 → 터미널 글리프
//
// 아이콘 세트 구분 없이 이름으로만 매핑합니다. 모르는 이름은 "●".

use crate::core::registry::IconReference;

pub fn glyph(name: &str) -> &'static str {
    match name {
        "award" => "★",
        "cancel" => "⊘",
        "plus-circle" => "⊕",
        "rocket" => "➚",
        "thumbs-up" => "▲",
        "thumbs-down" => "▼",
        "clipboard-check" => "✔",
        "account-multiple" => "⚇",
        "link" => "↗",
        _ => "●",
    }
}

pub fn icon_glyph(icon: &IconReference) -> &'static str {
    glyph(icon.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{ActionId, ActionRegistry, PromptContent};

    #[test]
    fn test_every_prompt_icon_has_glyph() {
        for (_, prompt) in ActionRegistry::entries() {
            assert_ne!(icon_glyph(&prompt.icon), "●", "{}", prompt.icon.name);
        }
        assert_eq!(icon_glyph(&ActionRegistry::lookup(ActionId::VoteYes).icon), "▲");
    }

    #[test]
    fn test_fallback_icon() {
        assert_eq!(icon_glyph(&PromptContent::fallback().icon), "★");
        assert_eq!(glyph("unknown"), "●");
    }
}
