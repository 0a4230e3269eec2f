//! 액션 시스템 - 단일 진실 원천 (Single Source of Truth)
//!
//! 모든 키 바인딩, 커맨드바 항목, 도움말 내용이
//! 이 모듈의 레지스트리를 참조합니다.

use super::registry::ActionId;
use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    NextScreen,
    PrevScreen,
    NextCard,
    PrevCard,
    NextSection,
    PrevSection,
    NextCategory,
    PrevCategory,
    // Ballot (확인 모달을 거침)
    Decline,
    Delegate,
    AutoDelegate,
    VoteYes,
    VoteNo,
    SwitchDelegate,
    VoteMyself,
    // Links
    ClaimNow,
    OpenLink,
    // System
    ShowActivity,
    ShowHelp,
    CycleTheme,
    About,
    Quit,
}

impl Action {
    /// 확인 흐름으로 넘길 투표/위임 액션
    pub fn ballot_action(self) -> Option<ActionId> {
        match self {
            Action::Decline => Some(ActionId::Decline),
            Action::Delegate => Some(ActionId::Delegate),
            Action::AutoDelegate => Some(ActionId::AutoDelegate),
            Action::VoteYes => Some(ActionId::VoteYes),
            Action::VoteNo => Some(ActionId::VoteNo),
            Action::SwitchDelegate => Some(ActionId::SwitchDelegate),
            Action::VoteMyself => Some(ActionId::VoteMyself),
            _ => None,
        }
    }

    /// action_id 문자열로 Action 조회
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Ballot,
    System,
}

impl ActionCategory {
    pub fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Ballot => "Voting & Delegation",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::NextScreen,
        id: "next_screen",
        label: "Next screen",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab / S-Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Screen",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::PrevScreen,
        id: "prev_screen",
        label: "Previous screen",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::NextCard,
        id: "next_card",
        label: "Next act",
        category: ActionCategory::Navigation,
        shortcut_display: Some("h / l"),
        command_bar: Some(CommandBarEntry {
            key: "h/l",
            label: "Act",
            priority: 51,
        }),
    },
    ActionDef {
        action: Action::PrevCard,
        id: "prev_card",
        label: "Previous act",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::NextSection,
        id: "next_section",
        label: "Next section",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Section",
            priority: 52,
        }),
    },
    ActionDef {
        action: Action::PrevSection,
        id: "prev_section",
        label: "Previous section",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::NextCategory,
        id: "next_category",
        label: "Next category",
        category: ActionCategory::Navigation,
        shortcut_display: Some("[ / ]"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PrevCategory,
        id: "prev_category",
        label: "Previous category",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    // Ballot
    ActionDef {
        action: Action::Decline,
        id: "decline",
        label: "Decline",
        category: ActionCategory::Ballot,
        shortcut_display: Some("x"),
        command_bar: Some(CommandBarEntry {
            key: "x",
            label: "Decline",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::Delegate,
        id: "delegate",
        label: "Delegate vote",
        category: ActionCategory::Ballot,
        shortcut_display: Some("d"),
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Delegate",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::AutoDelegate,
        id: "auto_delegate",
        label: "Auto delegate vote",
        category: ActionCategory::Ballot,
        shortcut_display: Some("a"),
        command_bar: Some(CommandBarEntry {
            key: "a",
            label: "Auto",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::VoteYes,
        id: "vote_yes",
        label: "Vote YES",
        category: ActionCategory::Ballot,
        shortcut_display: Some("y"),
        command_bar: Some(CommandBarEntry {
            key: "y",
            label: "Yes",
            priority: 13,
        }),
    },
    ActionDef {
        action: Action::VoteNo,
        id: "vote_no",
        label: "Vote NO",
        category: ActionCategory::Ballot,
        shortcut_display: Some("n"),
        command_bar: Some(CommandBarEntry {
            key: "n",
            label: "No",
            priority: 14,
        }),
    },
    ActionDef {
        action: Action::SwitchDelegate,
        id: "switch_delegate",
        label: "Switch delegate",
        category: ActionCategory::Ballot,
        shortcut_display: Some("s"),
        command_bar: Some(CommandBarEntry {
            key: "s",
            label: "Switch",
            priority: 15,
        }),
    },
    ActionDef {
        action: Action::VoteMyself,
        id: "vote_myself",
        label: "Vote myself",
        category: ActionCategory::Ballot,
        shortcut_display: Some("m"),
        command_bar: Some(CommandBarEntry {
            key: "m",
            label: "Myself",
            priority: 16,
        }),
    },
    // Links
    ActionDef {
        action: Action::ClaimNow,
        id: "claim_now",
        label: "Claim incoming delegations",
        category: ActionCategory::Ballot,
        shortcut_display: Some("c"),
        command_bar: None,
    },
    ActionDef {
        action: Action::OpenLink,
        id: "open_link",
        label: "Open link / view more",
        category: ActionCategory::Ballot,
        shortcut_display: Some("o"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ShowActivity,
        id: "activity",
        label: "Committed actions",
        category: ActionCategory::System,
        shortcut_display: Some("L"),
        command_bar: Some(CommandBarEntry {
            key: "L",
            label: "Log",
            priority: 60,
        }),
    },
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 61,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        label: "Cycle theme",
        category: ActionCategory::System,
        shortcut_display: Some("T"),
        command_bar: None,
    },
    ActionDef {
        action: Action::About,
        id: "about",
        label: "About",
        category: ActionCategory::System,
        shortcut_display: Some("F1"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / Ctrl+C"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 62,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 화면 전환
        KeyBinding {
            code: KeyCode::Tab,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::NextScreen,
        },
        KeyBinding {
            code: KeyCode::BackTab,
            modifiers: None,
            action: Action::PrevScreen,
        },
        // 카드 이동
        KeyBinding {
            code: KeyCode::Char('l'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::NextCard,
        },
        KeyBinding {
            code: KeyCode::Right,
            modifiers: None,
            action: Action::NextCard,
        },
        KeyBinding {
            code: KeyCode::Char('h'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::PrevCard,
        },
        KeyBinding {
            code: KeyCode::Left,
            modifiers: None,
            action: Action::PrevCard,
        },
        // 구역 이동
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::NextSection,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: None,
            action: Action::NextSection,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::PrevSection,
        },
        KeyBinding {
            code: KeyCode::Up,
            modifiers: None,
            action: Action::PrevSection,
        },
        // 카테고리
        KeyBinding {
            code: KeyCode::Char(']'),
            modifiers: None,
            action: Action::NextCategory,
        },
        KeyBinding {
            code: KeyCode::Char('['),
            modifiers: None,
            action: Action::PrevCategory,
        },
        // 투표/위임
        KeyBinding {
            code: KeyCode::Char('x'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Decline,
        },
        KeyBinding {
            code: KeyCode::Char('d'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Delegate,
        },
        KeyBinding {
            code: KeyCode::Char('a'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::AutoDelegate,
        },
        KeyBinding {
            code: KeyCode::Char('y'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::VoteYes,
        },
        KeyBinding {
            code: KeyCode::Char('n'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::VoteNo,
        },
        KeyBinding {
            code: KeyCode::Char('s'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::SwitchDelegate,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::VoteMyself,
        },
        // 링크
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ClaimNow,
        },
        KeyBinding {
            code: KeyCode::Char('o'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::OpenLink,
        },
        // 시스템
        KeyBinding {
            code: KeyCode::Char('L'),
            modifiers: None,
            action: Action::ShowActivity,
        },
        KeyBinding {
            code: KeyCode::Char('?'),
            modifiers: None,
            action: Action::ShowHelp,
        },
        KeyBinding {
            code: KeyCode::Char('T'),
            modifiers: None,
            action: Action::CycleTheme,
        },
        KeyBinding {
            code: KeyCode::F(1),
            modifiers: None,
            action: Action::About,
        },
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    for binding in key_bindings() {
        let code_matches = binding.code == code;
        let mod_matches = match binding.modifiers {
            None => true, // any modifier
            Some(required) => modifiers == required,
        };
        if code_matches && mod_matches {
            return Some(binding.action);
        }
    }
    None
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
///
/// 투표/위임 항목은 `available`에 있을 때만 활성 표시됩니다.
pub fn generate_command_bar_items(available: &[ActionId]) -> Vec<CommandItem> {
    let mut entries: Vec<(&ActionDef, &CommandBarEntry)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (def, cb)))
        .collect();

    entries.sort_by_key(|(_, cb)| cb.priority);

    entries
        .into_iter()
        .map(|(def, cb)| {
            let enabled = def
                .action
                .ballot_action()
                .map_or(true, |id| available.contains(&id));
            CommandItem::new(cb.key, cb.label).enabled(enabled)
        })
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::Ballot,
        ActionCategory::System,
    ]
    .iter()
    .map(|cat| {
        let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
            .iter()
            .filter(|d| d.category == *cat)
            .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
            .collect();
        (cat.title(), items)
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}
