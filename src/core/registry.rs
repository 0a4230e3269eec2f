//! 확인 프롬프트 레지스트리
//!
//! 투표/위임 액션마다 확인 다이얼로그에 표시할 제목, 메시지, 아이콘을
//! 고정 테이블로 보관합니다. 가변 상태가 없으므로 어디서든 호출 가능합니다.

use std::fmt;

/// 확인이 필요한 투표/위임 액션 (닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Decline,
    Delegate,
    AutoDelegate,
    VoteYes,
    VoteNo,
    SwitchDelegate,
    VoteMyself,
}

impl ActionId {
    /// 선언 순서대로 모든 액션
    pub const ALL: [ActionId; 7] = [
        ActionId::Decline,
        ActionId::Delegate,
        ActionId::AutoDelegate,
        ActionId::VoteYes,
        ActionId::VoteNo,
        ActionId::SwitchDelegate,
        ActionId::VoteMyself,
    ];

    /// 로그/설정에 쓰이는 고정 문자열 ID
    pub fn id(self) -> &'static str {
        match self {
            ActionId::Decline => "decline",
            ActionId::Delegate => "delegate",
            ActionId::AutoDelegate => "auto_delegate",
            ActionId::VoteYes => "vote_yes",
            ActionId::VoteNo => "vote_no",
            ActionId::SwitchDelegate => "switch_delegate",
            ActionId::VoteMyself => "vote_myself",
        }
    }

    /// 문자열 ID로 액션 조회
    ///
    /// 모바일 클라이언트의 옛 태그(`auto`, `yes`, `no`, `switch`, `vote myself`)도 허용합니다.
    pub fn from_id(id: &str) -> Option<ActionId> {
        let id = id.trim();
        if let Some(action) = Self::ALL.iter().copied().find(|a| a.id() == id) {
            return Some(action);
        }
        match id {
            "auto" => Some(ActionId::AutoDelegate),
            "yes" => Some(ActionId::VoteYes),
            "no" => Some(ActionId::VoteNo),
            "switch" => Some(ActionId::SwitchDelegate),
            "vote myself" => Some(ActionId::VoteMyself),
            _ => None,
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// 아이콘 세트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// FontAwesome 계열
    SetA,
    /// MaterialCommunity 계열
    SetB,
    /// Feather 계열
    SetC,
}

/// 24비트 RGB 색상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 0xRRGGBB 정수에서 생성
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// "#RRGGBB" 문자열 파싱 (앞의 '#'은 생략 가능)
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// 아이콘 참조 (세트 + 이름 + 색상)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconReference {
    pub set: IconSet,
    pub name: &'static str,
    pub color: RgbColor,
}

/// 확인 다이얼로그 내용
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptContent {
    pub title: &'static str,
    pub message: &'static str,
    pub icon: IconReference,
}

impl PromptContent {
    /// 대기 중인 액션이 없을 때의 기본 내용
    ///
    /// 이 값이 화면에 나온다면 호출 측 계약 위반입니다.
    pub const fn fallback() -> Self {
        Self {
            title: "",
            message: "",
            icon: IconReference {
                set: IconSet::SetA,
                name: "award",
                color: RgbColor::from_u32(0x4CAF50),
            },
        }
    }
}

const fn prompt(
    title: &'static str,
    message: &'static str,
    set: IconSet,
    name: &'static str,
    color: u32,
) -> PromptContent {
    PromptContent {
        title,
        message,
        icon: IconReference {
            set,
            name,
            color: RgbColor::from_u32(color),
        },
    }
}

/// 액션 → 프롬프트 조회 테이블
pub struct ActionRegistry;

impl ActionRegistry {
    /// 액션의 확인 프롬프트 조회
    pub fn lookup(action: ActionId) -> PromptContent {
        match action {
            ActionId::Decline => prompt(
                "Decline",
                "Are you sure you want to decline?",
                IconSet::SetB,
                "cancel",
                0xD93025,
            ),
            ActionId::Delegate => prompt(
                "Delegate",
                "Are you sure you want to delegate your vote?",
                IconSet::SetB,
                "plus-circle",
                0x45008F,
            ),
            ActionId::AutoDelegate => prompt(
                "Auto Delegate",
                "Are you sure you want to auto delegate your vote?",
                IconSet::SetB,
                "rocket",
                0xFCA5A5,
            ),
            ActionId::VoteYes => prompt(
                "Vote YES",
                "Are you sure you want to vote YES?",
                IconSet::SetC,
                "thumbs-up",
                0x3366FF,
            ),
            ActionId::VoteNo => prompt(
                "Vote NO",
                "Are you sure you want to vote NO?",
                IconSet::SetC,
                "thumbs-down",
                0xFF7C7C,
            ),
            ActionId::SwitchDelegate => prompt(
                "Switch",
                "Are you sure you want to switch delegate?",
                IconSet::SetB,
                "plus-circle",
                0x45008F,
            ),
            ActionId::VoteMyself => prompt(
                "Vote Myself",
                "Are you sure you want to vote yourself?",
                IconSet::SetA,
                "award",
                0x34A853,
            ),
        }
    }

    /// 문자열 태그로 프롬프트 조회
    ///
    /// 알 수 없는 태그는 결함으로 기록하고 기본 내용을 반환합니다.
    pub fn lookup_id(id: &str) -> PromptContent {
        match ActionId::from_id(id) {
            Some(action) => Self::lookup(action),
            None => {
                log::error!("prompt lookup for unknown action tag {:?}", id);
                PromptContent::fallback()
            }
        }
    }

    /// 전체 테이블 (선언 순서)
    pub fn entries() -> impl Iterator<Item = (ActionId, PromptContent)> {
        ActionId::ALL.into_iter().map(|a| (a, Self::lookup(a)))
    }
}
