use crate::core::registry::ActionId;

/// 카드 모드
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    /// 직접 투표 카드 (손에 쥔 표 수)
    Vote { votes: u32 },
    /// 위임 카드 (위임받은 사람과 투표 여부)
    Delegation {
        delegate_name: String,
        has_voted: bool,
    },
}

/// 법안 카드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallotCard {
    pub category: String,
    pub act_title: String,
    pub mode: CardMode,
}

impl BallotCard {
    pub fn vote(category: impl Into<String>, act_title: impl Into<String>, votes: u32) -> Self {
        Self {
            category: category.into(),
            act_title: act_title.into(),
            mode: CardMode::Vote { votes },
        }
    }

    pub fn delegation(
        category: impl Into<String>,
        act_title: impl Into<String>,
        delegate_name: impl Into<String>,
        has_voted: bool,
    ) -> Self {
        Self {
            category: category.into(),
            act_title: act_title.into(),
            mode: CardMode::Delegation {
                delegate_name: delegate_name.into(),
                has_voted,
            },
        }
    }

    pub fn is_delegation(&self) -> bool {
        matches!(self.mode, CardMode::Delegation { .. })
    }

    /// 이 카드에서 요청 가능한 액션
    ///
    /// 위임 카드의 YES/NO 버튼은 항상 비활성이라 포함하지 않습니다.
    pub fn available_actions(&self) -> &'static [ActionId] {
        match self.mode {
            CardMode::Vote { .. } => &[
                ActionId::Decline,
                ActionId::Delegate,
                ActionId::AutoDelegate,
                ActionId::VoteYes,
                ActionId::VoteNo,
            ],
            CardMode::Delegation { .. } => &[
                ActionId::Decline,
                ActionId::SwitchDelegate,
                ActionId::VoteMyself,
            ],
        }
    }

    pub fn allows(&self, action: ActionId) -> bool {
        self.available_actions().contains(&action)
    }
}

/// 이름 이니셜 (아바타 대용)
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
