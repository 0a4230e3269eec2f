use super::activity::ActivityLog;
use super::ballot::BallotCard;
use crate::core::confirm::ConfirmationController;
use crate::core::registry::ActionId;

/// 화면 종류 (하단 탭)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenKind {
    #[default]
    CastVote,
    DelegateVote,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 2] = [ScreenKind::CastVote, ScreenKind::DelegateVote];

    pub fn title(self) -> &'static str {
        match self {
            ScreenKind::CastVote => "Cast Vote",
            ScreenKind::DelegateVote => "Delegate Vote",
        }
    }

    /// 설정 파일/로그용 ID
    pub fn id(self) -> &'static str {
        match self {
            ScreenKind::CastVote => "vote",
            ScreenKind::DelegateVote => "delegate",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn next(self) -> Self {
        match self {
            ScreenKind::CastVote => ScreenKind::DelegateVote,
            ScreenKind::DelegateVote => ScreenKind::CastVote,
        }
    }

    pub fn index(self) -> usize {
        match self {
            ScreenKind::CastVote => 0,
            ScreenKind::DelegateVote => 1,
        }
    }
}

/// 화면 내 포커스 구역
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// 상단 통계 카드 (링크만)
    Stats,
    /// 자동 위임 대상 카드 (Switch / Vote Myself)
    AutoDelegate,
    /// 위임받은 사람 행 (Decline)
    ReceivedFrom,
    /// 법안 카드 목록
    Ballots,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Stats => "Stats",
            Section::AutoDelegate => "Auto Delegated to",
            Section::ReceivedFrom => "Received from",
            Section::Ballots => "Acts",
        }
    }
}

/// 확인 모달의 버튼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalButton {
    Cancel,
    #[default]
    Confirm,
}

impl ModalButton {
    pub fn toggle(&mut self) {
        *self = match self {
            ModalButton::Cancel => ModalButton::Confirm,
            ModalButton::Confirm => ModalButton::Cancel,
        };
    }
}

/// 액션 요청 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// 확인 모달이 열림
    Requested { item_index: usize },
    /// 현재 포커스에서 쓸 수 없는 액션
    Unavailable,
}

/// 화면 상태
///
/// 카드 선택과 포커스를 관리하고, 사용자 입력을 확인 컨트롤러로 전달합니다.
#[derive(Debug)]
pub struct ScreenState {
    pub kind: ScreenKind,
    pub cards: Vec<BallotCard>,
    /// 선택된 카드 인덱스
    pub selected_card: usize,
    /// 통계 카드 수
    pub stat_count: usize,
    /// 선택된 통계 카드 인덱스
    pub selected_stat: usize,
    /// 포커스 구역
    pub section: Section,
    /// 선택된 카테고리 탭 (위임 화면 전용)
    pub category_index: usize,
    /// 모달 포커스 버튼
    pub modal_button: ModalButton,
    /// 화면 전용 확인 컨트롤러
    pub confirmation: ConfirmationController<ActivityLog>,
}

impl ScreenState {
    pub fn new(kind: ScreenKind, cards: Vec<BallotCard>) -> Self {
        Self {
            kind,
            cards,
            selected_card: 0,
            stat_count: 0,
            selected_stat: 0,
            section: Section::Ballots,
            category_index: 0,
            modal_button: ModalButton::default(),
            confirmation: ConfirmationController::new(ActivityLog::new(kind)),
        }
    }

    pub fn with_stats(mut self, count: usize) -> Self {
        self.stat_count = count;
        self
    }

    /// 화면에 있는 구역 (위에서 아래 순)
    pub fn sections(&self) -> &'static [Section] {
        match self.kind {
            ScreenKind::CastVote => &[Section::Stats, Section::Ballots],
            ScreenKind::DelegateVote => &[
                Section::Stats,
                Section::AutoDelegate,
                Section::ReceivedFrom,
                Section::Ballots,
            ],
        }
    }

    pub fn selected(&self) -> Option<&BallotCard> {
        self.cards.get(self.selected_card)
    }

    /// 다음 카드 (통계 구역에서는 다음 통계 카드)
    pub fn next_card(&mut self) {
        if self.section == Section::Stats {
            if self.selected_stat + 1 < self.stat_count {
                self.selected_stat += 1;
            }
        } else if self.selected_card + 1 < self.cards.len() {
            self.selected_card += 1;
        }
    }

    pub fn prev_card(&mut self) {
        if self.section == Section::Stats {
            self.selected_stat = self.selected_stat.saturating_sub(1);
        } else {
            self.selected_card = self.selected_card.saturating_sub(1);
        }
    }

    pub fn next_section(&mut self) {
        let sections = self.sections();
        if let Some(pos) = sections.iter().position(|s| *s == self.section) {
            if pos + 1 < sections.len() {
                self.section = sections[pos + 1];
            }
        }
    }

    pub fn prev_section(&mut self) {
        let sections = self.sections();
        if let Some(pos) = sections.iter().position(|s| *s == self.section) {
            if pos > 0 {
                self.section = sections[pos - 1];
            }
        }
    }

    pub fn next_category(&mut self, count: usize) {
        if count > 0 {
            self.category_index = (self.category_index + 1) % count;
        }
    }

    pub fn prev_category(&mut self, count: usize) {
        if count > 0 {
            self.category_index = (self.category_index + count - 1) % count;
        }
    }

    /// 현재 포커스에서 요청 가능한 액션
    pub fn available_actions(&self) -> &'static [ActionId] {
        match self.section {
            Section::Stats => &[],
            Section::AutoDelegate => &[ActionId::SwitchDelegate, ActionId::VoteMyself],
            Section::ReceivedFrom => &[ActionId::Decline],
            Section::Ballots => self
                .selected()
                .map(BallotCard::available_actions)
                .unwrap_or(&[]),
        }
    }

    /// 포커스 대상의 항목 인덱스
    fn target_index(&self) -> usize {
        match self.section {
            Section::Stats => self.selected_stat,
            Section::AutoDelegate | Section::ReceivedFrom => 0,
            Section::Ballots => self.selected_card,
        }
    }

    /// 사용자 입력을 확인 요청으로 전달
    pub fn request_action(&mut self, action: ActionId) -> RequestOutcome {
        if !self.available_actions().contains(&action) {
            log::debug!(
                "[{}] {} is not available in {:?}",
                self.kind.id(),
                action,
                self.section
            );
            return RequestOutcome::Unavailable;
        }
        let item_index = self.target_index();
        self.confirmation.request_action(item_index, action);
        self.modal_button = ModalButton::Confirm;
        RequestOutcome::Requested { item_index }
    }
}
