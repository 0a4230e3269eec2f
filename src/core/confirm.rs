//! 액션 확인 흐름
//!
//! 화면마다 하나씩 소유하는 상태 기계입니다. 모달 표시 여부는 대기 액션의
//! 존재로부터만 계산되므로 둘이 어긋날 수 없습니다.
//!
//! ```text
//! Hidden ──request_action──▶ AwaitingConfirmation ──request_action──┐
//!   ▲                              │        ▲                        │
//!   └──── confirm / cancel ────────┘        └────────────────────────┘
//! ```

use super::pending::{PendingAction, PendingActionStore};
use super::registry::{ActionId, ActionRegistry, PromptContent};

/// 확정된 액션을 받는 쪽
pub trait ActionSink {
    fn on_action_committed(&mut self, item_index: usize, action: ActionId);
}

/// 확인 흐름 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    /// 모달 숨김
    Hidden,
    /// 사용자 확인 대기
    AwaitingConfirmation(PendingAction),
}

/// 확인 컨트롤러
#[derive(Debug)]
pub struct ConfirmationController<S: ActionSink> {
    store: PendingActionStore,
    sink: S,
}

impl<S: ActionSink> ConfirmationController<S> {
    pub fn new(sink: S) -> Self {
        Self {
            store: PendingActionStore::new(),
            sink,
        }
    }

    /// 액션 확인 요청 (이전 요청은 덮어씀)
    pub fn request_action(&mut self, item_index: usize, action: ActionId) {
        if let Some(previous) = self.store.current() {
            log::debug!(
                "replacing pending {}#{} with {}#{}",
                previous.action,
                previous.item_index,
                action,
                item_index
            );
        }
        self.store.set(item_index, action);
    }

    /// 대기 액션 확정
    ///
    /// 액션 싱크에 정확히 한 번 전달한 뒤 상태를 비웁니다.
    pub fn confirm(&mut self) -> Option<PendingAction> {
        let Some(pending) = self.store.current() else {
            log::warn!("confirm requested with no pending action");
            return None;
        };
        self.sink
            .on_action_committed(pending.item_index, pending.action);
        self.store.clear();
        Some(pending)
    }

    /// 확정 없이 닫기
    pub fn cancel(&mut self) {
        if let Some(abandoned) = self.store.clear() {
            log::debug!(
                "abandoned {}#{}",
                abandoned.action,
                abandoned.item_index
            );
        }
    }

    /// 배경/닫기 버튼으로 닫기 (cancel과 동일)
    pub fn dismiss(&mut self) {
        self.cancel();
    }

    pub fn state(&self) -> ConfirmationState {
        match self.store.current() {
            Some(pending) => ConfirmationState::AwaitingConfirmation(pending),
            None => ConfirmationState::Hidden,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.store.current().is_some()
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.store.current()
    }

    /// 현재 모달에 표시할 내용
    pub fn current_prompt(&self) -> PromptContent {
        match self.store.current() {
            Some(pending) => ActionRegistry::lookup(pending.action),
            None => {
                log::warn!("prompt requested while no confirmation is pending");
                PromptContent::fallback()
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::{IconSet, RgbColor};

    #[derive(Debug, Default)]
    struct RecordingSink {
        events: Vec<(usize, ActionId)>,
    }

    impl ActionSink for RecordingSink {
        fn on_action_committed(&mut self, item_index: usize, action: ActionId) {
            self.events.push((item_index, action));
        }
    }

    fn controller() -> ConfirmationController<RecordingSink> {
        ConfirmationController::new(RecordingSink::default())
    }

    #[test]
    fn test_initial_state_is_hidden() {
        let c = controller();
        assert_eq!(c.state(), ConfirmationState::Hidden);
        assert!(!c.is_visible());
        assert_eq!(c.pending(), None);
    }

    #[test]
    fn test_request_action_shows_modal_from_any_state() {
        let mut c = controller();
        c.request_action(1, ActionId::Delegate);
        assert!(c.is_visible());
        assert_eq!(
            c.state(),
            ConfirmationState::AwaitingConfirmation(PendingAction {
                item_index: 1,
                action: ActionId::Delegate
            })
        );

        c.request_action(0, ActionId::VoteNo);
        assert!(c.is_visible());
    }

    #[test]
    fn test_second_request_overwrites_first() {
        let mut c = controller();
        c.request_action(0, ActionId::Decline);
        c.request_action(2, ActionId::AutoDelegate);

        assert_eq!(
            c.pending(),
            Some(PendingAction {
                item_index: 2,
                action: ActionId::AutoDelegate
            })
        );
        assert_eq!(c.current_prompt().title, "Auto Delegate");
    }

    #[test]
    fn test_confirm_emits_once_then_hides() {
        let mut c = controller();
        c.request_action(1, ActionId::VoteMyself);

        let committed = c.confirm();
        assert_eq!(
            committed,
            Some(PendingAction {
                item_index: 1,
                action: ActionId::VoteMyself
            })
        );
        assert_eq!(c.sink().events, vec![(1, ActionId::VoteMyself)]);
        assert_eq!(c.state(), ConfirmationState::Hidden);

        // 두 번째 confirm은 아무것도 보내지 않음
        assert_eq!(c.confirm(), None);
        assert_eq!(c.sink().events.len(), 1);
    }

    #[test]
    fn test_cancel_and_dismiss_emit_nothing() {
        let mut c = controller();
        c.request_action(0, ActionId::Delegate);
        c.cancel();
        assert!(!c.is_visible());

        c.request_action(0, ActionId::VoteYes);
        c.dismiss();
        assert!(!c.is_visible());

        assert!(c.sink().events.is_empty());
    }

    #[test]
    fn test_confirm_and_cancel_while_hidden_are_noops() {
        let mut c = controller();
        assert_eq!(c.confirm(), None);
        c.cancel();
        c.dismiss();
        assert_eq!(c.state(), ConfirmationState::Hidden);
        assert!(c.sink().events.is_empty());
    }

    #[test]
    fn test_prompt_while_hidden_is_fallback() {
        let c = controller();
        assert_eq!(c.current_prompt(), PromptContent::fallback());
    }

    #[test]
    fn test_vote_yes_end_to_end() {
        let mut c = controller();
        c.request_action(2, ActionId::VoteYes);

        let prompt = c.current_prompt();
        assert_eq!(prompt.title, "Vote YES");
        assert_eq!(prompt.message, "Are you sure you want to vote YES?");
        assert_eq!(prompt.icon.set, IconSet::SetC);
        assert_eq!(prompt.icon.name, "thumbs-up");
        assert_eq!(prompt.icon.color, RgbColor::from_u32(0x3366FF));

        c.confirm();
        assert_eq!(c.sink().events, vec![(2, ActionId::VoteYes)]);
        assert!(!c.is_visible());
    }

    #[test]
    fn test_last_request_wins_end_to_end() {
        let mut c = controller();
        c.request_action(0, ActionId::Decline);
        c.request_action(0, ActionId::SwitchDelegate);
        c.confirm();

        assert_eq!(c.sink().events, vec![(0, ActionId::SwitchDelegate)]);
        assert!(!c
            .sink()
            .events
            .iter()
            .any(|(_, a)| *a == ActionId::Decline));
    }

    #[test]
    fn test_machine_is_reentrant() {
        let mut c = controller();
        for i in 0..3 {
            c.request_action(i, ActionId::VoteNo);
            c.confirm();
        }
        assert_eq!(c.sink().events.len(), 3);
        assert_eq!(c.sink().events[2], (2, ActionId::VoteNo));
    }
}
