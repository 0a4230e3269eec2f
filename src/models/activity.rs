use super::screen::ScreenKind;
use crate::core::confirm::ActionSink;
use crate::core::registry::ActionId;
use chrono::{DateTime, Local};

/// 확정된 액션 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedAction {
    pub screen: ScreenKind,
    pub item_index: usize,
    pub action: ActionId,
    pub committed_at: DateTime<Local>,
}

/// 화면별 확정 액션 로그 (메모리 전용)
#[derive(Debug, Clone)]
pub struct ActivityLog {
    screen: ScreenKind,
    entries: Vec<CommittedAction>,
}

impl ActivityLog {
    pub fn new(screen: ScreenKind) -> Self {
        Self {
            screen,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[CommittedAction] {
        &self.entries
    }

    pub fn last(&self) -> Option<&CommittedAction> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ActionSink for ActivityLog {
    fn on_action_committed(&mut self, item_index: usize, action: ActionId) {
        log::info!(
            "[{}] committed {} on item {}",
            self.screen.id(),
            action,
            item_index
        );
        self.entries.push(CommittedAction {
            screen: self.screen,
            item_index,
            action,
            committed_at: Local::now(),
        });
    }
}
