use super::registry::ActionId;

/// 확인 대기 중인 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAction {
    /// 목록 내 항목 인덱스
    pub item_index: usize,
    pub action: ActionId,
}

/// 대기 액션 보관소 (0개 또는 1개)
#[derive(Debug, Default)]
pub struct PendingActionStore {
    current: Option<PendingAction>,
}

impl PendingActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 대기 액션을 무조건 교체
    pub fn set(&mut self, item_index: usize, action: ActionId) {
        self.current = Some(PendingAction { item_index, action });
    }

    /// 대기 액션 제거 (비어 있어도 안전)
    pub fn clear(&mut self) -> Option<PendingAction> {
        self.current.take()
    }

    pub fn current(&self) -> Option<PendingAction> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = PendingActionStore::new();
        assert_eq!(store.current(), None);
    }

    #[test]
    fn test_set_replaces_existing() {
        let mut store = PendingActionStore::new();
        store.set(0, ActionId::Decline);
        store.set(3, ActionId::VoteNo);
        assert_eq!(
            store.current(),
            Some(PendingAction {
                item_index: 3,
                action: ActionId::VoteNo
            })
        );
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = PendingActionStore::new();
        store.set(1, ActionId::Delegate);
        assert!(store.clear().is_some());
        assert_eq!(store.clear(), None);
        assert_eq!(store.current(), None);
    }
}
