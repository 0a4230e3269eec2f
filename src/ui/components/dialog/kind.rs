use crate::models::CommittedAction;

/// 다이얼로그 종류
///
/// 확인 모달은 화면별 확인 컨트롤러가 소유하므로 여기에 없습니다.
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
    /// 단축키 도움말 다이얼로그
    Help { scroll_offset: usize },
    /// 확정된 액션 기록 (최신순)
    Activity {
        entries: Vec<CommittedAction>,
        scroll_offset: usize,
    },
}

impl DialogKind {
    /// 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 도움말 다이얼로그 생성
    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }

    /// 활동 기록 다이얼로그 생성 (입력은 시간순, 표시는 최신순)
    pub fn activity(mut entries: Vec<CommittedAction>) -> Self {
        entries.sort_by(|a, b| b.committed_at.cmp(&a.committed_at));
        DialogKind::Activity {
            entries,
            scroll_offset: 0,
        }
    }

    /// 스크롤 가능한 다이얼로그면 한 줄 아래로 (`max_offset`에서 멈춤)
    pub fn scroll_down(&mut self, max_offset: usize) {
        match self {
            DialogKind::Help { scroll_offset } | DialogKind::Activity { scroll_offset, .. } => {
                *scroll_offset = (*scroll_offset + 1).min(max_offset);
            }
            DialogKind::Message { .. } => {}
        }
    }

    /// 스크롤 가능한 다이얼로그면 한 줄 위로
    pub fn scroll_up(&mut self) {
        match self {
            DialogKind::Help { scroll_offset } | DialogKind::Activity { scroll_offset, .. } => {
                *scroll_offset = scroll_offset.saturating_sub(1);
            }
            DialogKind::Message { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ActionId;
    use crate::models::ScreenKind;
    use chrono::{Duration, Local};

    #[test]
    fn test_activity_sorted_newest_first() {
        let now = Local::now();
        let entry = |minutes: i64, action| CommittedAction {
            screen: ScreenKind::CastVote,
            item_index: 0,
            action,
            committed_at: now - Duration::minutes(minutes),
        };
        let dialog = DialogKind::activity(vec![
            entry(10, ActionId::Decline),
            entry(1, ActionId::VoteYes),
        ]);
        match dialog {
            DialogKind::Activity { entries, .. } => {
                assert_eq!(entries[0].action, ActionId::VoteYes);
                assert_eq!(entries[1].action, ActionId::Decline);
            }
            _ => panic!("Expected Activity dialog"),
        }
    }

    #[test]
    fn test_scroll_saturates() {
        let mut dialog = DialogKind::help();
        dialog.scroll_up();
        dialog.scroll_down(10);
        dialog.scroll_down(10);
        dialog.scroll_up();
        assert!(matches!(dialog, DialogKind::Help { scroll_offset: 1 }));

        let mut message = DialogKind::message("About", "BallotDesk");
        message.scroll_down(10);
        assert!(matches!(message, DialogKind::Message { .. }));
    }

    #[test]
    fn test_scroll_down_stops_at_max() {
        let mut dialog = DialogKind::help();
        for _ in 0..50 {
            dialog.scroll_down(4);
        }
        assert!(matches!(dialog, DialogKind::Help { scroll_offset: 4 }));
        dialog.scroll_up();
        assert!(matches!(dialog, DialogKind::Help { scroll_offset: 3 }));
    }
}
