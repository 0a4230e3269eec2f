use super::*;
use crate::core::registry::ActionRegistry;
use crate::models::ModalButton;
use crate::ui::components::dialog::max_scroll_offset;
use ratatui::layout::Rect;

impl App {
    // === 확인 모달 (현재 화면의 확인 컨트롤러) ===

    /// Cancel / Confirm 포커스 전환
    pub fn modal_toggle_button(&mut self) {
        if self.is_confirming() {
            self.active_screen_mut().modal_button.toggle();
        }
    }

    /// 포커스된 버튼 실행 (Enter)
    pub fn modal_activate(&mut self) {
        match self.active_screen().modal_button {
            ModalButton::Confirm => self.modal_confirm(),
            ModalButton::Cancel => self.modal_cancel(),
        }
    }

    /// 대기 액션 확정
    pub fn modal_confirm(&mut self) {
        let committed = self.active_screen_mut().confirmation.confirm();
        if let Some(pending) = committed {
            let title = ActionRegistry::lookup(pending.action).title;
            self.set_toast(&format!("{} confirmed", title));
        }
    }

    /// 확정 없이 닫기 (Cancel 버튼, n, Esc, q, ✕)
    pub fn modal_cancel(&mut self) {
        self.active_screen_mut().confirmation.dismiss();
    }

    // === 정보 다이얼로그 ===

    /// 도움말 표시
    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    /// 확정된 액션 기록 표시 (두 화면 합산, 최신 순)
    pub fn show_activity(&mut self) {
        let entries = self
            .vote_screen
            .confirmation
            .sink()
            .entries()
            .iter()
            .chain(self.delegate_screen.confirmation.sink().entries())
            .cloned()
            .collect();
        self.dialog = Some(DialogKind::activity(entries));
    }

    /// 메시지 다이얼로그 표시
    pub fn show_message(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 다이얼로그 스크롤 아래로
    pub fn dialog_scroll_down(&mut self) {
        let (width, height) = self.layout.terminal_size();
        let screen = Rect::new(0, 0, width, height);
        if let Some(dialog) = &mut self.dialog {
            let max_offset = max_scroll_offset(dialog, screen);
            dialog.scroll_down(max_offset);
        }
    }

    /// 다이얼로그 스크롤 위로
    pub fn dialog_scroll_up(&mut self) {
        if let Some(dialog) = &mut self.dialog {
            dialog.scroll_up();
        }
    }
}
