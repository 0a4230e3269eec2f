use super::controllers;
use super::*;
use crate::core::actions::Action;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::NextScreen => self.next_screen(),
            Action::PrevScreen => self.prev_screen(),
            Action::NextCard => self.active_screen_mut().next_card(),
            Action::PrevCard => self.active_screen_mut().prev_card(),
            Action::NextSection => self.active_screen_mut().next_section(),
            Action::PrevSection => self.active_screen_mut().prev_section(),
            Action::NextCategory => self.next_category(),
            Action::PrevCategory => self.prev_category(),
            Action::Decline
            | Action::Delegate
            | Action::AutoDelegate
            | Action::VoteYes
            | Action::VoteNo
            | Action::SwitchDelegate
            | Action::VoteMyself
            | Action::ClaimNow
            | Action::OpenLink => controllers::ballot_controller::execute(self, action),
            Action::ShowHelp | Action::ShowActivity | Action::CycleTheme | Action::About => {
                controllers::dialog_controller::execute(self, action)
            }
        }
    }

    /// 다음 화면 (하단 탭)
    pub fn next_screen(&mut self) {
        self.switch_screen(self.current_screen.next());
    }

    /// 이전 화면 (두 화면이므로 next와 같음)
    pub fn prev_screen(&mut self) {
        let index = ScreenKind::ALL
            .iter()
            .position(|s| *s == self.current_screen)
            .unwrap_or(0);
        let prev = ScreenKind::ALL[(index + ScreenKind::ALL.len() - 1) % ScreenKind::ALL.len()];
        self.switch_screen(prev);
    }

    /// 화면 전환
    ///
    /// 각 화면의 확인 흐름은 독립적이라 전환해도 대기 액션은 유지됩니다.
    pub fn switch_screen(&mut self, screen: ScreenKind) {
        if self.current_screen != screen {
            log::debug!(
                "screen {} -> {}",
                self.current_screen.id(),
                screen.id()
            );
            self.current_screen = screen;
        }
    }

    fn category_count(&self) -> usize {
        match self.current_screen {
            ScreenKind::DelegateVote => self.overview.categories.len(),
            ScreenKind::CastVote => 0,
        }
    }

    /// 다음 카테고리 탭 (위임 화면 전용)
    pub fn next_category(&mut self) {
        let count = self.category_count();
        self.active_screen_mut().next_category(count);
    }

    /// 이전 카테고리 탭 (위임 화면 전용)
    pub fn prev_category(&mut self) {
        let count = self.category_count();
        self.active_screen_mut().prev_category(count);
    }

    // === 토스트 ===

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= 3 {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < 3 {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}
