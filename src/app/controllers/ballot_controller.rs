use super::super::*;
use crate::core::actions::Action;
use crate::core::registry::{ActionId, ActionRegistry};
use crate::models::RequestOutcome;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::ClaimNow => app.claim_now(),
        Action::OpenLink => app.open_link(),
        _ => match action.ballot_action() {
            Some(ballot) => app.request_ballot_action(ballot),
            None => log::error!("non-ballot action routed to ballot controller: {:?}", action),
        },
    }
}

impl App {
    /// 현재 포커스 대상에 투표/위임 확인 요청
    pub fn request_ballot_action(&mut self, action: ActionId) {
        let screen = self.active_screen_mut();
        match screen.request_action(action) {
            RequestOutcome::Requested { item_index } => {
                log::debug!(
                    "[{}] awaiting confirmation of {} on item {}",
                    screen.kind.id(),
                    action,
                    item_index
                );
            }
            RequestOutcome::Unavailable => {
                let title = ActionRegistry::lookup(action).title;
                self.set_toast(&format!("{} is not available here", title));
            }
        }
    }

    /// Incoming Delegation 배너의 Claim Now
    pub fn claim_now(&mut self) {
        if self.current_screen != ScreenKind::DelegateVote {
            self.set_toast("Claim Now is on the Delegate Vote screen");
            return;
        }
        log::info!(
            "claim now pressed ({} incoming requests)",
            self.overview.incoming_requests
        );
        self.set_toast("Claim Now pressed");
    }

    /// 포커스 대상의 외부 링크 (통계 카드 / 프로필 / View more / 법안 상세)
    pub fn open_link(&mut self) {
        let screen = self.active_screen();
        let kind = screen.kind;
        let target = match screen.section {
            Section::Stats => self
                .active_stats()
                .get(screen.selected_stat)
                .map(|stat| format!("stat \"{} {}\"", stat.count, stat.title)),
            Section::AutoDelegate => Some(format!(
                "profile of {}",
                self.overview.auto_delegate_to.name
            )),
            Section::ReceivedFrom => {
                let name = self.overview.received_from.clone();
                log::info!("[{}] view more: {}", kind.id(), name);
                self.set_toast(&format!("View more: {}", name));
                return;
            }
            Section::Ballots => screen
                .selected()
                .map(|card| format!("act #{} ({})", screen.selected_card + 1, card.category)),
        };

        match target {
            Some(target) => {
                log::info!("[{}] open link: {}", kind.id(), target);
                self.set_toast(&format!("Opened {}", target));
            }
            None => self.set_toast("Nothing to open here"),
        }
    }
}
