use super::super::*;
use crate::core::actions::Action;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::ShowHelp => app.show_help(),
        Action::ShowActivity => app.show_activity(),
        Action::CycleTheme => app.cycle_theme_and_save(),
        Action::About => app.show_message(
            "About BallotDesk",
            &format!(
                "BallotDesk {}\nVote on legislative acts and delegate votes from the terminal.",
                env!("CARGO_PKG_VERSION")
            ),
        ),
        _ => log::error!("non-dialog action routed to dialog controller: {:?}", action),
    }
}
