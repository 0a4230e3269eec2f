// UI Components
pub mod ballot_card;
pub mod command_bar;
pub mod confirm_modal;
pub mod delegate_view;
pub mod dialog;
pub mod icons;
pub mod stat_card;
pub mod status_bar;
pub mod tab_bar;
pub mod vote_view;
pub mod warning;

// Re-export components for convenience
pub use ballot_card::BallotCardView;
pub use command_bar::{CommandBar, CommandItem};
pub use confirm_modal::ConfirmModal;
pub use delegate_view::DelegateView;
pub use dialog::{Dialog, DialogKind};
pub use stat_card::StatCard;
pub use status_bar::StatusBar;
pub use tab_bar::TabBar;
pub use vote_view::VoteView;
pub use warning::WarningScreen;
