// Data Models
pub mod activity;
pub mod ballot;
pub mod delegation;
pub mod fixtures;
pub mod screen;

pub use activity::{ActivityLog, CommittedAction};
pub use ballot::{BallotCard, CardMode};
pub use delegation::{DelegateProfile, DelegationOverview, StatSummary};
pub use screen::{ModalButton, RequestOutcome, ScreenKind, ScreenState, Section};
