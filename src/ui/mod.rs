// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutAreas, LayoutManager, LayoutMode, MIN_HEIGHT, MIN_WIDTH, WIDE_MIN_WIDTH};
pub use theme::{Theme, ThemeManager};

// Re-export components
pub use components::{
    BallotCardView, CommandBar, CommandItem, ConfirmModal, DelegateView, Dialog, DialogKind,
    StatCard, StatusBar, TabBar, VoteView, WarningScreen,
};
