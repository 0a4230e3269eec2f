// Dialog component - 도움말/메시지/활동 기록 다이얼로그
mod kind;
mod render;

pub use kind::DialogKind;
pub(crate) use render::render_button;
pub use render::{max_scroll_offset, Dialog};
